//! JSON reporter
//!
//! Outputs the full Assessment as pretty-printed JSON. This is also the
//! export format that `reconcile` reads back.

use crate::models::Assessment;
use anyhow::{Context, Result};

/// Render assessment as JSON
pub fn render(assessment: &Assessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}

/// Render assessment as compact JSON (single line)
pub fn render_compact(assessment: &Assessment) -> Result<String> {
    Ok(serde_json::to_string(assessment)?)
}

/// Parse a previously exported assessment
pub fn parse_assessment(json: &str) -> Result<Assessment> {
    serde_json::from_str(json).context("Not a valid assessment export")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_assessment;

    #[test]
    fn test_json_render_valid() {
        let assessment = test_assessment();
        let json_str = render(&assessment).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["total_score"], 85);
        assert_eq!(parsed["complexity_level"], "complex");
        assert_eq!(parsed["custom_objects"].as_array().expect("objects array").len(), 12);
    }

    #[test]
    fn test_json_render_compact() {
        let assessment = test_assessment();
        let json_str = render_compact(&assessment).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
    }

    #[test]
    fn test_export_reads_back() {
        let assessment = test_assessment();
        let json_str = render(&assessment).expect("render JSON");
        let restored = parse_assessment(&json_str).expect("parse export");
        assert_eq!(restored, assessment);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_assessment("{\"id\": 1}").is_err());
        assert!(parse_assessment("not json").is_err());
    }
}
