//! Output reporters for readiness assessments
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (the export format read back by `reconcile`)
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
pub mod text;

pub use json::{parse_assessment, render_compact};

use crate::models::Assessment;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an assessment in the specified format
pub fn report(assessment: &Assessment, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(assessment, fmt)
}

/// Render an assessment using an OutputFormat enum
pub fn report_with_format(assessment: &Assessment, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(assessment),
        OutputFormat::Json => json::render(assessment),
        OutputFormat::Markdown => markdown::render(assessment),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assessment::AssessmentBuilder;
    use crate::config::Configuration;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Small seeded assessment for rendering tests
    pub(crate) fn test_assessment() -> Assessment {
        let config = Configuration {
            object_count: 12,
            ..Configuration::default()
        };
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        AssessmentBuilder::new()
            .at(date)
            .build(&config, &mut ChaCha8Rng::seed_from_u64(17))
            .expect("build assessment")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(OutputFormat::Json), "json");
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
    }

    #[test]
    fn test_report_dispatch() {
        let assessment = test_assessment();
        for format in ["text", "json", "markdown"] {
            let out = report(&assessment, format).expect("render");
            assert!(out.contains("ASSESS-2024-001"), "{format} output lacks id");
        }
        assert!(report(&assessment, "html").is_err());
    }
}
