//! Static seed data for assessments
//!
//! Module vocabulary, simplification items, program names, and the
//! recommendation/risk catalogs. Builders take a [`Catalog`] value, so these
//! tables can be swapped without touching generation logic.

use crate::models::{
    Priority, Recommendation, RecommendationCategory, Risk, RiskSeverity, SystemType,
};

/// Recognized module codes
pub const MODULE_VOCABULARY: &[&str] = &["FI", "CO", "SD", "MM", "PP", "HR", "PM", "QM", "PS", "WM"];

/// Modules active in a freshly loaded configuration
pub const DEFAULT_MODULES: &[&str] = &["FI", "CO", "SD", "MM", "PP", "HR"];

/// Module assigned to appended objects when the configured set is empty
pub const FALLBACK_MODULE: &str = "FI";

/// Known simplification items (id, description)
pub const SIMPLIFICATION_ITEMS: &[(&str, &str)] = &[
    ("2267308", "Material ledger mandatory"),
    ("2220005", "SD pricing condition tables"),
    ("2265093", "FI document splitting mandatory"),
    ("2270456", "MM procurement simplifications"),
];

/// Base names for generated custom programs
pub const PROGRAM_NAMES: &[&str] = &[
    "ZSD_PRICING_REPORT",
    "ZFI_ASSET_TRANSFER",
    "ZMM_VENDOR_EVAL",
    "ZHR_PAYROLL_EXT",
    "ZCUSTOM_WORKFLOW",
    "ZBAPI_CUSTOMER",
];

/// Suggested replacement for any object that is not compatible
pub const ALTERNATIVE_SOLUTION: &str = "Use target platform standard functionality";

pub fn is_known_module(code: &str) -> bool {
    MODULE_VOCABULARY.contains(&code)
}

/// Fixed description of the system under assessment
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSeed {
    pub assessment_id: String,
    pub sid: String,
    pub system_type: SystemType,
    pub version: String,
    pub database: String,
}

impl Default for SystemSeed {
    fn default() -> Self {
        Self {
            assessment_id: "ASSESS-2024-001".into(),
            sid: "PRD".into(),
            system_type: SystemType::Legacy,
            version: "EHP8 6.0".into(),
            database: "Oracle 19c".into(),
        }
    }
}

/// Static content attached to every assessment
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub system: SystemSeed,
    pub recommendations: Vec<Recommendation>,
    pub risks: Vec<Risk>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            system: SystemSeed::default(),
            recommendations: default_recommendations(),
            risks: default_risks(),
        }
    }
}

fn default_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "REC001".into(),
            category: RecommendationCategory::Technical,
            priority: Priority::High,
            title: "Custom Code Remediation".into(),
            description: "Analyze and remediate critical custom objects before migration".into(),
            effort: 320,
        },
        Recommendation {
            id: "REC002".into(),
            category: RecommendationCategory::Functional,
            priority: Priority::High,
            title: "Business Process Redesign".into(),
            description: "Align SD pricing procedures with target platform best practices".into(),
            effort: 160,
        },
        Recommendation {
            id: "REC003".into(),
            category: RecommendationCategory::Training,
            priority: Priority::Medium,
            title: "Key User Enablement".into(),
            description: "Train key users on changed transactions before integration testing"
                .into(),
            effort: 80,
        },
    ]
}

fn default_risks() -> Vec<Risk> {
    vec![
        Risk {
            id: "RISK001".into(),
            category: "Technical Debt".into(),
            severity: RiskSeverity::Critical,
            description: "Large custom code base requires review and potential remediation".into(),
            mitigation: "Implement phased remediation starting with critical objects".into(),
            probability: 85,
        },
        Risk {
            id: "RISK002".into(),
            category: "Data Migration".into(),
            severity: RiskSeverity::High,
            description: "Inconsistent master data may block conversion".into(),
            mitigation: "Run data cleansing during preparation and rehearse the conversion"
                .into(),
            probability: 60,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary() {
        assert_eq!(MODULE_VOCABULARY.len(), 10);
        assert!(DEFAULT_MODULES.iter().all(|m| is_known_module(m)));
        assert!(is_known_module(FALLBACK_MODULE));
        assert!(!is_known_module("XX"));
    }

    #[test]
    fn test_default_catalog_ids_unique() {
        let catalog = Catalog::default();
        let mut ids: Vec<&str> = catalog
            .recommendations
            .iter()
            .map(|r| r.id.as_str())
            .chain(catalog.risks.iter().map(|r| r.id.as_str()))
            .collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert!(catalog.risks.iter().all(|r| r.probability <= 100));
    }
}
