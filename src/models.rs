//! Core data models for readiness assessments
//!
//! These models describe the system under assessment, its simulated
//! custom-code population, and the assessment snapshot that reporters consume.

use crate::config::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Kind of system being assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    #[default]
    Legacy,
    LegacyOnModernDb,
    TargetPlatform,
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemType::Legacy => write!(f, "legacy"),
            SystemType::LegacyOnModernDb => write!(f, "legacy-on-modern-db"),
            SystemType::TargetPlatform => write!(f, "target-platform"),
        }
    }
}

/// Kind of custom code artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactType {
    Report,
    Function,
    Table,
    Enhancement,
    UserModificationHook,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 5] = [
        ArtifactType::Report,
        ArtifactType::Function,
        ArtifactType::Table,
        ArtifactType::Enhancement,
        ArtifactType::UserModificationHook,
    ];
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactType::Report => write!(f, "report"),
            ArtifactType::Function => write!(f, "function"),
            ArtifactType::Table => write!(f, "table"),
            ArtifactType::Enhancement => write!(f, "enhancement"),
            ArtifactType::UserModificationHook => write!(f, "user-modification-hook"),
        }
    }
}

/// Complexity tier of a single custom object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectComplexity {
    Low,
    Medium,
    High,
    Critical,
}

impl ObjectComplexity {
    /// Remediation effort in hours for an object of this tier
    pub fn effort_hours(self) -> u32 {
        match self {
            ObjectComplexity::Low => 8,
            ObjectComplexity::Medium => 16,
            ObjectComplexity::High => 40,
            ObjectComplexity::Critical => 80,
        }
    }
}

impl std::fmt::Display for ObjectComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectComplexity::Low => write!(f, "low"),
            ObjectComplexity::Medium => write!(f, "medium"),
            ObjectComplexity::High => write!(f, "high"),
            ObjectComplexity::Critical => write!(f, "critical"),
        }
    }
}

/// Compatibility verdict against the target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Compatible,
    Deprecated,
    Replaced,
    Incompatible,
}

impl Compatibility {
    pub fn needs_work(self) -> bool {
        !matches!(self, Compatibility::Compatible)
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compatibility::Compatible => write!(f, "compatible"),
            Compatibility::Deprecated => write!(f, "deprecated"),
            Compatibility::Replaced => write!(f, "replaced"),
            Compatibility::Incompatible => write!(f, "incompatible"),
        }
    }
}

/// Migration complexity of the whole assessment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    #[default]
    Complex,
    #[serde(alias = "highly_complex")]
    HighlyComplex,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] = [
        ComplexityLevel::Simple,
        ComplexityLevel::Moderate,
        ComplexityLevel::Complex,
        ComplexityLevel::HighlyComplex,
    ];
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityLevel::Simple => write!(f, "simple"),
            ComplexityLevel::Moderate => write!(f, "moderate"),
            ComplexityLevel::Complex => write!(f, "complex"),
            ComplexityLevel::HighlyComplex => write!(f, "highly-complex"),
        }
    }
}

impl FromStr for ComplexityLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "simple" => Ok(ComplexityLevel::Simple),
            "moderate" => Ok(ComplexityLevel::Moderate),
            "complex" => Ok(ComplexityLevel::Complex),
            "highly-complex" => Ok(ComplexityLevel::HighlyComplex),
            _ => Err(ConfigError::InvalidComplexity(s.to_string())),
        }
    }
}

/// Migration impact of one custom object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityImpact {
    pub compatibility: Compatibility,
    /// Simplification item id that affects this object, if any
    #[serde(default)]
    pub simplification_item: Option<String>,
    /// Only present when the object is not compatible
    #[serde(default)]
    pub alternative_solution: Option<String>,
    /// Remediation effort in hours, derived from object complexity
    pub estimated_effort: u32,
    pub automation_possible: bool,
}

/// A simulated custom code artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomObject {
    pub id: String,
    pub name: String,
    pub artifact_type: ArtifactType,
    pub complexity: ObjectComplexity,
    pub lines: u32,
    pub last_modified: DateTime<Utc>,
    pub module: String,
    pub impact: CompatibilityImpact,
}

/// Descriptive snapshot of the system under assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemProfile {
    pub sid: String,
    pub system_type: SystemType,
    pub version: String,
    pub database: String,
    /// Size in GB
    pub size: u32,
    pub modules: Vec<String>,
    /// Total custom lines, always the sum of object line counts
    pub custom_code: u64,
    pub users: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Technical,
    Functional,
    Process,
    Training,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Effort in hours
    pub effort: u32,
}

/// Risk severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskSeverity::Low => write!(f, "low"),
            RiskSeverity::Medium => write!(f, "medium"),
            RiskSeverity::High => write!(f, "high"),
            RiskSeverity::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub category: String,
    pub severity: RiskSeverity,
    pub description: String,
    pub mitigation: String,
    /// Likelihood in percent (0-100)
    pub probability: u8,
}

/// One generated readiness snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub profile: SystemProfile,
    pub assessment_date: DateTime<Utc>,
    /// Overall readiness (20-100)
    pub total_score: u8,
    pub complexity_level: ComplexityLevel,
    /// Estimated duration in weeks
    pub estimated_duration: u32,
    pub custom_objects: Vec<CustomObject>,
    pub recommendations: Vec<Recommendation>,
    pub risks: Vec<Risk>,
    /// Sequence number for the next generated object id
    #[serde(default)]
    pub next_object_seq: u32,
}

impl Assessment {
    /// Sum of line counts over the current population
    pub fn population_lines(&self) -> u64 {
        total_lines(&self.custom_objects)
    }

    /// Total remediation effort in hours
    pub fn total_effort_hours(&self) -> u64 {
        self.custom_objects
            .iter()
            .map(|o| o.impact.estimated_effort as u64)
            .sum()
    }

    pub fn compatibility_summary(&self) -> CompatibilitySummary {
        CompatibilitySummary::from_objects(&self.custom_objects)
    }

    pub fn module_breakdown(&self) -> Vec<ModuleBreakdown> {
        ModuleBreakdown::from_objects(&self.custom_objects)
    }
}

pub(crate) fn total_lines(objects: &[CustomObject]) -> u64 {
    objects.iter().map(|o| o.lines as u64).sum()
}

/// Object counts by compatibility verdict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilitySummary {
    pub compatible: usize,
    pub deprecated: usize,
    pub replaced: usize,
    pub incompatible: usize,
    pub total: usize,
}

impl CompatibilitySummary {
    pub fn from_objects(objects: &[CustomObject]) -> Self {
        let mut summary = Self::default();
        for o in objects {
            summary.record(o.impact.compatibility);
        }
        summary
    }

    fn record(&mut self, compatibility: Compatibility) {
        match compatibility {
            Compatibility::Compatible => self.compatible += 1,
            Compatibility::Deprecated => self.deprecated += 1,
            Compatibility::Replaced => self.replaced += 1,
            Compatibility::Incompatible => self.incompatible += 1,
        }
        self.total += 1;
    }

    /// Share of objects with the given verdict, in percent
    pub fn percentage(&self, compatibility: Compatibility) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match compatibility {
            Compatibility::Compatible => self.compatible,
            Compatibility::Deprecated => self.deprecated,
            Compatibility::Replaced => self.replaced,
            Compatibility::Incompatible => self.incompatible,
        };
        count as f64 * 100.0 / self.total as f64
    }
}

/// Compatibility counts for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBreakdown {
    pub module: String,
    pub summary: CompatibilitySummary,
}

impl ModuleBreakdown {
    /// Group objects by module, largest modules first
    pub fn from_objects(objects: &[CustomObject]) -> Vec<Self> {
        let mut by_module: BTreeMap<&str, CompatibilitySummary> = BTreeMap::new();
        for o in objects {
            by_module
                .entry(o.module.as_str())
                .or_default()
                .record(o.impact.compatibility);
        }

        let mut rows: Vec<Self> = by_module
            .into_iter()
            .map(|(module, summary)| ModuleBreakdown {
                module: module.to_string(),
                summary,
            })
            .collect();
        // BTreeMap order breaks ties by module code
        rows.sort_by(|a, b| b.summary.total.cmp(&a.summary.total));
        rows
    }
}
