//! Assessment configuration and scenario presets
//!
//! [`Configuration`] is a plain value: updates return a new value instead of
//! mutating shared state. [`ConfigStore`] is a thin caller-owned holder for
//! the current value, for callers that want "current configuration" semantics.

use super::ConfigError;
use crate::catalog::{is_known_module, DEFAULT_MODULES};
use crate::models::{Assessment, ComplexityLevel};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Accepted system size in GB (inclusive)
pub const SIZE_RANGE: (u32, u32) = (100, 10_000);
/// Accepted custom object count (inclusive)
pub const OBJECT_RANGE: (usize, usize) = (0, 1_000);
/// Accepted active user count (inclusive)
pub const USER_RANGE: (u32, u32) = (10, 10_000);

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Best,
    Realistic,
    Worst,
}

/// Values a scenario pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioPreset {
    pub system_size: u32,
    pub object_count: usize,
    pub users: u32,
    pub complexity: ComplexityLevel,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Best, Scenario::Realistic, Scenario::Worst];

    pub fn preset(self) -> ScenarioPreset {
        match self {
            Scenario::Best => ScenarioPreset {
                system_size: 500,
                object_count: 20,
                users: 200,
                complexity: ComplexityLevel::Simple,
            },
            Scenario::Realistic => ScenarioPreset {
                system_size: 2500,
                object_count: 150,
                users: 1200,
                complexity: ComplexityLevel::Complex,
            },
            Scenario::Worst => ScenarioPreset {
                system_size: 10_000,
                object_count: 500,
                users: 5000,
                complexity: ComplexityLevel::HighlyComplex,
            },
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::Best => write!(f, "best"),
            Scenario::Realistic => write!(f, "realistic"),
            Scenario::Worst => write!(f, "worst"),
        }
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" => Ok(Scenario::Best),
            "realistic" => Ok(Scenario::Realistic),
            "worst" => Ok(Scenario::Worst),
            _ => Err(ConfigError::UnknownScenario(s.to_string())),
        }
    }
}

/// User-adjustable assessment parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// System size in GB
    pub system_size: u32,
    pub object_count: usize,
    pub users: u32,
    /// Active module codes, in selection order
    pub modules: Vec<String>,
    pub complexity: ComplexityLevel,
    /// Preset the values came from; `None` once a linked field is edited
    pub scenario: Option<Scenario>,
}

impl Default for Configuration {
    fn default() -> Self {
        let preset = Scenario::Realistic.preset();
        Self {
            system_size: preset.system_size,
            object_count: preset.object_count,
            users: preset.users,
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            complexity: preset.complexity,
            scenario: Some(Scenario::Realistic),
        }
    }
}

/// Partial update. Numeric fields are signed so out-of-range operator input
/// (including negatives) can be clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigPatch {
    #[serde(default)]
    pub system_size: Option<i64>,
    #[serde(default)]
    pub object_count: Option<i64>,
    #[serde(default)]
    pub users: Option<i64>,
    #[serde(default)]
    pub modules: Option<Vec<String>>,
    #[serde(default)]
    pub complexity: Option<ComplexityLevel>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == ConfigPatch::default()
    }
}

fn clamp_u32(value: i64, (min, max): (u32, u32)) -> u32 {
    value.clamp(min as i64, max as i64) as u32
}

fn clamp_usize(value: i64, (min, max): (usize, usize)) -> usize {
    value.clamp(min as i64, max as i64) as usize
}

/// Uppercase, drop unknown codes, and collapse duplicates keeping the first
fn normalize_modules(modules: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(modules.len());
    for raw in modules {
        let code = raw.trim().to_uppercase();
        if !is_known_module(&code) {
            warn!("Ignoring unknown module code '{}'", raw);
            continue;
        }
        if !result.contains(&code) {
            result.push(code);
        }
    }
    result
}

impl Configuration {
    /// Apply a partial update field by field.
    ///
    /// Out-of-range values are clamped. Changing any scenario-linked field
    /// (size, objects, users, complexity) clears the scenario tag; module
    /// edits keep it.
    pub fn with_patch(&self, patch: &ConfigPatch) -> Configuration {
        let mut next = self.clone();

        if let Some(size) = patch.system_size {
            next.system_size = clamp_u32(size, SIZE_RANGE);
        }
        if let Some(count) = patch.object_count {
            next.object_count = clamp_usize(count, OBJECT_RANGE);
        }
        if let Some(users) = patch.users {
            next.users = clamp_u32(users, USER_RANGE);
        }
        if let Some(modules) = &patch.modules {
            next.modules = normalize_modules(modules);
        }
        if let Some(complexity) = patch.complexity {
            next.complexity = complexity;
        }

        if next.scenario.is_some() && !next.matches_preset() {
            debug!("Manual edit diverged from scenario {:?}", next.scenario);
            next.scenario = None;
        }
        next
    }

    /// Overwrite the four scenario-linked fields with a preset
    pub fn with_scenario(&self, scenario: Scenario) -> Configuration {
        let preset = scenario.preset();
        Configuration {
            system_size: preset.system_size,
            object_count: preset.object_count,
            users: preset.users,
            modules: self.modules.clone(),
            complexity: preset.complexity,
            scenario: Some(scenario),
        }
    }

    /// Clamp every field into its accepted range
    pub fn normalized(&self) -> Configuration {
        Configuration {
            system_size: clamp_u32(self.system_size as i64, SIZE_RANGE),
            object_count: self.object_count.clamp(OBJECT_RANGE.0, OBJECT_RANGE.1),
            users: clamp_u32(self.users as i64, USER_RANGE),
            modules: normalize_modules(&self.modules),
            complexity: self.complexity,
            scenario: self.scenario,
        }
    }

    /// Configuration an exported assessment was built from, clamped into the
    /// accepted ranges. The scenario tag is not recorded in the snapshot, so
    /// it is left unset.
    pub fn from_assessment(assessment: &Assessment) -> Configuration {
        Configuration {
            system_size: assessment.profile.size,
            object_count: assessment.custom_objects.len(),
            users: assessment.profile.users,
            modules: assessment.profile.modules.clone(),
            complexity: assessment.complexity_level,
            scenario: None,
        }
        .normalized()
    }

    fn matches_preset(&self) -> bool {
        let Some(scenario) = self.scenario else {
            return false;
        };
        let preset = scenario.preset();
        self.system_size == preset.system_size
            && self.object_count == preset.object_count
            && self.users == preset.users
            && self.complexity == preset.complexity
    }
}

/// Caller-owned holder for the current configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: Configuration,
}

impl ConfigStore {
    pub fn new(initial: Configuration) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &Configuration {
        &self.current
    }

    /// Merge a partial update into the current configuration
    pub fn update(&mut self, patch: &ConfigPatch) -> &Configuration {
        self.current = self.current.with_patch(patch);
        &self.current
    }

    /// Switch to a named preset
    pub fn select_scenario(&mut self, scenario: Scenario) -> &Configuration {
        self.current = self.current.with_scenario(scenario);
        &self.current
    }

    /// Restore the startup defaults
    pub fn reset(&mut self) -> &Configuration {
        self.current = Configuration::default();
        &self.current
    }
}
