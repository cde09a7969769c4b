//! Project-level configuration support
//!
//! Loads startup defaults from `readiness.toml` or `.readinessrc.json` in the
//! working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # readiness.toml
//!
//! [defaults]
//! scenario = "realistic"      # best, realistic, worst
//! system_size = 2500          # GB, 100-10000
//! object_count = 150          # 0-1000
//! users = 1200                # 10-10000
//! modules = ["FI", "CO", "SD", "MM", "PP", "HR"]
//! complexity = "complex"      # simple, moderate, complex, highly-complex
//!
//! [generator]
//! seed = 42                   # omit for a random seed per run
//!
//! [output]
//! format = "text"             # text, json, markdown
//! ```

use super::store::{ConfigPatch, Configuration, Scenario};
use crate::models::ComplexityLevel;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Example written by `readiness init`
pub const EXAMPLE_CONFIG: &str = r#"# Readiness Configuration

[defaults]
# Scenario preset applied first (best, realistic, worst)
scenario = "realistic"

# Individual overrides, applied after the scenario
# system_size = 2500
# object_count = 150
# users = 1200
# complexity = "complex"
modules = ["FI", "CO", "SD", "MM", "PP", "HR"]

[generator]
# Fixed seed for reproducible populations
# seed = 42

[output]
# Default output format (text, json, markdown)
format = "text"
"#;

/// Project-level configuration loaded from readiness.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Starting values for the assessment configuration
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Population generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Default output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Startup values; the scenario is applied before individual fields
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub scenario: Option<Scenario>,
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

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Seed for the population generator (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,
}

impl DefaultsConfig {
    pub fn to_patch(&self) -> ConfigPatch {
        ConfigPatch {
            system_size: self.system_size,
            object_count: self.object_count,
            users: self.users,
            modules: self.modules.clone(),
            complexity: self.complexity,
        }
    }
}

impl ProjectConfig {
    /// Configuration the process starts from
    pub fn initial_configuration(&self) -> Configuration {
        let base = Configuration::default();
        let base = match self.defaults.scenario {
            Some(scenario) => base.with_scenario(scenario),
            None => base,
        };
        base.with_patch(&self.defaults.to_patch())
    }
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `readiness.toml`
/// 2. `.readinessrc.json`
///
/// Returns default configuration if no config file is found or readable.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join("readiness.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(".readinessrc.json");
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load an explicitly named config file; unlike discovery, failures are errors
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_json_config(path)
    } else {
        load_toml_config(path)
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests;
