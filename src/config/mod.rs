//! Configuration module for readiness assessments
//!
//! This module handles:
//! - Assessment parameters (size, objects, users, modules, complexity)
//! - Scenario presets and partial updates with range clamping
//! - Project-level configuration (readiness.toml)

mod project_config;
mod store;

pub use project_config::{
    load_config_file, load_project_config, DefaultsConfig, GeneratorConfig, OutputConfig,
    ProjectConfig, EXAMPLE_CONFIG,
};
pub use store::{
    ConfigPatch, ConfigStore, Configuration, Scenario, ScenarioPreset, OBJECT_RANGE, SIZE_RANGE,
    USER_RANGE,
};

use thiserror::Error;

/// Errors raised by invalid assessment configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid complexity '{0}'. Valid values: simple, moderate, complex, highly-complex")]
    InvalidComplexity(String),

    #[error("Unknown scenario '{0}'. Valid scenarios: best, realistic, worst")]
    UnknownScenario(String),

    #[error("Cannot generate {count} custom objects: no active modules configured")]
    EmptyModuleSet { count: usize },

    #[error("Cannot number {count} more custom objects from OBJ{first_seq}: identifier sequence exhausted")]
    SequenceExhausted { first_seq: u32, count: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
