//! CLI command definitions and handlers

mod assess;
mod init;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use readiness::config::{load_config_file, load_project_config, ConfigPatch, ProjectConfig};
use readiness::models::ComplexityLevel;
use std::path::{Path, PathBuf};

/// Readiness - synthetic migration readiness assessments
#[derive(Parser, Debug)]
#[command(name = "readiness")]
#[command(
    version,
    about = "Synthetic migration readiness assessments for legacy ERP systems",
    long_about = "Readiness scores how ready a legacy ERP system is for migration, \
estimates duration from its complexity level, and generates a synthetic population \
of custom-code objects with compatibility verdicts.\n\n\
Defaults come from readiness.toml (or .readinessrc.json) in the current directory.",
    after_help = "\
Examples:
  readiness generate                           Realistic scenario, text summary
  readiness generate --scenario worst          Worst-case preset
  readiness generate --format json -o a.json   Export for later reconciliation
  readiness reconcile a.json --objects 300     Grow the exported population
  readiness score --size 6000 --explain        Show the scoring breakdown
  readiness scenarios                          List the presets"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file to use instead of readiness.toml discovery
    #[arg(long, global = true, env = "READINESS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Assessment parameter overrides, applied after the config file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Scenario preset applied before the other overrides (best, realistic, worst)
    #[arg(long, value_parser = ["best", "realistic", "worst"])]
    pub scenario: Option<String>,

    /// System size in GB (clamped to 100-10000)
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Number of custom objects (clamped to 0-1000)
    #[arg(long, allow_negative_numbers = true)]
    pub objects: Option<i64>,

    /// Active users (clamped to 10-10000)
    #[arg(long, allow_negative_numbers = true)]
    pub users: Option<i64>,

    /// Comma-separated module codes (e.g. FI,CO,SD)
    #[arg(long, value_delimiter = ',')]
    pub modules: Option<Vec<String>>,

    /// Complexity level: simple, moderate, complex, highly-complex
    #[arg(long)]
    pub complexity: Option<String>,
}

impl ConfigArgs {
    fn to_patch(&self) -> Result<ConfigPatch> {
        let complexity = self
            .complexity
            .as_deref()
            .map(str::parse::<ComplexityLevel>)
            .transpose()?;
        Ok(ConfigPatch {
            system_size: self.size,
            object_count: self.objects,
            users: self.users,
            modules: self.modules.clone(),
            complexity,
        })
    }
}

/// Rendering options shared by generate and reconcile
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: text, json, markdown (or md). Defaults to [output] format, then text
    #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the scoring breakdown to stderr
    #[arg(long)]
    pub explain_score: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a fresh assessment from the effective configuration
    #[command(after_help = "\
Examples:
  readiness generate --scenario best
  readiness generate --modules FI,SD,MM --objects 80 --seed 7
  readiness generate --format markdown -o assessment.md")]
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Seed for the object generator (default: [generator] seed, then random)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Apply configuration changes to an exported assessment
    ///
    /// Surviving custom objects are kept as-is; the population is truncated
    /// or extended to the new object count.
    #[command(after_help = "\
Examples:
  readiness reconcile assessment.json --objects 40
  readiness reconcile assessment.json --scenario worst -f json -o next.json")]
    Reconcile {
        /// Assessment previously exported with --format json
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Seed for newly generated objects (default: [generator] seed, then random)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the readiness score and duration for a configuration
    Score {
        #[command(flatten)]
        config: ConfigArgs,

        /// Show every deduction that fired
        #[arg(long)]
        explain: bool,
    },

    /// List the scenario presets
    Scenarios,

    /// Write an example readiness.toml to the current directory
    Init {
        /// Overwrite an existing readiness.toml
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let project = project_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            config,
            seed,
            output,
        } => assess::generate(&project, &config, seed, &output),

        Commands::Reconcile {
            input,
            config,
            seed,
            output,
        } => assess::reconcile(&project, &input, &config, seed, &output),

        Commands::Score { config, explain } => assess::score(&project, &config, explain),

        Commands::Scenarios => assess::scenarios(),

        Commands::Init { force } => init::run(Path::new("."), force),
    }
}

/// An explicit --config must load; discovery falls back to defaults
fn project_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_project_config(Path::new("."))),
    }
}
