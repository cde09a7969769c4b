//! Init command - write an example readiness.toml

use anyhow::{Context, Result};
use console::style;
use readiness::config::EXAMPLE_CONFIG;
use std::path::Path;

const CONFIG_FILE: &str = "readiness.toml";

/// Run the init command
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        println!(
            "{} Already initialized at {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(CONFIG_FILE).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Build an assessment", style("readiness generate").cyan());
    println!("  {} Compare presets", style("readiness scenarios").cyan());
    println!(
        "  {} Export for reconciliation",
        style("readiness generate -f json -o assessment.json").cyan()
    );

    Ok(())
}
