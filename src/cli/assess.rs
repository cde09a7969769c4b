//! Generate, reconcile, score and scenarios commands

use super::{ConfigArgs, OutputArgs};
use anyhow::{Context, Result};
use console::style;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use readiness::assessment;
use readiness::config::{ConfigStore, Configuration, ProjectConfig, Scenario};
use readiness::models::Assessment;
use readiness::reporters::{self, text, OutputFormat};
use readiness::scoring;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Scenario first, then field overrides, on top of `base`
fn effective_configuration(base: Configuration, args: &ConfigArgs) -> Result<Configuration> {
    let mut store = ConfigStore::new(base);
    if let Some(name) = &args.scenario {
        store.select_scenario(name.parse::<Scenario>()?);
    }
    let patch = args.to_patch()?;
    if !patch.is_empty() {
        store.update(&patch);
    }
    Ok(store.current().clone())
}

fn seeded_rng(seed: Option<u64>, project: &ProjectConfig) -> ChaCha8Rng {
    let seed = seed
        .or(project.generator.seed)
        .unwrap_or_else(rand::random);
    info!("Object generator seed: {}", seed);
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn generate(
    project: &ProjectConfig,
    args: &ConfigArgs,
    seed: Option<u64>,
    output: &OutputArgs,
) -> Result<()> {
    let config = effective_configuration(project.initial_configuration(), args)?;
    let mut rng = seeded_rng(seed, project);
    let assessment = assessment::build(&config, &mut rng)?;

    if output.explain_score {
        eprintln!("{}", text::render_breakdown(&scoring::breakdown(&config)));
    }
    emit(&assessment, project, output)
}

pub fn reconcile(
    project: &ProjectConfig,
    input: &Path,
    args: &ConfigArgs,
    seed: Option<u64>,
    output: &OutputArgs,
) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let previous = reporters::parse_assessment(&content)
        .with_context(|| format!("Invalid assessment export: {}", input.display()))?;

    let config = effective_configuration(Configuration::from_assessment(&previous), args)?;
    let mut rng = seeded_rng(seed, project);
    let assessment = assessment::reconcile(previous, &config, &mut rng)?;

    if output.explain_score {
        eprintln!("{}", text::render_breakdown(&scoring::breakdown(&config)));
    }
    emit(&assessment, project, output)
}

pub fn score(project: &ProjectConfig, args: &ConfigArgs, explain: bool) -> Result<()> {
    let config = effective_configuration(project.initial_configuration(), args)?;
    let breakdown = scoring::breakdown(&config);

    println!(
        "Readiness score: {}/100",
        style(breakdown.score).bold()
    );
    println!(
        "Complexity: {} ({} weeks)",
        config.complexity,
        scoring::duration(config.complexity)
    );
    if let Some(scenario) = config.scenario {
        println!("Scenario: {}", style(scenario).cyan());
    }
    if explain {
        println!("\n{}", text::render_breakdown(&breakdown));
    }
    Ok(())
}

pub fn scenarios() -> Result<()> {
    println!(
        "{}",
        style("SCENARIO   SIZE (GB)  OBJECTS  USERS  COMPLEXITY      SCORE  WEEKS").bold()
    );
    for scenario in Scenario::ALL {
        let config = Configuration::default().with_scenario(scenario);
        println!(
            "{:<10} {:>9}  {:>7}  {:>5}  {:<14}  {:>5}  {:>5}",
            scenario,
            config.system_size,
            config.object_count,
            config.users,
            config.complexity,
            scoring::score(&config),
            scoring::duration(config.complexity)
        );
    }
    Ok(())
}

/// Render and write to --output, or print to stdout
fn emit(assessment: &Assessment, project: &ProjectConfig, output: &OutputArgs) -> Result<()> {
    let format_name = output
        .format
        .as_deref()
        .or(project.output.format.as_deref())
        .unwrap_or("text");
    let format = OutputFormat::from_str(format_name)?;
    let rendered = reporters::report_with_format(assessment, format)?;

    match &output.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            // stderr keeps stdout clean for piping
            eprintln!(
                "{} Assessment written to: {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => {
            if format == OutputFormat::Json {
                println!("{}", rendered);
            } else {
                print!("{}", rendered);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness::models::ComplexityLevel;

    #[test]
    fn test_scenario_then_overrides() {
        let args = ConfigArgs {
            scenario: Some("worst".into()),
            objects: Some(40),
            ..Default::default()
        };
        let config = effective_configuration(Configuration::default(), &args).unwrap();
        assert_eq!(config.system_size, 10_000);
        assert_eq!(config.object_count, 40);
        assert_eq!(config.complexity, ComplexityLevel::HighlyComplex);
        assert_eq!(config.scenario, None);
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let base = Configuration::default().with_scenario(Scenario::Best);
        let config = effective_configuration(base.clone(), &ConfigArgs::default()).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_explicit_seed_wins() {
        use rand::Rng;
        let project = ProjectConfig::default();
        let a: u64 = seeded_rng(Some(5), &project).random();
        let b: u64 = seeded_rng(Some(5), &project).random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let config = Configuration::default();
        let assessment =
            assessment::build(&config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let output = OutputArgs {
            format: Some("json".into()),
            output: Some(path.clone()),
            explain_score: false,
        };
        emit(&assessment, &ProjectConfig::default(), &output).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed = reporters::parse_assessment(&written).unwrap();
        assert_eq!(parsed, assessment);
    }
}
