//! Fresh assessment construction

use crate::catalog::Catalog;
use crate::config::{ConfigError, ConfigResult, Configuration};
use crate::generator;
use crate::models::{total_lines, Assessment, SystemProfile};
use crate::scoring;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

/// Builds assessment snapshots from a configuration
#[derive(Debug, Clone, Default)]
pub struct AssessmentBuilder {
    catalog: Catalog,
    assessment_date: Option<DateTime<Utc>>,
}

impl AssessmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the static recommendation/risk/system content
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Pin the assessment date instead of using the current time
    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.assessment_date = Some(date);
        self
    }

    /// Build a complete assessment.
    ///
    /// The configuration is clamped into its accepted ranges first. The
    /// complexity level is taken from it as-is, so it can disagree with the
    /// score.
    pub fn build<R: Rng>(&self, config: &Configuration, rng: &mut R) -> ConfigResult<Assessment> {
        let config = &config.normalized();
        if config.modules.is_empty() {
            return Err(ConfigError::EmptyModuleSet {
                count: config.object_count,
            });
        }

        let custom_objects = generator::generate(rng, config.object_count, &config.modules)?;
        let next_object_seq =
            generator::sequence_after(generator::FIRST_OBJECT_SEQ, custom_objects.len())?;
        debug!(
            "Generated {} custom objects across {} modules",
            custom_objects.len(),
            config.modules.len()
        );

        let seed = &self.catalog.system;
        let profile = SystemProfile {
            sid: seed.sid.clone(),
            system_type: seed.system_type,
            version: seed.version.clone(),
            database: seed.database.clone(),
            size: config.system_size,
            modules: config.modules.clone(),
            custom_code: total_lines(&custom_objects),
            users: config.users,
        };

        let assessment = Assessment {
            id: seed.assessment_id.clone(),
            profile,
            assessment_date: self.assessment_date.unwrap_or_else(Utc::now),
            total_score: scoring::score(config),
            complexity_level: config.complexity,
            estimated_duration: scoring::duration(config.complexity),
            custom_objects,
            recommendations: self.catalog.recommendations.clone(),
            risks: self.catalog.risks.clone(),
            next_object_seq,
        };

        info!(
            "Built assessment {}: score {}, {} objects, {} weeks",
            assessment.id,
            assessment.total_score,
            assessment.custom_objects.len(),
            assessment.estimated_duration
        );
        Ok(assessment)
    }
}

/// Build with the default catalog
pub fn build<R: Rng>(config: &Configuration, rng: &mut R) -> ConfigResult<Assessment> {
    AssessmentBuilder::default().build(config, rng)
}
