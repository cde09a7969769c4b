//! Configuration changes applied to an existing assessment

use crate::catalog::FALLBACK_MODULE;
use crate::config::{ConfigResult, Configuration};
use crate::generator::{self, FIRST_OBJECT_SEQ};
use crate::models::{total_lines, Assessment};
use crate::scoring;
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Fold `config` into `previous` without a full rebuild.
///
/// The configuration is clamped into its accepted ranges first. Profile
/// scalars, score, complexity level and duration are recomputed from it.
/// The population is truncated to a stable prefix or extended with newly
/// generated objects; surviving objects are untouched. Recommendations,
/// risks, identifier and assessment date are kept.
///
/// An empty module set falls back to [`FALLBACK_MODULE`] for both the
/// profile and any appended objects. Fails only when new identifiers would
/// overflow the sequence.
pub fn reconcile<R: Rng>(
    previous: Assessment,
    config: &Configuration,
    rng: &mut R,
) -> ConfigResult<Assessment> {
    let config = &config.normalized();
    let mut assessment = previous;

    let modules = if config.modules.is_empty() {
        warn!(
            "No active modules configured, falling back to {}",
            FALLBACK_MODULE
        );
        vec![FALLBACK_MODULE.to_string()]
    } else {
        config.modules.clone()
    };

    assessment.profile.size = config.system_size;
    assessment.profile.users = config.users;
    assessment.profile.modules = modules.clone();

    assessment.total_score = scoring::score(config);
    assessment.complexity_level = config.complexity;

    let current = assessment.custom_objects.len();
    let target = config.object_count;
    let mut next_seq = next_sequence(&assessment);

    match target.cmp(&current) {
        Ordering::Less => {
            debug!("Truncating population from {} to {}", current, target);
            assessment.custom_objects.truncate(target);
        }
        Ordering::Greater => {
            let missing = target - current;
            debug!("Appending {} objects starting at sequence {}", missing, next_seq);
            let added = generator::generate_from(rng, next_seq, missing, &modules)?;
            next_seq = generator::sequence_after(next_seq, missing)?;
            assessment.custom_objects.extend(added);
        }
        Ordering::Equal => {}
    }
    assessment.next_object_seq = next_seq;

    assessment.profile.custom_code = total_lines(&assessment.custom_objects);
    assessment.estimated_duration = scoring::duration(config.complexity);

    info!(
        "Reconciled assessment {}: score {}, {} -> {} objects",
        assessment.id,
        assessment.total_score,
        current,
        assessment.custom_objects.len()
    );
    Ok(assessment)
}

/// Next unused sequence number. Assessments exported without the counter
/// fall back to the highest numeric id in the population.
fn next_sequence(assessment: &Assessment) -> u32 {
    let from_ids = assessment
        .custom_objects
        .iter()
        .filter_map(|o| o.id.strip_prefix("OBJ")?.parse::<u32>().ok())
        .max()
        .map(|max| max.saturating_add(1))
        .unwrap_or(FIRST_OBJECT_SEQ);
    assessment.next_object_seq.max(from_ids)
}
