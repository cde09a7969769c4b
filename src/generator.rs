//! Custom object population generator
//!
//! Produces synthetic custom-code artifacts from an injected random source.
//! Given the same RNG state, module set and sequence start, the output is
//! identical, so tests and `--seed` runs are reproducible.
//!
//! Sampling per object, in draw order:
//!
//! | Field               | Distribution                                        |
//! |---------------------|-----------------------------------------------------|
//! | complexity          | one roll: < 0.30 high, < 0.60 medium, else low      |
//! | compatibility       | one roll: < 0.40 compatible, < 0.70 deprecated, else incompatible |
//! | artifact type       | uniform over the 5 types                            |
//! | program name        | uniform over the catalog                            |
//! | lines               | uniform in [100, 5100)                              |
//! | last modified       | first of a uniform month, 2020-01 to 2023-12 (UTC)  |
//! | module              | uniform over the module set                         |
//! | simplification item | 50% chance, uniform over the catalog                |
//! | automation possible | 60% chance                                          |
//!
//! `replaced` and `critical` are valid values but never sampled.

use crate::catalog::{ALTERNATIVE_SOLUTION, PROGRAM_NAMES, SIMPLIFICATION_ITEMS};
use crate::config::{ConfigError, ConfigResult};
use crate::models::{ArtifactType, Compatibility, CompatibilityImpact, CustomObject, ObjectComplexity};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

/// Sequence number of the first object in a fresh population
pub const FIRST_OBJECT_SEQ: u32 = 1000;

const HIGH_COMPLEXITY_SHARE: f64 = 0.30;
const MEDIUM_COMPLEXITY_SHARE: f64 = 0.30;

const COMPATIBLE_SHARE: f64 = 0.40;
const DEPRECATED_SHARE: f64 = 0.30;

const MIN_LINES: u32 = 100;
const MAX_LINES: u32 = 5100;

const FIRST_MODIFIED_YEAR: i32 = 2020;
const MODIFIED_YEARS: i32 = 4;

const SIMPLIFICATION_CHANCE: f64 = 0.5;
const AUTOMATION_CHANCE: f64 = 0.6;

/// Identifier for the object with the given sequence number
pub fn object_id(seq: u32) -> String {
    format!("OBJ{seq}")
}

/// Generate a fresh population numbered from [`FIRST_OBJECT_SEQ`]
pub fn generate<R: Rng>(
    rng: &mut R,
    count: usize,
    modules: &[String],
) -> ConfigResult<Vec<CustomObject>> {
    generate_from(rng, FIRST_OBJECT_SEQ, count, modules)
}

/// Sequence number following a block of `count` ids starting at `first_seq`;
/// errors when it does not fit in `u32`
pub fn sequence_after(first_seq: u32, count: usize) -> ConfigResult<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|n| first_seq.checked_add(n))
        .ok_or(ConfigError::SequenceExhausted { first_seq, count })
}

/// Generate `count` objects numbered from `first_seq`.
///
/// Fails when objects are requested but `modules` is empty, or when the
/// identifier sequence would overflow. Requesting zero objects always
/// succeeds.
pub fn generate_from<R: Rng>(
    rng: &mut R,
    first_seq: u32,
    count: usize,
    modules: &[String],
) -> ConfigResult<Vec<CustomObject>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if modules.is_empty() {
        return Err(ConfigError::EmptyModuleSet { count });
    }
    let end = sequence_after(first_seq, count)?;

    Ok((first_seq..end)
        .map(|seq| generate_object(rng, seq, modules))
        .collect())
}

fn generate_object<R: Rng>(rng: &mut R, seq: u32, modules: &[String]) -> CustomObject {
    let complexity = sample_complexity(rng);
    let compatibility = sample_compatibility(rng);
    let artifact_type = ArtifactType::ALL[rng.random_range(0..ArtifactType::ALL.len())];
    let program = PROGRAM_NAMES[rng.random_range(0..PROGRAM_NAMES.len())];
    let lines = rng.random_range(MIN_LINES..MAX_LINES);
    let last_modified = sample_last_modified(rng);
    let module = modules[rng.random_range(0..modules.len())].clone();

    let simplification_item = if rng.random_bool(SIMPLIFICATION_CHANCE) {
        let (id, _) = SIMPLIFICATION_ITEMS[rng.random_range(0..SIMPLIFICATION_ITEMS.len())];
        Some(id.to_string())
    } else {
        None
    };
    let automation_possible = rng.random_bool(AUTOMATION_CHANCE);

    CustomObject {
        id: object_id(seq),
        name: format!("{program}_{seq}"),
        artifact_type,
        complexity,
        lines,
        last_modified,
        module,
        impact: CompatibilityImpact {
            compatibility,
            simplification_item,
            alternative_solution: compatibility
                .needs_work()
                .then(|| ALTERNATIVE_SOLUTION.to_string()),
            estimated_effort: complexity.effort_hours(),
            automation_possible,
        },
    }
}

fn sample_complexity<R: Rng>(rng: &mut R) -> ObjectComplexity {
    let roll: f64 = rng.random();
    if roll < HIGH_COMPLEXITY_SHARE {
        ObjectComplexity::High
    } else if roll < HIGH_COMPLEXITY_SHARE + MEDIUM_COMPLEXITY_SHARE {
        ObjectComplexity::Medium
    } else {
        ObjectComplexity::Low
    }
}

fn sample_compatibility<R: Rng>(rng: &mut R) -> Compatibility {
    let roll: f64 = rng.random();
    if roll < COMPATIBLE_SHARE {
        Compatibility::Compatible
    } else if roll < COMPATIBLE_SHARE + DEPRECATED_SHARE {
        Compatibility::Deprecated
    } else {
        Compatibility::Incompatible
    }
}

fn sample_last_modified<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let year = FIRST_MODIFIED_YEAR + rng.random_range(0..MODIFIED_YEARS);
    let month = rng.random_range(1..=12);
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn modules(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_exact_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for count in [1, 7, 150] {
            let objects = generate(&mut rng, count, &modules(&["FI"])).unwrap();
            assert_eq!(objects.len(), count);
        }
    }

    #[test]
    fn test_zero_objects() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate(&mut rng, 0, &modules(&["FI"])).unwrap().is_empty());
        // No module is needed when nothing is generated
        assert!(generate(&mut rng, 0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_module_set_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            generate(&mut rng, 3, &[]),
            Err(ConfigError::EmptyModuleSet { count: 3 })
        );
    }

    #[test]
    fn test_same_seed_same_population() {
        let set = modules(&["FI", "SD", "MM"]);
        let a = generate(&mut ChaCha8Rng::seed_from_u64(42), 50, &set).unwrap();
        let b = generate(&mut ChaCha8Rng::seed_from_u64(42), 50, &set).unwrap();
        let c = generate(&mut ChaCha8Rng::seed_from_u64(43), 50, &set).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let objects = generate_from(&mut rng, 2000, 3, &modules(&["FI"])).unwrap();
        let ids: Vec<&str> = objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["OBJ2000", "OBJ2001", "OBJ2002"]);
        assert!(objects[0].name.ends_with("_2000"));
    }

    #[test]
    fn test_sequence_overflow_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let set = modules(&["FI"]);
        assert_eq!(
            generate_from(&mut rng, u32::MAX - 1, 4, &set),
            Err(ConfigError::SequenceExhausted {
                first_seq: u32::MAX - 1,
                count: 4
            })
        );

        // The last representable block still fits
        let objects = generate_from(&mut rng, u32::MAX - 2, 2, &set).unwrap();
        let ids: Vec<&str> = objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["OBJ4294967293", "OBJ4294967294"]);
        assert_eq!(sequence_after(u32::MAX - 2, 2), Ok(u32::MAX));
        assert!(sequence_after(0, usize::MAX).is_err());
    }

    #[test]
    fn test_field_invariants() {
        let set = modules(&["PP", "QM"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for o in generate(&mut rng, 500, &set).unwrap() {
            assert!((MIN_LINES..MAX_LINES).contains(&o.lines));
            assert!(set.contains(&o.module));
            assert_eq!(o.impact.estimated_effort, o.complexity.effort_hours());
            assert_eq!(
                o.impact.alternative_solution.is_some(),
                o.impact.compatibility != Compatibility::Compatible
            );
            if let Some(item) = &o.impact.simplification_item {
                assert!(SIMPLIFICATION_ITEMS.iter().any(|(id, _)| id == item));
            }
            assert!((2020..=2023).contains(&o.last_modified.year()));
            assert_eq!(o.last_modified.day(), 1);
            assert_ne!(o.complexity, ObjectComplexity::Critical);
            assert_ne!(o.impact.compatibility, Compatibility::Replaced);
        }
    }

    #[test]
    fn test_distribution_shares() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 10_000;
        let objects = generate(&mut rng, n, &modules(&["FI"])).unwrap();
        let share = |pred: &dyn Fn(&CustomObject) -> bool| {
            objects.iter().filter(|o| pred(o)).count() as f64 / n as f64
        };

        let high = share(&|o| o.complexity == ObjectComplexity::High);
        let medium = share(&|o| o.complexity == ObjectComplexity::Medium);
        let low = share(&|o| o.complexity == ObjectComplexity::Low);
        assert!((high - 0.30).abs() < 0.03, "high share {high}");
        assert!((medium - 0.30).abs() < 0.03, "medium share {medium}");
        assert!((low - 0.40).abs() < 0.03, "low share {low}");

        let compatible = share(&|o| o.impact.compatibility == Compatibility::Compatible);
        let deprecated = share(&|o| o.impact.compatibility == Compatibility::Deprecated);
        assert!((compatible - 0.40).abs() < 0.03, "compatible share {compatible}");
        assert!((deprecated - 0.30).abs() < 0.03, "deprecated share {deprecated}");
    }
}
