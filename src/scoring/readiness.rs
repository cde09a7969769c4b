//! Readiness scorer
//!
//! Pure functions over a [`Configuration`]; nothing here touches the
//! generated population.

use crate::config::Configuration;
use crate::models::ComplexityLevel;
use serde::Serialize;
use tracing::debug;

pub const MAX_SCORE: u8 = 100;
pub const MIN_SCORE: u8 = 20;

/// (threshold, deduction) brackets, highest threshold first
const SIZE_BRACKETS: [(u32, u8); 3] = [(5000, 15), (2000, 10), (1000, 5)];
const OBJECT_BRACKETS: [(u64, u8); 3] = [(200, 20), (100, 15), (50, 8)];
const USER_BRACKETS: [(u32, u8); 2] = [(2000, 10), (1000, 5)];

/// A single fired deduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    /// Factor name
    pub factor: &'static str,
    /// Configured value of the factor
    pub value: u64,
    /// Bracket threshold that was exceeded
    pub threshold: u64,
    /// Points deducted
    pub points: u8,
}

/// Complete score breakdown for transparency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Score before clamping (may be below the floor)
    pub raw_score: i32,
    /// Final clamped score
    pub score: u8,
    pub deductions: Vec<Deduction>,
}

impl ScoreBreakdown {
    pub fn total_deducted(&self) -> u32 {
        self.deductions.iter().map(|d| d.points as u32).sum()
    }

    pub fn is_clamped(&self) -> bool {
        self.raw_score != self.score as i32
    }
}

fn bracket<T: PartialOrd + Copy + Into<u64>>(
    factor: &'static str,
    value: T,
    brackets: &[(T, u8)],
) -> Option<Deduction> {
    brackets
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|&(threshold, points)| Deduction {
            factor,
            value: value.into(),
            threshold: threshold.into(),
            points,
        })
}

/// Calculate the score with every deduction that fired
pub fn breakdown(config: &Configuration) -> ScoreBreakdown {
    let deductions: Vec<Deduction> = [
        bracket("system size", config.system_size, &SIZE_BRACKETS),
        bracket("custom objects", config.object_count as u64, &OBJECT_BRACKETS),
        bracket("active users", config.users, &USER_BRACKETS),
    ]
    .into_iter()
    .flatten()
    .collect();

    let raw_score =
        MAX_SCORE as i32 - deductions.iter().map(|d| d.points as i32).sum::<i32>();
    let score = raw_score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8;

    debug!(
        "Readiness score {} (raw {}) from {} deductions",
        score,
        raw_score,
        deductions.len()
    );

    ScoreBreakdown {
        raw_score,
        score,
        deductions,
    }
}

/// Readiness score in `[MIN_SCORE, MAX_SCORE]`
pub fn score(config: &Configuration) -> u8 {
    breakdown(config).score
}

/// Estimated migration duration in weeks
pub fn duration(level: ComplexityLevel) -> u32 {
    match level {
        ComplexityLevel::Simple => 16,
        ComplexityLevel::Moderate => 24,
        ComplexityLevel::Complex => 36,
        ComplexityLevel::HighlyComplex => 52,
    }
}
