//! Readiness Scoring
//!
//! Computes the overall migration readiness score from configuration
//! parameters, and the estimated project duration from the complexity level.
//!
//! # Scoring Formula
//!
//! ```text
//! Score = clamp(100 - size_deduction - object_deduction - user_deduction, 20, 100)
//! ```
//!
//! Only the highest matching bracket of each factor applies:
//!
//! | Factor         | Bracket  | Deduction |
//! |----------------|----------|-----------|
//! | System size    | > 5000   | 15        |
//! |                | > 2000   | 10        |
//! |                | > 1000   | 5         |
//! | Custom objects | > 200    | 20        |
//! |                | > 100    | 15        |
//! |                | > 50     | 8         |
//! | Active users   | > 2000   | 10        |
//! |                | > 1000   | 5         |
//!
//! # Duration
//!
//! - Simple: 16 weeks
//! - Moderate: 24 weeks
//! - Complex: 36 weeks
//! - Highly complex: 52 weeks

mod readiness;

pub use readiness::{breakdown, duration, score, Deduction, ScoreBreakdown, MAX_SCORE, MIN_SCORE};
