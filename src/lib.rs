//! Readiness - synthetic migration readiness assessments
//!
//! Builds a readiness snapshot for a legacy ERP system from a small set of
//! parameters: a 20-100 score, a complexity level with its duration
//! estimate, and a randomly generated population of custom-code objects
//! with compatibility verdicts. Existing snapshots can be reconciled with a
//! changed configuration without regenerating surviving objects.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod models;
pub mod reporters;
pub mod roadmap;
pub mod scoring;
