//! Assessment construction and reconciliation
//!
//! [`AssessmentBuilder`] produces a fresh snapshot from a configuration.
//! [`reconcile`] folds a later configuration into an existing snapshot,
//! keeping every object that survives the resize.

mod builder;
mod reconciler;

pub use builder::{build, AssessmentBuilder};
pub use reconciler::reconcile;
