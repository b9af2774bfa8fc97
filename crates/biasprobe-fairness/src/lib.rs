//! Biasprobe Fairness: group metrics over the labeled dataset.
//!
//! Metrics work on in-memory rows; the report walks every observed gender
//! and nationality in first-appearance order.

pub mod metrics;
pub mod report;

pub use metrics::{demographic_parity, disparate_impact, selection_rate, unique_values};
pub use report::{FairnessReport, GenderImpact, GroupParity, PairImpact};
