//! UniFit - Fit-scoring service matching MBA applicants to universities
//!
//! This library scores a student profile against an immutable university
//! catalog with a weighted composite of GMAT, GPA, experience, career and
//! ROI components, and returns the top matches with a generated rationale.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_fit_score, generate_reason, MatchOutcome, Matcher};
pub use crate::models::{MatchRequest, MatchResult, ScoringWeights, StudentProfile, UniversityRecord};
pub use crate::services::{CatalogError, CatalogStore};
