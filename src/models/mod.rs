// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchResult, ScoringWeights, StudentProfile, UniversityRecord};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse};
