use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::StudentProfile;

/// Request to score a student profile against the catalog
///
/// All fields are required; a missing or non-numeric field is rejected by the
/// JSON payload handler before this type is constructed. Out-of-range numeric
/// values are accepted and degrade into score clamping rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    pub gmat: f64,
    pub gpa: f64,
    pub exp: f64,
    #[validate(length(min = 1))]
    pub goal: String,
    pub budget: f64,
}

impl From<MatchRequest> for StudentProfile {
    fn from(req: MatchRequest) -> Self {
        StudentProfile {
            gmat: req.gmat,
            gpa: req.gpa,
            exp: req.exp,
            goal: req.goal,
            budget: req.budget,
        }
    }
}
