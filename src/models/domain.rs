use serde::{Deserialize, Serialize};

/// A prospective student's application profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gmat: f64,
    pub gpa: f64,
    pub exp: f64,
    pub goal: String,
    pub budget: f64,
}

/// A university catalog entry, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    pub region: String,
    pub avg_gmat: f64,
    pub avg_gpa: f64,
    pub avg_exp: f64,
    #[serde(default)]
    pub career_focus: Vec<String>,
    pub tuition: f64,
    pub avg_salary: f64,
}

impl UniversityRecord {
    /// Raw salary-to-tuition ratio. Catalog loading guarantees tuition > 0.
    pub fn roi(&self) -> f64 {
        self.avg_salary / self.tuition
    }

    /// Whether the program is positioned for the given career field
    pub fn focuses_on(&self, goal: &str) -> bool {
        self.career_focus.iter().any(|field| field == goal)
    }
}

/// A scored match returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub region: String,
    pub fit_score: f64,
    pub roi: f64,
    pub reason: String,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub gmat: f64,
    pub gpa: f64,
    pub experience: f64,
    pub career: f64,
    pub roi: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gmat: 0.30,
            gpa: 0.20,
            experience: 0.15,
            career: 0.15,
            roi: 0.20,
        }
    }
}
