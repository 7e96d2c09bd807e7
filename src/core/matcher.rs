use crate::core::{explain::generate_reason, scoring::calculate_fit_score, scoring::display_roi};
use crate::models::{MatchResult, ScoringWeights, StudentProfile, UniversityRecord};

/// Result of one matching pass over the catalog
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_evaluated: usize,
}

/// Main matching orchestrator
///
/// Scores every catalog entry independently, keeps those above the fit
/// threshold, sorts descending by fit score (ties keep catalog order), and
/// truncates to the result limit.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_fit_score: f64,
    max_results: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_fit_score: f64, max_results: usize) -> Self {
        Self {
            weights,
            min_fit_score,
            max_results,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), 60.0, 5)
    }

    /// Find the best-fitting universities for a student profile
    ///
    /// Pure and deterministic: the same profile against the same catalog
    /// always produces identical output. The catalog is read-only; scoring
    /// one entry never depends on another.
    pub fn find_matches(
        &self,
        profile: &StudentProfile,
        catalog: &[UniversityRecord],
    ) -> MatchOutcome {
        let total_evaluated = catalog.len();

        let mut matches: Vec<MatchResult> = catalog
            .iter()
            .filter_map(|uni| {
                let fit_score = calculate_fit_score(profile, uni, &self.weights);

                // Strict threshold: a fit of exactly min_fit_score is excluded
                if fit_score > self.min_fit_score {
                    Some(MatchResult {
                        name: uni.name.clone(),
                        region: uni.region.clone(),
                        fit_score,
                        roi: display_roi(uni),
                        reason: generate_reason(profile, uni),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps catalog order for equal scores
        matches.sort_by(|a, b| {
            b.fit_score
                .partial_cmp(&a.fit_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(self.max_results);

        MatchOutcome {
            matches,
            total_evaluated,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
