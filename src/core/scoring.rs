use crate::models::{ScoringWeights, StudentProfile, UniversityRecord};

/// GMAT gap (in points) at which the component score reaches zero
const GMAT_TOLERANCE: f64 = 100.0;

/// GPA gap at which the component score reaches zero
const GPA_TOLERANCE: f64 = 1.2;

/// Experience gap (in years) at which the component score reaches zero
const EXP_TOLERANCE: f64 = 5.0;

/// Career component when the goal is outside the program's focus
const CAREER_MISS_SCORE: f64 = 0.7;

/// Cap applied to the ROI component before weighting
const ROI_CAP: f64 = 3.0;

/// ROI multiplier when tuition exceeds the stated budget
const OVER_BUDGET_PENALTY: f64 = 0.75;

/// Calculate a fit score (0-100) for a university given a student profile
///
/// Scoring formula:
/// fit = (
///     gmat_score * 0.30 +          # GMAT proximity to cohort average
///     gpa_score * 0.20 +           # GPA proximity
///     exp_score * 0.15 +           # Work experience proximity
///     career_score * 0.15 +        # Goal in program's career focus
///     roi_score * roi_boost * 0.20 # Salary/tuition ratio, boosted if affordable
/// ) * 100
///
/// The result is clamped to at most 100 and rounded to 2 decimal places.
pub fn calculate_fit_score(
    profile: &StudentProfile,
    uni: &UniversityRecord,
    weights: &ScoringWeights,
) -> f64 {
    let gmat_score = proximity_score(profile.gmat, uni.avg_gmat, GMAT_TOLERANCE);
    let gpa_score = proximity_score(profile.gpa, uni.avg_gpa, GPA_TOLERANCE);
    let exp_score = proximity_score(profile.exp, uni.avg_exp, EXP_TOLERANCE);

    let career_score = if uni.focuses_on(&profile.goal) {
        1.0
    } else {
        CAREER_MISS_SCORE
    };

    let roi_score = uni.roi().min(ROI_CAP);
    let roi_boost = if profile.budget >= uni.tuition {
        1.0
    } else {
        OVER_BUDGET_PENALTY
    };

    let fit = (gmat_score * weights.gmat
        + gpa_score * weights.gpa
        + exp_score * weights.experience
        + career_score * weights.career
        + roi_score * roi_boost * weights.roi)
        * 100.0;

    round2(fit.min(100.0))
}

/// Linear-decay proximity score (0-1)
///
/// Exactly 1.0 when the value matches the cohort average; falls linearly to
/// zero once the gap reaches `tolerance`.
#[inline]
pub fn proximity_score(value: f64, average: f64, tolerance: f64) -> f64 {
    (1.0 - (value - average).abs() / tolerance).max(0.0)
}

/// Display ROI: raw salary/tuition ratio rounded to 2 decimals, never capped
#[inline]
pub fn display_roi(uni: &UniversityRecord) -> f64 {
    round2(uni.roi())
}

/// Round to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
