use crate::core::scoring::display_roi;
use crate::models::{StudentProfile, UniversityRecord};

/// GMAT gap below the cohort average still considered competitive
const COMPETITIVE_GMAT_MARGIN: f64 = 30.0;

/// Build the human-readable rationale for one university
///
/// Six sentence fragments in a fixed order (GMAT, GPA, experience, career,
/// budget, ROI), joined by single spaces. Pure function of the profile and
/// the record, independent of the fit score.
pub fn generate_reason(profile: &StudentProfile, uni: &UniversityRecord) -> String {
    let mut reasons: Vec<String> = Vec::with_capacity(6);

    if profile.gmat >= uni.avg_gmat {
        reasons.push("You exceed the typical GMAT for this university.".to_string());
    } else if profile.gmat >= uni.avg_gmat - COMPETITIVE_GMAT_MARGIN {
        reasons.push("Your GMAT is competitive for this program.".to_string());
    } else {
        reasons.push("Admissions may be tough based on GMAT.".to_string());
    }

    if profile.gpa >= uni.avg_gpa {
        reasons.push("Your GPA matches or surpasses their average.".to_string());
    } else {
        reasons.push(
            "Lower GPA can be offset with a higher GMAT, outstanding work experience, \
             or strong extracurriculars."
                .to_string(),
        );
    }

    if profile.exp >= uni.avg_exp {
        reasons.push("You have solid work experience for this program.".to_string());
    } else {
        reasons.push("Gaining more work experience could improve admission odds.".to_string());
    }

    if uni.focuses_on(&profile.goal) {
        reasons.push("Strong track record in your chosen career field.".to_string());
    } else {
        reasons.push(format!(
            "{} placements possible, but not the main focus here.",
            profile.goal
        ));
    }

    if profile.budget >= uni.tuition {
        reasons.push("Fits comfortably within your stated budget.".to_string());
    } else {
        reasons.push("This college is above your stated budget threshold.".to_string());
    }

    reasons.push(format!(
        "Estimated ROI after graduation: {}x.",
        display_roi(uni)
    ));

    reasons.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> StudentProfile {
        StudentProfile {
            gmat: 720.0,
            gpa: 3.6,
            exp: 4.0,
            goal: "Finance".to_string(),
            budget: 90_000.0,
        }
    }

    fn create_test_university() -> UniversityRecord {
        UniversityRecord {
            name: "Test School".to_string(),
            region: "North America".to_string(),
            avg_gmat: 700.0,
            avg_gpa: 3.5,
            avg_exp: 4.0,
            career_focus: vec!["Finance".to_string()],
            tuition: 80_000.0,
            avg_salary: 160_000.0,
        }
    }

    #[test]
    fn test_all_positive_fragments() {
        let reason = generate_reason(&create_test_profile(), &create_test_university());

        assert_eq!(
            reason,
            "You exceed the typical GMAT for this university. \
             Your GPA matches or surpasses their average. \
             You have solid work experience for this program. \
             Strong track record in your chosen career field. \
             Fits comfortably within your stated budget. \
             Estimated ROI after graduation: 2x."
        );
    }

    #[test]
    fn test_competitive_gmat_band() {
        let mut profile = create_test_profile();
        profile.gmat = 675.0; // within 30 points below the average

        let reason = generate_reason(&profile, &create_test_university());
        assert!(reason.contains("Your GMAT is competitive for this program."));
    }

    #[test]
    fn test_tough_gmat_below_band() {
        let mut profile = create_test_profile();
        profile.gmat = 650.0;

        let reason = generate_reason(&profile, &create_test_university());
        assert!(reason.contains("Admissions may be tough based on GMAT."));
    }

    #[test]
    fn test_goal_interpolated_when_not_a_focus() {
        let mut profile = create_test_profile();
        profile.goal = "Healthcare".to_string();

        let reason = generate_reason(&profile, &create_test_university());
        assert!(reason.contains("Healthcare placements possible, but not the main focus here."));
    }

    #[test]
    fn test_over_budget_fragment() {
        let mut profile = create_test_profile();
        profile.budget = 50_000.0;

        let reason = generate_reason(&profile, &create_test_university());
        assert!(reason.contains("This college is above your stated budget threshold."));
    }

    #[test]
    fn test_roi_fragment_always_last() {
        let mut profile = create_test_profile();
        profile.gmat = 400.0;
        profile.gpa = 2.0;
        profile.budget = 0.0;

        let reason = generate_reason(&profile, &create_test_university());
        assert!(reason.ends_with("Estimated ROI after graduation: 2x."));
    }

    #[test]
    fn test_fragment_count_is_fixed() {
        let reason = generate_reason(&create_test_profile(), &create_test_university());
        // Six fragments, each ending with a period
        assert_eq!(reason.matches(". ").count(), 5);
        assert!(reason.ends_with('.'));
    }
}
