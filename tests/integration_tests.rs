// Integration tests for UniFit

use unifit::core::Matcher;
use unifit::models::{StudentProfile, UniversityRecord};
use unifit::services::CatalogStore;

fn create_profile(gmat: f64, gpa: f64, exp: f64, goal: &str, budget: f64) -> StudentProfile {
    StudentProfile {
        gmat,
        gpa,
        exp,
        goal: goal.to_string(),
        budget,
    }
}

fn create_university(
    name: &str,
    region: &str,
    avg_gmat: f64,
    avg_gpa: f64,
    avg_exp: f64,
    focus: &[&str],
    tuition: f64,
    avg_salary: f64,
) -> UniversityRecord {
    UniversityRecord {
        name: name.to_string(),
        region: region.to_string(),
        avg_gmat,
        avg_gpa,
        avg_exp,
        career_focus: focus.iter().map(|s| s.to_string()).collect(),
        tuition,
        avg_salary,
    }
}

fn create_catalog() -> Vec<UniversityRecord> {
    vec![
        create_university(
            "Hargrove School of Business",
            "North America",
            730.0,
            3.7,
            5.0,
            &["Finance", "Consulting"],
            120_000.0,
            165_000.0,
        ),
        create_university(
            "Lakeside University MBA",
            "North America",
            700.0,
            3.5,
            4.0,
            &["Finance", "Tech"],
            95_000.0,
            150_000.0,
        ),
        create_university(
            "Albion Business School",
            "Europe",
            690.0,
            3.4,
            5.0,
            &["Consulting", "Entrepreneurship"],
            88_000.0,
            140_000.0,
        ),
        create_university(
            "Meridian Graduate School of Management",
            "Europe",
            660.0,
            3.3,
            6.0,
            &["Tech", "Operations"],
            70_000.0,
            125_000.0,
        ),
        create_university(
            "Pacific Crest University",
            "Asia-Pacific",
            680.0,
            3.4,
            5.0,
            &["Finance", "Tech", "Operations"],
            60_000.0,
            130_000.0,
        ),
        create_university(
            "Northgate Business Academy",
            "Europe",
            620.0,
            3.1,
            3.0,
            &["Marketing", "Entrepreneurship"],
            42_000.0,
            92_000.0,
        ),
        create_university(
            "Caldwell College of Business",
            "North America",
            600.0,
            3.0,
            3.0,
            &["Operations", "Healthcare"],
            38_000.0,
            85_000.0,
        ),
    ]
}

#[test]
fn test_end_to_end_matching() {
    let matcher = Matcher::with_defaults();
    let profile = create_profile(710.0, 3.6, 4.5, "Finance", 100_000.0);
    let catalog = create_catalog();

    let outcome = matcher.find_matches(&profile, &catalog);

    assert_eq!(outcome.total_evaluated, catalog.len());
    assert!(!outcome.matches.is_empty());
    assert!(outcome.matches.len() <= 5);

    // All results cleared the strict threshold
    for m in &outcome.matches {
        assert!(m.fit_score > 60.0, "{} scored {}", m.name, m.fit_score);
    }

    // Descending order
    for pair in outcome.matches.windows(2) {
        assert!(pair[0].fit_score >= pair[1].fit_score);
    }

    // Every result carries a six-fragment rationale ending with the ROI
    for m in &outcome.matches {
        assert!(m.reason.contains("Estimated ROI after graduation:"));
        assert!(m.reason.ends_with("x."));
    }
}

#[test]
fn test_length_bound_on_large_catalog() {
    let matcher = Matcher::with_defaults();
    let profile = create_profile(700.0, 3.5, 4.0, "Finance", 150_000.0);

    let catalog: Vec<UniversityRecord> = (0..200)
        .map(|i| {
            create_university(
                &format!("University {}", i),
                "North America",
                690.0 + (i % 20) as f64,
                3.4,
                4.0,
                &["Finance"],
                80_000.0,
                150_000.0,
            )
        })
        .collect();

    let outcome = matcher.find_matches(&profile, &catalog);

    assert_eq!(outcome.matches.len(), 5);
    assert_eq!(outcome.total_evaluated, 200);
}

#[test]
fn test_no_qualifying_matches_is_empty_not_error() {
    let matcher = Matcher::with_defaults();
    // A profile far from every cohort, over no budget, off-goal everywhere
    let profile = create_profile(200.0, 0.5, 25.0, "Astrophysics", 1_000.0);

    let outcome = matcher.find_matches(&profile, &create_catalog());

    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.total_evaluated, 7);
}

#[test]
fn test_display_roi_unclamped_in_results() {
    let matcher = Matcher::with_defaults();
    let profile = create_profile(700.0, 3.5, 4.0, "Finance", 100_000.0);

    // 5x raw ROI: the internal component caps at 3, the response must not
    let catalog = vec![create_university(
        "Bargain School",
        "Europe",
        700.0,
        3.5,
        4.0,
        &["Finance"],
        30_000.0,
        150_000.0,
    )];

    let outcome = matcher.find_matches(&profile, &catalog);
    assert_eq!(outcome.matches[0].roi, 5.0);
}

#[test]
fn test_output_is_deterministic() {
    let matcher = Matcher::with_defaults();
    let profile = create_profile(680.0, 3.3, 5.0, "Tech", 75_000.0);
    let catalog = create_catalog();

    let first = serde_json::to_string(&matcher.find_matches(&profile, &catalog).matches).unwrap();
    let second = serde_json::to_string(&matcher.find_matches(&profile, &catalog).matches).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_response_serialization_shape() {
    let matcher = Matcher::with_defaults();
    let profile = create_profile(710.0, 3.6, 4.5, "Finance", 100_000.0);

    let outcome = matcher.find_matches(&profile, &create_catalog());
    let json = serde_json::to_value(&outcome.matches).unwrap();

    let array = json.as_array().unwrap();
    assert!(!array.is_empty());

    for entry in array {
        assert!(entry["name"].is_string());
        assert!(entry["region"].is_string());
        assert!(entry["fit_score"].is_number());
        assert!(entry["roi"].is_number());
        assert!(entry["reason"].is_string());
    }
}

#[test]
fn test_catalog_store_feeds_matcher() {
    // Startup flow: load catalog once, score many profiles against it
    let catalog = CatalogStore::load("data/universities.json").unwrap();
    let matcher = Matcher::with_defaults();

    let profiles = [
        create_profile(720.0, 3.6, 4.0, "Finance", 90_000.0),
        create_profile(640.0, 3.1, 3.0, "Marketing", 45_000.0),
        create_profile(690.0, 3.4, 5.0, "Tech", 70_000.0),
    ];

    for profile in &profiles {
        let outcome = matcher.find_matches(profile, catalog.universities());
        assert_eq!(outcome.total_evaluated, catalog.len());
        assert!(outcome.matches.len() <= 5);
        for m in &outcome.matches {
            assert!(m.fit_score > 60.0 && m.fit_score <= 100.0);
        }
    }
}
