// Unit tests for ThinkBridge Match

use thinkbridge_match::core::{
    keywords::extract_keywords,
    overlap::{overlap_score, overlapping_items},
    scoring::{answer_activity_bonus, calculate_mentor_score},
    interests::build_interest_profile,
};
use thinkbridge_match::models::{AuthoredQuestion, MentorCandidate, ScoringWeights, StoredProfile};

#[test]
fn test_overlap_of_list_with_itself() {
    let list = vec![
        "Computer Science".to_string(),
        "Ethics".to_string(),
        "Data Science".to_string(),
    ];
    assert_eq!(overlap_score(&list, &list), 3.0);
}

#[test]
fn test_overlap_with_empty_list() {
    let empty: Vec<String> = vec![];
    let list = vec!["physics".to_string()];

    assert_eq!(overlap_score(&empty, &list), 0.0);
    assert_eq!(overlap_score(&list, &empty), 0.0);
}

#[test]
fn test_overlap_ignores_case() {
    assert_eq!(overlap_score(&["Machine Learning"], &["machine learning"]), 1.0);
    assert_eq!(overlap_score(&["DATA SCIENCE"], &["Data Science"]), 1.0);
}

#[test]
fn test_overlap_partial_substring() {
    assert_eq!(overlap_score(&["learning"], &["machine learning"]), 0.5);
    assert_eq!(overlap_score(&["ml"], &["machine learning"]), 0.0);
}

#[test]
fn test_overlapping_items_keep_original_case() {
    let items = overlapping_items(&["Deep Learning", "Robotics"], &["learning", "robotics"]);
    assert_eq!(items, vec!["Robotics", "Deep Learning"]);
}

#[test]
fn test_keyword_extraction_from_bio() {
    let keywords = extract_keywords("I study machine learning and data science");

    assert!(keywords.contains(&"machine learning"));
    assert!(keywords.contains(&"data science"));
}

#[test]
fn test_extractor_scenario() {
    let profile = StoredProfile {
        id: "u1".to_string(),
        name: "Student".to_string(),
        bio: Some("I study machine learning and data science".to_string()),
        ..Default::default()
    };

    let interests = build_interest_profile(Some(&profile), &[]);

    assert!(interests.academic_interests.contains("machine learning"));
    assert!(interests.academic_interests.contains("data science"));
}

#[test]
fn test_extractor_research_topics_from_questions() {
    let questions = vec![AuthoredQuestion {
        author_id: "u1".to_string(),
        tags: vec!["statistics".to_string()],
        content: "How should I structure the methodology chapter of my dissertation?".to_string(),
    }];

    let interests = build_interest_profile(None, &questions);

    assert_eq!(interests.academic_interests.as_slice(), &["statistics"]);
    assert_eq!(interests.research_topics.as_slice(), &["dissertation", "methodology"]);
}

#[test]
fn test_activity_bonus_capped_at_two() {
    let weights = ScoringWeights::default();
    assert_eq!(answer_activity_bonus(50, &weights), 2.0);

    let candidate = MentorCandidate {
        mentor_id: "m".to_string(),
        answer_count: 50,
        ..Default::default()
    };
    let interests: Vec<String> = vec![];
    let (score, _) = calculate_mentor_score(&candidate, &interests, None, &weights);

    assert_eq!(score, 2.0);
}

#[test]
fn test_custom_weights() {
    let weights = ScoringWeights {
        specialization: 10.0,
        ..ScoringWeights::default()
    };
    let candidate = MentorCandidate {
        mentor_id: "m".to_string(),
        specialization: vec!["Physics".to_string()],
        ..Default::default()
    };

    let (score, reasons) = calculate_mentor_score(&candidate, &["physics"], None, &weights);

    assert_eq!(score, 10.0);
    assert_eq!(reasons, vec!["Specializes in Physics"]);
}

#[test]
fn test_extractor_against_in_memory_store() {
    use std::sync::Arc;
    use thinkbridge_match::core::InterestExtractor;
    use thinkbridge_match::services::InMemoryStore;

    let store = InMemoryStore::new().with_profile(StoredProfile {
        id: "u1".to_string(),
        bio: Some("Biology and chemistry research".to_string()),
        skills: vec!["Lab Safety".to_string()],
        ..Default::default()
    });
    let extractor = InterestExtractor::new(Arc::new(store));

    let result = tokio_test::block_on(extractor.extract("u1")).unwrap();

    assert_eq!(
        result.value.academic_interests.as_slice(),
        &["chemistry", "biology", "research"]
    );
    assert_eq!(result.value.skills_to_learn.as_slice(), &["Lab Safety"]);
}
