// Integration tests for ThinkBridge Match

use std::sync::Arc;
use thinkbridge_match::core::{MentorScorer, Recommender};
use thinkbridge_match::models::{
    AnswerRecord, AuthoredQuestion, DataSource, ScoringWeights, StoredProfile, UserInterestProfile,
};
use thinkbridge_match::services::{CachedRegistryStore, InMemoryStore};

fn create_profile(id: &str, specialization: &[&str], institution: Option<&str>) -> StoredProfile {
    StoredProfile {
        id: id.to_string(),
        name: format!("User {}", id),
        institution: institution.map(str::to_string),
        bio: None,
        skills: vec![],
        specialization: specialization.iter().map(|s| s.to_string()).collect(),
    }
}

fn create_question(author: &str, tags: &[&str]) -> AuthoredQuestion {
    AuthoredQuestion {
        author_id: author.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        content: String::new(),
    }
}

fn create_answer(author: &str, tags: &[&str]) -> AnswerRecord {
    AnswerRecord {
        author_id: author.to_string(),
        question_tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn interests(items: &[&str]) -> UserInterestProfile {
    let mut profile = UserInterestProfile::default();
    profile.academic_interests.extend(items);
    profile
}

#[tokio::test]
async fn test_integration_end_to_end_scenario() {
    let mut store = InMemoryStore::new()
        .with_profile(create_profile("requester", &[], Some("Oxford")))
        .with_mentor(create_profile(
            "M",
            &["Machine Learning", "Data Science"],
            Some("Cambridge"),
        ));
    for _ in 0..6 {
        store = store.with_question(create_question("M", &["ml"]));
    }

    let scorer = MentorScorer::new(Arc::new(store), ScoringWeights::default());
    let result = scorer
        .score_mentors("requester", &interests(&["machine learning"]))
        .await
        .unwrap();

    assert!(!result.is_degraded());
    assert_eq!(result.value.len(), 1);
    assert_eq!(result.value[0].mentor_id, "M");
    assert_eq!(result.value[0].score, 3.0);
    assert!(result.value[0]
        .match_reasons
        .contains(&"Specializes in Machine Learning".to_string()));
}

#[tokio::test]
async fn test_requester_never_recommended() {
    let store = InMemoryStore::new()
        .with_mentor(create_profile("self", &["Physics"], Some("MIT")))
        .with_mentor(create_profile("other", &["Physics"], Some("MIT")))
        .with_answer(create_answer("self", &["physics"]));

    let scorer = MentorScorer::new(Arc::new(store), ScoringWeights::default());
    let result = scorer
        .score_mentors("self", &interests(&["physics"]))
        .await
        .unwrap();

    assert!(result.value.iter().all(|s| s.mentor_id != "self"));
    assert_eq!(result.value.len(), 1);
}

#[tokio::test]
async fn test_ranking_properties() {
    let mut store = InMemoryStore::new()
        .with_profile(create_profile("student", &[], Some("MIT")));

    let specializations: [&[&str]; 5] = [
        &["Biology"],
        &["Physics", "Quantum Physics"],
        &["Art History"],
        &["Physics"],
        &["Chemistry", "Biology", "Physics"],
    ];
    for (i, specialization) in specializations.iter().enumerate() {
        let id = format!("m{}", i);
        let institution = if i % 2 == 0 { Some("mit") } else { None };
        store = store
            .with_mentor(create_profile(&id, specialization, institution))
            .with_question(create_question(&id, &["physics"]));
        for _ in 0..(i * 3) {
            store = store.with_answer(create_answer(&id, &["biology"]));
        }
    }

    let scorer = MentorScorer::new(Arc::new(store), ScoringWeights::default());
    let result = scorer
        .score_mentors("student", &interests(&["physics", "biology"]))
        .await
        .unwrap();

    assert_eq!(result.value.len(), 5);
    for pair in result.value.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Scores not sorted descending");
    }
    for score in &result.value {
        assert!(score.score > 0.0);
        assert!(score.match_reasons.len() <= 3);
    }
}

#[tokio::test]
async fn test_result_independent_of_fetch_order() {
    let questions = vec![
        create_question("m1", &["AI", "ethics"]),
        create_question("m1", &["ai"]),
        create_question("m2", &["philosophy"]),
    ];
    let answers = vec![
        create_answer("m1", &["ethics"]),
        create_answer("m2", &["AI Ethics"]),
        create_answer("m2", &["philosophy"]),
    ];

    let build = |reverse: bool| {
        let mut store = InMemoryStore::new()
            .with_mentor(create_profile("m1", &["AI"], None))
            .with_mentor(create_profile("m2", &["Philosophy"], None));
        let mut qs = questions.clone();
        let mut ans = answers.clone();
        if reverse {
            qs.reverse();
            ans.reverse();
        }
        for q in qs {
            store = store.with_question(q);
        }
        for a in ans {
            store = store.with_answer(a);
        }
        MentorScorer::new(Arc::new(store), ScoringWeights::default())
    };

    let profile = interests(&["ai", "ethics"]);
    let forward = build(false).score_mentors("student", &profile).await.unwrap();
    let backward = build(true).score_mentors("student", &profile).await.unwrap();

    let forward_scores: Vec<(String, f64)> = forward
        .value
        .iter()
        .map(|s| (s.mentor_id.clone(), s.score))
        .collect();
    let backward_scores: Vec<(String, f64)> = backward
        .value
        .iter()
        .map(|s| (s.mentor_id.clone(), s.score))
        .collect();
    assert_eq!(forward_scores, backward_scores);
}

#[tokio::test]
async fn test_repeated_tags_change_ranking() {
    let mut store = InMemoryStore::new()
        .with_mentor(create_profile("specialist", &["Physics"], None))
        .with_mentor(create_profile("poster", &[], None))
        .with_mentor(create_profile("answerer", &[], None));
    for _ in 0..3 {
        store = store.with_question(create_question("poster", &["physics"]));
    }
    store = store
        .with_answer(create_answer("answerer", &["Physics"]))
        .with_answer(create_answer("answerer", &["physics", "optics"]));

    let scorer = MentorScorer::new(Arc::new(store), ScoringWeights::default());
    let result = scorer
        .score_mentors("student", &interests(&["physics"]))
        .await
        .unwrap();

    let ranked: Vec<(&str, f64)> = result
        .value
        .iter()
        .map(|s| (s.mentor_id.as_str(), s.score))
        .collect();
    // poster: 3 * 2; answerer: 2 * 1.5 + 2 / 5; specialist: 1 * 3
    assert_eq!(ranked[0], ("poster", 6.0));
    assert_eq!(ranked[1].0, "answerer");
    assert!((ranked[1].1 - 3.4).abs() < 1e-9);
    assert_eq!(ranked[2], ("specialist", 3.0));
    assert_eq!(result.value[0].match_reasons, vec!["Posts about physics"]);
}

#[tokio::test]
async fn test_no_mentors_is_empty_not_error() {
    let store = InMemoryStore::new().with_profile(create_profile("student", &[], None));

    let recommender = Recommender::new(Arc::new(store), ScoringWeights::default());
    let result = recommender.recommend("student", None, None).await.unwrap();

    assert!(result.value.recommendations.is_empty());
    assert_eq!(result.value.total_candidates, 0);
    assert!(result.warnings.is_empty());
}

#[tokio::test]
async fn test_every_fetch_failing_still_returns() {
    let store = InMemoryStore::new()
        .with_mentor(create_profile("m1", &["Physics"], None))
        .failing_on(DataSource::Profile)
        .failing_on(DataSource::Profiles)
        .failing_on(DataSource::Questions)
        .failing_on(DataSource::Answers);

    let recommender = Recommender::new(Arc::new(store), ScoringWeights::default());
    let result = recommender.recommend("student", None, None).await.unwrap();

    assert!(result.value.recommendations.is_empty());
    let sources: Vec<DataSource> = result.warnings.iter().map(|w| w.source).collect();
    assert_eq!(
        sources,
        vec![
            DataSource::Profile,
            DataSource::Questions,
            DataSource::Profiles,
            DataSource::Questions,
            DataSource::Answers,
        ]
    );
}

#[tokio::test]
async fn test_cached_registry_survives_outage() {
    let inner = InMemoryStore::new()
        .with_mentor(create_profile("m1", &["Physics"], None));
    let store = Arc::new(CachedRegistryStore::new(inner, 100, 60));
    let scorer = MentorScorer::new(store.clone(), ScoringWeights::default());
    let profile = interests(&["physics"]);

    let before = scorer.score_mentors("student", &profile).await.unwrap();
    store.inner().set_failing(DataSource::MentorRegistry, true).await;
    let during = scorer.score_mentors("student", &profile).await.unwrap();

    assert_eq!(before.value, during.value);
    assert!(!during.is_degraded());
}

#[tokio::test]
async fn test_invalid_user_id_is_an_error() {
    let scorer = MentorScorer::new(Arc::new(InMemoryStore::new()), ScoringWeights::default());
    assert!(scorer
        .score_mentors("", &UserInterestProfile::default())
        .await
        .is_err());
}
