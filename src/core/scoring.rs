use crate::core::overlap::Overlap;
use crate::models::{MentorCandidate, ScoringWeights};

/// Calculate a mentor's score against the requester's interests
///
/// Scoring formula:
/// score = (
///     specialization_overlap * 3 +     # Declared expertise vs interests
///     institution_match * 2 +          # Same institution, fixed bonus
///     authored_tag_overlap * 2 +       # Tags of questions the mentor posted
///     min(answers / 5, 2) * 1 +        # Answer activity, capped
///     answered_tag_overlap * 1.5       # Tags of questions the mentor answered
/// )
///
/// Returns the score and every match reason in term order. `interests` is the
/// requester's interest union, `requester_institution` their institution.
pub fn calculate_mentor_score<I: AsRef<str>>(
    candidate: &MentorCandidate,
    interests: &[I],
    requester_institution: Option<&str>,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Term 1: Specialization overlap
    let specialization = Overlap::between(&candidate.specialization, interests);
    if specialization.score() > 0.0 {
        score += specialization.score() * weights.specialization;
        reasons.push(format!("Specializes in {}", specialization.items().join(", ")));
    }

    // Term 2: Institution match
    if let Some(institution) =
        matching_institution(candidate.institution.as_deref(), requester_institution)
    {
        score += weights.institution;
        reasons.push(format!("From your institution ({})", institution));
    }

    // Term 3: Tags of authored questions
    let authored = Overlap::between(&candidate.authored_tags, interests);
    if authored.score() > 0.0 {
        score += authored.score() * weights.question_tags;
        reasons.push(format!("Posts about {}", authored.items().join(", ")));
    }

    // Term 4: Answer activity, independent of topic
    score += answer_activity_bonus(candidate.answer_count, weights) * weights.answer_activity;
    if candidate.answer_count >= weights.activity_reason_threshold {
        reasons.push(format!("Active mentor with {} answers", candidate.answer_count));
    }

    // Term 5: Tags of answered questions
    let answered = Overlap::between(&candidate.answered_tags, interests);
    if answered.score() > 0.0 {
        score += answered.score() * weights.answered_tags;
        reasons.push(format!("Answers questions about {}", answered.items().join(", ")));
    }

    (score, reasons)
}

/// Activity bonus before weighting: one point per `activity_divisor` answers,
/// capped at `activity_cap`
#[inline]
pub fn answer_activity_bonus(answer_count: usize, weights: &ScoringWeights) -> f64 {
    if weights.activity_divisor <= 0.0 {
        return 0.0;
    }

    (answer_count as f64 / weights.activity_divisor).min(weights.activity_cap)
}

/// The candidate's institution when it equals the requester's, ignoring case
#[inline]
fn matching_institution<'a>(candidate: Option<&'a str>, requester: Option<&str>) -> Option<&'a str> {
    let candidate = candidate.map(str::trim).filter(|s| !s.is_empty())?;
    let requester = requester.map(str::trim).filter(|s| !s.is_empty())?;

    (candidate.to_lowercase() == requester.to_lowercase()).then_some(candidate)
}
