/// Academic-domain terms recognised in free text, in match order
pub const ACADEMIC_VOCABULARY: [&str; 24] = [
    "computer science",
    "machine learning",
    "artificial intelligence",
    "data science",
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "engineering",
    "research",
    "academic",
    "study",
    "education",
    "learning",
    "thesis",
    "dissertation",
    "publication",
    "journal",
    "conference",
    "algorithm",
    "theory",
    "analysis",
    "experiment",
    "methodology",
];

/// Return the vocabulary terms contained in `text`
///
/// Matching is a case-insensitive substring test, so "learning" is found in
/// "machine learning" and "theory" in "theoretical" is not. The result follows
/// vocabulary order, not the order of appearance in the text.
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    ACADEMIC_VOCABULARY
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect()
}
