//! Case-insensitive overlap between two lists of free-text terms.
//!
//! An item of the left list matches exactly when an equal item (ignoring case)
//! exists on the right, and partially when either side contains the other as a
//! substring. Scores and the overlapping items shown to users are both derived
//! from the same [`Overlap`] value, so they cannot disagree.

use std::collections::HashSet;

/// Weight of a partial (substring) match relative to an exact match
pub const PARTIAL_MATCH_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Partial,
}

impl MatchKind {
    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            MatchKind::Exact => 1.0,
            MatchKind::Partial => PARTIAL_MATCH_WEIGHT,
        }
    }
}

/// One item of the left list that matched the right list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapMatch<'a> {
    /// The item in its original casing
    pub item: &'a str,
    pub kind: MatchKind,
}

/// Matches of a left list against a right list, exact matches first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlap<'a> {
    matches: Vec<OverlapMatch<'a>>,
}

impl<'a> Overlap<'a> {
    /// Compute the overlap of `left` against `right`
    ///
    /// Each left item is counted at most once. Blank items on either side are
    /// ignored since an empty string is a substring of everything.
    pub fn between<A, B>(left: &'a [A], right: &[B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let right: Vec<String> = right
            .iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        if left.is_empty() || right.is_empty() {
            return Self::default();
        }

        let right_set: HashSet<&str> = right.iter().map(String::as_str).collect();

        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for entry in left {
            let original: &'a str = entry.as_ref();
            let item = normalize(original);
            if item.is_empty() {
                continue;
            }

            if right_set.contains(item.as_str()) {
                exact.push(OverlapMatch { item: original.trim(), kind: MatchKind::Exact });
            } else if right
                .iter()
                .any(|other| other.contains(item.as_str()) || item.contains(other.as_str()))
            {
                partial.push(OverlapMatch { item: original.trim(), kind: MatchKind::Partial });
            }
        }

        exact.extend(partial);
        Self { matches: exact }
    }

    /// `exact + 0.5 * partial`
    pub fn score(&self) -> f64 {
        self.matches.iter().map(|m| m.kind.weight()).sum()
    }

    /// Matched left items, exact matches first, deduplicated ignoring case
    pub fn items(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.matches
            .iter()
            .filter(|m| seen.insert(m.item.to_lowercase()))
            .map(|m| m.item)
            .collect()
    }

    pub fn matches(&self) -> &[OverlapMatch<'a>] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Overlap score of `left` against `right`
pub fn overlap_score<A: AsRef<str>, B: AsRef<str>>(left: &[A], right: &[B]) -> f64 {
    Overlap::between(left, right).score()
}

/// Items of `left` that overlap `right`, in original casing
pub fn overlapping_items<'a, A: AsRef<str>, B: AsRef<str>>(
    left: &'a [A],
    right: &[B],
) -> Vec<&'a str> {
    Overlap::between(left, right).items()
}

#[inline]
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
