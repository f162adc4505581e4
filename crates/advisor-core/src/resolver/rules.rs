//! Ordered keyword rules.

/// A single `keyword -> canned response` rule.
///
/// Rules are kept in an ordered slice. Several keywords can be substrings of
/// the same input; only the earliest rule in the slice answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase keyword, matched as a substring of the lowercased input
    pub keyword: &'static str,
    pub response: &'static str,
}

impl KeywordRule {
    pub const fn new(keyword: &'static str, response: &'static str) -> Self {
        Self { keyword, response }
    }

    pub fn matches(&self, lowered_input: &str) -> bool {
        lowered_input.contains(self.keyword)
    }
}

/// Returns the first rule, in slice order, whose keyword occurs in the input.
pub fn first_match<'a>(rules: &'a [KeywordRule], lowered_input: &str) -> Option<&'a KeywordRule> {
    rules.iter().find(|rule| rule.matches(lowered_input))
}

/// True if any of the words occurs in the input.
pub(crate) fn contains_any(lowered_input: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lowered_input.contains(word))
}

/// True if every one of the words occurs in the input.
pub(crate) fn contains_all(lowered_input: &str, words: &[&str]) -> bool {
    !words.is_empty() && words.iter().all(|word| lowered_input.contains(word))
}
