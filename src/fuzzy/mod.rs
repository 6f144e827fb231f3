//! Fuzzy matching for logical resource names

use nucleo::{Config, Matcher, Utf32Str};

/// Fuzzy matcher for logical names
pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a new fuzzy matcher
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Match a pattern against a list of candidates
    /// Returns sorted matches with scores (highest first)
    pub fn match_candidates<'a>(&mut self, pattern: &str, candidates: &[&'a str]) -> Vec<(&'a str, u16)> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut pattern_buf = Vec::new();
        let pattern_utf32 = Utf32Str::new(pattern, &mut pattern_buf);

        let mut matches: Vec<(&str, u16)> = candidates
            .iter()
            .filter_map(|&candidate| {
                let mut candidate_buf = Vec::new();
                let candidate_utf32 = Utf32Str::new(candidate, &mut candidate_buf);
                self.matcher
                    .fuzzy_match(candidate_utf32, pattern_utf32)
                    .map(|score| (candidate, score))
            })
            .collect();

        // Highest score first, ties alphabetical
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches
    }
}

/// Up to `limit` known names that look like `pattern`, best first
pub fn suggest<'a>(pattern: &str, candidates: &[&'a str], limit: usize) -> Vec<&'a str> {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .match_candidates(pattern, candidates)
        .into_iter()
        .take(limit)
        .map(|(name, _)| name)
        .collect()
}
