use std::collections::HashSet;

/// Generic naming words that carry no identity on their own.
const STOPWORDS: [&str; 7] = [
    "university",
    "college",
    "institute",
    "of",
    "the",
    "at",
    "for",
];

/// Lower-cases a name, strips everything but ASCII alphanumerics and
/// whitespace, and collapses runs of whitespace to single spaces.
pub fn scrub_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The scrubbed name with stopwords removed. Used as the token-overlap
/// input and as the exact dedup key for canonical names.
pub fn normalize_for_similarity(name: &str) -> String {
    scrub_name(name)
        .split(' ')
        .filter(|token| !STOPWORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared-token ratio over the smaller token set, duplicates collapsed.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let a_tokens: HashSet<&str> = a.split(' ').collect();
    let b_tokens: HashSet<&str> = b.split(' ').collect();
    let shared = a_tokens.intersection(&b_tokens).count();

    shared as f64 / a_tokens.len().min(b_tokens.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_drops_punctuation_and_collapses_spaces() {
        assert_eq!(
            scrub_name("St. Mary's   College (Main)"),
            "st marys college main"
        );
    }

    #[test]
    fn normalize_removes_stopwords() {
        assert_eq!(
            normalize_for_similarity("The University of Springfield"),
            "springfield"
        );
        assert_eq!(
            normalize_for_similarity("Springfield Institute FOR Design"),
            "springfield design"
        );
    }

    #[test]
    fn normalize_keeps_digits() {
        assert_eq!(normalize_for_similarity("Area 51 College"), "area 51");
    }

    #[test]
    fn token_overlap_uses_smaller_set() {
        // {springfield} vs {springfield, shelbyville}
        assert_eq!(token_overlap("springfield", "springfield shelbyville"), 1.0);
        // {boston, north} vs {boston, south}
        assert_eq!(token_overlap("boston north", "boston south"), 0.5);
    }

    #[test]
    fn token_overlap_collapses_duplicate_tokens() {
        assert_eq!(token_overlap("a a b", "a b"), 1.0);
    }

    #[test]
    fn disjoint_names_score_zero() {
        assert_eq!(token_overlap("alpha", "beta"), 0.0);
    }
}
