use crate::core::normalize::tokenize;

/// Jaccard similarity of the token sets of `a` and `b`, in `[0, 1]`
///
/// Two texts without tokens are identical (1.0); a text without tokens
/// shares nothing with a non-empty one (0.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let set_a = tokenize(a);
    let set_b = tokenize(b);

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_one_empty() {
        assert_eq!(similarity("a b", ""), 0.0);
        assert_eq!(similarity("", "a b"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        assert!((similarity("a b", "b c") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_case_and_spacing_ignored() {
        assert_eq!(similarity("What  ARE your goals", "what are your goals"), 1.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(similarity("apples oranges", "time tokyo"), 0.0);
    }
}
