//! Character-overlap similarity for "maybe you mean" suggestions.
//!
//! The metric counts matching characters by extracting the longest common
//! substring, then recursing into the unmatched prefixes and suffixes on
//! either side of it. Dividing the count by the combined length gives a
//! percentage the dispatcher compares against its suggestion threshold.

/// Counts the characters two strings have in common.
pub fn similar_chars(a: &str, b: &str) -> usize {
    sim(a.as_bytes(), b.as_bytes())
}

/// Similarity as a percentage of the combined string length.
///
/// `100.0` for identical non-empty strings, `0.0` when nothing matches.
pub fn similar_percent(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    similar_chars(a, b) as f64 * 200.0 / total as f64
}

fn sim(a: &[u8], b: &[u8]) -> usize {
    let mut max = 0;
    let mut pos_a = 0;
    let mut pos_b = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut k = 0;
            while i + k < a.len() && j + k < b.len() && a[i + k] == b[j + k] {
                k += 1;
            }
            if k > max {
                max = k;
                pos_a = i;
                pos_b = j;
            }
        }
    }
    if max == 0 {
        return 0;
    }
    max + sim(&a[..pos_a], &b[..pos_b]) + sim(&a[pos_a + max..], &b[pos_b + max..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similar_chars("deploy", "deploy"), 6);
        assert_eq!(similar_percent("deploy", "deploy"), 100.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(similar_chars("abc", "xyz"), 0);
        assert_eq!(similar_percent("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_value() {
        // longest common run "Wor" (3), then "d" from the tails
        assert_eq!(similar_chars("World", "Word"), 4);
        let pct = similar_percent("World", "Word");
        assert!((pct - 800.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_overlap() {
        // only the first 'l' survives; the 'o' falls on opposite sides of it
        assert_eq!(similar_chars("Hello", "World"), 1);
        assert!(similar_percent("Hello", "World") < 45.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similar_chars("", "abc"), 0);
        assert_eq!(similar_percent("", ""), 0.0);
    }

    #[test]
    fn test_prefix_match_scores_high() {
        let pct = similar_percent("unknown", "unknowns");
        assert!(pct > 90.0);
    }
}
