//! Domain-specific assertion macros for fieldseek harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ranking invariant was violated.

use fieldseek_core::SearchResult;

// ---------------------------------------------------------------------------
// Ranking assertions
// ---------------------------------------------------------------------------

/// Assert the ranked record positions (indices into the searched slice).
///
/// ```rust
/// assert_ranked!(result, [1, 2]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($result:expr, [$($index:expr),* $(,)?]) => {{
        let expected: Vec<usize> = vec![$($index),*];
        pretty_assertions::assert_eq!(
            $result.indices, expected,
            "assert_ranked! failed: scores were {:?}",
            $result.scores
        );
    }};
}

/// Assert that the record at ranked position `$rank` matched on `$label`
/// with `$text`.
///
/// ```rust
/// assert_provenance_contains!(result, 0, "<title>", "Hello World");
/// ```
#[macro_export]
macro_rules! assert_provenance_contains {
    ($result:expr, $rank:expr, $label:expr, $text:expr) => {{
        let provenance = &$result.provenance[$rank];
        let label: &str = $label;
        let text: &str = $text;
        if !provenance
            .iter()
            .any(|p| p.label.as_str() == label && p.text == text)
        {
            panic!(
                "assert_provenance_contains! failed: ({:?}, {:?}) not found at rank {}.\n  provenance: {:?}",
                label, text, $rank, provenance
            );
        }
    }};
}

/// Assert a floating point score to within `1e-5`.
#[macro_export]
macro_rules! assert_score {
    ($actual:expr, $expected:expr) => {{
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        if (actual - expected).abs() > 1e-5 {
            panic!(
                "assert_score! failed:\n  expected: {}\n  actual:   {}",
                expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

/// Every output sequence has the same length and scores never increase.
pub fn assert_well_formed<R: ?Sized>(result: &SearchResult<'_, R>) {
    let n = result.records.len();
    assert_eq!(result.indices.len(), n, "indices not aligned with records");
    assert_eq!(result.provenance.len(), n, "provenance not aligned with records");
    assert_eq!(result.scores.len(), n, "scores not aligned with records");
    for pair in result.scores.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "scores must be non-increasing: {:?}",
            result.scores
        );
    }
    for (score, provenance) in result.scores.iter().zip(&result.provenance) {
        assert!(*score > 0.0, "ranked record with non-positive score {score}");
        assert!(!provenance.is_empty(), "ranked record without provenance");
    }
}
