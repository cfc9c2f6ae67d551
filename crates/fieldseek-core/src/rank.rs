//! Ranker: orders matched accumulators and splits them into the aligned
//! [`SearchResult`] sequences.

use crate::score::Accumulator;
use crate::types::SearchResult;

/// Sort `accumulators` by score, highest first, and keep the top
/// `max_results`. Accumulators without a match are dropped.
///
/// The sort is stable, so tied records stay in discovery order. Callers
/// should not rely on tie order.
pub fn rank<'a, R: ?Sized>(accumulators: Vec<Accumulator<'a, R>>, max_results: usize) -> SearchResult<'a, R> {
    if max_results == 0 {
        return SearchResult::empty();
    }

    let mut ranked: Vec<_> = accumulators.into_iter().filter(Accumulator::is_match).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(max_results);

    let mut result = SearchResult {
        records: Vec::with_capacity(ranked.len()),
        indices: Vec::with_capacity(ranked.len()),
        provenance: Vec::with_capacity(ranked.len()),
        scores: Vec::with_capacity(ranked.len()),
    };
    for acc in ranked {
        result.records.push(acc.record);
        result.indices.push(acc.index);
        result.provenance.push(acc.provenance);
        result.scores.push(acc.score);
    }
    result
}
