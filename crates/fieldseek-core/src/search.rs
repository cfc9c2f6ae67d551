//! Search layer: the single synchronous entry point tying extraction,
//! scoring and ranking together.
//!
//! ```text
//! records ──► extract_fields ──► score_fragments ──► rank ──► SearchResult
//!             (per record)       (per record)        (all)
//! ```
//!
//! Every call builds its own accumulators; nothing is shared between calls.
//! A [`Searcher`] can hold a caller-owned default record list that is used
//! whenever a call passes no records of its own.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::extract::{extract_fields, ExtractOptions, Searchable};
use crate::rank::rank;
use crate::score::{score_fragments, Accumulator, Query};
use crate::types::SearchResult;

/// Result cap used when none is configured.
pub const DEFAULT_MAX_RESULTS: usize = 50;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match case exactly instead of case-folding query and text.
    pub case_sensitive: bool,
    /// Maximum number of ranked records returned. Zero yields an empty result.
    pub max_results: usize,
    pub extract: ExtractOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_results: DEFAULT_MAX_RESULTS,
            extract: ExtractOptions::default(),
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
            max_results: config.max_results,
            extract: ExtractOptions {
                include_collections: config.include_collections,
                include_nested: config.include_nested,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Rank `records` against `query`.
///
/// Fails with [`SearchError::InvalidArgument`] if the query has no keywords.
/// An empty slice yields an empty result.
pub fn search<'a, R: Searchable>(query: &str, records: &'a [R], options: &SearchOptions) -> Result<SearchResult<'a, R>> {
    let query = Query::parse(query, options.case_sensitive)?;
    tracing::debug!(
        query = %query.normalized(),
        keywords = query.keywords().len(),
        records = records.len(),
        max_results = options.max_results,
        case_sensitive = options.case_sensitive,
        "search: start"
    );

    let mut accumulators = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let fragments = extract_fields(record, options.extract);
        let mut acc = Accumulator::new(index, record);
        score_fragments(&query, &fragments, &mut acc);
        tracing::trace!(index, fragments = fragments.len(), score = acc.score, "search: record scored");
        if acc.is_match() {
            accumulators.push(acc);
        }
    }

    let matched = accumulators.len();
    let result = rank(accumulators, options.max_results);
    tracing::debug!(matched, returned = result.len(), "search: done");
    Ok(result)
}

/// A reusable search front end holding options and an optional default
/// record list.
///
/// The default list is borrowed, so the caller keeps ownership and the
/// borrow checker rules out mutating it while a searcher can still read it.
#[derive(Debug)]
pub struct Searcher<'a, R> {
    options: SearchOptions,
    default_records: Option<&'a [R]>,
}

// Manual impl: a derive would require `R: Clone`.
impl<R> Clone for Searcher<'_, R> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            default_records: self.default_records,
        }
    }
}

impl<'a, R: Searchable> Searcher<'a, R> {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            default_records: None,
        }
    }

    /// Use `records` whenever [`Searcher::search`] is called without records.
    pub fn with_default_records(mut self, records: &'a [R]) -> Self {
        self.default_records = Some(records);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SearchOptions {
        &mut self.options
    }

    /// Search `records`, or the default list when `records` is `None`.
    ///
    /// Fails with [`SearchError::InvalidArgument`] when neither is available.
    pub fn search(&self, query: &str, records: Option<&'a [R]>) -> Result<SearchResult<'a, R>> {
        let records = records
            .or(self.default_records)
            .ok_or_else(|| SearchError::invalid("no records given and no default records configured"))?;
        search(query, records, &self.options)
    }
}
