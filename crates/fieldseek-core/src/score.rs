//! Matcher / scorer: turns one record's fragment stream into a score and
//! provenance.
//!
//! Two rules run on every non-header fragment and their contributions add:
//!
//! | Rule | Fires when | Adds | Provenance |
//! |------|-----------|------|------------|
//! | whole query | fragment contains the full normalized query | `1.0` per fragment | always appended |
//! | keyword | query has `K > 1` keywords; per (token, keyword) pair where the token contains the keyword | `1/K` per pair | appended only if the label is not recorded yet |
//!
//! The keyword rule multi-counts on purpose: a keyword found in three tokens
//! adds `3/K`, and one token containing two keywords adds `2/K`. The two rules
//! also deduplicate provenance differently; both behaviours are part of the
//! ranking contract.

use crate::error::{Result, SearchError};
use crate::types::{FieldFragment, FieldLabel, FragmentKind, Provenance};
use std::borrow::Cow;

/// Score added each time a fragment contains the whole query.
pub const WHOLE_QUERY_SCORE: f32 = 1.0;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A normalized query split into whitespace-delimited keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    normalized: String,
    keywords: Vec<String>,
    case_sensitive: bool,
}

impl Query {
    /// Normalize `raw` (case-folded unless `case_sensitive`) and split it
    /// into keywords.
    ///
    /// Fails with [`SearchError::InvalidArgument`] when `raw` has no
    /// keywords at all.
    pub fn parse(raw: &str, case_sensitive: bool) -> Result<Self> {
        let normalized = fold(raw, case_sensitive).into_owned();
        let keywords: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(SearchError::invalid("query must contain at least one keyword"));
        }
        Ok(Self {
            normalized,
            keywords,
            case_sensitive,
        })
    }

    /// The full query after case folding, as matched by the whole-query rule.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `1/K` for a query of `K` keywords.
    pub fn keyword_weight(&self) -> f32 {
        1.0 / self.keywords.len() as f32
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn has_multiple_keywords(&self) -> bool {
        self.keywords.len() > 1
    }
}

fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Per-record score and provenance collected during one search call.
#[derive(Debug)]
pub struct Accumulator<'a, R: ?Sized> {
    /// Position of the record in the searched slice; the record's identity.
    pub index: usize,
    pub record: &'a R,
    pub provenance: Vec<Provenance>,
    pub score: f32,
}

impl<'a, R: ?Sized> Accumulator<'a, R> {
    pub fn new(index: usize, record: &'a R) -> Self {
        Self {
            index,
            record,
            provenance: Vec::new(),
            score: 0.0,
        }
    }

    /// Whether any provenance entry was recorded under `label`.
    pub fn has_label(&self, label: &FieldLabel) -> bool {
        self.provenance.iter().any(|p| &p.label == label)
    }

    /// `true` once anything matched. Unmatched accumulators are never ranked.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }

    fn record_match(&mut self, label: &FieldLabel, text: &str) {
        self.provenance.push(Provenance {
            label: label.clone(),
            text: text.to_string(),
        });
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Apply both matching rules to every fragment of one record.
///
/// The label a match is attributed to is the one most recently opened in the
/// stream (see [`FragmentKind::opens_field`]), threaded through the scan.
pub fn score_fragments<R: ?Sized>(query: &Query, fragments: &[FieldFragment], acc: &mut Accumulator<'_, R>) {
    let weight = query.keyword_weight();
    let mut current_label: Option<&FieldLabel> = None;

    for fragment in fragments {
        if fragment.kind.opens_field() {
            current_label = Some(&fragment.label);
        }
        if fragment.kind == FragmentKind::Header {
            continue;
        }
        let label = current_label.unwrap_or(&fragment.label);
        let contents = fold(&fragment.text, query.case_sensitive);

        if contents.contains(query.normalized.as_str()) {
            acc.score += WHOLE_QUERY_SCORE;
            acc.record_match(label, &fragment.text);
        }

        if query.has_multiple_keywords() {
            for token in contents.split_whitespace() {
                for keyword in &query.keywords {
                    if !token.contains(keyword.as_str()) {
                        continue;
                    }
                    if !acc.has_label(label) {
                        acc.record_match(label, &fragment.text);
                    }
                    acc.score += weight;
                }
            }
        }
    }
}
