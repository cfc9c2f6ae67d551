//! Core types for fieldseek-core.
//!
//! This module defines the data shared by the extractor, the scorer and the
//! ranker: the synthetic [`FieldLabel`] markers, the [`FieldFragment`] stream
//! produced by extraction, the [`Provenance`] pairs explaining a match, and
//! the index-aligned [`SearchResult`].

use serde::Serialize;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// A synthetic field marker such as `<title>`, `<tags[3]>` or `<meta.author>`.
///
/// Labels are compared by their rendered form, which is what provenance
/// deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldLabel(String);

impl FieldLabel {
    /// Marker for a text field: `<name>`, or `<parent.name>` when nested.
    pub fn field(parent: Option<&str>, name: &str) -> Self {
        Self(format!("<{}>", Self::path(parent, name)))
    }

    /// Marker for an ordered text collection of `count` elements:
    /// `<name[count]>`, or `<parent.name[count]>` when nested.
    pub fn collection(parent: Option<&str>, name: &str, count: usize) -> Self {
        Self(format!("<{}[{count}]>", Self::path(parent, name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn path(parent: Option<&str>, name: &str) -> String {
        match parent {
            Some(parent) => format!("{parent}.{name}"),
            None => name.to_string(),
        }
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Role of a fragment within the flattened extraction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// The value of a text field. Opens its own field.
    Text,
    /// The `<name[count]>` marker preceding a collection's elements. Carries
    /// empty text and never scores.
    Header,
    /// One element of the collection opened by the preceding header.
    Item,
}

impl FragmentKind {
    /// Whether this fragment starts a new field, i.e. updates the label that
    /// subsequent matches are attributed to.
    pub fn opens_field(self) -> bool {
        matches!(self, FragmentKind::Text | FragmentKind::Header)
    }
}

/// One labeled piece of extractable text from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFragment {
    pub label: FieldLabel,
    pub text: String,
    pub kind: FragmentKind,
}

impl FieldFragment {
    pub fn text(label: FieldLabel, text: impl Into<String>) -> Self {
        Self { label, text: text.into(), kind: FragmentKind::Text }
    }

    pub fn header(label: FieldLabel) -> Self {
        Self { label, text: String::new(), kind: FragmentKind::Header }
    }

    pub fn item(label: FieldLabel, text: impl Into<String>) -> Self {
        Self { label, text: text.into(), kind: FragmentKind::Item }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A `(label, text)` pair explaining why a record matched. `text` is the
/// fragment exactly as extracted, before any case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provenance {
    pub label: FieldLabel,
    pub text: String,
}

/// Ranked output of one search call.
///
/// All sequences are index-aligned: `records[i]` was found at position
/// `indices[i]` of the searched slice, matched because of `provenance[i]`,
/// and scored `scores[i]`. Scores are non-increasing by index.
#[derive(Debug)]
pub struct SearchResult<'a, R: ?Sized> {
    pub records: Vec<&'a R>,
    pub indices: Vec<usize>,
    pub provenance: Vec<Vec<Provenance>>,
    pub scores: Vec<f32>,
}

impl<'a, R: ?Sized> SearchResult<'a, R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            indices: Vec::new(),
            provenance: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the aligned sequences one ranked hit at a time.
    pub fn hits(&self) -> impl Iterator<Item = SearchHit<'_, 'a, R>> + '_ {
        self.records
            .iter()
            .zip(&self.indices)
            .zip(&self.provenance)
            .zip(&self.scores)
            .enumerate()
            .map(|(rank, (((record, index), provenance), score))| SearchHit {
                rank,
                index: *index,
                record: *record,
                provenance,
                score: *score,
            })
    }
}

// Manual impl: a derive would require `R: Clone`.
impl<R: ?Sized> Clone for SearchResult<'_, R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            indices: self.indices.clone(),
            provenance: self.provenance.clone(),
            scores: self.scores.clone(),
        }
    }
}

/// A borrowed view of one row of a [`SearchResult`].
#[derive(Debug)]
pub struct SearchHit<'r, 'a, R: ?Sized> {
    /// Zero-based position in the ranking.
    pub rank: usize,
    /// Position of the record in the searched slice.
    pub index: usize,
    pub record: &'a R,
    pub provenance: &'r [Provenance],
    pub score: f32,
}
