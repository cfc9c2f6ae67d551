//! Render: human-readable and JSON output for search results and raw
//! extracted fields.

use fieldseek_core::config::OutputConfig;
use fieldseek_core::normalizer::unformat_punctuation;
use fieldseek_core::{FieldFragment, FragmentKind, Provenance, SearchResult};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

/// What the text renderer shows for each hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_provenance: bool,
    pub show_scores: bool,
    /// Pass matched text through [`unformat_punctuation`] before display.
    pub tidy: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            show_provenance: config.show_provenance,
            show_scores: config.show_scores,
            tidy: config.tidy_punctuation,
        }
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// One block per ranked record: a `rank. record index` header followed by
/// the `<label> text` pairs it matched on.
pub fn render_text<R: ?Sized>(result: &SearchResult<'_, R>, options: &RenderOptions) -> String {
    if result.is_empty() {
        return "no matches\n".to_string();
    }

    let mut out = String::new();
    for hit in result.hits() {
        let _ = write!(out, "{}. record {}", hit.rank + 1, hit.index);
        if options.show_scores {
            let _ = write!(out, " (score {:.2})", hit.score);
        }
        out.push('\n');
        if options.show_provenance {
            for entry in hit.provenance {
                let _ = writeln!(out, "   {} {}", entry.label, display_text(&entry.text, options));
            }
        }
    }
    out
}

fn display_text<'t>(text: &'t str, options: &RenderOptions) -> Cow<'t, str> {
    if options.tidy {
        Cow::Owned(unformat_punctuation(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Dump the fragments extracted from one record, marking collection headers
/// and indenting their elements.
pub fn render_fragments(index: usize, fragments: &[FieldFragment]) -> String {
    let mut out = format!("record {index}\n");
    if fragments.is_empty() {
        out.push_str("  (no fields)\n");
        return out;
    }
    for fragment in fragments {
        let _ = match fragment.kind {
            FragmentKind::Text => writeln!(out, "  {} {:?}", fragment.label, fragment.text),
            FragmentKind::Header => writeln!(out, "  {}", fragment.label),
            FragmentKind::Item => writeln!(out, "    {:?}", fragment.text),
        };
    }
    out
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'r, R: ?Sized> {
    query: &'r str,
    results: Vec<JsonHit<'r, R>>,
}

#[derive(Serialize)]
struct JsonHit<'r, R: ?Sized> {
    rank: usize,
    index: usize,
    score: f32,
    record: &'r R,
    matches: &'r [Provenance],
}

/// Pretty-printed JSON report with every hit's record, score and matches.
pub fn render_json<R: Serialize + ?Sized>(query: &str, result: &SearchResult<'_, R>) -> serde_json::Result<String> {
    let report = JsonReport {
        query,
        results: result
            .hits()
            .map(|hit| JsonHit {
                rank: hit.rank + 1,
                index: hit.index,
                score: hit.score,
                record: hit.record,
                matches: hit.provenance,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
