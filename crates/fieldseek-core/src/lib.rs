//! fieldseek-core: ad-hoc keyword relevance ranking over in-memory records.
//!
//! No index is built: each call walks the records it is given, extracts their
//! text fields and ranks them against a free-text query.
//!
//! # Architecture
//!
//! ```text
//! Extractor ──► Scorer ──► Ranker
//!  (fields)     (per record)  (sort + truncate)
//! ```
//!
//! Everything is synchronous and allocates per call. [`normalizer`] holds
//! optional text helpers that the pipeline itself never uses.

pub mod config;
pub mod error;
pub mod extract;
pub mod normalizer;
pub mod rank;
pub mod score;
pub mod search;
pub mod types;

pub use error::{Result, SearchError};
pub use extract::{extract_fields, ExtractOptions, FieldVisitor, Searchable, TextField};
pub use search::{search, SearchOptions, Searcher, DEFAULT_MAX_RESULTS};
pub use types::{FieldFragment, FieldLabel, FragmentKind, Provenance, SearchHit, SearchResult};
