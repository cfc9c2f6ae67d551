//! Static record corpora used across harnesses.

use super::builders::*;

/// The two-record example used throughout the docs: a greeting with tags and
/// a farewell.
pub const GREETINGS_JSON: &str = r#"[
    {"title": "Hello World", "tags": ["alpha", "beta"]},
    {"title": "Goodbye", "tags": ["gamma"]}
]"#;

/// JSON Lines records with mixed shapes, including values the extractor must
/// skip (numbers, mixed arrays, non-objects) and a third nesting level.
pub const MIXED_JSONL: &str = r#"{"name": "Ada Lovelace", "role": "analyst", "skills": ["math", "poetry"], "born": 1815}
{"title": "Analytical Engine", "parts": ["mill", 42], "meta": {"inventor": "Babbage", "deep": {"note": "analytical"}}}
"just a string"
{"name": "Grace Hopper", "aliases": ["Amazing Grace"], "meta": {"rank": "Rear Admiral", "langs": ["COBOL"]}}"#;

/// A small library of articles with varying overlap against "rust borrow".
pub fn library() -> Vec<Article> {
    vec![
        ArticleBuilder::new("Cooking with cast iron")
            .body("Seasoning and care")
            .tag("kitchen")
            .author("Sam Park")
            .build(),
        ArticleBuilder::new("Rust borrow checker tour")
            .body("How the borrow checker reasons about rust lifetimes")
            .tag("rust")
            .tag("borrow")
            .author("Ann Lee")
            .build(),
        ArticleBuilder::new("Rust in embedded systems")
            .tag("rust")
            .author("Ravi Shah")
            .build(),
        ArticleBuilder::new("Library etiquette")
            .body("Please borrow books quietly")
            .author("Mo Diaz")
            .build(),
    ]
}

/// A corpus of `n` articles where every tenth title mentions "timeout".
pub fn build_corpus(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            let title = if i % 10 == 0 {
                format!("request {i} failed with timeout")
            } else {
                format!("request {i} completed")
            };
            ArticleBuilder::new(title)
                .body(format!("handled by worker-{}", i % 3))
                .tag(if i % 2 == 0 { "even" } else { "odd" })
                .author(format!("author {}", i % 7))
                .build()
        })
        .collect()
}
