//! Test builders: record types and ergonomic constructors for them.
//!
//! The record types cover every field shape the extractor understands: plain
//! and optional text, fixed arrays, `Vec`s, and one level of nesting. They
//! are designed for readability in test assertions, not for production use.

use fieldseek_core::searchable;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub aliases: [String; 2],
}

searchable!(Author { text name, text email, collection aliases });

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Article {
    pub title: String,
    pub body: Option<String>,
    pub tags: Vec<String>,
    pub author: Author,
    /// Not listed in the descriptor, so never searched.
    pub draft_notes: String,
}

searchable!(Article { text title, text body, collection tags, nested author });

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub notes: Vec<String>,
}

searchable!(Contact { text name, text phone, collection notes });

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: &'static str,
    pub description: &'static str,
    pub keywords: Vec<&'static str>,
}

searchable!(Product { text sku, text description, collection keywords });

// ---------------------------------------------------------------------------
// ArticleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Article`] test fixtures.
///
/// # Example
///
/// ```rust
/// let article = ArticleBuilder::new("Rust ownership explained")
///     .body("Borrowing rules in practice")
///     .tag("rust")
///     .author("Ann Lee")
///     .build();
/// ```
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            article: Article {
                title: title.into(),
                ..Article::default()
            },
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.article.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.article.tags.push(tag.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.article.author.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.article.author.email = email.into();
        self
    }

    pub fn aliases(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.article.author.aliases = [first.into(), second.into()];
        self
    }

    pub fn draft_notes(mut self, notes: impl Into<String>) -> Self {
        self.article.draft_notes = notes.into();
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// An article with only a title.
pub fn article(title: &str) -> Article {
    ArticleBuilder::new(title).build()
}

/// An article with a title and tags.
pub fn tagged_article(title: &str, tags: &[&str]) -> Article {
    tags.iter()
        .fold(ArticleBuilder::new(title), |b, t| b.tag(*t))
        .build()
}

pub fn contact(name: &str, phone: &str, notes: &[&str]) -> Contact {
    Contact {
        name: name.to_string(),
        phone: phone.to_string(),
        notes: notes.iter().map(|n| n.to_string()).collect(),
    }
}

pub fn product(sku: &'static str, description: &'static str, keywords: &[&'static str]) -> Product {
    Product {
        sku,
        description,
        keywords: keywords.to_vec(),
    }
}
