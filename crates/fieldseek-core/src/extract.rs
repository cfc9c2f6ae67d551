//! Field extractor: flattens one record into an ordered [`FieldFragment`] stream.
//!
//! Records describe their own text-bearing fields through the [`Searchable`]
//! capability trait instead of being introspected at runtime. A record walks
//! its fields in declaration order and reports each one to a [`FieldVisitor`]:
//!
//! - [`FieldVisitor::text`] for a text field (empty values are dropped),
//! - [`FieldVisitor::collection`] for an ordered collection of text,
//! - [`FieldVisitor::nested`] for a structured field whose own fields should
//!   be searched one level down.
//!
//! Nesting is capped by the visitor, not by the record: a nested visit hands
//! the inner value a visitor that ignores further `nested` calls, so no record
//! can make the extractor descend to a third level. Anything a record does not
//! report is never extracted, which is how non-public state stays out of the
//! results.
//!
//! Implement [`Searchable`] by hand, or declaratively with [`searchable!`].
//! `serde_json::Value` implements it out of the box.

use crate::types::{FieldFragment, FieldLabel};
use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Controls which kinds of fields the extractor emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Emit ordered text collections (header plus one fragment per element).
    pub include_collections: bool,
    /// Descend one level into nested structured fields.
    pub include_nested: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_collections: true,
            include_nested: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// A record whose text-bearing fields can be extracted and searched.
pub trait Searchable {
    /// Report every searchable field, in declaration order, to `visitor`.
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>);
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        (**self).visit_fields(visitor)
    }
}

impl<T: Searchable + ?Sized> Searchable for Box<T> {
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        (**self).visit_fields(visitor)
    }
}

impl<T: Searchable + ?Sized> Searchable for std::rc::Rc<T> {
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        (**self).visit_fields(visitor)
    }
}

impl<T: Searchable + ?Sized> Searchable for std::sync::Arc<T> {
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        (**self).visit_fields(visitor)
    }
}

/// A single text field value. `None` means "no text" and is skipped just like
/// an empty string.
pub trait TextField {
    fn as_text(&self) -> Option<&str>;
}

impl TextField for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextField for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextField for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextField + ?Sized> TextField for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextField> TextField for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(TextField::as_text)
    }
}

// ---------------------------------------------------------------------------
// Visitor
// ---------------------------------------------------------------------------

/// Collects the fragments a [`Searchable`] record reports.
///
/// Created by [`extract_fields`]; records only ever see it through
/// [`Searchable::visit_fields`].
pub struct FieldVisitor<'v> {
    options: ExtractOptions,
    /// Name of the enclosing field while visiting one level down.
    parent: Option<&'v str>,
    fragments: &'v mut Vec<FieldFragment>,
}

impl<'v> FieldVisitor<'v> {
    fn root(options: ExtractOptions, fragments: &'v mut Vec<FieldFragment>) -> Self {
        Self {
            options,
            parent: None,
            fragments,
        }
    }

    /// Options in effect for this extraction.
    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// `true` while visiting the fields of a nested value.
    pub fn is_nested(&self) -> bool {
        self.parent.is_some()
    }

    /// Report a text field. Empty or absent values emit nothing.
    pub fn text<T: TextField + ?Sized>(&mut self, name: &str, value: &T) {
        let Some(value) = value.as_text() else {
            return;
        };
        if value.is_empty() {
            return;
        }
        self.fragments
            .push(FieldFragment::text(FieldLabel::field(self.parent, name), value));
    }

    /// Report an ordered collection of text.
    ///
    /// Emits a `<name[count]>` header followed by every element in order,
    /// empty elements included. Skipped entirely when collections are
    /// disabled.
    pub fn collection<I>(&mut self, name: &str, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if !self.options.include_collections {
            return;
        }
        let items: Vec<I::Item> = items.into_iter().collect();
        let label = FieldLabel::collection(self.parent, name, items.len());
        self.fragments.reserve(items.len() + 1);
        self.fragments.push(FieldFragment::header(label.clone()));
        for item in &items {
            let text: &str = item.as_ref();
            self.fragments.push(FieldFragment::item(label.clone(), text));
        }
    }

    /// Report a structured field whose own text fields should be extracted
    /// under `<name.inner>` labels.
    ///
    /// Ignored when nesting is disabled and when already one level down.
    pub fn nested<S: Searchable + ?Sized>(&mut self, name: &str, value: &S) {
        if !self.options.include_nested || self.is_nested() {
            return;
        }
        let mut inner = FieldVisitor {
            options: self.options,
            parent: Some(name),
            fragments: &mut *self.fragments,
        };
        value.visit_fields(&mut inner);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Extract the labeled text fragments of one record, in field order.
pub fn extract_fields<R: Searchable + ?Sized>(record: &R, options: ExtractOptions) -> Vec<FieldFragment> {
    let mut fragments = Vec::new();
    record.visit_fields(&mut FieldVisitor::root(options, &mut fragments));
    fragments
}

// ---------------------------------------------------------------------------
// Declarative descriptor
// ---------------------------------------------------------------------------

/// Implement [`Searchable`] for a struct by listing its searchable fields in
/// declaration order, each tagged `text`, `collection` or `nested`.
///
/// ```rust
/// use fieldseek_core::searchable;
///
/// struct Meta { author: String }
/// searchable!(Meta { text author });
///
/// struct Article { title: String, tags: Vec<String>, meta: Meta, secret: String }
/// searchable!(Article { text title, collection tags, nested meta });
/// ```
///
/// Fields that are not listed (`secret` above) are never extracted.
#[macro_export]
macro_rules! searchable {
    (@visit text, $visitor:ident, $name:expr, $value:expr) => {
        $visitor.text($name, $value)
    };
    (@visit collection, $visitor:ident, $name:expr, $value:expr) => {
        $visitor.collection($name, $value)
    };
    (@visit nested, $visitor:ident, $name:expr, $value:expr) => {
        $visitor.nested($name, $value)
    };
    ($ty:ty { $($kind:ident $field:ident),* $(,)? }) => {
        impl $crate::Searchable for $ty {
            fn visit_fields(&self, visitor: &mut $crate::FieldVisitor<'_>) {
                $( $crate::searchable!(@visit $kind, visitor, stringify!($field), &self.$field); )*
            }
        }
    };
}

// ---------------------------------------------------------------------------
// JSON records
// ---------------------------------------------------------------------------

/// Objects expose string members as text fields, all-string arrays as
/// collections and object members as nested fields, in document order.
/// Everything else, including arrays mixing strings with other values, is
/// skipped.
impl Searchable for serde_json::Value {
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        use serde_json::Value;

        let Value::Object(members) = self else {
            tracing::trace!("json record is not an object, no fields to extract");
            return;
        };
        for (name, value) in members {
            match value {
                Value::String(text) => visitor.text(name, text.as_str()),
                Value::Array(items) => {
                    match items.iter().map(Value::as_str).collect::<Option<Vec<_>>>() {
                        Some(texts) => visitor.collection(name, texts),
                        None => tracing::trace!(field = %name, "skipping array with non-text elements"),
                    }
                }
                Value::Object(_) => visitor.nested(name, value),
                Value::Null | Value::Bool(_) | Value::Number(_) => {}
            }
        }
    }
}
