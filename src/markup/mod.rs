//! Markup emission for query-group definitions.
//!
//! Sections are built as an [`Element`] tree by [`emitter`] and serialized
//! with two spaces per nesting level by [`Element::write`].

pub mod element;
pub mod emitter;
pub mod format;

pub use element::{Content, Element};
pub use emitter::{SubstitutionsPolicy, XML_DECLARATION};
pub use format::{escape_markup, IndentWriter, INDENT};
