//! # querydef
//!
//! Compiles report-query configurations into query-group definition markup
//! for a pivot-reporting engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          ReportQuery (parsed configuration)              │
//! │  (column expressions, raw query parts, substitutions)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [normalize]
//! ┌─────────────────────────────────────────────────────────┐
//! │              QueryPart (canonical model)                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [layout + markup, rewrite on keys]
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Element tree (sections)                  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │              QueryGroupDefinition markup                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Compilation is a pure function of its input: no I/O, no shared state.

pub mod compile;
pub mod config;
pub mod layout;
pub mod markup;
pub mod model;
pub mod normalize;
pub mod rewrite;

pub use compile::{
    compile, compile_report, compile_value, CompileError, CompileOptions, CompileOutput,
    CompileResult,
};
pub use layout::{FieldKind, FieldProjector, LayoutField};
pub use model::{AliasedExpr, QueryPart, ReportQuery};
pub use rewrite::rewrite_key_expression;
