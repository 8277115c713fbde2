//! End-to-end compilation from a report-query configuration to markup.
//!
//! ```text
//! ReportQuery → Normalize → Project Layout → Build Sections → Markup
//! ```
//!
//! # Example
//!
//! ```ignore
//! use querydef::compile::{compile_value, CompileOptions};
//! use serde_json::json;
//!
//! let config = json!({
//!     "server": {
//!         "columnExpressions": { "TotalValue": "[Value]*100" },
//!         "queries": {
//!             "MainQuery": [null, ["Date=REPORT_DATE"], ["Value=SUM(Amount)"], ""]
//!         }
//!     }
//! });
//!
//! let markup = compile_value(&config, &CompileOptions::default())?;
//! println!("{}", markup);
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::config::CompilerSettings;
use crate::layout::{FieldProjector, LayoutField, DEFAULT_SORT_FIELD_SUFFIX};
use crate::markup::emitter::{self, SubstitutionsPolicy, XML_DECLARATION};
use crate::markup::IndentWriter;
use crate::model::{value_kind, QueryPart, ReportQuery};
use crate::normalize::{self, NormalizeError, PositionalPolicy};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Invalid configuration document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

pub type CompileResult<T> = Result<T, CompileError>;

// ============================================================================
// Options
// ============================================================================

/// Options for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Key aliases ending in this suffix are left out of the layout.
    pub sort_field_suffix: String,

    /// Whether an empty substitution list still renders a section.
    pub text_substitutions: SubstitutionsPolicy,

    /// Treatment of positional query parts with fewer than four elements.
    pub positional: PositionalPolicy,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            sort_field_suffix: DEFAULT_SORT_FIELD_SUFFIX.to_string(),
            text_substitutions: SubstitutionsPolicy::default(),
            positional: PositionalPolicy::default(),
        }
    }
}

impl CompileOptions {
    pub fn with_sort_field_suffix(mut self, suffix: &str) -> Self {
        self.sort_field_suffix = suffix.to_string();
        self
    }

    pub fn with_text_substitutions(mut self, policy: SubstitutionsPolicy) -> Self {
        self.text_substitutions = policy;
        self
    }

    pub fn with_positional(mut self, policy: PositionalPolicy) -> Self {
        self.positional = policy;
        self
    }
}

impl From<&CompilerSettings> for CompileOptions {
    fn from(settings: &CompilerSettings) -> Self {
        Self {
            sort_field_suffix: settings.sort_field_suffix.clone(),
            text_substitutions: settings.text_substitutions,
            positional: settings.positional,
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of compiling a report query.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The generated document.
    pub markup: String,

    /// Normalized query parts, in declaration order.
    pub queries: IndexMap<String, QueryPart>,

    /// The projected layout fields.
    pub layout: Vec<LayoutField>,
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile a report query to markup.
pub fn compile(config: &ReportQuery, options: &CompileOptions) -> CompileResult<String> {
    compile_report(config, options).map(|output| output.markup)
}

/// Compile a loosely-typed configuration value to markup.
///
/// Fails with [`CompileError::InvalidDocument`] when the value is not a
/// report-query document.
pub fn compile_value(
    value: &serde_json::Value,
    options: &CompileOptions,
) -> CompileResult<String> {
    if !value.is_object() {
        return Err(CompileError::InvalidDocument(serde::de::Error::custom(
            format!("expected an object, found {}", value_kind(value)),
        )));
    }
    let config = ReportQuery::deserialize(value)?;
    compile(&config, options)
}

/// Compile a report query, keeping the intermediate model.
pub fn compile_report(config: &ReportQuery, options: &CompileOptions) -> CompileResult<CompileOutput> {
    let queries = normalize_config(config, options)?;

    let empty = IndexMap::new();
    let column_expressions = config.column_expressions().unwrap_or(&empty);

    let layout = FieldProjector::new()
        .with_sort_field_suffix(&options.sort_field_suffix)
        .project(&queries, column_expressions);

    let mut root = emitter::root_element()
        .child(emitter::column_expressions(column_expressions))
        .child(emitter::layout(&layout))
        .child(emitter::query_definitions(&queries));

    match emitter::text_substitutions(config.text_substitutions(), options.text_substitutions) {
        Some(section) => root = root.child(section),
        None => debug!("omitting empty text substitutions section"),
    }

    let mut w = IndentWriter::new();
    w.write_line(XML_DECLARATION);
    root.write(&mut w);

    Ok(CompileOutput {
        markup: w.into_string(),
        queries,
        layout,
    })
}

/// Normalize only the queries of a report query.
pub fn normalize_config(
    config: &ReportQuery,
    options: &CompileOptions,
) -> CompileResult<IndexMap<String, QueryPart>> {
    match &config.server {
        Some(server) => Ok(normalize::normalize_queries(
            &server.queries,
            options.positional,
        )?),
        None => Ok(IndexMap::new()),
    }
}

// ============================================================================
// Tests
// ============================================================================
