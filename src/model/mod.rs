//! Report-query configuration and canonical query-part types.

pub mod query_part;
pub mod report;

pub use query_part::{value_kind, AliasedExpr, QueryPart, RawQueryPart};
pub use report::{
    ClientConfig, ReportQuery, ServerConfig, SubstitutionElement, TextSubstitution,
};
