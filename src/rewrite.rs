//! Key-expression rewriting.

use std::borrow::Cow;

const TENOR_PATTERN: &str = "DateToTenor(REPORT_DATE";
const TENOR_REPLACEMENT: &str = "DateToTenor(date(REPORT_DATE)";

/// Wrap the report date passed to `DateToTenor` in a `date(...)` cast.
///
/// A literal, case-sensitive substitution of every occurrence. Borrows the
/// input unchanged when the pattern is absent.
pub fn rewrite_key_expression(expression: &str) -> Cow<'_, str> {
    if expression.contains(TENOR_PATTERN) {
        Cow::Owned(expression.replace(TENOR_PATTERN, TENOR_REPLACEMENT))
    } else {
        Cow::Borrowed(expression)
    }
}
