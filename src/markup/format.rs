//! Markup formatting utilities.
//!
//! Provides value escaping and indentation management.

/// Escape a string for use as an attribute value or text node.
///
/// Ampersands go first so already-produced entities are not escaped twice.
#[must_use]
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

/// One level of indentation.
pub const INDENT: &str = "  ";

/// A line writer that tracks nesting depth.
#[derive(Default)]
pub struct IndentWriter {
    buffer: String,
    current_indent: usize,
}

impl IndentWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self) {
        self.current_indent += 1;
    }

    pub fn dedent(&mut self) {
        self.current_indent = self.current_indent.saturating_sub(1);
    }

    /// Write a complete line at the current depth.
    pub fn write_line(&mut self, s: &str) {
        for _ in 0..self.current_indent {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}
