//! Source rendering for diagnostics.
//!
//! A diagnostic is three lines: a `[file:line:col] Error: message` header,
//! the offending source line, and a caret under the column.

use crate::diagnostics::error::LexError;
use crate::diagnostics::source_map::SourceMap;

/// Append the rendered diagnostic for `offset` (into the original source) to `out`.
pub fn render_diagnostic(
    out: &mut String,
    map: &SourceMap,
    filename: &str,
    offset: usize,
    message: &str,
) {
    let (line, col) = map.locate(offset);

    out.push_str(&format!("[{filename}:{line}:{col}] Error: {message}\n"));
    out.push_str(map.get_line(line));
    out.push('\n');
    out.push_str(&" ".repeat(col - 1));
    out.push_str("^\n");
}

/// Render a pipeline error.
pub fn render_error(map: &SourceMap, filename: &str, error: &LexError) -> String {
    let mut out = String::new();
    render_diagnostic(&mut out, map, filename, error.offset, &error.message());
    out
}
