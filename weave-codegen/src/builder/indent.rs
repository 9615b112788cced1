//! Indentation for generated code.

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Prefix `text` with the indentation for `depth`.
///
/// Every generated line goes through here. Empty text stays empty so blank
/// lines never carry trailing whitespace.
pub fn indent(depth: usize, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut line = String::with_capacity(depth * INDENT_WIDTH + text.len());
    for _ in 0..depth * INDENT_WIDTH {
        line.push(' ');
    }
    line.push_str(text);
    line
}
