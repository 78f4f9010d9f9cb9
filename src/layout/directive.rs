//! The inline spacing directive.
//!
//! A source line beginning with `~` and a single decimal digit asks for that
//! many blank lines ahead of the line's content, e.g. `~3Chapter Two`. This is
//! the only markup the layout engine understands and all of its parsing lives
//! here.

use crate::error::LayoutError;

/// Marks the start of a spacing directive
pub const DIRECTIVE_MARKER: char = '~';

/// A parsed `~d` prefix
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpacingDirective {
    pub blank_lines: u8,
}

/// Split a raw source line into its optional directive and the remaining
/// content. `line_number` is 1-based and only used for error reporting.
///
/// A line starting with `~` must be followed by an ASCII digit.
pub fn parse_directive(
    line: &str,
    line_number: usize,
) -> Result<(Option<SpacingDirective>, &str), LayoutError> {
    let Some(rest) = line.strip_prefix(DIRECTIVE_MARKER) else {
        return Ok((None, line));
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(digit @ '0'..='9') => Ok((
            Some(SpacingDirective {
                blank_lines: digit as u8 - b'0',
            }),
            chars.as_str(),
        )),
        found => Err(LayoutError::MalformedDirective {
            line: line_number,
            found,
        }),
    }
}
