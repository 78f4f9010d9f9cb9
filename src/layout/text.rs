use crate::error::LayoutError;
use crate::font::FontSpec;
use crate::layout::{parse_directive, wrap, LineMetrics};
use crate::metrics::MetricsTable;

/// One unit of laid out output. Each command occupies exactly one line height
/// when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Vertical space with nothing drawn
    BlankLine,
    /// A single wrapped line of text, drawn at the left margin
    TextLine(String),
}

/// Lay out `text` with the standard metrics table.
/// See [layout_with_metrics].
pub fn layout(text: &str, font: &FontSpec) -> Result<Vec<RenderCommand>, LayoutError> {
    layout_with_metrics(text, font, &MetricsTable::default())
}

/// Lays out text into an ordered list of render commands.
///
/// The text is split on `\n`, keeping empty lines. For every source line:
///
/// 1. a leading `~d` directive emits `d` blank lines and is stripped,
/// 2. the remainder is word-wrapped to the column budget of `font`,
/// 3. a line that wraps to nothing (empty or whitespace only) becomes one blank
///    line, otherwise every wrapped line becomes a text line.
///
/// Fails if the font is unknown to `metrics`, if the font leaves room for less
/// than one column, or on a malformed directive. Nothing is returned on failure.
pub fn layout_with_metrics(
    text: &str,
    font: &FontSpec,
    metrics: &MetricsTable,
) -> Result<Vec<RenderCommand>, LayoutError> {
    let LineMetrics { column_budget, .. } = LineMetrics::new(font, metrics)?;

    let mut commands: Vec<RenderCommand> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let (directive, content) = parse_directive(line, index + 1)?;
        if let Some(directive) = directive {
            commands.extend(
                std::iter::repeat(RenderCommand::BlankLine).take(directive.blank_lines as usize),
            );
        }

        let wrapped = wrap(content, column_budget);
        if wrapped.is_empty() {
            commands.push(RenderCommand::BlankLine);
        } else {
            commands.extend(wrapped.into_iter().map(RenderCommand::TextLine));
        }
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnknownFontError;
    use RenderCommand::*;

    fn courier(size: u16) -> FontSpec {
        FontSpec::new("Courier", size).unwrap()
    }

    fn text(s: &str) -> RenderCommand {
        TextLine(s.to_string())
    }

    #[test]
    fn directive_inserts_blank_lines() {
        assert_eq!(
            layout("~2Hello world", &courier(10)).unwrap(),
            vec![BlankLine, BlankLine, text("Hello world")]
        );
    }

    #[test]
    fn empty_lines_are_preserved() {
        assert_eq!(
            layout("a\n\nb", &courier(10)).unwrap(),
            vec![text("a"), BlankLine, text("b")]
        );
        // a trailing newline is a trailing empty line
        assert_eq!(layout("a\n", &courier(10)).unwrap(), vec![text("a"), BlankLine]);
        assert_eq!(layout("", &courier(10)).unwrap(), vec![BlankLine]);
    }

    #[test]
    fn directive_alone_still_takes_a_line() {
        assert_eq!(
            layout("~1", &courier(10)).unwrap(),
            vec![BlankLine, BlankLine]
        );
        assert_eq!(layout("~0", &courier(10)).unwrap(), vec![BlankLine]);
        assert_eq!(layout("~0x", &courier(10)).unwrap(), vec![text("x")]);
    }

    #[test]
    fn malformed_directive_fails_whole_layout() {
        assert_eq!(
            layout("fine\n~?oops", &courier(10)),
            Err(LayoutError::MalformedDirective {
                line: 2,
                found: Some('?')
            })
        );
    }

    #[test]
    fn unknown_font_fails() {
        let font = FontSpec::new("Helvetica", 10).unwrap();
        assert_eq!(
            layout("anything", &font),
            Err(LayoutError::UnknownFont(UnknownFontError {
                family: "Helvetica".to_string()
            }))
        );
    }

    #[test]
    fn short_lines_wrap_to_themselves() {
        let line = "x".repeat(85);
        assert_eq!(layout(&line, &courier(10)).unwrap(), vec![text(&line)]);
    }

    #[test]
    fn indentation_and_spacing_survive() {
        assert_eq!(
            layout("    indented code\na  b\ncol1\tcol2", &courier(10)).unwrap(),
            vec![text("    indented code"), text("a  b"), text("col1    col2")]
        );
        assert_eq!(
            layout("~1  x  =  1", &courier(10)).unwrap(),
            vec![BlankLine, text("  x  =  1")]
        );
    }

    #[test]
    fn wrapped_code_keeps_its_first_indent() {
        let line = format!("    {}", "word ".repeat(20));
        let commands = layout(&line, &courier(10)).unwrap();
        assert_eq!(commands.len(), 2);
        let TextLine(first) = &commands[0] else {
            panic!("expected text");
        };
        assert!(first.starts_with("    word"));
        assert!(first.chars().count() <= 85);
        let TextLine(second) = &commands[1] else {
            panic!("expected text");
        };
        assert!(second.starts_with("word"));
    }

    #[test]
    fn layout_is_deterministic() {
        let input = lipsum::lipsum(200) + "\n~3" + &lipsum::lipsum(50);
        let first = layout(&input, &courier(14)).unwrap();
        let second = layout(&input, &courier(14)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_metrics_change_the_budget() {
        let metrics = MetricsTable::empty().with_entry("Narrow", 70.0);
        let font = FontSpec::new("Narrow", 10).unwrap();
        // 210 / (70 * 0.35) = 8.57 columns
        assert_eq!(
            layout_with_metrics("aaaa bbbb cccc", &font, &metrics).unwrap(),
            vec![text("aaaa"), text("bbbb"), text("cccc")]
        );
    }
}
