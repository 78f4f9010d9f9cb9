use crate::units::Mm;
use thiserror::Error;

/// A font family was requested that the metrics table has no entry for
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown font family `{family}`")]
pub struct UnknownFontError {
    pub family: String,
}

/// Failures while turning text into render commands. All of these are
/// terminal for the export attempt; nothing is written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    /// The font family is missing from the metrics table
    UnknownFont(#[from] UnknownFontError),

    #[error("font {family} at {point_size}pt leaves no room for a single column")]
    /// The font/size combination fits less than one character across the page
    DegenerateGeometry { family: String, point_size: u16 },

    #[error("line {line}: spacing directive must be `~` followed by a digit, found {}", describe(.found))]
    /// A line starts with `~` but the next character is not an ASCII digit
    MalformedDirective { line: usize, found: Option<char> },

    #[error("page leaves {text_width}mm between the margins, wrapped lines need {required}mm")]
    /// The page is too narrow, or its side margins too wide, for the column budget
    PageTooNarrow { text_width: Mm, required: Mm },

    #[error("unsupported point size {0}")]
    /// The point size is zero or not one of the selectable sizes
    InvalidPointSize(u16),
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("{ch:?}"),
        None => "end of line".to_string(),
    }
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// The text could not be laid out
    Layout(#[from] LayoutError),

    #[error("page referenced in page order is missing from the document")]
    /// A page id in the page order no longer resolves
    PageMissing,
}

impl From<UnknownFontError> for PDFError {
    fn from(err: UnknownFontError) -> Self {
        PDFError::Layout(err.into())
    }
}
