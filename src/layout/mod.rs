//! Turning plain text into render commands.
//!
//! Layout is line-oriented and approximates every font as monospaced: a per-font
//! width coefficient from the [`MetricsTable`](crate::MetricsTable) gives an
//! average character width, which in turn gives a column budget for the page.
//! Each source line is word-wrapped to that budget and emitted as a sequence of
//! [`RenderCommand`]s. Layout knows nothing about pages; the
//! [`DocumentWriter`](crate::DocumentWriter) decides where pages break.
//!
//! # Spacing directives
//!
//! A line starting with `~` and a digit is preceded by that many blank lines,
//! see [`parse_directive`].
//!
//! # Example
//!
//! ```
//! use text2pdf::FontSpec;
//! use text2pdf::layout::{layout, RenderCommand};
//!
//! let font = FontSpec::new("Courier", 10).expect("valid size");
//! let commands = layout("~1Title\nBody", &font).expect("can lay out");
//! assert_eq!(
//!     commands,
//!     vec![
//!         RenderCommand::BlankLine,
//!         RenderCommand::TextLine("Title".to_string()),
//!         RenderCommand::TextLine("Body".to_string()),
//!     ]
//! );
//! ```

mod directive;
mod geometry;
mod margins;
mod text;
mod wrap;

pub use directive::*;
pub use geometry::*;
pub use margins::*;
pub use text::*;
pub use wrap::*;
