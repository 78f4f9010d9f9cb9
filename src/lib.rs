//! Lay out plain text into pages and export it as a PDF.
//!
//! Text is wrapped line by line against a column budget estimated from a
//! per-font average character width, producing [`RenderCommand`](layout::RenderCommand)s.
//! A [DocumentWriter] then distributes those commands over pages and writes a
//! PDF using one of the standard PDF fonts.
//!
//! ```
//! use text2pdf::{layout, DocumentWriter, FontSpec, PageGeometry, StandardFont};
//!
//! let font = FontSpec::new("Courier", 12).expect("valid size");
//! let commands = layout::layout("~1Hello\nworld", &font).expect("can lay out");
//!
//! let geometry = PageGeometry::a4(&font).expect("known font");
//! let writer = DocumentWriter::new(geometry, StandardFont::Courier, font.point_size);
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! writer.write(&commands, None, &mut pdf).expect("can write");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod document;
pub use document::*;

mod error;
pub use error::*;

/// Exporting text files to PDF files
pub mod export;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Wrapping text into render commands
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

/// Paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub mod selection;

mod units;
pub use units::*;

mod writer;
pub use writer::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
