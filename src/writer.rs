//! Placing render commands onto pages.
//!
//! Pagination is driven purely by a vertical cursor: every command, blank or
//! not, advances the cursor by one line height, and a new page is started
//! whenever the next line would cross the bottom margin. Because the layout
//! engine never decides page boundaries, the same commands can be paginated
//! onto any [PageGeometry].

use crate::document::{Document, WriteStats};
use crate::error::LayoutError;
use crate::font::{FontSpec, StandardFont};
use crate::info::Info;
use crate::layout::{LineMetrics, Margins, RenderCommand, DEFAULT_MARGIN, PAGE_WIDTH};
use crate::metrics::MetricsTable;
use crate::page::{Page, SpanLayout};
use crate::pagesize::{PageSize, A4};
use crate::units::{Mm, Pt};
use crate::PDFError;
use std::io::Write;

/// Horizontal padding between the left margin and the start of each line
pub const CELL_PADDING: Mm = Mm(1.0);

/// Narrowest text area a page may have. Column budgets are measured against an
/// A4 page with the default margins, so anything narrower would overflow.
pub const MIN_TEXT_WIDTH: Mm = Mm(PAGE_WIDTH.0 - 2.0 * DEFAULT_MARGIN.0);

/// Fraction of the font size the baseline sits below the vertical centre of a line
const BASELINE_SHIFT: f64 = 0.3;

/// Physical page layout used to place render commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Vertical advance per render command
    pub line_height: Mm,
    /// Height of the font itself, used to place the baseline within a line
    pub font_size: Mm,
}

impl PageGeometry {
    /// Geometry for `font` on a page of the given size, using the line height
    /// the layout engine derives for that font.
    ///
    /// Fails with [LayoutError::PageTooNarrow] if the margins leave less than
    /// [MIN_TEXT_WIDTH] across the page.
    pub fn new(
        font: &FontSpec,
        metrics: &MetricsTable,
        page_size: PageSize,
        margins: Margins,
    ) -> Result<PageGeometry, LayoutError> {
        let LineMetrics { line_height, .. } = LineMetrics::new(font, metrics)?;
        let text_width = margins.text_width(page_size.0);
        if text_width < MIN_TEXT_WIDTH {
            return Err(LayoutError::PageTooNarrow {
                text_width,
                required: MIN_TEXT_WIDTH,
            });
        }
        Ok(PageGeometry {
            page_size,
            margins,
            line_height,
            font_size: font.size_mm(),
        })
    }

    /// Geometry for `font` on portrait A4 with the default margins
    pub fn a4(font: &FontSpec) -> Result<PageGeometry, LayoutError> {
        PageGeometry::new(font, &MetricsTable::default(), A4, Margins::default())
    }

    /// The lowest a line may extend before a new page is needed, measured from the top
    fn break_threshold(&self) -> Mm {
        self.page_size.1 - self.margins.bottom
    }
}

/// Consumes render commands and produces pages, and from those, PDF bytes
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    geometry: PageGeometry,
    font: StandardFont,
    point_size: u16,
}

impl DocumentWriter {
    pub fn new(geometry: PageGeometry, font: StandardFont, point_size: u16) -> DocumentWriter {
        DocumentWriter {
            geometry,
            font,
            point_size,
        }
    }

    /// Build a writer for `font` with the given page size and margins
    pub fn for_font(
        font: &FontSpec,
        metrics: &MetricsTable,
        page_size: PageSize,
        margins: Margins,
    ) -> Result<DocumentWriter, LayoutError> {
        let standard = StandardFont::try_from(font)?;
        let geometry = PageGeometry::new(font, metrics, page_size, margins)?;
        Ok(DocumentWriter::new(geometry, standard, font.point_size))
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Distribute the commands over pages. There is always at least one page,
    /// even if there are no commands.
    pub fn paginate(&self, commands: &[RenderCommand]) -> Vec<Page> {
        let PageGeometry {
            page_size: (width, height),
            margins,
            line_height,
            font_size,
        } = self.geometry;
        let threshold = self.geometry.break_threshold();

        let mut pages: Vec<Page> = Vec::new();
        let mut page = Page::new(width, height);
        let mut cursor = margins.top;
        let mut lines_on_page = 0usize;

        for command in commands {
            // a line taller than the page still gets placed, one per page
            if lines_on_page > 0 && cursor + line_height > threshold {
                pages.push(std::mem::replace(&mut page, Page::new(width, height)));
                cursor = margins.top;
                lines_on_page = 0;
            }

            if let RenderCommand::TextLine(text) = command {
                let baseline = cursor + line_height / 2.0 + font_size * BASELINE_SHIFT;
                let x: Pt = (margins.left + CELL_PADDING).into();
                let y: Pt = (height - baseline).into();
                page.add_span(SpanLayout {
                    text: text.clone(),
                    coords: (x, y),
                });
            }

            cursor += line_height;
            lines_on_page += 1;
        }
        pages.push(page);

        pages
    }

    /// Paginate the commands and write them out as a PDF
    pub fn write<W: Write>(
        &self,
        commands: &[RenderCommand],
        info: Option<Info>,
        out: W,
    ) -> Result<WriteStats, PDFError> {
        let mut document = Document::new(self.font, Pt(self.point_size as f32));
        if let Some(info) = info {
            document.set_info(info);
        }
        for page in self.paginate(commands) {
            document.add_page(page);
        }
        document.write(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, A3, LEGAL, LETTER};

    fn courier_writer(page_size: PageSize) -> DocumentWriter {
        let font = FontSpec::new("Courier", 10).unwrap();
        DocumentWriter::for_font(&font, &MetricsTable::default(), page_size, Margins::default())
            .unwrap()
    }

    fn lines(n: usize) -> Vec<RenderCommand> {
        (0..n)
            .map(|i| RenderCommand::TextLine(format!("line {i}")))
            .collect()
    }

    #[test]
    fn no_commands_still_make_a_page() {
        let pages = courier_writer(A4).paginate(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn breaks_before_crossing_bottom_margin() {
        // 3.5mm lines from 10mm down to 287mm: 79 lines fit
        let writer = courier_writer(A4);
        assert_eq!(writer.paginate(&lines(79)).len(), 1);

        let pages = writer.paginate(&lines(80));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].spans.len(), 79);
        assert_eq!(pages[1].spans[0].text, "line 79");
    }

    #[test]
    fn blank_lines_take_space_but_draw_nothing() {
        let writer = courier_writer(A4);
        let mut commands = vec![RenderCommand::BlankLine; 79];
        commands.push(RenderCommand::TextLine("overflow".to_string()));
        let pages = writer.paginate(&commands);
        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_empty());
        assert_eq!(pages[1].spans.len(), 1);
    }

    #[test]
    fn first_line_sits_below_top_margin() {
        let pages = courier_writer(A4).paginate(&lines(2));
        let first = &pages[0].spans[0];
        let second = &pages[0].spans[1];

        let x: Mm = first.coords.0.into();
        assert!((x.0 - 11.0).abs() < 1e-3);

        // baseline: 10 + 3.5/2 + 0.3 * (10pt in mm)
        let expected = 297.0 - (10.0 + 1.75 + 0.3 * 10.0 * 25.4 / 72.0);
        let y: Mm = first.coords.1.into();
        assert!((y.0 - expected).abs() < 1e-3);

        let step: Mm = (first.coords.1 - second.coords.1).into();
        assert!((step.0 - 3.5).abs() < 1e-3);
    }

    #[test]
    fn same_commands_reflow_onto_other_geometry() {
        let commands = lines(200);
        let a4 = courier_writer(A4).paginate(&commands).len();
        let a3 = courier_writer(A3).paginate(&commands).len();
        let landscape = courier_writer(A4.landscape()).paginate(&commands).len();
        assert_eq!(a4, 3);
        assert!(a3 < a4);
        assert!(landscape > a4);
    }

    #[test]
    fn oversized_lines_get_a_page_each() {
        let geometry = PageGeometry {
            page_size: (Mm(100.0), Mm(30.0)),
            margins: Margins::default(),
            line_height: Mm(50.0),
            font_size: Mm(5.0),
        };
        let writer = DocumentWriter::new(geometry, StandardFont::Courier, 10);
        assert_eq!(writer.paginate(&lines(3)).len(), 3);
    }

    #[test]
    fn writes_pdf_bytes() {
        let mut out = Vec::new();
        let stats = courier_writer(A4).write(&lines(100), None, &mut out).unwrap();
        assert_eq!(stats.pages, 2);
        assert!(out.starts_with(b"%PDF-"));
    }

    #[test]
    fn narrow_pages_are_rejected() {
        let font = FontSpec::new("Courier", 10).unwrap();
        let metrics = MetricsTable::default();

        let a5 = (Mm(148.0), Mm(210.0));
        assert!(matches!(
            DocumentWriter::for_font(&font, &metrics, a5, Margins::default()),
            Err(LayoutError::PageTooNarrow { .. })
        ));

        assert_eq!(
            PageGeometry::new(&font, &metrics, A4, Margins::all(Mm(15.0))),
            Err(LayoutError::PageTooNarrow {
                text_width: Mm(180.0),
                required: Mm(190.0)
            })
        );

        let lopsided = Margins {
            left: Mm(5.0),
            right: Mm(25.0),
            ..Margins::default()
        };
        assert!(PageGeometry::new(&font, &metrics, A4, lopsided).is_err());
    }

    #[test]
    fn pages_at_least_a4_wide_are_accepted() {
        let font = FontSpec::new("Courier", 10).unwrap();
        let metrics = MetricsTable::default();
        for page_size in [A4, A3, LETTER, LEGAL, A4.landscape(), LETTER.landscape()] {
            assert!(PageGeometry::new(&font, &metrics, page_size, Margins::default()).is_ok());
        }
        assert!(PageGeometry::new(&font, &metrics, A4, Margins::all(Mm(5.0))).is_ok());
    }

    #[test]
    fn unknown_family_has_no_writer() {
        let font = FontSpec::new("Helvetica", 10).unwrap();
        assert!(
            DocumentWriter::for_font(&font, &MetricsTable::default(), A4, Margins::default())
                .is_err()
        );
    }
}
