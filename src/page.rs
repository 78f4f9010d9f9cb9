use crate::font::StandardFont;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::{Mm, Pt};
use crate::PDFError;
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// Resource name the document font is registered under on every page
pub(crate) const FONT_RESOURCE: &str = "F0";

/// A line of text placed on a page. `coords` is the start of the baseline in
/// PDF space (origin at the bottom-left of the page).
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub coords: (Pt, Pt),
}

/// A single page of output
#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out text, in drawing order
    pub spans: Vec<SpanLayout>,
}

impl Page {
    /// Create an empty page with the given dimensions
    pub fn new(width: Mm, height: Mm) -> Page {
        Page {
            media_box: Rect::from_page_size(width, height),
            spans: Vec::new(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Render the content stream for this page. Returns the stream along with
    /// the number of characters that could not be encoded in `font`.
    #[allow(clippy::write_with_newline)]
    pub(crate) fn render(
        &self,
        font: StandardFont,
        size: Pt,
    ) -> Result<(Vec<u8>, usize), std::io::Error> {
        let mut content: Vec<u8> = Vec::default();
        let mut replaced = 0;
        if self.spans.is_empty() {
            return Ok((content, replaced));
        }

        write!(&mut content, "q\n")?;
        write!(&mut content, "0 g\n")?;
        for span in self.spans.iter() {
            let (codes, missing) = font.encode(&span.text);
            replaced += missing;

            write!(&mut content, "BT\n")?;
            write!(&mut content, "/{FONT_RESOURCE} {} Tf\n", size)?;
            write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1)?;
            write!(&mut content, "<")?;
            for code in codes {
                write!(&mut content, "{code:02x}")?;
            }
            write!(&mut content, "> Tj\n")?;
            write!(&mut content, "ET\n")?;
        }
        write!(&mut content, "Q\n")?;

        Ok((content, replaced))
    }

    /// Write the page object and its content stream. Returns the number of
    /// characters that had to be replaced while encoding.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        font: StandardFont,
        size: Pt,
        writer: &mut Pdf,
    ) -> Result<usize, PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let page_tree_id = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let font_id = refs.get(RefType::Font).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        resources
            .fonts()
            .pair(Name(FONT_RESOURCE.as_bytes()), font_id);
        resources.finish();
        page.finish();

        let (rendered, replaced) = self.render(font, size)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(pdf_writer::Filter::FlateDecode);

        Ok(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pages_render_nothing() {
        let page = Page::new(Mm(210.0), Mm(297.0));
        let (content, replaced) = page.render(StandardFont::Courier, Pt(10.0)).unwrap();
        assert!(content.is_empty());
        assert_eq!(replaced, 0);
    }

    #[test]
    fn spans_render_as_hex_strings() {
        let mut page = Page::new(Mm(210.0), Mm(297.0));
        page.add_span(SpanLayout {
            text: "Hi✓".to_string(),
            coords: (Pt(10.0), Pt(800.0)),
        });
        let (content, replaced) = page.render(StandardFont::Courier, Pt(12.0)).unwrap();
        let content = String::from_utf8(content).unwrap();
        assert!(content.contains("/F0 12 Tf\n"));
        assert!(content.contains("10 800 Td\n"));
        assert!(content.contains("<48693f> Tj\n"));
        assert_eq!(replaced, 1);
    }
}
