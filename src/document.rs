use crate::{
    font::StandardFont,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    units::Pt,
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// What a call to [Document::write] produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    /// Number of pages written
    pub pages: usize,
    /// Number of characters that the font could not encode and were replaced with `?`
    pub replaced_chars: usize,
    /// Number of bytes written
    pub bytes: usize,
}

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]. All text in a
/// document is set in a single standard font at a single size.
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub font: StandardFont,
    pub font_size: Pt,
}

impl Document {
    /// Create an empty document that sets its text in `font` at `font_size`
    pub fn new(font: StandardFont, font_size: Pt) -> Document {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            font,
            font_size,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|p| *p == page)
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first, so nothing is written to `w` if rendering fails.
    pub fn write<W: Write>(self, mut w: W) -> Result<WriteStats, PDFError> {
        let Document {
            info,
            pages,
            page_order,
            font,
            font_size,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        font.write(&mut refs, &mut writer);

        let mut replaced_chars = 0;
        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            replaced_chars += page.write(&mut refs, page_index, font, font_size, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        let bytes = writer.finish();
        w.write_all(bytes.as_slice())?;

        Ok(WriteStats {
            pages: page_order.len(),
            replaced_chars,
            bytes: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SpanLayout;
    use crate::units::Mm;

    #[test]
    fn pages_keep_insertion_order() {
        let mut doc = Document::new(StandardFont::Courier, Pt(10.0));
        let first = doc.add_page(Page::new(Mm(210.0), Mm(297.0)));
        let second = doc.add_page(Page::new(Mm(210.0), Mm(297.0)));
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::new(StandardFont::Times, Pt(12.0));
        let mut info = Info::new();
        info.title("Test");
        doc.set_info(info);

        let mut page = Page::new(Mm(210.0), Mm(297.0));
        page.add_span(SpanLayout {
            text: "Hello".to_string(),
            coords: (Pt(30.0), Pt(800.0)),
        });
        doc.add_page(page);

        let mut out: Vec<u8> = Vec::new();
        let stats = doc.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.replaced_chars, 0);
        assert_eq!(stats.bytes, out.len());

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/BaseFont /Times-Roman"));
        assert!(text.contains("/WinAnsiEncoding"));
    }
}
