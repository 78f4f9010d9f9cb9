//! The user's current font, size and paper choice.
//!
//! The menus offered to the user are plain data tables; choosing an entry
//! validates it against the table and updates the [Selection].

use crate::error::{LayoutError, UnknownFontError};
use crate::font::{FontSpec, StandardFont, FONT_SIZES};
use crate::pagesize::PaperSize;

/// Font families in menu order
pub const FONT_MENU: [&str; 5] = [
    StandardFont::Courier.family(),
    StandardFont::Arial.family(),
    StandardFont::Times.family(),
    StandardFont::Symbol.family(),
    StandardFont::ZapfDingbats.family(),
];

/// Point sizes in menu order
pub const SIZE_MENU: [u16; 10] = FONT_SIZES;

/// The current selection, carried explicitly into each export
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    font: FontSpec,
    paper: PaperSize,
}

impl Selection {
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn paper(&self) -> PaperSize {
        self.paper
    }

    /// Select a font family from [FONT_MENU]
    pub fn select_font(&mut self, family: &str) -> Result<(), UnknownFontError> {
        if !FONT_MENU.contains(&family) {
            return Err(UnknownFontError {
                family: family.to_string(),
            });
        }
        self.font.family = family.to_string();
        Ok(())
    }

    /// Select a point size from [SIZE_MENU]
    pub fn select_size(&mut self, point_size: u16) -> Result<(), LayoutError> {
        if !SIZE_MENU.contains(&point_size) {
            return Err(LayoutError::InvalidPointSize(point_size));
        }
        self.font.point_size = point_size;
        Ok(())
    }

    pub fn select_paper(&mut self, paper: PaperSize) {
        self.paper = paper;
    }
}
