use crate::{
    error::{LayoutError, UnknownFontError},
    refs::{ObjectReferences, RefType},
    units::Mm,
};
use pdf_writer::{Name, Pdf};

/// Point sizes that can be selected for a document, in menu order
pub const FONT_SIZES: [u16; 10] = [8, 10, 12, 14, 16, 18, 20, 24, 28, 32];

/// The point size a fresh selection starts at
pub const DEFAULT_POINT_SIZE: u16 = 10;

/// A font family and point size, treated as a plain value for layout.
///
/// The family is kept as a name rather than an enum so that an unknown family
/// is reported by the metrics lookup when layout runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub family: String,
    pub point_size: u16,
}

impl FontSpec {
    /// Create a font spec. The point size must be positive.
    pub fn new<S: ToString>(family: S, point_size: u16) -> Result<FontSpec, LayoutError> {
        if point_size == 0 {
            return Err(LayoutError::InvalidPointSize(point_size));
        }
        Ok(FontSpec {
            family: family.to_string(),
            point_size,
        })
    }

    /// The font size as a physical height, as used to position glyphs within a line
    pub fn size_mm(&self) -> Mm {
        Mm(self.point_size as f64 * 25.4 / 72.0)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            family: StandardFont::Courier.family().to_string(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

/// One of the standard PDF fonts. These are referenced by name and never
/// embedded, so every conforming reader supplies its own glyphs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Courier,
    Arial,
    Times,
    Symbol,
    ZapfDingbats,
}

impl StandardFont {
    pub const ALL: [StandardFont; 5] = [
        StandardFont::Courier,
        StandardFont::Arial,
        StandardFont::Times,
        StandardFont::Symbol,
        StandardFont::ZapfDingbats,
    ];

    /// Resolve a family name as shown in the font menu
    pub fn from_family(family: &str) -> Result<StandardFont, UnknownFontError> {
        StandardFont::ALL
            .into_iter()
            .find(|font| font.family() == family)
            .ok_or_else(|| UnknownFontError {
                family: family.to_string(),
            })
    }

    /// The family name used in menus and the metrics table
    pub const fn family(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::Arial => "Arial",
            StandardFont::Times => "Times",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// The `BaseFont` name of the matching standard 14 font. Arial has no
    /// standard font of its own and is substituted with Helvetica.
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::Arial => "Helvetica",
            StandardFont::Times => "Times-Roman",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Symbolic fonts carry their own built-in encoding
    fn is_symbolic(&self) -> bool {
        matches!(self, StandardFont::Symbol | StandardFont::ZapfDingbats)
    }

    /// Encode text as single-byte character codes. Characters outside of
    /// Latin-1 are replaced with `?`. Returns the codes and how many characters
    /// had to be replaced.
    pub fn encode(&self, text: &str) -> (Vec<u8>, usize) {
        let mut replaced = 0;
        let codes = text
            .chars()
            .map(|ch| match u8::try_from(u32::from(ch)) {
                Ok(code) => code,
                Err(_) => {
                    replaced += 1;
                    b'?'
                }
            })
            .collect();
        (codes, replaced)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font);
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_font().as_bytes()));
        if !self.is_symbolic() {
            font.encoding_predefined(Name(b"WinAnsiEncoding"));
        }
    }
}

impl TryFrom<&FontSpec> for StandardFont {
    type Error = UnknownFontError;

    fn try_from(spec: &FontSpec) -> Result<Self, Self::Error> {
        StandardFont::from_family(&spec.family)
    }
}
