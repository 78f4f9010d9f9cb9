use crate::error::LayoutError;
use crate::font::FontSpec;
use crate::metrics::MetricsTable;
use crate::units::Mm;

/// Width of the page the column budget is computed against (A4 portrait)
pub const PAGE_WIDTH: Mm = Mm(210.0);

/// Scale from point size to the per-point length factor
pub const PT_TO_LENGTH: f64 = 0.035;

/// Line geometry derived from a font spec for a single layout pass.
///
/// `line_height` is `point_size * (point_size * 0.035)`, i.e. the point size is
/// scaled twice rather than converted from points to millimetres once. Exported
/// documents depend on this spacing, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// `point_size * 0.035`
    pub pt_to_length: f64,
    /// Vertical advance per render command
    pub line_height: Mm,
    /// Estimated average glyph width
    pub char_width: Mm,
    /// Maximum characters on one wrapped line
    pub column_budget: usize,
}

impl LineMetrics {
    pub fn new(font: &FontSpec, metrics: &MetricsTable) -> Result<LineMetrics, LayoutError> {
        let coefficient = metrics.width_coefficient(&font.family)?;

        let point_size = font.point_size as f64;
        let pt_to_length = point_size * PT_TO_LENGTH;
        let line_height = Mm(point_size * pt_to_length);
        let char_width = Mm(coefficient * pt_to_length);

        let columns = (PAGE_WIDTH.0 / char_width.0).floor();
        // NaN and infinities (zero or negative coefficients) fail here too
        if !(columns >= 1.0 && columns.is_finite()) {
            return Err(LayoutError::DegenerateGeometry {
                family: font.family.clone(),
                point_size: font.point_size,
            });
        }

        Ok(LineMetrics {
            pt_to_length,
            line_height,
            char_width,
            column_budget: columns as usize,
        })
    }
}

/// Compute how many characters fit across the page for the given font
pub fn compute_page_width(font: &FontSpec, metrics: &MetricsTable) -> Result<usize, LayoutError> {
    LineMetrics::new(font, metrics).map(|m| m.column_budget)
}
