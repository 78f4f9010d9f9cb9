use crate::units::Mm;

/// Margin applied on every side when none is given
pub const DEFAULT_MARGIN: Mm = Mm(10.0);

/// Page margins. Text starts at the top-left margin and a new page is started
/// before a line would cross the bottom margin. Wrapping is decided by the
/// column budget alone; the left and right margins only have to leave room for
/// it (see [crate::PageGeometry::new]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(DEFAULT_MARGIN)
    }
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Width left between the left and right margins on a page `page_width` wide
    pub fn text_width(&self, page_width: Mm) -> Mm {
        page_width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_millimetres_all_round() {
        assert_eq!(Margins::default(), Margins::all(Mm(10.0)));
    }

    #[test]
    fn text_width_subtracts_both_sides() {
        let margins = Margins {
            left: Mm(25.0),
            right: Mm(15.0),
            ..Margins::default()
        };
        assert_eq!(margins.text_width(Mm(210.0)), Mm(170.0));
        assert_eq!(Margins::default().text_width(Mm(210.0)), Mm(190.0));
    }
}
