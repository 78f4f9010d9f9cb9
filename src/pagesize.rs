//! Paper sizes for the document writer.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! Note that the column budget used for wrapping is always computed against an
//! A4 width; a different paper size only changes where pages break. Every size
//! here is at least that wide.
//!
//! # Example
//!
//! ```
//! use text2pdf::pagesize::{PaperSize, PageOrientation, A4};
//!
//! let letter = PaperSize::Letter.size();
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::Mm;
use std::{fmt, str::FromStr};

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

// iso a-series
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));

// north american sizes (converted from inches)
pub const LETTER: PageSize = (Mm(8.5 * 25.4), Mm(11.0 * 25.4));
pub const LEGAL: PageSize = (Mm(8.5 * 25.4), Mm(14.0 * 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Named paper sizes that can be chosen for an export
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    Letter,
    Legal,
}

impl PaperSize {
    pub const ALL: [PaperSize; 4] = [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::Letter,
        PaperSize::Legal,
    ];

    /// Portrait dimensions of the paper
    pub fn size(&self) -> PageSize {
        match self {
            PaperSize::A3 => A3,
            PaperSize::A4 => A4,
            PaperSize::Letter => LETTER,
            PaperSize::Legal => LEGAL,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PaperSize::A3 => "a3",
            PaperSize::A4 => "a4",
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        PaperSize::ALL
            .into_iter()
            .find(|paper| paper.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = PaperSize::ALL.iter().map(|p| p.name()).collect();
                format!("unknown paper size `{s}`, expected one of {}", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_swaps_only_when_needed() {
        assert_eq!(A4.portrait(), A4);
        assert_eq!(A4.landscape(), (Mm(297.0), Mm(210.0)));
        assert_eq!(A4.landscape().portrait(), A4);
    }

    #[test]
    fn every_paper_is_at_least_a4_wide() {
        for paper in PaperSize::ALL {
            assert!(paper.size().0 >= A4.0, "{paper}");
        }
    }

    #[test]
    fn paper_names_parse() {
        assert_eq!("A4".parse::<PaperSize>(), Ok(PaperSize::A4));
        assert_eq!(" letter ".parse::<PaperSize>(), Ok(PaperSize::Letter));
        assert!("b5".parse::<PaperSize>().is_err());
        assert!("a5".parse::<PaperSize>().is_err());
        for paper in PaperSize::ALL {
            assert_eq!(paper.to_string().parse::<PaperSize>(), Ok(paper));
        }
    }
}
