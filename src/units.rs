//! Physical length units.
//!
//! Layout calculations happen in millimetres ([Mm]), the unit the metrics table
//! and page geometry are expressed in. PDF content streams are written in
//! points ([Pt], 1/72 of an inch). The layout engine never converts to [Pt];
//! only page placement does.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Points per inch
pub const PT_PER_INCH: f32 = 72.0;

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Mm(pub f64);

impl Mul<f64> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f64) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl Div<f64> for Mm {
    type Output = Mm;

    fn div(self, rhs: f64) -> Mm {
        Mm(self.0 / rhs)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt((mm.0 / MM_PER_INCH) as f32 * PT_PER_INCH)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 as f64 / PT_PER_INCH as f64 * MM_PER_INCH)
    }
}
