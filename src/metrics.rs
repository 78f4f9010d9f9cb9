use crate::error::UnknownFontError;

/// Average character width coefficients, in millimetres per point of font size
/// per character. These were established empirically per font and are not
/// derived from glyph outlines.
pub const STANDARD_METRICS: [(&str, f64); 5] = [
    ("Courier", 7.0),
    ("Arial", 5.25),
    ("Times", 4.9),
    ("Symbol", 5.5),
    ("ZapfDingbats", 8.0),
];

/// Maps a font family name to its character-width coefficient. Every family
/// that can be selected must have an entry; looking up anything else is an
/// error rather than a fallback.
///
/// The default table holds the standard families. Custom tables can be built
/// with [MetricsTable::empty] and [MetricsTable::with_entry].
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    entries: Vec<(String, f64)>,
}

impl Default for MetricsTable {
    fn default() -> Self {
        MetricsTable {
            entries: STANDARD_METRICS
                .iter()
                .map(|&(family, coefficient)| (family.to_string(), coefficient))
                .collect(),
        }
    }
}

impl MetricsTable {
    /// A table with no families at all
    pub fn empty() -> MetricsTable {
        MetricsTable {
            entries: Vec::new(),
        }
    }

    /// Add or replace the coefficient for a family, returning the updated table
    pub fn with_entry<S: ToString>(mut self, family: S, coefficient: f64) -> MetricsTable {
        let family = family.to_string();
        match self.entries.iter_mut().find(|(name, _)| *name == family) {
            Some(entry) => entry.1 = coefficient,
            None => self.entries.push((family, coefficient)),
        }
        self
    }

    /// Look up the width coefficient for a family. Names are matched exactly.
    pub fn width_coefficient(&self, family: &str) -> Result<f64, UnknownFontError> {
        self.entries
            .iter()
            .find(|(name, _)| name == family)
            .map(|&(_, coefficient)| coefficient)
            .ok_or_else(|| UnknownFontError {
                family: family.to_string(),
            })
    }

    /// Whether the table has an entry for `family`
    pub fn contains(&self, family: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == family)
    }

    /// Iterate over `(family, coefficient)` pairs in table order
    pub fn families(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, coefficient)| (name.as_str(), *coefficient))
    }
}
