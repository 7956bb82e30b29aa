//! Error type for palette construction.

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be constructed: either no colors were
/// provided, or more entries were supplied than an 8-bit index can address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    Empty,
    /// More than 256 entries supplied
    TooManyEntries {
        /// Number of entries that were supplied
        count: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Empty => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyEntries { count } => {
                write!(
                    f,
                    "palette has {} entries, at most 256 are addressable",
                    count
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
