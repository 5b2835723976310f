//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

/// Column labels, indexed by `x`.
pub const COLUMN_LABELS: &str = "ABCDEFGH";

/// Row labels, indexed by `y`.
pub const ROW_LABELS: &str = "12345678";

/// Write one character per space as a labelled grid, in row-major order.
/// `symbols` must yield exactly [`NUM_SPACES`] items.
pub fn format_grid<I>(symbols: I, f: &mut Formatter) -> fmt::Result
where
    I: IntoIterator<Item = char>,
{
    let symbols: Vec<char> = symbols.into_iter().collect();
    if symbols.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    write!(f, " ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for (row, label) in symbols.chunks(EDGE_LENGTH).zip(ROW_LABELS.chars()) {
        write!(f, "\n{}", label)?;
        for symbol in row {
            write!(f, " {}", symbol)?;
        }
    }
    Ok(())
}
