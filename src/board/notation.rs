//! Algebraic square names.
//!
//! Index 0 is "a8" and the table runs file by file across each rank down to
//! index 63, "h1". Both directions are built once on first use.

use std::array::from_fn;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::error::PositionError;
use super::types::{BOARD_SIZE, NUM_SQUARES};

static ALGEBRAIC_NOTATION: Lazy<[String; NUM_SQUARES]> = Lazy::new(|| {
    from_fn(|index| {
        let rank = index / BOARD_SIZE;
        let file = index % BOARD_SIZE;
        let file_char = (b'a' + file as u8) as char;
        let rank_char = (b'8' - rank as u8) as char;
        format!("{file_char}{rank_char}")
    })
});

static POSITION_TO_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    ALGEBRAIC_NOTATION
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect()
});

/// Name of the square at `index`.
///
/// # Panics
/// Panics if `index` is 64 or more; use [`try_position_at`] for unchecked input.
#[must_use]
pub fn position_at(index: usize) -> &'static str {
    ALGEBRAIC_NOTATION[index].as_str()
}

/// Name of the square at `index`, or an error if it is off the board
pub fn try_position_at(index: usize) -> Result<&'static str, PositionError> {
    ALGEBRAIC_NOTATION
        .get(index)
        .map(String::as_str)
        .ok_or(PositionError::IndexOutOfBounds { index })
}

/// Index of the square named `name` ("a8" -> 0, "h1" -> 63)
pub fn index_at(name: &str) -> Result<usize, PositionError> {
    POSITION_TO_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| PositionError::InvalidNotation {
            notation: name.to_string(),
        })
}
