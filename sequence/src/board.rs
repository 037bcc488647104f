//! The fixed 10×10 board layout and cell geometry.
//!
//! Cells are numbered row-major from 0 (top left) to 99 (bottom right).
mod layout;

pub use layout::BOARD_LAYOUT;

use crate::{BaseCard, CardId, CellSet};

/// Index of a board cell, in `0..NUM_CELLS`.
pub type CellId = u8;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_CELLS: u8 = BOARD_SIZE * BOARD_SIZE;

pub const CORNER_CELLS: [CellId; 4] = [0, 9, 90, 99];

pub fn row(cell: CellId) -> u8 {
    cell / BOARD_SIZE
}

pub fn col(cell: CellId) -> u8 {
    cell % BOARD_SIZE
}

/// The cell at `(row, col)`, or `None` if that is off the board.
pub fn cell_at(row: i8, col: i8) -> Option<CellId> {
    let size = BOARD_SIZE as i8;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some((row * size + col) as CellId)
    } else {
        None
    }
}

/// Walks `steps` cells from `cell` in direction `(d_row, d_col)`.
pub fn offset(cell: CellId, d_row: i8, d_col: i8, steps: i8) -> Option<CellId> {
    cell_at(
        row(cell) as i8 + d_row * steps,
        col(cell) as i8 + d_col * steps,
    )
}

/// The board label of a cell.
///
/// Panics if `cell` is not on the board.
pub fn label(cell: CellId) -> BaseCard {
    BOARD_LAYOUT[cell as usize]
}

/// Squared distance from the geometric center (4.5, 4.5), scaled by 4 to
/// stay in integers.
pub fn center_distance(cell: CellId) -> u32 {
    let dr = 2 * row(cell) as i32 - 9;
    let dc = 2 * col(cell) as i32 - 9;
    (dr * dr + dc * dc) as u32
}

/// All cells labeled with the given base card.
pub fn cells_labeled(base: BaseCard) -> CellSet {
    BOARD_LAYOUT
        .iter()
        .enumerate()
        .filter(|(_, &lbl)| lbl == base)
        .map(|(idx, _)| idx as CellId)
        .collect()
}

/// The board cells a card can be placed on when the board is empty.
///
/// Face cards map to their two occurrences, every corner card maps to all
/// four corners, and jacks map to nothing.
pub fn mapped_cells(card: CardId) -> CellSet {
    match card.base() {
        Some(base) => cells_labeled(base),
        None => CellSet::new(),
    }
}
