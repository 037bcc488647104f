//! Finding five-in-a-row sequences on the board.
use serde::{Deserialize, Serialize};

use crate::{offset, CellId, CellSet, Chips, TeamId, NUM_CELLS};

/// Number of chips in a sequence.
pub const SEQUENCE_LEN: usize = 5;

/// A run of this many same-team chips is never a sequence.
pub const OVERSHOOT_LEN: usize = SEQUENCE_LEN + 1;

/// The four line directions. Each one steps towards higher cell ids, so
/// walking a window forward yields its cells in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// `(d_row, d_col)` of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// The cell `steps` steps away from `cell` (negative steps go backwards).
    pub fn step(self, cell: CellId, steps: i8) -> Option<CellId> {
        let (d_row, d_col) = self.delta();
        offset(cell, d_row, d_col, steps)
    }
}

/// A sequence that has been scored. The list of these only ever grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSequence {
    pub team: TeamId,
    /// Sorted ascending.
    pub cells: [CellId; SEQUENCE_LEN],
    pub created_turn: u32,
}

/// A newly found sequence, before it gets its turn number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectedSequence {
    pub team: TeamId,
    pub cells: [CellId; SEQUENCE_LEN],
}

impl DetectedSequence {
    pub fn completed_at(self, turn: u32) -> CompletedSequence {
        CompletedSequence {
            team: self.team,
            cells: self.cells,
            created_turn: turn,
        }
    }
}

impl CompletedSequence {
    pub fn cell_set(&self) -> CellSet {
        CellSet::from_iter(self.cells)
    }
}

/// The five cells starting at `start` in direction `dir`, if they fit on the board.
pub fn window(start: CellId, dir: Direction) -> Option<[CellId; SEQUENCE_LEN]> {
    let mut cells = [start; SEQUENCE_LEN];
    for (k, cell) in cells.iter_mut().enumerate().skip(1) {
        *cell = dir.step(start, k as i8)?;
    }
    Some(cells)
}

/// All cells belonging to some completed sequence.
pub fn sequence_cells(completed: &[CompletedSequence]) -> CellSet {
    completed
        .iter()
        .fold(CellSet::new(), |acc, seq| acc | seq.cell_set())
}

pub fn count_sequences_by_team(completed: &[CompletedSequence], team: TeamId) -> usize {
    completed.iter().filter(|seq| seq.team == team).count()
}

/// Finds sequences on the board that are not yet in `completed`.
///
/// A window of five same-team chips counts unless
/// - it is part of a longer run of that team (overshoot),
/// - it is already a completed sequence, or
/// - it shares two or more cells with a completed sequence.
///
/// The result is in scan order (by start cell, then [`Direction::ALL`] order).
pub fn detect_new_sequences(
    chips: &Chips,
    completed: &[CompletedSequence],
) -> Vec<DetectedSequence> {
    let completed_sets: Vec<CellSet> = completed.iter().map(|seq| seq.cell_set()).collect();
    let mut found: Vec<DetectedSequence> = Vec::new();

    for start in 0..NUM_CELLS {
        let Some(team) = chips.team_at(start) else {
            continue;
        };
        let own = chips.of(team);
        for dir in Direction::ALL {
            let Some(cells) = window(start, dir) else {
                continue;
            };
            if !cells.iter().all(|&cell| own.contains(cell)) {
                continue;
            }
            let before = dir.step(start, -1);
            let after = dir.step(cells[SEQUENCE_LEN - 1], 1);
            if [before, after]
                .into_iter()
                .flatten()
                .any(|cell| own.contains(cell))
            {
                continue;
            }
            let set = CellSet::from_iter(cells);
            if found.iter().any(|seq| seq.cells == cells) {
                continue;
            }
            if completed_sets
                .iter()
                .any(|&done| done == set || (done & set).len() >= 2)
            {
                continue;
            }
            found.push(DetectedSequence { team, cells });
        }
    }
    found
}

/// Length of the same-team run through `cell` along `dir`, counting `cell`
/// itself as if it held a chip of `team`.
pub fn run_length_through(chips: &Chips, cell: CellId, team: TeamId, dir: Direction) -> usize {
    let own = chips.of(team);
    let count_side = |sign: i8| {
        (1..)
            .map_while(|k| dir.step(cell, sign * k).filter(|&c| own.contains(c)))
            .count()
    };
    1 + count_side(1) + count_side(-1)
}

/// Whether a chip of `team` on `cell` would create a run of six or more in
/// any direction.
pub fn would_create_overshoot(chips: &Chips, cell: CellId, team: TeamId) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length_through(chips, cell, team, dir) >= OVERSHOOT_LEN)
}
