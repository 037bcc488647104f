//! Line evaluation on the board, from the point of view of one team.
use sequence::{
    detect_new_sequences, playable_cells, sequence_cells, window, would_create_overshoot, CardId,
    CellId, CellSet, Chips, CompletedSequence, Direction, TeamId, NUM_CELLS, SEQUENCE_LEN,
};

/// Every five-cell window on the board that contains `cell`, with the
/// direction it runs in.
fn windows_through(cell: CellId) -> impl Iterator<Item = ([CellId; SEQUENCE_LEN], Direction)> {
    Direction::ALL.into_iter().flat_map(move |dir| {
        (0..SEQUENCE_LEN as i8).filter_map(move |back| {
            let start = dir.step(cell, -back)?;
            window(start, dir).map(|cells| (cells, dir))
        })
    })
}

fn count_in(cells: &[CellId], set: CellSet) -> usize {
    cells.iter().filter(|&&c| set.contains(c)).count()
}

/// The longest line `team` would have through `cell` after placing a chip
/// there: the most own chips in a window through `cell` that holds no
/// opposing chip and is not extended by an own chip on either side. At
/// least 1, for the placed chip itself.
pub fn line_after_place(chips: &Chips, cell: CellId, team: TeamId) -> usize {
    let placed = chips.place(cell, team);
    let own = placed.of(team);
    let enemy = placed.of(team.opponent());

    windows_through(cell)
        .filter(|(cells, _)| count_in(cells, enemy) == 0)
        .filter(|(cells, dir)| {
            let before = dir.step(cells[0], -1);
            let after = dir.step(cells[SEQUENCE_LEN - 1], 1);
            [before, after]
                .into_iter()
                .flatten()
                .all(|c| !own.contains(c))
        })
        .map(|(cells, _)| count_in(&cells, own))
        .fold(1, usize::max)
}

/// The most `team.opponent()` chips in a window through `cell` that holds
/// none of `team`'s chips.
pub fn max_enemy_line_at(chips: &Chips, cell: CellId, team: TeamId) -> usize {
    let own = chips.of(team);
    let enemy = chips.of(team.opponent());
    windows_through(cell)
        .filter(|(cells, _)| count_in(cells, own) == 0)
        .map(|(cells, _)| count_in(&cells, enemy))
        .max()
        .unwrap_or(0)
}

/// Empty cells of every window where `enemy` has at least `min_count` chips
/// and the other team has none.
pub fn threat_cells(chips: &Chips, enemy: TeamId, min_count: usize) -> CellSet {
    let theirs = chips.of(enemy);
    let ours = chips.of(enemy.opponent());
    let empty = chips.empty_cells();

    let mut threats = CellSet::new();
    for start in 0..NUM_CELLS {
        for dir in Direction::ALL {
            let Some(cells) = window(start, dir) else {
                continue;
            };
            if count_in(&cells, ours) == 0 && count_in(&cells, theirs) >= min_count {
                for c in cells.into_iter().filter(|&c| empty.contains(c)) {
                    threats = threats.insert(c);
                }
            }
        }
    }
    threats
}

/// What `team` stands to gain by emptying `cell` and then putting one of
/// its own chips there with a normal card from `hand`: 30 for a line of
/// five, 10 for four, 3 for three, otherwise 0.
pub fn removal_gain(chips: &Chips, cell: CellId, team: TeamId, hand: &[CardId]) -> u32 {
    let after = chips.remove(cell);
    let can_place = hand
        .iter()
        .any(|&card| !card.is_jack() && playable_cells(card, &after).contains(cell));
    if !can_place || would_create_overshoot(&after, cell, team) {
        return 0;
    }
    match line_after_place(&after, cell, team) {
        5.. => 30,
        4 => 10,
        3 => 3,
        _ => 0,
    }
}

/// Combined value of removing the opposing chip on `cell`: how threatening
/// its line is, plus what `team` gains afterwards.
pub fn removal_score(chips: &Chips, cell: CellId, team: TeamId, hand: &[CardId]) -> u32 {
    max_enemy_line_at(chips, cell, team) as u32 * 5 + removal_gain(chips, cell, team, hand)
}

/// Whether a chip of `team` on `cell` completes a new sequence for `team`.
pub fn completes_sequence(
    chips: &Chips,
    completed: &[CompletedSequence],
    cell: CellId,
    team: TeamId,
) -> bool {
    detect_new_sequences(&chips.place(cell, team), completed)
        .iter()
        .any(|s| s.team == team)
}

/// An end chip of a run of six or more own chips whose removal leaves a new
/// sequence for `team`. Chips in completed sequences and `locked` are never
/// picked.
pub fn repair_cell(
    chips: &Chips,
    completed: &[CompletedSequence],
    team: TeamId,
    locked: Option<CellId>,
) -> Option<CellId> {
    let own = chips.of(team);
    let in_sequence = sequence_cells(completed);

    for dir in Direction::ALL {
        for start in own {
            // Only look at runs from their first cell
            if dir.step(start, -1).is_some_and(|c| own.contains(c)) {
                continue;
            }
            let run_len = 1 + (1..)
                .map_while(|k| dir.step(start, k).filter(|&c| own.contains(c)))
                .count();
            if run_len <= SEQUENCE_LEN {
                continue;
            }
            let Some(end) = dir.step(start, run_len as i8 - 1) else {
                continue;
            };
            for cell in [start, end] {
                if in_sequence.contains(cell) || locked == Some(cell) {
                    continue;
                }
                let repaired = detect_new_sequences(&chips.remove(cell), completed)
                    .iter()
                    .any(|s| s.team == team);
                if repaired {
                    return Some(cell);
                }
            }
        }
    }
    None
}
