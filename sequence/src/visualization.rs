use crate::{cell_at, sequence_cells, Chips, CompletedSequence, TeamId, BOARD_SIZE, CORNER_CELLS};

/// Renders the board as text.
///
/// Chips are `a`/`b`, or `A`/`B` when part of a completed sequence. Free
/// corners are `◇`, other empty cells `·`.
pub fn visualize_board(chips: &Chips, completed: &[CompletedSequence]) -> String {
    let in_sequence = sequence_cells(completed);

    let mut result = String::from("   ");
    for col in 0..BOARD_SIZE {
        result += &format!(" {}", col);
    }
    result += "\n   ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for row in 0..BOARD_SIZE as i8 {
        result += &format!("{:>2} │", row);
        for col in 0..BOARD_SIZE as i8 {
            let Some(cell) = cell_at(row, col) else {
                continue;
            };
            let symbol = match (chips.team_at(cell), in_sequence.contains(cell)) {
                (Some(TeamId::A), false) => 'a',
                (Some(TeamId::A), true) => 'A',
                (Some(TeamId::B), false) => 'b',
                (Some(TeamId::B), true) => 'B',
                (None, _) if CORNER_CELLS.contains(&cell) => '◇',
                (None, _) => '·',
            };
            result.push(' ');
            result.push(symbol);
        }
        result += " │\n";
    }

    result += "   ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_sequences_and_corners() {
        let chips = Chips::from_iter([0, 1, 2, 3, 4].map(|c| (c, TeamId::A))).place(55, TeamId::B);
        let seq = CompletedSequence {
            team: TeamId::A,
            cells: [0, 1, 2, 3, 4],
            created_turn: 1,
        };
        let text = visualize_board(&chips, &[seq]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 10 + 1);
        assert_eq!(lines[2], " 0 │ A A A A A · · · · ◇ │");
        assert_eq!(lines[7], " 5 │ · · · · · b · · · · │");
        assert_eq!(lines[11], " 9 │ ◇ · · · · · · · · ◇ │");
    }
}
