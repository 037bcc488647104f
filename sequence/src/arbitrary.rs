use quickcheck::{Arbitrary, Gen};

use crate::{
    detect_new_sequences, CardId, Chips, CompletedSequence, Direction, Rank, Suit,
    TeamId, Variant, ALL_RANKS, ALL_SUITS, NUM_CELLS,
};

/// A board with some chips and a consistent list of already completed
/// sequences.
///
/// Lines of five are planted on purpose, since random chips alone almost
/// never form one.
#[derive(Clone, Debug)]
pub struct SequenceBoard {
    pub chips: Chips,
    pub completed: Vec<CompletedSequence>,
}

impl Arbitrary for SequenceBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut chips = Chips::arbitrary(g);

        let num_lines = u8::arbitrary(g) % 5;
        for _ in 0..num_lines {
            let start = u8::arbitrary(g) % NUM_CELLS;
            let dir = *g.choose(&Direction::ALL).unwrap();
            let team = TeamId::arbitrary(g);
            // Sometimes make the run one longer, to exercise overshoot
            let extra = if bool::arbitrary(g) { 1 } else { 0 };
            for k in 0..(5 + extra) {
                if let Some(cell) = dir.step(start, k) {
                    chips = chips.place(cell, team);
                }
            }
        }

        let completed = detect_new_sequences(&chips, &[])
            .into_iter()
            .filter(|_| bool::arbitrary(g))
            .map(|seq| seq.completed_at(1))
            .collect();

        SequenceBoard { chips, completed }
    }
}

impl Arbitrary for TeamId {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[TeamId::A, TeamId::B]).unwrap()
    }
}

impl Arbitrary for Chips {
    fn arbitrary(g: &mut Gen) -> Self {
        // Between empty and densely filled
        let density = u8::arbitrary(g) % 80;
        let mut chips = Chips::new();
        for cell in 0..NUM_CELLS {
            if u8::arbitrary(g) % 100 < density {
                chips = chips.place(cell, TeamId::arbitrary(g));
            }
        }
        chips
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chips = *self;
        Box::new(chips.occupied().into_iter().map(move |cell| chips.remove(cell)))
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_SUITS).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_RANKS).unwrap()
    }
}

impl Arbitrary for Variant {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Variant::One, Variant::Two]).unwrap()
    }
}

impl Arbitrary for CardId {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 10 {
            0 => CardId::Jack {
                suit: Suit::arbitrary(g),
                variant: Variant::arbitrary(g),
            },
            1 => CardId::Corner {
                variant: u8::arbitrary(g) % 4 + 1,
            },
            _ => CardId::Face {
                suit: Suit::arbitrary(g),
                rank: Rank::arbitrary(g),
                variant: Variant::arbitrary(g),
            },
        }
    }
}

#[test]
fn planted_boards_contain_sequences() {
    let mut g = Gen::new(50);
    let found_any = (0..200).any(|_| {
        let board = SequenceBoard::arbitrary(&mut g);
        !detect_new_sequences(&board.chips, &[]).is_empty()
    });
    assert!(found_any);
}
