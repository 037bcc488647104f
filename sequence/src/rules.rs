use crate::{mapped_cells, CardId, CellSet, Chips};

/// A card is dead when every cell it maps to is taken. Jacks are never dead.
///
/// Dead cards stay in the hand; there is no way to exchange them.
pub fn is_dead_card(card: CardId, chips: &Chips) -> bool {
    let mapped = mapped_cells(card);
    !mapped.is_empty() && (mapped - chips.occupied()).is_empty()
}

/// The dead cards of a hand, in hand order.
pub fn find_dead_cards(hand: &[CardId], chips: &Chips) -> Vec<CardId> {
    hand.iter()
        .copied()
        .filter(|&card| is_dead_card(card, chips))
        .collect()
}

/// Unoccupied cells that `card` may be placed on. Always empty for jacks.
pub fn playable_cells(card: CardId, chips: &Chips) -> CellSet {
    mapped_cells(card) - chips.occupied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, TeamId, CORNER_CELLS};

    #[test]
    fn dead_when_both_cells_taken() {
        let card = card!("clover_6_1");
        let one = Chips::new().place(10, TeamId::A);
        assert!(!is_dead_card(card, &one));
        assert_eq!(Vec::from_iter(playable_cells(card, &one)), vec![32]);

        let both = one.place(32, TeamId::B);
        assert!(is_dead_card(card, &both));
        assert!(playable_cells(card, &both).is_empty());
    }

    #[test]
    fn corner_needs_all_four_corners() {
        let card = card!("o_o_2");
        let mut chips = Chips::new();
        for &cell in &CORNER_CELLS[..3] {
            chips = chips.place(cell, TeamId::A);
            assert!(!is_dead_card(card, &chips));
        }
        chips = chips.place(CORNER_CELLS[3], TeamId::B);
        assert!(is_dead_card(card, &chips));
    }

    #[test]
    fn jacks_are_never_dead() {
        let full = crate::CellSet::full()
            .into_iter()
            .map(|cell| (cell, TeamId::A))
            .collect::<Chips>();
        assert!(!is_dead_card(card!("heart_j_1"), &full));
        assert!(is_dead_card(card!("heart_2_1"), &full));
    }

    #[test]
    fn dead_cards_of_hand() {
        let chips = Chips::from_iter([(20, TeamId::A), (42, TeamId::A), (10, TeamId::B)]);
        let hand = [
            card!("clover_7_1"),
            card!("clover_6_2"),
            card!("spade_j_1"),
            card!("clover_7_2"),
        ];
        assert_eq!(
            find_dead_cards(&hand, &chips),
            vec![card!("clover_7_1"), card!("clover_7_2")]
        );
    }

    quickcheck::quickcheck! {
        fn dead_iff_all_mapped_occupied(card: CardId, chips: Chips) -> bool {
            let mapped = mapped_cells(card);
            let all_taken = mapped.into_iter().all(|cell| chips.is_occupied(cell));
            is_dead_card(card, &chips) == (!card.is_jack() && all_taken)
        }

        fn playable_never_occupied(card: CardId, chips: Chips) -> bool {
            playable_cells(card, &chips)
                .into_iter()
                .all(|cell| !chips.is_occupied(cell))
        }
    }
}
