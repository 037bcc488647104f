use serde::{Deserialize, Serialize};

use crate::{
    jack_kind, playable_cells, removable_cells, wild_cells, CardId, CellSet, Chips,
    CompletedSequence, JackKind, Locks, TeamId,
};

/// The cells a selected card can act on, for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Empty cells the card may place a chip on.
    pub playable: CellSet,
    /// Chips the card may remove.
    pub removable: CellSet,
}

/// Legal targets of `card` for a player of `my_team`.
///
/// One-eyed jacks only highlight opposing chips, although the rules also
/// allow removing an own chip.
pub fn highlight_for_card(
    card: CardId,
    my_team: TeamId,
    chips: &Chips,
    completed: &[CompletedSequence],
    locks: &Locks,
) -> Highlight {
    match jack_kind(card) {
        Some(JackKind::TwoEyed) => Highlight {
            playable: wild_cells(chips, locks),
            removable: CellSet::new(),
        },
        Some(JackKind::OneEyed) => Highlight {
            playable: CellSet::new(),
            removable: removable_cells(chips, completed, locks) & chips.of(my_team.opponent()),
        },
        None => Highlight {
            playable: playable_cells(card, chips),
            removable: CellSet::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn normal_card() {
        let chips = Chips::new().place(10, TeamId::B);
        let hl = highlight_for_card(card!("clover_6_2"), TeamId::A, &chips, &[], &Locks::cleared());
        assert_eq!(Vec::from_iter(hl.playable), vec![32]);
        assert!(hl.removable.is_empty());
    }

    #[test]
    fn one_eyed_jack_targets_unprotected_opponents() {
        let chips = Chips::from_iter([(1, TeamId::A), (2, TeamId::B), (3, TeamId::B), (4, TeamId::B)]);
        let seq = CompletedSequence {
            team: TeamId::B,
            cells: [4, 14, 24, 34, 44],
            created_turn: 3,
        };
        let locks = Locks::after_wild(3);
        let hl = highlight_for_card(card!("spade_j_1"), TeamId::A, &chips, &[seq], &locks);
        assert_eq!(Vec::from_iter(hl.removable), vec![2]);
        assert!(hl.playable.is_empty());
    }

    #[test]
    fn two_eyed_jack_skips_lock() {
        let chips = Chips::new().place(0, TeamId::A);
        let hl = highlight_for_card(
            card!("diamond_j_1"),
            TeamId::B,
            &chips,
            &[],
            &Locks::after_remove(55),
        );
        assert_eq!(hl.playable.len(), 98);
        assert!(!hl.playable.contains(55));
    }
}
