use serde::{Deserialize, Serialize};

use crate::{sequence_cells, CardId, CellId, CellSet, Chips, CompletedSequence, Suit};

/// The role of a jack, decided by its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JackKind {
    /// Clover and diamond jacks: place a chip on any empty cell.
    TwoEyed,
    /// Spade and heart jacks: remove a chip that is not part of a sequence.
    OneEyed,
}

pub fn jack_kind(card: CardId) -> Option<JackKind> {
    match card {
        CardId::Jack {
            suit: Suit::Clover | Suit::Diamond,
            ..
        } => Some(JackKind::TwoEyed),
        CardId::Jack {
            suit: Suit::Spade | Suit::Heart,
            ..
        } => Some(JackKind::OneEyed),
        _ => None,
    }
}

pub fn is_two_eyed_jack(card: CardId) -> bool {
    jack_kind(card) == Some(JackKind::TwoEyed)
}

pub fn is_one_eyed_jack(card: CardId) -> bool {
    jack_kind(card) == Some(JackKind::OneEyed)
}

/// Cells protected from an immediate counter-move by the next player.
///
/// Both fields are rewritten by every committed action, so a lock lives for
/// exactly one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locks {
    /// Emptied by a one-eyed jack; no wild placement here.
    pub one_eye: Option<CellId>,
    /// Filled by a two-eyed jack; no removal here.
    pub two_eye: Option<CellId>,
}

impl Locks {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn after_remove(cell: CellId) -> Self {
        Self {
            one_eye: Some(cell),
            two_eye: None,
        }
    }

    pub fn after_wild(cell: CellId) -> Self {
        Self {
            one_eye: None,
            two_eye: Some(cell),
        }
    }
}

fn without(set: CellSet, cell: Option<CellId>) -> CellSet {
    match cell {
        Some(cell) => set.remove(cell),
        None => set,
    }
}

/// Cells a two-eyed jack may target.
pub fn wild_cells(chips: &Chips, locks: &Locks) -> CellSet {
    without(chips.empty_cells(), locks.one_eye)
}

/// Cells a one-eyed jack may target: any chip outside completed sequences,
/// except the two-eye-locked one.
pub fn removable_cells(chips: &Chips, completed: &[CompletedSequence], locks: &Locks) -> CellSet {
    without(chips.occupied() - sequence_cells(completed), locks.two_eye)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, create_deck, TeamId};

    #[test]
    fn roles_by_suit() {
        assert_eq!(jack_kind(card!("clover_j_1")), Some(JackKind::TwoEyed));
        assert_eq!(jack_kind(card!("diamond_j_2")), Some(JackKind::TwoEyed));
        assert_eq!(jack_kind(card!("spade_j_1")), Some(JackKind::OneEyed));
        assert_eq!(jack_kind(card!("heart_j_2")), Some(JackKind::OneEyed));
        assert_eq!(jack_kind(card!("heart_q_2")), None);
        assert_eq!(jack_kind(card!("o_o_1")), None);
    }

    #[test]
    fn every_jack_has_exactly_one_role() {
        let jacks: Vec<CardId> = create_deck().into_iter().filter(|c| c.is_jack()).collect();
        assert_eq!(jacks.len(), 8);
        for jack in &jacks {
            assert!(is_two_eyed_jack(*jack) != is_one_eyed_jack(*jack));
        }
        assert_eq!(jacks.iter().filter(|&&j| is_two_eyed_jack(j)).count(), 4);
    }

    #[test]
    fn locks_restrict_targets() {
        let chips = Chips::from_iter([(11, TeamId::A), (12, TeamId::B), (13, TeamId::B)]);
        let seq = CompletedSequence {
            team: TeamId::B,
            cells: [13, 23, 33, 43, 53],
            created_turn: 1,
        };
        let locks = Locks {
            one_eye: Some(50),
            two_eye: Some(12),
        };
        let wild = wild_cells(&chips, &locks);
        assert!(!wild.contains(50) && !wild.contains(11) && wild.contains(51));
        assert_eq!(wild.len(), 100 - 3 - 1);

        let removable = removable_cells(&chips, &[seq], &locks);
        assert_eq!(Vec::from_iter(removable), vec![11]);
        assert_eq!(
            Vec::from_iter(removable_cells(&chips, &[seq], &Locks::cleared())),
            vec![11, 12]
        );
    }
}
