use serde::{Deserialize, Serialize};

use crate::{CardId, CellId};

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Place a chip on one of the card's board cells.
    PlayNormal { card: CardId, target: CellId },
    /// Place a chip anywhere with a two-eyed jack.
    PlayJackWild { card: CardId, target: CellId },
    /// Remove a chip with a one-eyed jack.
    PlayJackRemove { card: CardId, remove: CellId },
    /// Skip the turn. Used when the turn timer runs out.
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    PlayNormal,
    PlayJackWild,
    PlayJackRemove,
    Pass,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::PlayNormal { .. } => ActionKind::PlayNormal,
            Action::PlayJackWild { .. } => ActionKind::PlayJackWild,
            Action::PlayJackRemove { .. } => ActionKind::PlayJackRemove,
            Action::Pass => ActionKind::Pass,
        }
    }

    /// The card leaving the hand, if any.
    pub fn card(&self) -> Option<CardId> {
        match *self {
            Action::PlayNormal { card, .. }
            | Action::PlayJackWild { card, .. }
            | Action::PlayJackRemove { card, .. } => Some(card),
            Action::Pass => None,
        }
    }

    /// The cell acted on, if any.
    pub fn cell(&self) -> Option<CellId> {
        match *self {
            Action::PlayNormal { target, .. } | Action::PlayJackWild { target, .. } => Some(target),
            Action::PlayJackRemove { remove, .. } => Some(remove),
            Action::Pass => None,
        }
    }
}

/// An action together with the state version it was chosen against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub expected_version: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn wire_format() {
        let sub = Submission {
            expected_version: 7,
            action: Action::PlayJackRemove {
                card: card!("spade_j_1"),
                remove: 33,
            },
        };
        let json = serde_json::to_string(&sub).unwrap();
        assert_eq!(
            json,
            r#"{"expected_version":7,"type":"PLAY_JACK_REMOVE","card":"spade_j_1","remove":33}"#
        );
        assert_eq!(serde_json::from_str::<Submission>(&json).unwrap(), sub);

        let pass: Action = serde_json::from_str(r#"{"type":"PASS"}"#).unwrap();
        assert_eq!(pass, Action::Pass);
        assert_eq!(pass.card(), None);
    }
}
