use std::collections::BTreeSet;

use crate::{
    jack_kind, playable_cells, removable_cells, wild_cells, Action, CardId, GameState, JackKind,
};

/// Every action the hand allows in `state`, in hand order then cell order.
///
/// Duplicate cards contribute once. When nothing can be played the result
/// is just [`Action::Pass`].
pub fn legal_actions(state: &GameState, hand: &[CardId]) -> Vec<Action> {
    let chips = &state.chips;
    let mut seen = BTreeSet::new();
    let mut actions = Vec::new();

    for &card in hand {
        if !seen.insert(card) {
            continue;
        }
        match jack_kind(card) {
            Some(JackKind::TwoEyed) => actions.extend(
                wild_cells(chips, &state.locks)
                    .into_iter()
                    .map(|target| Action::PlayJackWild { card, target }),
            ),
            Some(JackKind::OneEyed) => actions.extend(
                removable_cells(chips, &state.completed_sequences, &state.locks)
                    .into_iter()
                    .map(|remove| Action::PlayJackRemove { card, remove }),
            ),
            None => actions.extend(
                playable_cells(card, chips)
                    .into_iter()
                    .map(|target| Action::PlayNormal { card, target }),
            ),
        }
    }

    if actions.is_empty() {
        actions.push(Action::Pass);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::participant;
    use crate::{apply_action, card, Chips, GameConfig, Submission, TeamId};

    fn game() -> GameState {
        let participants = [participant("a", 0, TeamId::A), participant("b", 1, TeamId::B)];
        GameState::new(&participants, GameConfig::default(), 96, 0).unwrap()
    }

    #[test]
    fn lists_cells_per_card() {
        let mut state = game();
        state.chips = Chips::from_iter([(10, TeamId::B), (50, TeamId::A)]);
        let hand = [card!("clover_6_1"), card!("clover_6_2"), card!("spade_j_1")];
        let actions = legal_actions(&state, &hand);
        assert_eq!(
            actions,
            vec![
                Action::PlayNormal { card: card!("clover_6_1"), target: 32 },
                Action::PlayNormal { card: card!("clover_6_2"), target: 32 },
                Action::PlayJackRemove { card: card!("spade_j_1"), remove: 10 },
                Action::PlayJackRemove { card: card!("spade_j_1"), remove: 50 },
            ]
        );
    }

    #[test]
    fn dead_hand_can_only_pass() {
        let mut state = game();
        state.chips = Chips::from_iter([(10, TeamId::B), (32, TeamId::A)]);
        assert_eq!(legal_actions(&state, &[card!("clover_6_1")]), vec![Action::Pass]);
        assert_eq!(legal_actions(&state, &[]), vec![Action::Pass]);
    }

    quickcheck::quickcheck! {
        fn legal_actions_are_accepted(chips: Chips, hand: Vec<CardId>) -> bool {
            let mut state = game();
            state.chips = chips;
            legal_actions(&state, &hand).into_iter().all(|action| {
                let submission = Submission { expected_version: state.version, action };
                apply_action(&state, "a", &submission, 0).is_ok()
            })
        }
    }
}
