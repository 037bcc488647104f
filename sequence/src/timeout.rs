use crate::{is_dead_card, playable_cells, Action, CardId, GameState, Phase};

/// Whether the current turn ran past its deadline at `now_ms`.
pub fn is_turn_expired(state: &GameState, now_ms: u64) -> bool {
    state.phase == Phase::Playing && now_ms >= state.turn_deadline_ms()
}

/// What to play for a player who ran out of time: the first non-jack card
/// that is not dead, on its first free cell. Jacks are never spent
/// automatically. Falls back to [`Action::Pass`].
pub fn timeout_action(state: &GameState, hand: &[CardId]) -> Action {
    hand.iter()
        .filter(|card| !card.is_jack() && !is_dead_card(**card, &state.chips))
        .find_map(|&card| {
            playable_cells(card, &state.chips)
                .first()
                .map(|target| Action::PlayNormal { card, target })
        })
        .unwrap_or(Action::Pass)
}
