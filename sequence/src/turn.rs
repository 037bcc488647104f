use crate::{
    detect_new_sequences, is_dead_card, jack_kind, mapped_cells, sequence_cells, Action,
    ActionKind, CompletedSequence, GameState, JackKind, LastAction, Locks, Phase, Score,
    Submission, TurnError, ValidationError, Winner, NUM_CELLS,
};

/// The result of a committed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: GameState,
    /// Sequences completed by this turn.
    pub new_sequences: Vec<CompletedSequence>,
}

/// Runs all checks for `submission` by `actor`, without changing anything.
///
/// Checks happen in a fixed order and the first failure is returned: the
/// phase, whose turn it is, the version, and finally the target.
pub fn validate_action(
    state: &GameState,
    actor: &str,
    submission: &Submission,
) -> Result<(), TurnError> {
    if state.phase != Phase::Playing {
        return Err(ValidationError::WrongPhase(state.phase).into());
    }
    if actor != state.current_player {
        return Err(ValidationError::NotYourTurn {
            actor: String::from(actor),
            current: state.current_player.clone(),
        }
        .into());
    }
    if submission.expected_version != state.version {
        return Err(TurnError::Concurrency {
            expected: submission.expected_version,
            actual: state.version,
        });
    }
    validate_target(state, &submission.action)?;
    Ok(())
}

fn validate_target(state: &GameState, action: &Action) -> Result<(), ValidationError> {
    let chips = &state.chips;
    if let Some(cell) = action.cell() {
        if cell >= NUM_CELLS {
            return Err(ValidationError::CellOutOfRange(cell));
        }
    }
    let wrong_card = |card| ValidationError::WrongCardForAction {
        card,
        kind: action.kind(),
    };

    match *action {
        Action::PlayNormal { card, target } => {
            if card.is_jack() {
                return Err(wrong_card(card));
            }
            if chips.is_occupied(target) {
                return Err(ValidationError::CellOccupied(target));
            }
            if is_dead_card(card, chips) {
                return Err(ValidationError::DeadCard(card));
            }
            if !mapped_cells(card).contains(target) {
                return Err(ValidationError::CardNotMappedToCell { card, cell: target });
            }
        }
        Action::PlayJackWild { card, target } => {
            if jack_kind(card) != Some(JackKind::TwoEyed) {
                return Err(wrong_card(card));
            }
            if chips.is_occupied(target) {
                return Err(ValidationError::CellOccupied(target));
            }
            if state.locks.one_eye == Some(target) {
                return Err(ValidationError::OneEyeLocked(target));
            }
        }
        Action::PlayJackRemove { card, remove } => {
            if jack_kind(card) != Some(JackKind::OneEyed) {
                return Err(wrong_card(card));
            }
            if !chips.is_occupied(remove) {
                return Err(ValidationError::CellEmpty(remove));
            }
            if sequence_cells(&state.completed_sequences).contains(remove) {
                return Err(ValidationError::CellInSequence(remove));
            }
            if state.locks.two_eye == Some(remove) {
                return Err(ValidationError::TwoEyeLocked(remove));
            }
        }
        Action::Pass => {}
    }
    Ok(())
}

/// Validates and applies one turn, returning the next state.
///
/// `state` itself is never modified, so a rejected submission leaves nothing
/// behind. Private hands are not touched here, see [`Table`](crate::Table).
pub fn apply_action(
    state: &GameState,
    actor: &str,
    submission: &Submission,
    now_ms: u64,
) -> Result<TurnOutcome, TurnError> {
    validate_action(state, actor, submission)?;
    let team = state
        .team_of(actor)
        .ok_or_else(|| ValidationError::UnknownPlayer(String::from(actor)))?;

    let action = submission.action;
    let mut next = state.clone();

    match action {
        Action::PlayNormal { target, .. } | Action::PlayJackWild { target, .. } => {
            next.chips = next.chips.place(target, team);
            next.last_placed_cell = Some(target);
        }
        Action::PlayJackRemove { remove, .. } => {
            next.chips = next.chips.remove(remove);
            if next.last_placed_cell == Some(remove) {
                next.last_placed_cell = None;
            }
        }
        Action::Pass => {}
    }

    // Removing the end of a six-run can also complete a sequence
    let new_sequences: Vec<CompletedSequence> = if action.kind() == ActionKind::Pass {
        Vec::new()
    } else {
        detect_new_sequences(&next.chips, &next.completed_sequences)
            .into_iter()
            .map(|seq| seq.completed_at(state.turn_number))
            .collect()
    };
    next.completed_sequences.extend(new_sequences.iter().copied());
    next.score_by_team = Score::count(&next.completed_sequences);

    let target = state.config.sequences_to_win;
    let winner = [team, team.opponent()]
        .into_iter()
        .find(|&t| next.score_by_team.get(t) >= target);
    match winner {
        Some(team) => {
            next.phase = Phase::Ended;
            next.winner = Some(Winner {
                team,
                at_turn: state.turn_number,
            });
        }
        None => {
            let seat = state.next_seat();
            next.current_seat = seat;
            next.current_player = state.seating[seat as usize].uid.clone();
        }
    }

    next.locks = match action {
        Action::PlayJackRemove { remove, .. } => Locks::after_remove(remove),
        Action::PlayJackWild { target, .. } => Locks::after_wild(target),
        Action::PlayNormal { .. } | Action::Pass => Locks::cleared(),
    };

    if let Some(card) = action.card() {
        next.draw_left = next.draw_left.saturating_sub(1);
        next.discard_top_by_seat.insert(state.current_seat, card);
    }

    next.version += 1;
    next.turn_number += 1;
    next.last_action = Some(LastAction {
        uid: String::from(actor),
        kind: action.kind(),
        cell: action.cell(),
    });
    next.turn_started_at_ms = now_ms;

    Ok(TurnOutcome {
        state: next,
        new_sequences,
    })
}
