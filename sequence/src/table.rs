use std::collections::BTreeMap;

use parking_lot::Mutex;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    apply_action, deal, is_turn_expired, timeout_action, CardId, CompletedSequence, GameConfig,
    GameState, HandUpdateError, Participant, PlayerId, PrivateDeck, PrivateHand, SetupError,
    Submission, TurnError, ValidationError,
};

/// Everything about one game, public and private.
struct TableRecord {
    state: GameState,
    hands: BTreeMap<PlayerId, PrivateHand>,
    deck: PrivateDeck,
}

impl TableRecord {
    /// Applies one turn to the public state, the hand and the deck, or to
    /// none of them.
    fn commit(
        &mut self,
        uid: &str,
        submission: Submission,
        now_ms: u64,
    ) -> Result<Committed, TurnError> {
        let TableRecord { state, hands, deck } = self;

        let outcome = apply_action(state, uid, &submission, now_ms)?;

        let drawn = match submission.action.card() {
            None => None,
            Some(card) => {
                let hand = hands
                    .get_mut(uid)
                    .ok_or_else(|| HandUpdateError::NoHand(String::from(uid)))?;
                if !hand.cards.contains(&card) {
                    return Err(ValidationError::CardNotInHand {
                        uid: String::from(uid),
                        card,
                    }
                    .into());
                }
                deck.settle_play(hand, card)?
            }
        };

        *state = outcome.state;
        debug!(
            uid,
            version = state.version,
            action = ?submission.action,
            new_sequences = outcome.new_sequences.len(),
            "Turn committed"
        );
        if let Some(winner) = state.winner {
            info!(team = %winner.team, at_turn = winner.at_turn, "Game won");
        }
        Ok(Committed {
            state: state.clone(),
            new_sequences: outcome.new_sequences,
            drawn,
        })
    }
}

/// A game in progress.
///
/// This owns the public [`GameState`], the private hands and the dealer's
/// deck, and is the only place they change. All of them are updated together
/// under one lock, with the state's `version` as compare-and-swap guard:
/// either the whole turn commits or nothing does.
///
/// Callers only ever get copies ([`Table::snapshot`], [`Table::hand`]).
pub struct Table {
    record: Mutex<TableRecord>,
}

/// A committed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed {
    pub state: GameState,
    pub new_sequences: Vec<CompletedSequence>,
    /// The replacement card the actor drew, if any.
    pub drawn: Option<CardId>,
}

impl Table {
    /// Seats the participants, deals, and starts the game.
    pub fn start<R: Rng + ?Sized>(
        participants: &[Participant],
        config: GameConfig,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<Self, SetupError> {
        // Validates the participants before any card is dealt
        let mut state = GameState::new(participants, config, 0, now_ms)?;
        let (deck, hands) = deal(&state.seating, config.hand_size, rng)?;
        state.draw_left = deck.draw_pile.len();
        info!(
            players = state.seating.len(),
            first = %state.current_player,
            draw_left = state.draw_left,
            "Game started"
        );
        Ok(Self {
            record: Mutex::new(TableRecord {
                state,
                hands: hands.into_iter().map(|h| (h.uid.clone(), h)).collect(),
                deck,
            }),
        })
    }

    pub fn snapshot(&self) -> GameState {
        self.record.lock().state.clone()
    }

    /// The private hand of `uid`, if they play in this game.
    pub fn hand(&self, uid: &str) -> Option<PrivateHand> {
        self.record.lock().hands.get(uid).cloned()
    }

    /// Validates and commits one turn by `uid`.
    ///
    /// A [`TurnError::Concurrency`] means another submission for the same
    /// version won; the caller should take a new snapshot and decide again.
    pub fn submit(
        &self,
        uid: &str,
        submission: Submission,
        now_ms: u64,
    ) -> Result<Committed, TurnError> {
        self.record.lock().commit(uid, submission, now_ms)
    }

    /// Plays the current turn automatically if its deadline has passed.
    ///
    /// `expected_version` is the version the timer was armed for. If any
    /// turn was committed since, this fails with [`TurnError::Concurrency`]
    /// instead of playing twice. Returns `Ok(None)` when the turn has not
    /// expired.
    pub fn expire_turn(
        &self,
        expected_version: u64,
        now_ms: u64,
    ) -> Result<Option<Committed>, TurnError> {
        let mut record = self.record.lock();
        if record.state.version != expected_version {
            return Err(TurnError::Concurrency {
                expected: expected_version,
                actual: record.state.version,
            });
        }
        if !is_turn_expired(&record.state, now_ms) {
            return Ok(None);
        }
        let uid = record.state.current_player.clone();
        let hand = record
            .hands
            .get(&uid)
            .map(|h| h.cards.as_slice())
            .unwrap_or_default();
        let action = timeout_action(&record.state, hand);
        info!(%uid, ?action, "Turn timed out, playing fallback");
        let submission = Submission {
            expected_version,
            action,
        };
        record.commit(&uid, submission, now_ms).map(Some)
    }

    /// Cards left in the draw pile.
    pub fn draw_pile_len(&self) -> usize {
        self.record.lock().deck.draw_pile.len()
    }
}
