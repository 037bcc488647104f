use thiserror::Error;

use crate::{ActionKind, CardId, CellId, Phase, PlayerId, TeamId};

/// Why a submitted action was rejected. The game state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no game is being played (phase is {0:?})")]
    WrongPhase(Phase),
    #[error("it is not {actor}'s turn, waiting for {current}")]
    NotYourTurn { actor: PlayerId, current: PlayerId },
    #[error("cell {0} is not on the board")]
    CellOutOfRange(CellId),
    #[error("cell {0} is already occupied")]
    CellOccupied(CellId),
    #[error("cell {0} holds no chip")]
    CellEmpty(CellId),
    #[error("cell {0} is part of a completed sequence")]
    CellInSequence(CellId),
    #[error("cell {0} was just emptied by a one-eyed jack")]
    OneEyeLocked(CellId),
    #[error("cell {0} was just filled by a two-eyed jack")]
    TwoEyeLocked(CellId),
    #[error("{card} cannot be used for {kind:?}")]
    WrongCardForAction { card: CardId, kind: ActionKind },
    #[error("{card} does not belong on cell {cell}")]
    CardNotMappedToCell { card: CardId, cell: CellId },
    #[error("{0} is a dead card")]
    DeadCard(CardId),
    #[error("{card} is not in the hand of {uid}")]
    CardNotInHand { uid: PlayerId, card: CardId },
    #[error("{0} is not playing in this game")]
    UnknownPlayer(PlayerId),
}

/// The private hand or deck could not be updated. Nothing was committed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandUpdateError {
    #[error("{card} is not in the hand of {uid}")]
    CardNotInHand { uid: PlayerId, card: CardId },
    #[error("there is no hand for {0}")]
    NoHand(PlayerId),
}

/// The error type for submitting an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The submitter saw an outdated state. Re-read and retry.
    #[error(
        "game was modified concurrently (expected version {expected}, actual version {actual}), refresh and retry"
    )]
    Concurrency { expected: u64, actual: u64 },
    #[error("hand update rejected, the turn was not committed")]
    HandUpdate(#[from] HandUpdateError),
}

impl TurnError {
    /// Whether re-reading the state and submitting again can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TurnError::Concurrency { .. })
    }
}

/// The error type for starting a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("at least 2 participants are needed, got {0}")]
    TooFewParticipants(usize),
    #[error("team {0} has no participants")]
    MissingTeam(TeamId),
    #[error("{0} is seated twice")]
    DuplicateUid(PlayerId),
    #[error("dealing needs {needed} cards but the deck only has {available}")]
    NotEnoughCards { needed: usize, available: usize },
}
