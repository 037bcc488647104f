use sequence::{Action, PlayerId, TurnError};

#[derive(Debug)]
/// A bot reply that the table rejected.
pub struct IllegalMove {
    /// Which of the two bots in the matchup made it.
    pub side: usize,
    pub uid: PlayerId,
    pub action: Action,
    pub err: TurnError,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tried an illegal move: {:?}", self.uid, self.action)
    }
}
