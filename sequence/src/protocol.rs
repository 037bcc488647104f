use serde::{Deserialize, Serialize};

use crate::{CardId, GameState, PlayerId, TeamId};

/// Request for a bot to do something.
///
/// Bots read one JSON request per line from stdin and answer with one JSON
/// line on stdout.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame {
        /// The team the bot plays for.
        team: TeamId,
        /// The bot's identity in this game.
        uid: PlayerId,
    },
    /// Request to play the bot's turn.
    ///
    /// The response should be an [`Action`](crate::Action), which the judge
    /// submits against `state.version`.
    PlayTurn {
        /// A snapshot of the public state. It is always the bot's turn.
        state: GameState,
        /// The bot's private hand.
        hand: Vec<CardId>,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// The uid under which a bot plays, derived from its nickname.
pub fn bot_uid(nick: &str) -> PlayerId {
    let slug: String = nick
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("bot_{}", slug)
}
