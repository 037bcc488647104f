use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;
use sequence::{
    bot_uid, visualize_board, Action, ActionKind, GameConfig, Okay, Participant, Request,
    Submission, Table, TeamId,
};
use tracing::{debug, warn};

use crate::error::IllegalMove;
use crate::player::Player;
use crate::recording::Recorder;

/// How the judge sets up each game.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub players_per_team: usize,
    /// The game is a draw once this many turns were played without a winner.
    pub max_turns: u32,
    pub config: GameConfig,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            players_per_team: 2,
            max_turns: 1000,
            config: GameConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// Every seat passed in a row.
    AllPassed,
    TurnLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonBySide { side: usize, team: TeamId },
    Draw(DrawReason),
}

#[derive(Debug)]
pub struct GameReport {
    pub result: GameResult,
    /// Turns played.
    pub turns: u32,
    /// Replies that were replaced by the fallback move.
    pub illegal_moves: Vec<IllegalMove>,
}

/// Plays one game between the bots of `sides[0]` and `sides[1]`, each side
/// being one team.
///
/// Every turn goes through [`Table::submit`]. A reply the table rejects is
/// reported in [`GameReport::illegal_moves`] and the turn is played with the
/// timeout fallback instead. Returns an error only on communication failure.
pub fn play_game(
    rng: &mut StdRng,
    mut sides: [&mut [Player]; 2],
    settings: &GameSettings,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameReport> {
    if sides.iter().any(|s| s.len() != settings.players_per_team) {
        anyhow::bail!(
            "Expected {} players per side, got {} and {}",
            settings.players_per_team,
            sides[0].len(),
            sides[1].len()
        );
    }

    // Team A moves first, so pick it randomly
    let teams = if rng.gen::<bool>() {
        [TeamId::A, TeamId::B]
    } else {
        [TeamId::B, TeamId::A]
    };

    let mut participants = Vec::new();
    let mut seats: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for (side, &team) in teams.iter().enumerate() {
        for k in 0..settings.players_per_team {
            let uid = bot_uid(&format!("{} {}", team, k + 1));
            seats.insert(uid.clone(), (side, k));
            participants.push(Participant {
                uid,
                seat: k as u8,
                team,
            });
        }
    }

    let table = Table::start(&participants, settings.config, rng, 0)?;

    // Inform the players about the new game, so that they can reset their state
    for p in &participants {
        let (side, k) = seats[&p.uid];
        let _: Okay = sides[side][k].perform_request(
            recorder,
            &Request::NewGame {
                team: p.team,
                uid: p.uid.clone(),
            },
        )?;
    }

    let mut illegal_moves = Vec::new();
    let mut passes_in_a_row = 0;
    let result = loop {
        let state = table.snapshot();
        if let Some(winner) = state.winner {
            let side = teams.iter().position(|&t| t == winner.team).unwrap_or(0);
            break GameResult::WonBySide {
                side,
                team: winner.team,
            };
        }
        if passes_in_a_row >= state.seating.len() {
            break GameResult::Draw(DrawReason::AllPassed);
        }
        if state.turn_number > settings.max_turns {
            break GameResult::Draw(DrawReason::TurnLimit);
        }

        let uid = state.current_player.clone();
        let Some(&(side, k)) = seats.get(&uid) else {
            anyhow::bail!("No player seated as {}", uid);
        };
        let hand = table.hand(&uid).map(|h| h.cards).unwrap_or_default();
        let version = state.version;
        // One millisecond per turn, so the turn timer never runs out by itself
        let now_ms = state.turn_started_at_ms + 1;

        let action: Action = sides[side][k].perform_request(
            recorder,
            &Request::PlayTurn { state, hand },
        )?;

        let submission = Submission {
            expected_version: version,
            action,
        };
        let committed = match table.submit(&uid, submission, now_ms) {
            Ok(committed) => committed,
            Err(err) => {
                warn!(%uid, ?action, %err, "Illegal move, playing the fallback");
                illegal_moves.push(IllegalMove {
                    side,
                    uid: uid.clone(),
                    action,
                    err,
                });
                let deadline = table.snapshot().turn_deadline_ms();
                match table.expire_turn(version, deadline)? {
                    Some(committed) => committed,
                    None => anyhow::bail!("Turn of {} did not expire at {}", uid, deadline),
                }
            }
        };

        let passed = committed
            .state
            .last_action
            .as_ref()
            .is_some_and(|a| a.kind == ActionKind::Pass);
        passes_in_a_row = if passed { passes_in_a_row + 1 } else { 0 };
    };

    let state = table.snapshot();
    debug!(
        ?result,
        turns = state.turn_number - 1,
        "Game over\n{}",
        visualize_board(&state.chips, &state.completed_sequences)
    );

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    Ok(GameReport {
        result,
        turns: state.turn_number - 1,
        illegal_moves,
    })
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use sequence::{legal_actions, CardId, GameState};
    use sequence_bot_utils::{serve, Bot};

    use super::*;
    use crate::player::Connection;

    /// Runs a bot in the judge's own process.
    struct InProcess<B: Bot> {
        bot: B,
        pending: Option<String>,
    }

    impl<B: Bot> Connection for InProcess<B> {
        fn send(&mut self, line: &str) -> anyhow::Result<()> {
            self.pending = Some(format!("{}\n", line));
            Ok(())
        }

        fn receive(&mut self) -> anyhow::Result<String> {
            let input = self.pending.take().unwrap_or_default();
            let mut output = Vec::new();
            serve(&mut self.bot, input.as_bytes(), &mut output)?;
            Ok(String::from(String::from_utf8(output)?.trim_end()))
        }
    }

    fn player<B: Bot + 'static>(name: &str, bot: B) -> Player {
        Player::new(
            name,
            Box::new(InProcess {
                bot,
                pending: None,
            }),
        )
    }

    struct Heuristic;

    impl Bot for Heuristic {
        fn new_game(&mut self, _team: TeamId, _uid: &str) {}

        fn play_turn(&mut self, state: GameState, hand: Vec<CardId>) -> Action {
            heuristic_bot::decide(&state, &hand)
        }
    }

    struct Random(StdRng);

    impl Bot for Random {
        fn new_game(&mut self, _team: TeamId, _uid: &str) {}

        fn play_turn(&mut self, state: GameState, hand: Vec<CardId>) -> Action {
            *legal_actions(&state, &hand)
                .choose(&mut self.0)
                .unwrap_or(&Action::Pass)
        }
    }

    struct Passer;

    impl Bot for Passer {
        fn new_game(&mut self, _team: TeamId, _uid: &str) {}

        fn play_turn(&mut self, _state: GameState, _hand: Vec<CardId>) -> Action {
            Action::Pass
        }
    }

    /// Always tries to remove the top left corner with a card that is no jack.
    struct Cheater;

    impl Bot for Cheater {
        fn new_game(&mut self, _team: TeamId, _uid: &str) {}

        fn play_turn(&mut self, _state: GameState, _hand: Vec<CardId>) -> Action {
            Action::PlayJackRemove {
                card: CardId::Corner { variant: 1 },
                remove: 0,
            }
        }
    }

    fn team_of<B: Bot + 'static>(name: &str, n: usize, make: impl Fn(usize) -> B) -> Vec<Player> {
        (0..n).map(|k| player(name, make(k))).collect()
    }

    #[test]
    fn heuristic_against_random_finishes() {
        let settings = GameSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut heuristic = team_of("Heuristic", 2, |_| Heuristic);
        let mut random = team_of("Random", 2, |k| Random(StdRng::seed_from_u64(k as u64)));

        let report = play_game(
            &mut rng,
            [&mut heuristic, &mut random],
            &settings,
            &mut None,
        )
        .unwrap();
        assert!(report.turns <= settings.max_turns);
        assert!(report.illegal_moves.is_empty());
        if let GameResult::WonBySide { side, .. } = report.result {
            assert!(side < 2);
        }
    }

    #[test]
    fn all_passing_is_a_draw() {
        let settings = GameSettings::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut side_0 = team_of("Passer", 2, |_| Passer);
        let mut side_1 = team_of("Passer", 2, |_| Passer);

        let report = play_game(&mut rng, [&mut side_0, &mut side_1], &settings, &mut None).unwrap();
        assert_eq!(report.result, GameResult::Draw(DrawReason::AllPassed));
        assert_eq!(report.turns, 4);
    }

    #[test]
    fn turn_limit_is_a_draw() {
        let settings = GameSettings {
            players_per_team: 1,
            max_turns: 3,
            ..GameSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut side_0 = team_of("Heuristic", 1, |_| Heuristic);
        let mut side_1 = team_of("Heuristic", 1, |_| Heuristic);

        let report = play_game(&mut rng, [&mut side_0, &mut side_1], &settings, &mut None).unwrap();
        assert_eq!(report.result, GameResult::Draw(DrawReason::TurnLimit));
        assert_eq!(report.turns, 3);
    }

    #[test]
    fn illegal_moves_are_replaced() {
        let settings = GameSettings {
            players_per_team: 1,
            max_turns: 10,
            ..GameSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut cheater = team_of("Cheater", 1, |_| Cheater);
        let mut honest = team_of("Heuristic", 1, |_| Heuristic);

        let report = play_game(&mut rng, [&mut cheater, &mut honest], &settings, &mut None).unwrap();
        assert_eq!(report.turns, 10);
        assert_eq!(report.illegal_moves.len(), 5);
        assert!(report.illegal_moves.iter().all(|m| m.side == 0));
    }

    #[test]
    fn sides_must_be_full() {
        let settings = GameSettings::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut side_0 = team_of("Passer", 1, |_| Passer);
        let mut side_1 = team_of("Passer", 2, |_| Passer);
        assert!(play_game(&mut rng, [&mut side_0, &mut side_1], &settings, &mut None).is_err());
    }
}
