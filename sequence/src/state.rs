use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    count_sequences_by_team, ActionKind, CardId, CellId, Chips, CompletedSequence, Locks,
    SetupError, TeamId,
};

/// Players are identified by an opaque string handed out by the lobby.
pub type PlayerId = String;

/// A seated player, as supplied by the lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub uid: PlayerId,
    pub seat: u8,
    pub team: TeamId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Playing,
    Ended,
}

/// Tunable rules of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A team wins once it has this many completed sequences.
    pub sequences_to_win: usize,
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Length of a turn before the timeout fallback may play it.
    pub turn_seconds: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sequences_to_win: 2,
            hand_size: 6,
            turn_seconds: 30,
        }
    }
}

/// Completed sequences per team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "B")]
    pub b: usize,
}

impl Score {
    pub fn count(completed: &[CompletedSequence]) -> Self {
        Self {
            a: count_sequences_by_team(completed, TeamId::A),
            b: count_sequences_by_team(completed, TeamId::B),
        }
    }

    pub fn get(&self, team: TeamId) -> usize {
        match team {
            TeamId::A => self.a,
            TeamId::B => self.b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub team: TeamId,
    pub at_turn: u32,
}

/// The most recent committed action, for audit and animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    pub uid: PlayerId,
    pub kind: ActionKind,
    pub cell: Option<CellId>,
}

/// The public state of one game, visible to every player.
///
/// It only changes through [`apply_action`](crate::apply_action), which
/// produces a new value with `version` one higher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub version: u64,
    pub phase: Phase,
    pub turn_number: u32,
    pub current_player: PlayerId,
    pub current_seat: u8,
    /// Participants in turn order; `seat` is the index in this list.
    pub seating: Vec<Participant>,
    pub chips: Chips,
    pub completed_sequences: Vec<CompletedSequence>,
    /// Last card discarded from each seat. Seats that have not played are absent.
    pub discard_top_by_seat: BTreeMap<u8, CardId>,
    pub score_by_team: Score,
    pub draw_left: usize,
    pub locks: Locks,
    pub winner: Option<Winner>,
    pub last_action: Option<LastAction>,
    pub last_placed_cell: Option<CellId>,
    pub turn_started_at_ms: u64,
    pub config: GameConfig,
}

/// Orders participants for play: team A and team B each sorted by seat,
/// then interleaved A, B, A, B… Leftover players of a larger team go last.
/// Seats are renumbered to the position in the result.
pub fn seating_order(participants: &[Participant]) -> Vec<Participant> {
    let by_team = |team: TeamId| {
        let mut members: Vec<&Participant> =
            participants.iter().filter(|p| p.team == team).collect();
        members.sort_by_key(|p| p.seat);
        members
    };
    let team_a = by_team(TeamId::A);
    let team_b = by_team(TeamId::B);

    let mut order = Vec::with_capacity(participants.len());
    for idx in 0..team_a.len().max(team_b.len()) {
        order.extend(team_a.get(idx).copied());
        order.extend(team_b.get(idx).copied());
    }
    order
        .into_iter()
        .enumerate()
        .map(|(seat, p)| Participant {
            seat: seat as u8,
            ..p.clone()
        })
        .collect()
}

impl GameState {
    /// The state right after dealing: empty board, first seat to move.
    pub fn new(
        participants: &[Participant],
        config: GameConfig,
        draw_left: usize,
        now_ms: u64,
    ) -> Result<Self, SetupError> {
        if participants.len() < 2 {
            return Err(SetupError::TooFewParticipants(participants.len()));
        }
        let mut seen = BTreeSet::new();
        for p in participants {
            if !seen.insert(p.uid.as_str()) {
                return Err(SetupError::DuplicateUid(p.uid.clone()));
            }
        }
        for team in [TeamId::A, TeamId::B] {
            if !participants.iter().any(|p| p.team == team) {
                return Err(SetupError::MissingTeam(team));
            }
        }

        let seating = seating_order(participants);
        let first = seating[0].uid.clone();
        Ok(Self {
            version: 1,
            phase: Phase::Playing,
            turn_number: 1,
            current_player: first,
            current_seat: 0,
            seating,
            chips: Chips::new(),
            completed_sequences: Vec::new(),
            discard_top_by_seat: BTreeMap::new(),
            score_by_team: Score::default(),
            draw_left,
            locks: Locks::cleared(),
            winner: None,
            last_action: None,
            last_placed_cell: None,
            turn_started_at_ms: now_ms,
            config,
        })
    }

    pub fn participant(&self, uid: &str) -> Option<&Participant> {
        self.seating.iter().find(|p| p.uid == uid)
    }

    pub fn team_of(&self, uid: &str) -> Option<TeamId> {
        self.participant(uid).map(|p| p.team)
    }

    /// The team whose turn it is.
    pub fn current_team(&self) -> Option<TeamId> {
        self.team_of(&self.current_player)
    }

    /// The seat that moves after the current one.
    pub fn next_seat(&self) -> u8 {
        let num_seats = self.seating.len().max(1);
        ((self.current_seat as usize + 1) % num_seats) as u8
    }

    pub fn sequences_of(&self, team: TeamId) -> usize {
        self.score_by_team.get(team)
    }

    /// Wall-clock time in milliseconds after which the turn may be auto-played.
    pub fn turn_deadline_ms(&self) -> u64 {
        self.turn_started_at_ms
            .saturating_add(self.config.turn_seconds.saturating_mul(1000))
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }
}
