use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CellId, CellSet, NUM_CELLS};

/// One of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    pub fn opponent(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::A => write!(f, "A"),
            TeamId::B => write!(f, "B"),
        }
    }
}

/// The chips on the board.
///
/// Each team's chips are a [`CellSet`]; the two sets are always disjoint, so a
/// cell holds at most one chip. Serialized as a map from cell to team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<CellId, TeamId>",
    into = "BTreeMap<CellId, TeamId>"
)]
pub struct Chips {
    a: CellSet,
    b: CellSet,
}

impl Chips {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_at(&self, cell: CellId) -> Option<TeamId> {
        if self.a.contains(cell) {
            Some(TeamId::A)
        } else if self.b.contains(cell) {
            Some(TeamId::B)
        } else {
            None
        }
    }

    pub fn is_occupied(&self, cell: CellId) -> bool {
        self.occupied().contains(cell)
    }

    /// The cells holding a chip of `team`.
    pub fn of(&self, team: TeamId) -> CellSet {
        match team {
            TeamId::A => self.a,
            TeamId::B => self.b,
        }
    }

    pub fn occupied(&self) -> CellSet {
        self.a | self.b
    }

    pub fn empty_cells(&self) -> CellSet {
        !self.occupied()
    }

    pub fn len(&self) -> u32 {
        self.occupied().len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Puts a chip of `team` on `cell`, replacing whatever was there.
    #[must_use]
    pub fn place(self, cell: CellId, team: TeamId) -> Self {
        let cleared = self.remove(cell);
        match team {
            TeamId::A => Self {
                a: cleared.a.insert(cell),
                ..cleared
            },
            TeamId::B => Self {
                b: cleared.b.insert(cell),
                ..cleared
            },
        }
    }

    #[must_use]
    pub fn remove(self, cell: CellId) -> Self {
        Self {
            a: self.a.remove(cell),
            b: self.b.remove(cell),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, TeamId)> + '_ {
        self.occupied()
            .into_iter()
            .filter_map(move |cell| self.team_at(cell).map(|team| (cell, team)))
    }
}

impl FromIterator<(CellId, TeamId)> for Chips {
    fn from_iter<T: IntoIterator<Item = (CellId, TeamId)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Chips::new(), |chips, (cell, team)| chips.place(cell, team))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("chip on cell {0}, which is not on the board")]
pub struct CellOutOfRange(pub CellId);

impl TryFrom<BTreeMap<CellId, TeamId>> for Chips {
    type Error = CellOutOfRange;

    fn try_from(map: BTreeMap<CellId, TeamId>) -> Result<Self, Self::Error> {
        if let Some((&cell, _)) = map.iter().find(|(&cell, _)| cell >= NUM_CELLS) {
            return Err(CellOutOfRange(cell));
        }
        Ok(map.into_iter().collect())
    }
}

impl From<Chips> for BTreeMap<CellId, TeamId> {
    fn from(chips: Chips) -> Self {
        chips.iter().collect()
    }
}
