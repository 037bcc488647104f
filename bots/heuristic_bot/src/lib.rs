//! A bot that goes down a fixed list of priorities and plays the first move
//! any of them finds.
//!
//! No priority ever places a chip that would make a run of six, and jack
//! moves respect the locks left by the previous turn.
use sequence::{
    center_distance, is_dead_card, is_one_eyed_jack, is_two_eyed_jack, playable_cells,
    removable_cells, wild_cells, would_create_overshoot, Action, CardId, CellId, CellSet,
    GameState, TeamId,
};
use tracing::trace;

mod lines;
pub use lines::*;

/// Everything the strategies look at, computed once per turn.
pub struct Context<'a> {
    pub state: &'a GameState,
    pub hand: &'a [CardId],
    pub team: TeamId,
    pub own_sequences: usize,
    pub opponent_sequences: usize,
    /// Non-jack placements that are not dead and would not overshoot, in
    /// hand order then cell order.
    pub normal_options: Vec<(CardId, CellId)>,
    pub two_eyed: Option<CardId>,
    pub one_eyed: Option<CardId>,
    /// Cells the two-eyed jack may take without overshooting.
    pub wild_cells: CellSet,
    /// Opposing chips the one-eyed jack may take off.
    pub removable: CellSet,
}

impl<'a> Context<'a> {
    /// `None` once nobody is to move.
    pub fn new(state: &'a GameState, hand: &'a [CardId]) -> Option<Self> {
        let team = state.current_team()?;
        let chips = &state.chips;

        let normal_options = hand
            .iter()
            .filter(|&&card| !card.is_jack() && !is_dead_card(card, chips))
            .flat_map(|&card| {
                playable_cells(card, chips)
                    .into_iter()
                    .map(move |cell| (card, cell))
            })
            .filter(|&(_, cell)| !would_create_overshoot(chips, cell, team))
            .collect();
        let wild = wild_cells(chips, &state.locks)
            .into_iter()
            .filter(|&cell| !would_create_overshoot(chips, cell, team))
            .collect();
        let removable = removable_cells(chips, &state.completed_sequences, &state.locks)
            & chips.of(team.opponent());

        Some(Self {
            state,
            hand,
            team,
            own_sequences: state.sequences_of(team),
            opponent_sequences: state.sequences_of(team.opponent()),
            normal_options,
            two_eyed: hand.iter().copied().find(|&c| is_two_eyed_jack(c)),
            one_eyed: hand.iter().copied().find(|&c| is_one_eyed_jack(c)),
            wild_cells: wild,
            removable,
        })
    }

    fn to_win(&self) -> usize {
        self.state.config.sequences_to_win
    }

    fn completes(&self, cell: CellId) -> bool {
        completes_sequence(
            &self.state.chips,
            &self.state.completed_sequences,
            cell,
            self.team,
        )
    }

    /// The opposing chip on a line of at least four whose removal scores
    /// best, if any scores at all.
    fn best_threat_removal(&self) -> Option<CellId> {
        let chips = &self.state.chips;
        let mut best = None;
        let mut best_score = 0;
        for cell in self.removable {
            if max_enemy_line_at(chips, cell, self.team) < 4 {
                continue;
            }
            let score = removal_score(chips, cell, self.team, self.hand);
            if score > best_score {
                best_score = score;
                best = Some(cell);
            }
        }
        best
    }
}

pub type Strategy = fn(&Context) -> Option<Action>;

/// The strategies in order of priority.
pub const STRATEGIES: [(&str, Strategy); 11] = [
    ("win", win),
    ("defend", defend),
    ("complete sequence", complete_with_card),
    ("complete sequence with jack", complete_with_jack),
    ("block", block_early),
    ("repair overshoot", repair_overshoot),
    ("remove and build", remove_and_build),
    ("build four", build_four),
    ("build three", build_three),
    ("build two", build_two),
    ("near center", near_center),
];

/// Picks the move for whoever is to play in `state`, holding `hand`.
pub fn decide(state: &GameState, hand: &[CardId]) -> Action {
    let Some(ctx) = Context::new(state, hand) else {
        return Action::Pass;
    };
    for (name, strategy) in STRATEGIES {
        if let Some(action) = strategy(&ctx) {
            trace!(strategy = name, ?action, "Decided");
            return action;
        }
    }
    trace!("Nothing to play, passing");
    Action::Pass
}

fn sequence_with_card(ctx: &Context) -> Option<Action> {
    ctx.normal_options
        .iter()
        .find(|&&(_, cell)| ctx.completes(cell))
        .map(|&(card, target)| Action::PlayNormal { card, target })
}

fn sequence_with_jack(ctx: &Context) -> Option<Action> {
    let card = ctx.two_eyed?;
    ctx.wild_cells
        .iter()
        .find(|&cell| ctx.completes(cell))
        .map(|target| Action::PlayJackWild { card, target })
}

/// Fills an open cell of an opposing four-line with a normal card, or
/// failing that takes one of its chips off with a one-eyed jack.
fn block(ctx: &Context) -> Option<Action> {
    let threats = threat_cells(&ctx.state.chips, ctx.team.opponent(), 4);
    if let Some(&(card, target)) = ctx
        .normal_options
        .iter()
        .find(|&&(_, cell)| threats.contains(cell))
    {
        return Some(Action::PlayNormal { card, target });
    }
    let card = ctx.one_eyed?;
    ctx.best_threat_removal()
        .map(|remove| Action::PlayJackRemove { card, remove })
}

fn win(ctx: &Context) -> Option<Action> {
    if ctx.own_sequences + 1 != ctx.to_win() {
        return None;
    }
    sequence_with_card(ctx).or_else(|| sequence_with_jack(ctx))
}

fn defend(ctx: &Context) -> Option<Action> {
    if ctx.opponent_sequences + 1 != ctx.to_win() {
        return None;
    }
    block(ctx)
}

fn complete_with_card(ctx: &Context) -> Option<Action> {
    if ctx.own_sequences + 1 >= ctx.to_win() {
        return None;
    }
    sequence_with_card(ctx)
}

fn complete_with_jack(ctx: &Context) -> Option<Action> {
    if ctx.own_sequences + 1 >= ctx.to_win() {
        return None;
    }
    sequence_with_jack(ctx)
}

fn block_early(ctx: &Context) -> Option<Action> {
    if ctx.opponent_sequences + 1 >= ctx.to_win() {
        return None;
    }
    block(ctx)
}

/// Trims an own run of six so that five of it become a sequence.
fn repair_overshoot(ctx: &Context) -> Option<Action> {
    let card = ctx.one_eyed?;
    repair_cell(
        &ctx.state.chips,
        &ctx.state.completed_sequences,
        ctx.team,
        ctx.state.locks.two_eye,
    )
    .map(|remove| Action::PlayJackRemove { card, remove })
}

/// Takes off an opposing chip when one of our cards can then make a line of
/// four or more on its cell.
fn remove_and_build(ctx: &Context) -> Option<Action> {
    let card = ctx.one_eyed?;
    let chips = &ctx.state.chips;
    let mut best = None;
    let mut best_score = 9;
    for cell in ctx.removable {
        if removal_gain(chips, cell, ctx.team, ctx.hand) < 10 {
            continue;
        }
        let score = removal_score(chips, cell, ctx.team, ctx.hand);
        if score > best_score {
            best_score = score;
            best = Some(cell);
        }
    }
    best.map(|remove| Action::PlayJackRemove { card, remove })
}

/// The normal placement nearest the center among those that make a line of
/// at least `len`.
fn build_line(ctx: &Context, len: usize) -> Option<Action> {
    ctx.normal_options
        .iter()
        .filter(|&&(_, cell)| line_after_place(&ctx.state.chips, cell, ctx.team) >= len)
        .min_by_key(|&&(_, cell)| center_distance(cell))
        .map(|&(card, target)| Action::PlayNormal { card, target })
}

fn build_four(ctx: &Context) -> Option<Action> {
    build_line(ctx, 4)
}

fn build_three(ctx: &Context) -> Option<Action> {
    build_line(ctx, 3)
}

fn build_two(ctx: &Context) -> Option<Action> {
    build_line(ctx, 2)
}

fn near_center(ctx: &Context) -> Option<Action> {
    build_line(ctx, 0)
}
