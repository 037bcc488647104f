use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sequence::{legal_actions, Action, CardId, GameState, TeamId};
use sequence_bot_utils::Bot;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _team: TeamId, _uid: &str) {}

    fn play_turn(&mut self, state: GameState, hand: Vec<CardId>) -> Action {
        // Never empty: without options it holds a single pass
        let actions = legal_actions(&state, &hand);
        actions.choose(&mut self.rng).copied().unwrap_or(Action::Pass)
    }
}
