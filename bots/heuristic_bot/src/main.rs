use clap::Parser;
use heuristic_bot::decide;
use sequence::{visualize_board, Action, CardId, GameState, TeamId};
use sequence_bot_utils::Bot;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

struct HeuristicBot {}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    HeuristicBot {}.run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for HeuristicBot {
    fn new_game(&mut self, team: TeamId, uid: &str) {
        info!(%team, uid, "New game");
    }

    fn play_turn(&mut self, state: GameState, hand: Vec<CardId>) -> Action {
        debug!(
            "Turn {}\n{}",
            state.turn_number,
            visualize_board(&state.chips, &state.completed_sequences)
        );
        decide(&state, &hand)
    }
}
