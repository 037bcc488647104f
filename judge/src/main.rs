use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_game, GameResult, GameSettings, Player, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sequence::GameConfig;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// How many copies of each bot play on its team
    #[arg(short, long, default_value_t = 2)]
    players_per_team: usize,

    /// Sequences a team needs to win
    #[arg(long, default_value_t = 2)]
    sequences_to_win: usize,

    /// Cards in each hand
    #[arg(long, default_value_t = 6)]
    hand_size: usize,

    /// A game without a winner after this many turns is a draw
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the matchup as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the game's interactions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    draws: usize,
}

fn play_matchup(
    side_1: &mut [Player],
    side_2: &mut [Player],
    settings: &GameSettings,
    num_games: usize,
    rng: &mut StdRng,
    stop_on_illegal_move: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let names = [side_1[0].name.clone(), side_2[0].name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        let report = play_game(rng, [&mut *side_1, &mut *side_2], settings, recorder)?;
        match report.result {
            GameResult::WonBySide { side, team } => {
                debug!(winner = names[side], %team, game_idx, turns = report.turns);
                match_score.wins[side] += 1;
            }
            GameResult::Draw(reason) => {
                debug!(game_idx, ?reason, turns = report.turns, "Draw");
                match_score.draws += 1;
            }
        }

        for illegal_move in &report.illegal_moves {
            info!(
                player = names[illegal_move.side],
                game_idx, "Illegal move by player"
            );
            let mut err_dyn = illegal_move as &dyn std::error::Error;
            while let Some(src_err) = err_dyn.source() {
                info!("{}", err_dyn);
                err_dyn = src_err;
            }
            info!("{}", err_dyn);
            match_score.illegal_moves[illegal_move.side] += 1;
        }
        if stop_on_illegal_move && !report.illegal_moves.is_empty() {
            break;
        }
    }

    let illegal_note = |side: usize| {
        if match_score.illegal_moves[side] > 0 {
            format!(" ({} illegal moves)", match_score.illegal_moves[side])
        } else {
            String::new()
        }
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} draws",
        match_score.wins[0],
        names[0],
        illegal_note(0),
        match_score.wins[1],
        names[1],
        illegal_note(1),
        match_score.draws
    );

    Ok(match_score)
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    player_configs: &[PlayerConfig],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results (p1 win %, p2 win %, draw %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for j in (0..player_configs.len()).rev() {
        print!(" {:19} |", player_configs[j].nick);
    }
    println!();
    for i in 0..player_configs.len() {
        for _ in 0..player_configs.len() - i + 1 {
            print!("---------------------|");
        }
        println!();
        print!(" {:19} |", player_configs[i].nick);
        for j in (0..player_configs.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some(score) = match_results.get(&(i, j)) {
                let num_games = (score.wins[0] + score.wins[1] + score.draws).max(1) as f32;
                print!(
                    "{:5.1}% {:5.1}% {:5.1}% |",
                    score.wins[0] as f32 / num_games * 100.0,
                    score.wins[1] as f32 / num_games * 100.0,
                    score.draws as f32 / num_games * 100.0
                );
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

fn spawn_side(config: &PlayerConfig, count: usize) -> anyhow::Result<Vec<Player>> {
    (0..count).map(|_| Player::from_config(config)).collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let settings = GameSettings {
        players_per_team: args.players_per_team,
        max_turns: args.max_turns,
        config: GameConfig {
            sequences_to_win: args.sequences_to_win,
            hand_size: args.hand_size,
            ..GameConfig::default()
        },
    };
    if settings.players_per_team == 0 {
        anyhow::bail!("Each team needs at least one player");
    }

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;

    let matchups: Vec<(usize, usize)> = (0..player_configs.len()).tuple_combinations().collect();

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in matchups {
        let mut side_1 = spawn_side(&player_configs[i1], settings.players_per_team)?;
        let mut side_2 = spawn_side(&player_configs[i2], settings.players_per_team)?;

        let match_score = play_matchup(
            &mut side_1,
            &mut side_2,
            &settings,
            args.num_games,
            &mut rng,
            args.stop_on_illegal_move,
            &mut recorder,
        )?;

        for player in side_1.iter_mut().chain(side_2.iter_mut()) {
            player.bye()?;
        }
        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        print_tournament_results(&player_configs, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
