use std::io::{BufRead, Write};

use sequence::{Action, CardId, GameState, Okay, Request, TeamId};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, team: TeamId, uid: &str);
    fn play_turn(&mut self, state: GameState, hand: Vec<CardId>) -> Action;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        serve(self, stdin, stdout)
    }
}

/// Answers requests from `input` on `output` until `Bye` or EOF.
pub fn serve<B, R, W>(bot: &mut B, mut input: R, mut output: W) -> anyhow::Result<()>
where
    B: Bot + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut buf = String::new();
    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the judge has exited.
            break Ok(());
        }

        match serde_json::from_str::<Request>(buf.trim_end())? {
            Request::NewGame { team, uid } => {
                bot.new_game(team, &uid);
                serde_json::to_writer(&mut output, &Okay())?;
            }
            Request::PlayTurn { state, hand } => {
                serde_json::to_writer(&mut output, &bot.play_turn(state, hand))?
            }
            Request::Bye => break Ok(()),
        }
        writeln!(output)?;
        output.flush()?;
    }
}
