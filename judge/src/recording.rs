use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Writes every request and response of a game into a numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    requests: Vec<RequestToPlayer>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            requests: Vec::new(),
        })
    }

    pub fn store_request(&mut self, player: &str, request: &str, response: &str) {
        self.requests.push(RequestToPlayer {
            player: String::from(player),
            request: as_json(request),
            response: as_json(response),
        });
    }

    /// Writes the requests stored since the last call, and starts a new game.
    pub fn write_game_recording(&mut self) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        let recording = GameRecording {
            requests: std::mem::take(&mut self.requests),
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

// Messages are stored as parsed JSON so that they are nested, not escaped,
// in the recording.
fn as_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(String::from(text)))
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    requests: Vec<RequestToPlayer>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestToPlayer {
    player: String,
    request: Value,
    response: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        assert!(Recorder::new(PathBuf::from("/nonexistent/recordings")).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = std::env::temp_dir().join(format!("judge_recording_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();

        recorder.store_request("Bot 1", r#"{"type":"Bye"}"#, "[]");
        let first = recorder.write_game_recording().unwrap();
        let second = recorder.write_game_recording().unwrap();
        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));

        let stored: GameRecording = serde_json::from_reader(File::open(&first).unwrap()).unwrap();
        assert_eq!(
            stored.requests,
            vec![RequestToPlayer {
                player: String::from("Bot 1"),
                request: serde_json::json!({"type": "Bye"}),
                response: serde_json::json!([]),
            }]
        );
        let empty: GameRecording = serde_json::from_reader(File::open(&second).unwrap()).unwrap();
        assert!(empty.requests.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
