use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How to start a bot. Read from a JSON file such as
///
/// ```json
/// {"nick": "Heuristic", "cmd": ["target/release/heuristic_bot", "--log-level", "warn"]}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    /// Executable followed by its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid player config '{}'", path.display()))
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.cmd.is_empty() {
            anyhow::bail!("'cmd' must name an executable");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nick_and_command() {
        let config =
            PlayerConfig::parse(r#"{"nick": "Random", "cmd": ["random_bot", "--seed", "3"]}"#)
                .unwrap();
        assert_eq!(config.nick, "Random");
        assert_eq!(config.cmd, vec!["random_bot", "--seed", "3"]);
    }

    #[test]
    fn rejects_empty_command() {
        assert!(PlayerConfig::parse(r#"{"nick": "Nobody", "cmd": []}"#).is_err());
        assert!(PlayerConfig::parse(r#"{"nick": "Nobody"}"#).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = PlayerConfig::load(Path::new("/nonexistent/bot.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bot.json"));
    }
}
