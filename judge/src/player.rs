use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use sequence::Request;
use tracing::trace;

use crate::config::PlayerConfig;
use crate::recording::Recorder;

/// A line-based channel to a bot.
pub trait Connection {
    /// Sends one line, without the trailing newline.
    fn send(&mut self, line: &str) -> anyhow::Result<()>;
    /// Reads the bot's next line, without the trailing newline.
    fn receive(&mut self) -> anyhow::Result<String>;
}

/// A bot running as a child process, talking over its stdin and stdout.
struct Process {
    _child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    buf: String,
}

impl Connection for Process {
    fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> anyhow::Result<String> {
        self.buf.clear();
        if self.stdout.read_line(&mut self.buf)? == 0 {
            anyhow::bail!("Bot closed its stdout");
        }
        Ok(String::from(self.buf.trim_end()))
    }
}

pub struct Player {
    pub name: String,
    connection: Box<dyn Connection>,
}

impl Player {
    pub fn new(name: &str, connection: Box<dyn Connection>) -> Self {
        Self {
            name: String::from(name),
            connection,
        }
    }

    /// Starts the bot process described by `config`.
    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        let (program, args) = config
            .cmd
            .split_first()
            .context("Player config has an empty command")?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start '{}'", program))?;
        let stdin = child.stdin.take().context("Could not access stdin")?;
        let stdout = child.stdout.take().context("Could not access stdout")?;

        let process = Process {
            _child: child,
            stdin,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        };
        Ok(Self::new(&config.nick, Box::new(process)))
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", player = &self.name, request = %req_json);
        self.connection.send(&req_json)?;
        let serialized_response = self.connection.receive()?;
        trace!(name: "Received response", player = &self.name, response = %serialized_response);
        let response = serde_json::from_str::<T>(&serialized_response).with_context(|| {
            format!(
                "{} sent an invalid response: {}",
                self.name, serialized_response
            )
        })?;

        if let Some(recorder) = recorder {
            recorder.store_request(&self.name, &req_json, &serialized_response);
        }
        Ok(response)
    }

    /// Tells the bot to shut down. There is no response.
    pub fn bye(&mut self) -> anyhow::Result<()> {
        self.connection.send(&serde_json::to_string(&Request::Bye)?)
    }
}
