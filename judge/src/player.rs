use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use serde::Deserialize;
use stackconquer::Request;
use tracing::trace;

/// How to start a bot.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerConfig {
    /// Short name for the results table.
    pub nick: String,
    /// The executable, followed by its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid player config '{}'", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        if config.cmd.is_empty() {
            anyhow::bail!("Player config for {} has an empty command", config.nick);
        }
        Ok(config)
    }
}

/// Something the judge can send requests to.
pub trait Participant {
    fn name(&self) -> &str;

    /// Sends one serialized request and returns the serialized response.
    fn exchange(&mut self, request: &str) -> anyhow::Result<String>;
}

pub fn perform_request<T, P>(participant: &mut P, req: &Request) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned + std::fmt::Debug,
    P: Participant + ?Sized,
{
    let req_json = serde_json::to_string(req)?;
    trace!(name: "Sending request", player = participant.name(), request = %req_json);
    let serialized_response = participant.exchange(&req_json)?;
    trace!(name: "Received response", player = participant.name(), response = %serialized_response);
    let response = serde_json::from_str::<T>(&serialized_response).with_context(|| {
        format!(
            "Invalid response from {}: {}",
            participant.name(),
            serialized_response
        )
    })?;
    Ok(response)
}

/// A bot running as a child process, talking JSON lines over stdin/stdout.
pub struct BotProcess {
    pub name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after exchange().
    buf: String,
}

impl BotProcess {
    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        let (executable, args) = config
            .cmd
            .split_first()
            .context("Player command is empty")?;
        let mut child = Command::new(executable)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start {}", executable))?;

        let stdin = child.stdin.take().context("Could not access stdin")?;
        let stdout = child.stdout.take().context("Could not access stdout")?;
        Ok(Self {
            name: config.nick.clone(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        })
    }
}

impl Participant for BotProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn exchange(&mut self, request: &str) -> anyhow::Result<String> {
        writeln!(self.stdin, "{}", request)?;
        self.stdin.flush()?;
        self.buf.clear();
        if self.stdout.read_line(&mut self.buf)? == 0 {
            anyhow::bail!("{} closed its output", self.name);
        }
        let response = String::from(self.buf.trim_end());
        self.buf.clear();
        Ok(response)
    }
}

impl Drop for BotProcess {
    fn drop(&mut self) {
        // The bot may already be gone, so errors are irrelevant here
        if let Ok(bye) = serde_json::to_string(&Request::Bye) {
            let _ = writeln!(self.stdin, "{}", bye);
            let _ = self.stdin.flush();
        }
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let config =
            PlayerConfig::from_json(r#"{"nick": "dummy", "cmd": ["dummy_cpu", "--seed", "3"]}"#)
                .unwrap();
        assert_eq!(config.nick, "dummy");
        assert_eq!(config.cmd, ["dummy_cpu", "--seed", "3"]);
    }

    #[test]
    fn config_without_command_is_rejected() {
        assert!(PlayerConfig::from_json(r#"{"nick": "nobody", "cmd": []}"#).is_err());
        assert!(PlayerConfig::from_json(r#"{"nick": "nobody"}"#).is_err());
    }
}
