//! [`WindowManager`] backed by the window manager's own messenger program (`i3-msg` or
//! `swaymsg`), which owns the socket protocol.
use super::{EventStream, WindowManager};
use crate::command::CommandBatch;
use crate::errors::{Result, TileError};
use crate::models::dto::{CommandOutcome, RawNode};
use crate::models::{Output, Tree, WindowEvent, Workspace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};
use tokio::time::Instant;

const SUBSCRIBE_ACK_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    I3,
    Sway,
}

impl Flavor {
    /// Messenger program shipped with the window manager.
    #[must_use]
    pub const fn messenger(self) -> &'static str {
        match self {
            Flavor::I3 => "i3-msg",
            Flavor::Sway => "swaymsg",
        }
    }

    /// Environment variable the window manager exports its socket path in.
    #[must_use]
    pub const fn socket_env(self) -> &'static str {
        match self {
            Flavor::I3 => "I3SOCK",
            Flavor::Sway => "SWAYSOCK",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MsgClient {
    program: String,
    socket: Option<PathBuf>,
    flavor: Flavor,
}

impl MsgClient {
    #[must_use]
    pub fn new(program: impl Into<String>, socket: Option<PathBuf>, flavor: Flavor) -> Self {
        Self {
            program: program.into(),
            socket,
            flavor,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        if let Some(socket) = &self.socket {
            command.arg("--socket").arg(socket);
        }
        if self.flavor == Flavor::Sway {
            command.arg("--raw");
        }
        command.stdin(Stdio::null());
        command
    }

    async fn query<T: DeserializeOwned>(&self, message_type: &str) -> Result<T> {
        tracing::trace!("Querying {message_type}");
        let output = self.command().args(["-t", message_type]).output().await?;
        if !output.status.success() {
            return Err(self.messenger_error(output.status, &output.stderr));
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }

    fn messenger_error(&self, status: std::process::ExitStatus, stderr: &[u8]) -> TileError {
        TileError::Messenger {
            program: self.program.clone(),
            status,
            stderr: String::from_utf8_lossy(stderr).trim().to_owned(),
        }
    }
}

impl WindowManager for MsgClient {
    type Events = MsgEvents;

    async fn get_tree(&self) -> Result<Tree> {
        let root: RawNode = self.query("get_tree").await?;
        Ok(Tree::from(root))
    }

    async fn get_outputs(&self) -> Result<Vec<Output>> {
        self.query("get_outputs").await
    }

    async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        self.query("get_workspaces").await
    }

    async fn get_marks(&self) -> Result<Vec<String>> {
        self.query("get_marks").await
    }

    async fn execute(&self, commands: impl Into<CommandBatch>) -> Result<()> {
        let batch = commands.into();
        if batch.is_empty() {
            return Ok(());
        }
        let commands = batch.to_string();
        tracing::debug!("Executing `{commands}`");
        let output = self.command().arg(&commands).output().await?;

        match serde_json::from_slice::<Vec<CommandOutcome>>(&output.stdout) {
            Ok(outcomes) => check_outcomes(&outcomes),
            Err(_) if !output.status.success() => {
                Err(self.messenger_error(output.status, &output.stderr))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn subscribe_window_events(&self) -> Result<MsgEvents> {
        let mut child = self
            .command()
            .args(["-t", "subscribe", "-m", r#"["window"]"#])
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;
        let stdout = child.stdout.take().ok_or_else(|| {
            TileError::Io(std::io::Error::other("subscription has no stdout"))
        })?;
        let mut events = MsgEvents {
            _child: child,
            lines: BufReader::new(stdout).lines(),
        };
        if self.flavor == Flavor::I3 {
            events.wait_for_ack().await?;
        }
        Ok(events)
    }
}

fn check_outcomes(outcomes: &[CommandOutcome]) -> Result<()> {
    let errors: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.success)
        .map(|o| o.error.as_deref().unwrap_or("unknown error"))
        .collect();
    if errors.is_empty() {
        return Ok(());
    }
    Err(TileError::CommandFailed {
        reason: errors.join("; "),
    })
}

/// Window events read from a monitoring messenger process, one JSON object per line.
/// The process is killed when this is dropped.
#[derive(Debug)]
pub struct MsgEvents {
    _child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

impl MsgEvents {
    /// i3-msg prints the subscription reply before any event.
    async fn wait_for_ack(&mut self) -> Result<()> {
        let Ok(line) = tokio::time::timeout(SUBSCRIBE_ACK_TIMEOUT, self.lines.next_line()).await
        else {
            tracing::debug!("No subscription acknowledgement, continuing");
            return Ok(());
        };
        let Some(line) = line? else {
            return Err(TileError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "subscription closed before acknowledging",
            )));
        };
        let ack: CommandOutcome = serde_json::from_str(&line)?;
        check_outcomes(&[ack])
    }
}

impl EventStream for MsgEvents {
    async fn wait_for_event(&mut self, timeout: Duration) -> Result<Option<WindowEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let Ok(line) = tokio::time::timeout_at(deadline, self.lines.next_line()).await else {
                return Ok(None);
            };
            let Some(line) = line? else {
                tracing::warn!("Event subscription closed");
                return Ok(None);
            };
            if let Some(event) = parse_event(&line)? {
                return Ok(Some(event));
            }
        }
    }
}

fn parse_event(line: &str) -> Result<Option<WindowEvent>> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    if value.get("change").is_none() {
        tracing::trace!("Skipping non event line {line}");
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}
