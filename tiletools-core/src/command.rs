//! Commands sent to the window manager, rendered in its command language.
use crate::models::{Border, Layout, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Screen edge crossed when moving in this direction.
    #[must_use]
    pub const fn edge(self) -> Border {
        match self {
            Direction::Left => Border::LEFT,
            Direction::Right => Border::RIGHT,
            Direction::Up => Border::TOP,
            Direction::Down => Border::BOTTOM,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(format!("expected one of: left, right, up, down; got `{s}`")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RenameWorkspace(i32),
    /// Moves the workspace numbered `workspace`, or the focused one, to `output`.
    MoveWorkspaceToOutput {
        workspace: Option<i32>,
        output: String,
    },
    Workspace {
        num: i32,
        auto_back_and_forth: bool,
    },
    WorkspaceBackAndForth,
    FocusOutput(String),
    Focus(Direction),
    FullscreenToggle,
    Split(Layout),
    Exec(String),
    MoveContainerToWorkspace(i32),
    /// Moves the container `con_id` to the workspace called `workspace`.
    MoveConToWorkspaceNamed {
        con_id: NodeId,
        workspace: String,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::RenameWorkspace(num) => write!(f, "rename workspace to {num}"),
            Command::MoveWorkspaceToOutput {
                workspace: Some(num),
                output,
            } => write!(
                f,
                "[workspace=\"^{num}$\"] move workspace to output {}",
                quoted(output)
            ),
            Command::MoveWorkspaceToOutput {
                workspace: None,
                output,
            } => write!(f, "move workspace to output {}", quoted(output)),
            Command::Workspace {
                num,
                auto_back_and_forth: true,
            } => write!(f, "workspace {num}"),
            Command::Workspace {
                num,
                auto_back_and_forth: false,
            } => write!(f, "workspace --no-auto-back-and-forth {num}"),
            Command::WorkspaceBackAndForth => f.write_str("workspace back_and_forth"),
            Command::FocusOutput(output) => write!(f, "focus output {}", quoted(output)),
            Command::Focus(direction) => write!(f, "focus {direction}"),
            Command::FullscreenToggle => f.write_str("fullscreen toggle"),
            Command::Split(layout) => write!(f, "split {layout}"),
            Command::Exec(program) => write!(f, "exec {program}"),
            Command::MoveContainerToWorkspace(num) => {
                write!(f, "move container to workspace {num}")
            }
            Command::MoveConToWorkspaceNamed { con_id, workspace } => write!(
                f,
                "[con_id={con_id}] move to workspace {}",
                quoted(workspace)
            ),
        }
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Commands executed in one request, separated by `;`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandBatch(Vec<Command>);

impl CommandBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, command: Command) -> Self {
        self.0.push(command);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Command> for CommandBatch {
    fn from(command: Command) -> Self {
        Self(vec![command])
    }
}

impl fmt::Display for CommandBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_workspace_commands() {
        assert_eq!(Command::RenameWorkspace(13).to_string(), "rename workspace to 13");
        assert_eq!(
            Command::Workspace {
                num: 4,
                auto_back_and_forth: false
            }
            .to_string(),
            "workspace --no-auto-back-and-forth 4"
        );
        assert_eq!(
            Command::MoveWorkspaceToOutput {
                workspace: None,
                output: "DP-1".to_owned()
            }
            .to_string(),
            "move workspace to output \"DP-1\""
        );
        assert_eq!(
            Command::MoveConToWorkspaceNamed {
                con_id: 94_000_000,
                workspace: "3: \"web\"".to_owned()
            }
            .to_string(),
            r#"[con_id=94000000] move to workspace "3: \"web\"""#
        );
    }

    #[test]
    fn batches_are_semicolon_separated() {
        let batch = CommandBatch::new()
            .then(Command::Split(Layout::SplitV))
            .then(Command::Exec("alacritty --class scratch".to_owned()));
        assert_eq!(batch.to_string(), "split vertical; exec alacritty --class scratch");
        assert_eq!(CommandBatch::new().to_string(), "");
    }

    #[test]
    fn directions_map_to_edges() {
        assert_eq!("up".parse::<Direction>().unwrap().edge(), Border::TOP);
        assert_eq!("down".parse::<Direction>().unwrap().edge(), Border::BOTTOM);
        assert!("north".parse::<Direction>().is_err());
    }
}
