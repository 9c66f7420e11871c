use crate::errors::{Result, TileError};
use crate::ipc::WindowManager;
use crate::queries::find_workspace_by_mark;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Where a workspace tool should go: a workspace number or the workspace holding a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceTarget {
    Number(i32),
    Mark(String),
}

impl FromStr for WorkspaceTarget {
    type Err = Infallible;

    /// Numbers win; anything else is a mark, with an optional `mark:` prefix.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(num) = s.parse() {
            return Ok(Self::Number(num));
        }
        let mark = s.strip_prefix("mark:").unwrap_or(s);
        Ok(Self::Mark(mark.to_owned()))
    }
}

impl fmt::Display for WorkspaceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{num}"),
            Self::Mark(mark) => write!(f, "mark:{mark}"),
        }
    }
}

/// Turns the target into a workspace number.
///
/// # Errors
///
/// [`TileError::UnknownTarget`] if the mark is not set, or sits on a workspace without a
/// number.
pub async fn resolve_target<W: WindowManager>(wm: &W, target: &WorkspaceTarget) -> Result<i32> {
    let mark = match target {
        WorkspaceTarget::Number(num) => return Ok(*num),
        WorkspaceTarget::Mark(mark) => mark,
    };

    let marks = wm.get_marks().await?;
    if !marks.iter().any(|m| m == mark) {
        return Err(TileError::UnknownTarget(mark.clone()));
    }

    let tree = wm.get_tree().await?;
    let num = find_workspace_by_mark(&tree, mark).and_then(|ws| ws.num);
    match num {
        Some(num) => {
            tracing::debug!("Mark {mark} is on workspace {num}");
            Ok(num)
        }
        None => {
            tracing::warn!("Mark {mark} is not on a numbered workspace");
            Err(TileError::UnknownTarget(mark.clone()))
        }
    }
}
