use super::{is_vacant, reconcile_output};
use crate::command::{Command, CommandBatch};
use crate::config::Config;
use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::queries::{focused_workspace_num, ordered_output_names};
use crate::reconcile::NumberingScheme;
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

/// Which neighbouring output to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStep {
    Next,
    Prev,
}

impl OutputStep {
    /// Change of workspace number that lands on the same slot of the neighbour.
    pub const fn offset(self, scheme: NumberingScheme) -> i32 {
        match self {
            OutputStep::Next => scheme.slots_per_output(),
            OutputStep::Prev => -scheme.slots_per_output(),
        }
    }
}

impl FromStr for OutputStep {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "next" => Ok(OutputStep::Next),
            "prev" => Ok(OutputStep::Prev),
            _ => Err(format!("expected next or prev, got `{s}`")),
        }
    }
}

/// Moves the focused workspace to the neighbouring output, renumbering it into that
/// output's slots. A workspace out of place is only put back in place.
pub async fn move_to_output<W: WindowManager>(
    wm: &W,
    config: &impl Config,
    step: OutputStep,
) -> Result<()> {
    let scheme = config.numbering();
    let outputs = ordered_output_names(&wm.get_outputs().await?);
    let workspaces = wm.get_workspaces().await?;
    let focused = focused_workspace_num(&workspaces).unwrap_or(1);
    tracing::debug!("Focused workspace: {focused}");

    let existing: HashSet<i32> = workspaces.iter().filter_map(|ws| ws.num).collect();
    if let Some(renumbered) = scheme.fix_number(focused, outputs.len(), &existing)? {
        wm.execute(Command::RenameWorkspace(renumbered)).await?;
        reconcile_output(wm, scheme, renumbered, &outputs).await?;
        return Ok(());
    }
    if reconcile_output(wm, scheme, focused, &outputs).await? {
        return Ok(());
    }

    let new_num = focused + step.offset(scheme);
    if new_num <= 0 || new_num > scheme.max_workspace(outputs.len()) {
        tracing::info!(
            "Workspace {focused} is already in the extremal output {}",
            scheme.output_for(focused, &outputs).unwrap_or("?")
        );
        return Ok(());
    }
    if !is_vacant(wm, new_num).await? {
        tracing::info!("Workspace {new_num} already exists, doing nothing");
        return Ok(());
    }

    let target_output = scheme.output_for(new_num, &outputs)?;
    tracing::debug!("Moving workspace {focused} to {new_num} ({target_output})");
    wm.execute(
        CommandBatch::new()
            .then(Command::RenameWorkspace(new_num))
            .then(Command::MoveWorkspaceToOutput {
                workspace: None,
                output: target_output.to_owned(),
            }),
    )
    .await?;
    // Let the move settle before focusing, or the focus lands on the old output.
    tokio::time::sleep(Duration::from_millis(1)).await;
    wm.execute(Command::Workspace {
        num: new_num,
        auto_back_and_forth: false,
    })
    .await
}
