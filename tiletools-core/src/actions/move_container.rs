use super::target::{resolve_target, WorkspaceTarget};
use super::{is_vacant, reconcile_output};
use crate::command::Command;
use crate::config::Config;
use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::queries::{focused_workspace_num, ordered_output_names};

/// Moves the focused container to the target workspace. A workspace created by the move is
/// sent to the output its number belongs to.
///
/// When the config enables back-and-forth and `no_auto_back_and_forth` is not set, targeting
/// the current workspace means the previously focused one.
pub async fn move_container<W: WindowManager>(
    wm: &W,
    config: &impl Config,
    target: &WorkspaceTarget,
    no_auto_back_and_forth: bool,
) -> Result<()> {
    let back_and_forth = config.auto_back_and_forth() && !no_auto_back_and_forth;
    let mut target = resolve_target(wm, target).await?;
    let Some(current) = focused_workspace_num(&wm.get_workspaces().await?) else {
        tracing::info!("No workspace focused");
        return Ok(());
    };

    if current == target && back_and_forth {
        tracing::debug!("Target is the same as current ({target}), trying back-and-forth");
        wm.execute(Command::Workspace {
            num: current,
            auto_back_and_forth: true,
        })
        .await?;
        if let Some(previous) = focused_workspace_num(&wm.get_workspaces().await?) {
            target = previous;
        }
        wm.execute(Command::Workspace {
            num: current,
            auto_back_and_forth: false,
        })
        .await?;
    }
    if current == target {
        tracing::debug!("Target is the same as current ({target}), doing nothing");
        return Ok(());
    }

    let is_new = is_vacant(wm, target).await?;
    wm.execute(Command::MoveContainerToWorkspace(target)).await?;
    if is_new {
        let outputs = ordered_output_names(&wm.get_outputs().await?);
        reconcile_output(wm, config.numbering(), target, &outputs).await?;
    }
    Ok(())
}
