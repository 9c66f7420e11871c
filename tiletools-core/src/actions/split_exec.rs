use crate::command::{Command, CommandBatch};
use crate::config::Config;
use crate::errors::Result;
use crate::ipc::{EventStream, WindowManager};
use crate::models::{Layout, NodeIndex, Tree, Workspace};
use crate::queries::{focused_index, focused_workspace};
use tokio::time::Instant;

/// Starts `program` next to the focused window, splitting along its wider side.
///
/// The new window is pulled back to the original workspace if the focus moved away in the
/// meantime, and the original split of the container is restored.
pub async fn split_and_exec<W: WindowManager>(
    wm: &W,
    config: &impl Config,
    program: Option<String>,
) -> Result<()> {
    let program = program.unwrap_or_else(|| config.default_exec());
    let tree = wm.get_tree().await?;
    let Some(focused) = focused_index(&tree)? else {
        tracing::warn!("Nothing is focused, not starting {program}");
        return Ok(());
    };

    let rect = tree.node(focused).rect;
    tracing::debug!(
        "Current window xywh: {} {} {} {}",
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );
    let original_layout = split_layout_of(&tree, focused);
    if !original_layout.is_split() {
        tracing::debug!("Not splitting a {original_layout} container");
        return Ok(());
    }
    let new_layout = Layout::split_along(rect.width, rect.height);
    let original_ws = focused_workspace(&wm.get_workspaces().await?).cloned();

    // Subscribe before starting the program so its window cannot be missed.
    let mut events = wm.subscribe_window_events().await?;
    wm.execute(
        CommandBatch::new()
            .then(Command::Split(new_layout))
            .then(Command::Exec(program)),
    )
    .await?;

    let outcome = settle_new_window(wm, config, &mut events, original_ws.as_ref()).await;
    let placed = matches!(outcome, Ok(true));
    if placed {
        wm.execute(Command::Split(original_layout)).await?;
    } else if new_layout != original_layout {
        if matches!(outcome, Ok(false)) {
            tracing::info!("No new window before the timeout");
        }
        wm.execute(Command::Split(original_layout)).await?;
    }
    outcome.map(|_| ())
}

/// Layout of the container at `index`. Sway reports `none` for leaves, which then split the
/// way their parent does.
fn split_layout_of(tree: &Tree, index: NodeIndex) -> Layout {
    let node = tree.node(index);
    match (node.layout, node.parent) {
        (Layout::None, Some(parent)) => tree.node(parent).layout,
        (layout, _) => layout,
    }
}

/// Waits for the next new window and keeps it on `original_ws`. Returns `false` on timeout.
async fn settle_new_window<W: WindowManager>(
    wm: &W,
    config: &impl Config,
    events: &mut W::Events,
    original_ws: Option<&Workspace>,
) -> Result<bool> {
    let deadline = Instant::now() + config.event_timeout();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Some(event) = events.wait_for_event(remaining).await? else {
            return Ok(false);
        };
        if !event.is_new_window() {
            continue;
        }

        let current_ws = focused_workspace(&wm.get_workspaces().await?).cloned();
        if let (Some(original), Some(current)) = (original_ws, current_ws) {
            if original.id != current.id {
                tracing::debug!(
                    "Moving new window (id {}) to the original workspace",
                    event.container.id
                );
                wm.execute(Command::MoveConToWorkspaceNamed {
                    con_id: event.container.id,
                    workspace: original.name.clone(),
                })
                .await?;
            }
        }
        return Ok(true);
    }
}
