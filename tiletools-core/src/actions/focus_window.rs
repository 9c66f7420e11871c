use crate::command::{Command, CommandBatch, Direction};
use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::models::Tree;
use crate::queries::{border_of_focused, focused_leaf};

/// Moves focus in `direction`. A fullscreen window is left fullscreen for the move when
/// the focus stays on the same output.
pub async fn focus_window<W: WindowManager>(wm: &W, direction: Direction) -> Result<()> {
    let tree = wm.get_tree().await?;
    let batch = plan_focus_window(&tree, direction)?;
    wm.execute(batch).await
}

/// Commands moving focus in `direction` from the focused leaf of `tree`.
///
/// # Errors
///
/// Fails if the focus path of `tree` is broken.
pub fn plan_focus_window(tree: &Tree, direction: Direction) -> Result<CommandBatch> {
    let position = border_of_focused(tree)?;
    tracing::debug!("Position on border: {position}");
    let fullscreen = focused_leaf(tree)?.is_some_and(|leaf| leaf.fullscreen_mode.is_fullscreen());
    let change_screen = position.is_on(direction.edge());

    if fullscreen && !change_screen {
        tracing::debug!("Keeping the fullscreen window out of the way");
        return Ok(CommandBatch::new()
            .then(Command::FullscreenToggle)
            .then(Command::Focus(direction))
            .then(Command::FullscreenToggle));
    }
    Ok(Command::Focus(direction).into())
}
