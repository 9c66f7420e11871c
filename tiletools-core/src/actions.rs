//! The user facing tools, each a short conversation with the window manager.
mod fix_workspaces;
mod focus_window;
mod focus_workspace;
mod move_container;
mod move_to_output;
mod split_exec;
mod target;

pub use fix_workspaces::fix_workspaces;
pub use focus_window::{focus_window, plan_focus_window};
pub use focus_workspace::{focus_workspace, plan_focus_workspace};
pub use move_container::move_container;
pub use move_to_output::{move_to_output, OutputStep};
pub use split_exec::split_and_exec;
pub use target::{resolve_target, WorkspaceTarget};

use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::models::Node;
use crate::queries::{workspace_by_num, workspace_output};
use crate::reconcile::NumberingScheme;

/// Moves workspace `num` to the output its number belongs to, if it is elsewhere.
/// Returns whether a move was sent.
async fn reconcile_output<W: WindowManager, S: AsRef<str>>(
    wm: &W,
    scheme: NumberingScheme,
    num: i32,
    ordered_output_names: &[S],
) -> Result<bool> {
    let workspaces = wm.get_workspaces().await?;
    let current_output = workspace_output(&workspaces, num).unwrap_or_default();
    match scheme.fix_output(num, current_output, ordered_output_names) {
        Some(command) => {
            wm.execute(command).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// `true` when no workspace `num` exists or it holds no windows.
async fn is_vacant<W: WindowManager>(wm: &W, num: i32) -> Result<bool> {
    let workspaces = wm.get_workspaces().await?;
    let Some(ws) = workspace_by_num(&workspaces, num) else {
        return Ok(true);
    };
    let tree = wm.get_tree().await?;
    Ok(tree.workspace_node(ws.id).map_or(true, Node::is_empty))
}

#[cfg(test)]
pub(crate) mod test {
    //! A two output desk: `eDP-1` on the left showing workspace 1 (focused), workspace 2
    //! hidden and empty, `HDMI-1` on the right showing workspace 11.
    use crate::ipc::MockState;
    use crate::models::test_tree::*;
    use crate::models::{Output, Rect, Workspace};

    pub fn two_outputs() -> MockState {
        let mut ws1 = Workspace::new(101, 1, "eDP-1");
        ws1.is_focused = true;
        ws1.is_visible = true;
        let ws2 = Workspace::new(102, 2, "eDP-1");
        let mut ws11 = Workspace::new(111, 11, "HDMI-1");
        ws11.is_visible = true;

        MockState {
            tree: Some(tree(root(
                vec![
                    output(
                        10,
                        "eDP-1",
                        vec![
                            workspace(101, 1, "splith", vec![focused_window(201)], &[201]),
                            workspace(102, 2, "splith", vec![], &[]),
                        ],
                        &[101],
                    ),
                    output(
                        11,
                        "HDMI-1",
                        vec![workspace(111, 11, "splith", vec![leaf(211)], &[211])],
                        &[111],
                    ),
                ],
                &[10, 11],
            ))),
            // Reported out of order on purpose.
            outputs: vec![
                Output::new("HDMI-1", Rect::new(1920, 0, 2560, 1440)),
                Output::new("eDP-1", Rect::new(0, 0, 1920, 1080)),
            ],
            workspaces: vec![ws1, ws2, ws11],
            ..MockState::default()
        }
    }

    /// Makes workspace `num` the focused one, as a `workspace` command would.
    pub fn focus(state: &mut MockState, num: i32) {
        for ws in &mut state.workspaces {
            ws.is_focused = ws.num == Some(num);
        }
    }
}
