use crate::models::{NodeId, Workspace};

#[must_use]
pub fn focused_workspace(workspaces: &[Workspace]) -> Option<&Workspace> {
    workspaces.iter().find(|ws| ws.is_focused)
}

#[must_use]
pub fn focused_workspace_num(workspaces: &[Workspace]) -> Option<i32> {
    focused_workspace(workspaces).and_then(|ws| ws.num)
}

/// First workspace that is visible on some output but not focused.
#[must_use]
pub fn other_workspace(workspaces: &[Workspace]) -> Option<&Workspace> {
    workspaces.iter().find(|ws| ws.is_visible && !ws.is_focused)
}

#[must_use]
pub fn other_workspace_num(workspaces: &[Workspace]) -> Option<i32> {
    other_workspace(workspaces).and_then(|ws| ws.num)
}

#[must_use]
pub fn workspace_by_num(workspaces: &[Workspace], num: i32) -> Option<&Workspace> {
    workspaces.iter().find(|ws| ws.num == Some(num))
}

#[must_use]
pub fn workspace_by_node_id(workspaces: &[Workspace], id: NodeId) -> Option<&Workspace> {
    workspaces.iter().find(|ws| ws.id == id)
}
