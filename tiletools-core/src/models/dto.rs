//! Shapes of the JSON replies sent by the window manager.
use super::{FullscreenMode, Layout, NodeId, NodeType, Rect};
use serde::{Deserialize, Deserializer, Serialize};

/// One node of a `get_tree` reply, children nested.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub r#type: NodeType,
    pub layout: Layout,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "workspace_num")]
    pub num: Option<i32>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub floating_nodes: Vec<RawNode>,
    #[serde(default)]
    pub focus: Vec<NodeId>,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub fullscreen_mode: FullscreenMode,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Result of a single command in an `execute` reply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// i3 numbers named-only workspaces `-1`.
pub(crate) fn workspace_num<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let num = Option::<i32>::deserialize(deserializer)?;
    Ok(num.filter(|n| *n >= 0))
}
