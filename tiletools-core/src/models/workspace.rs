use super::dto::workspace_num;
use super::{NodeId, Rect};
use serde::{Deserialize, Serialize};

/// A workspace as reported by `get_workspaces`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: NodeId,
    #[serde(default, deserialize_with = "workspace_num")]
    pub num: Option<i32>,
    #[serde(default)]
    pub name: String,
    pub output: String,
    #[serde(rename = "focused", default)]
    pub is_focused: bool,
    #[serde(rename = "visible", default)]
    pub is_visible: bool,
    #[serde(rename = "urgent", default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub rect: Rect,
}

impl Workspace {
    #[must_use]
    pub fn new(id: NodeId, num: i32, output: impl Into<String>) -> Self {
        Self {
            id,
            num: Some(num),
            name: num.to_string(),
            output: output.into(),
            is_focused: false,
            is_visible: false,
            is_urgent: false,
            rect: Rect::default(),
        }
    }
}
