use serde::{Deserialize, Serialize};

/// Kind of a node in the window manager tree.
///
/// Leaves are reported as [`NodeType::Container`] with no children.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    #[serde(rename = "root")]
    Root,
    #[serde(rename = "output")]
    Output,
    #[serde(rename = "workspace")]
    Workspace,
    #[serde(rename = "con")]
    Container,
    #[serde(rename = "floating_con")]
    FloatingContainer,
    #[serde(rename = "dockarea")]
    Dockarea,
}

impl NodeType {
    #[must_use]
    pub fn is_container(self) -> bool {
        self == NodeType::Container
    }

    #[must_use]
    pub fn is_workspace(self) -> bool {
        self == NodeType::Workspace
    }
}
