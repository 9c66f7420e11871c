//! Arena snapshot of the window manager tree.
use super::dto::RawNode;
use super::{FullscreenMode, Layout, NodeId, NodeType, Rect};
use std::collections::VecDeque;

/// Position of a node inside a [`Tree`].
pub type NodeIndex = usize;

/// A container of the tree. Children are referenced by index into the owning [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub r#type: NodeType,
    pub layout: Layout,
    pub name: Option<String>,
    pub num: Option<i32>,
    pub parent: Option<NodeIndex>,
    pub children: Vec<NodeIndex>,
    pub floating: Vec<NodeIndex>,
    pub focus: Vec<NodeId>,
    pub is_focused: bool,
    pub rect: Rect,
    pub fullscreen_mode: FullscreenMode,
    pub marks: Vec<String>,
}

impl Node {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.floating.is_empty()
    }

    #[must_use]
    pub fn has_mark(&self, mark: &str) -> bool {
        self.marks.iter().any(|m| m == mark)
    }

    /// Head of the focus list: the most recently focused child.
    #[must_use]
    pub fn focused_child_id(&self) -> Option<NodeId> {
        self.focus.first().copied()
    }
}

/// Read-only snapshot of a whole `get_tree` reply. The root lives at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub const ROOT: NodeIndex = 0;

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT]
    }

    /// # Panics
    ///
    /// Panics if `index` was not produced by this tree.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    /// Tiling children of `index`, in layout order.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &Node> {
        self.nodes[index].children.iter().map(|&c| &self.nodes[c])
    }

    /// Index of the child of `index` (tiling or floating) whose id is `id`.
    #[must_use]
    pub fn find_child(&self, index: NodeIndex, id: NodeId) -> Option<NodeIndex> {
        let node = &self.nodes[index];
        node.children
            .iter()
            .chain(node.floating.iter())
            .copied()
            .find(|&c| self.nodes[c].id == id)
    }

    #[must_use]
    pub fn position_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Breadth first search for the workspace node with the given id.
    /// Workspaces are not descended into.
    #[must_use]
    pub fn workspace_node(&self, id: NodeId) -> Option<&Node> {
        let mut queue = VecDeque::from([Self::ROOT]);
        while let Some(index) = queue.pop_front() {
            let node = &self.nodes[index];
            if node.r#type.is_workspace() {
                if node.id == id {
                    return Some(node);
                }
                continue;
            }
            queue.extend(node.children.iter().copied());
        }
        None
    }

    fn push(&mut self, raw: RawNode, parent: Option<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node {
            id: raw.id,
            r#type: raw.r#type,
            layout: raw.layout,
            name: raw.name,
            num: raw.num,
            parent,
            children: Vec::with_capacity(raw.nodes.len()),
            floating: Vec::with_capacity(raw.floating_nodes.len()),
            focus: raw.focus,
            is_focused: raw.focused,
            rect: raw.rect,
            fullscreen_mode: raw.fullscreen_mode,
            marks: raw.marks,
        });
        for child in raw.nodes {
            let child = self.push(child, Some(index));
            self.nodes[index].children.push(child);
        }
        for child in raw.floating_nodes {
            let child = self.push(child, Some(index));
            self.nodes[index].floating.push(child);
        }
        index
    }
}

impl From<RawNode> for Tree {
    fn from(root: RawNode) -> Self {
        let mut tree = Tree { nodes: vec![] };
        tree.push(root, None);
        tree
    }
}


#[cfg(test)]
mod tests {
    use super::test::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn flattening_keeps_sibling_order_and_parents() {
        let t = tree(root(
            vec![output(
                10,
                "eDP-1",
                vec![workspace(20, 1, "splith", vec![leaf(30), leaf(31)], &[31, 30])],
                &[20],
            )],
            &[10],
        ));
        let ws = t.position_of(20).unwrap();
        let ids: Vec<_> = t.children(ws).map(|n| n.id).collect();
        assert_eq!(ids, vec![30, 31]);
        assert_eq!(t.node(ws).focus, vec![31, 30]);
        let leaf_index = t.position_of(31).unwrap();
        assert_eq!(t.node(leaf_index).parent, Some(ws));
        assert_eq!(t.root().parent, None);
    }

    #[test]
    fn find_child_sees_floating_children() {
        let ws = with(
            workspace(20, 1, "splith", vec![leaf(30)], &[40, 30]),
            "floating_nodes",
            json!([{"id": 40, "type": "floating_con", "layout": "splith", "nodes": [leaf(41)], "focus": [41]}]),
        );
        let t = tree(root(vec![output(10, "eDP-1", vec![ws], &[20])], &[10]));
        let ws = t.position_of(20).unwrap();
        let floating = t.find_child(ws, 40).unwrap();
        assert_eq!(t.node(floating).r#type, NodeType::FloatingContainer);
        assert!(t.find_child(ws, 41).is_none());
    }

    #[test]
    fn workspace_node_finds_only_workspaces() {
        let t = tree(root(
            vec![output(
                10,
                "eDP-1",
                vec![
                    workspace(20, 1, "splith", vec![leaf(30)], &[30]),
                    workspace(21, 2, "splith", vec![], &[]),
                ],
                &[20, 21],
            )],
            &[10],
        ));
        assert_eq!(t.workspace_node(21).map(|n| n.num), Some(Some(2)));
        assert!(t.workspace_node(21).unwrap().is_empty());
        assert!(t.workspace_node(30).is_none());
        assert!(t.workspace_node(10).is_none());
    }
}
