use crate::errors::{Result, TileError};
use crate::models::{Node, NodeIndex, Tree};

/// Follows the focus list from the root down to the focused node.
///
/// Returns `Ok(None)` when the path ends without reaching a focused node, or when it
/// references a child that is not in the snapshot.
///
/// # Errors
///
/// Returns [`TileError::MalformedTree`] if a node with children on the focus path has an
/// empty focus list.
pub fn focused_leaf(tree: &Tree) -> Result<Option<&Node>> {
    Ok(focused_index(tree)?.map(|index| tree.node(index)))
}

/// Same as [`focused_leaf`], returning the arena index.
///
/// # Errors
///
/// See [`focused_leaf`].
pub fn focused_index(tree: &Tree) -> Result<Option<NodeIndex>> {
    focused_index_from(tree, Tree::ROOT)
}

fn focused_index_from(tree: &Tree, index: NodeIndex) -> Result<Option<NodeIndex>> {
    let node = tree.node(index);
    if node.is_focused {
        return Ok(Some(index));
    }
    let Some(id) = node.focused_child_id() else {
        if node.is_empty() {
            return Ok(None);
        }
        return Err(TileError::MalformedTree(format!(
            "container {} has children but an empty focus list",
            node.id
        )));
    };
    match tree.find_child(index, id) {
        Some(child) => focused_index_from(tree, child),
        None => {
            tracing::debug!("Focus list of {} points to missing child {}", node.id, id);
            Ok(None)
        }
    }
}
