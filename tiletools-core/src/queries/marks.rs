use crate::models::{Node, NodeIndex, Tree};

/// Outcome of a subtree search: whether the mark was seen, and the workspace that owns it
/// once one has been met on the way up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkSearch {
    found: bool,
    workspace: Option<NodeIndex>,
}

impl MarkSearch {
    const MISSING: MarkSearch = MarkSearch {
        found: false,
        workspace: None,
    };
}

/// Workspace containing the node carrying `mark`.
///
/// A marked workspace is returned as is. Returns `None` if no node carries the mark, or if
/// the marked node is not inside any workspace.
#[must_use]
pub fn find_workspace_by_mark<'a>(tree: &'a Tree, mark: &str) -> Option<&'a Node> {
    let search = search(tree, Tree::ROOT, mark);
    if search.found && search.workspace.is_none() {
        tracing::debug!("Mark {mark} is not inside a workspace");
    }
    search.workspace.map(|index| tree.node(index))
}

fn search(tree: &Tree, index: NodeIndex, mark: &str) -> MarkSearch {
    let node = tree.node(index);
    let workspace = node.r#type.is_workspace().then_some(index);
    if node.has_mark(mark) {
        return MarkSearch {
            found: true,
            workspace,
        };
    }

    for &child in node.children.iter().chain(node.floating.iter()) {
        let result = search(tree, child, mark);
        if result.found {
            return MarkSearch {
                found: true,
                workspace: result.workspace.or(workspace),
            };
        }
    }
    MarkSearch::MISSING
}
