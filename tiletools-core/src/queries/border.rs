//! Which screen edges the focused container touches.
//!
//! The answer comes from the shape of the tree alone: at every level of the focus path
//! the focused child keeps an edge only if its parent had it and the layout lets the
//! child reach it. Absolute coordinates are never consulted.
use crate::errors::{Result, TileError};
use crate::models::{Border, NodeIndex, Tree};

/// Border of the focused node, starting from the whole screen at the root.
///
/// # Errors
///
/// Returns [`TileError::MalformedTree`] if the focus path references a missing child.
pub fn border_of_focused(tree: &Tree) -> Result<Border> {
    node_on_border(tree, Tree::ROOT, Border::UNIQUE)
}

fn node_on_border(tree: &Tree, index: NodeIndex, on_border: Border) -> Result<Border> {
    let node = tree.node(index);
    let Some(focused_id) = node.focused_child_id().filter(|_| !node.is_focused) else {
        return Ok(Border::UNIQUE);
    };

    let vertical_layout = node.layout.is_vertical();
    let child_index = tree.find_child(index, focused_id).ok_or_else(|| {
        TileError::MalformedTree(format!(
            "focus list of {} points to missing child {focused_id}",
            node.id
        ))
    })?;
    let child = tree.node(child_index);

    let is_first = node.children.first() == Some(&child_index);
    let is_last = node.children.last() == Some(&child_index);
    let child_on_left = on_border.is_on(Border::LEFT) && (vertical_layout || is_first);
    let child_on_right = on_border.is_on(Border::RIGHT) && (vertical_layout || is_last);
    let child_on_top = on_border.is_on(Border::TOP) && (!vertical_layout || is_first);
    let child_on_bottom = on_border.is_on(Border::BOTTOM) && (!vertical_layout || is_last);

    let child_position = if !child.r#type.is_container() {
        Border::UNIQUE
    } else if on_border.is_no() {
        Border::NO
    } else {
        Border::when(Border::LEFT, child_on_left)
            | Border::when(Border::RIGHT, child_on_right)
            | Border::when(Border::TOP, child_on_top)
            | Border::when(Border::BOTTOM, child_on_bottom)
    };

    if child.is_focused {
        tracing::trace!(
            siblings = node.children.len(),
            parent_border = %on_border,
            vertical_layout,
            child_border = %child_position,
            "Reached the focused container"
        );
        return Ok(child_position);
    }
    node_on_border(tree, child_index, child_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_tree::*;
    use serde_json::{json, Value};

    fn single_workspace(layout: &str, nodes: Vec<Value>, focus: &[u64]) -> Tree {
        tree(root(
            vec![output(10, "eDP-1", vec![workspace(20, 1, layout, nodes, focus)], &[20])],
            &[10],
        ))
    }

    #[test]
    fn single_leaf_root_is_unique() {
        let t = tree(with(focused_window(1), "type", json!("root")));
        assert_eq!(border_of_focused(&t).unwrap(), Border::UNIQUE);
    }

    #[test]
    fn first_of_a_row_touches_left_top_and_bottom() {
        let t = tree(con(1, "splith", vec![focused_window(2), leaf(3)], &[2, 3]));
        let border = border_of_focused(&t).unwrap();
        assert_eq!(border, Border::LEFT | Border::TOP | Border::BOTTOM);
        assert!(!border.is_on(Border::RIGHT));
    }

    #[test]
    fn recomputing_gives_the_same_answer() {
        let t = tree(con(1, "splith", vec![focused_window(2), leaf(3)], &[2, 3]));
        assert_eq!(border_of_focused(&t).unwrap(), border_of_focused(&t).unwrap());
    }

    #[test]
    fn only_window_of_a_workspace_is_unique() {
        let t = single_workspace("splith", vec![focused_window(30)], &[30]);
        assert_eq!(border_of_focused(&t).unwrap(), Border::UNIQUE);
    }

    #[test]
    fn middle_of_a_column_touches_only_the_sides() {
        let t = single_workspace("splitv", vec![leaf(30), focused_window(31), leaf(32)], &[31, 30, 32]);
        assert_eq!(border_of_focused(&t).unwrap(), Border::LEFT | Border::RIGHT);
    }

    #[test]
    fn last_of_a_stack_touches_the_bottom() {
        let t = single_workspace("stacked", vec![leaf(30), focused_window(31)], &[31, 30]);
        assert_eq!(
            border_of_focused(&t).unwrap(),
            Border::LEFT | Border::RIGHT | Border::BOTTOM
        );
    }

    #[test]
    fn tabs_count_as_a_row() {
        let t = single_workspace("tabbed", vec![leaf(30), focused_window(31)], &[31, 30]);
        assert_eq!(
            border_of_focused(&t).unwrap(),
            Border::RIGHT | Border::TOP | Border::BOTTOM
        );
    }

    #[test]
    fn nested_splits_narrow_the_border() {
        // [ 30 | [ 32 / 33 ] ] with 33 focused: bottom right corner
        let t = single_workspace(
            "splith",
            vec![leaf(30), con(31, "splitv", vec![leaf(32), focused_window(33)], &[33, 32])],
            &[31, 30],
        );
        assert_eq!(border_of_focused(&t).unwrap(), Border::RIGHT | Border::BOTTOM);
    }

    #[test]
    fn lost_edges_are_never_regained() {
        // middle column of three, then a single child inside it
        let t = single_workspace(
            "splith",
            vec![
                leaf(30),
                con(31, "splitv", vec![con(32, "splith", vec![focused_window(33)], &[33])], &[32]),
                leaf(34),
            ],
            &[31, 30, 34],
        );
        assert_eq!(border_of_focused(&t).unwrap(), Border::TOP | Border::BOTTOM);
    }

    #[test]
    fn interior_placement_propagates_no() {
        // middle of a row inside the middle of a column
        let t = single_workspace(
            "splitv",
            vec![
                leaf(30),
                con(31, "splith", vec![leaf(32), con(33, "splitv", vec![focused_window(35)], &[35]), leaf(34)], &[33, 32, 34]),
                leaf(36),
            ],
            &[31, 30, 36],
        );
        assert_eq!(border_of_focused(&t).unwrap(), Border::NO);
    }

    #[test]
    fn workspace_boundary_resets_to_unique() {
        // the output's content container is not first, but the workspace starts over
        let t = tree(root(
            vec![output(
                10,
                "eDP-1",
                vec![
                    json!({"id": 11, "type": "dockarea", "layout": "dockarea"}),
                    con(12, "splith", vec![workspace(20, 1, "splith", vec![focused_window(30), leaf(31)], &[30, 31])], &[20]),
                ],
                &[12, 11],
            )],
            &[10],
        ));
        assert_eq!(
            border_of_focused(&t).unwrap(),
            Border::LEFT | Border::TOP | Border::BOTTOM
        );
    }

    #[test]
    fn floating_windows_are_unique() {
        let ws = with(
            workspace(20, 1, "splith", vec![leaf(30), leaf(31)], &[40, 31, 30]),
            "floating_nodes",
            json!([{"id": 40, "type": "floating_con", "layout": "splith", "nodes": [focused_window(41)], "focus": [41]}]),
        );
        let t = tree(root(vec![output(10, "eDP-1", vec![ws], &[20])], &[10]));
        assert_eq!(border_of_focused(&t).unwrap(), Border::UNIQUE);
    }

    #[test]
    fn missing_focused_child_is_malformed() {
        let t = single_workspace("splith", vec![leaf(30)], &[99]);
        assert!(matches!(border_of_focused(&t), Err(TileError::MalformedTree(_))));
    }
}
