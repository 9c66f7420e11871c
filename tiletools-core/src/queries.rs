//! Read-only questions asked of a snapshot.
pub mod border;
pub mod focus;
pub mod marks;
pub mod outputs;
pub mod workspaces;

pub use border::border_of_focused;
pub use focus::{focused_index, focused_leaf};
pub use marks::find_workspace_by_mark;
pub use outputs::{focused_output, ordered_output_names, ordered_outputs, workspace_output};
pub use workspaces::{
    focused_workspace, focused_workspace_num, other_workspace, other_workspace_num,
    workspace_by_node_id, workspace_by_num,
};
