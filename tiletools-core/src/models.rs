//! Snapshot objects handed out by the window manager.
mod border;
mod fullscreen_mode;
mod layout;
mod node_type;
mod output;
mod rect;
mod tree;
mod window_change;
mod workspace;

pub mod dto;

pub use border::Border;
pub use fullscreen_mode::FullscreenMode;
pub use layout::Layout;
pub use node_type::NodeType;
pub use output::Output;
pub use rect::Rect;
pub use tree::{Node, NodeIndex, Tree};
pub use window_change::{WindowChange, WindowEvent};
pub use workspace::Workspace;

#[cfg(test)]
pub(crate) use tree::test as test_tree;

/// Container id, stable for the lifetime of the IPC session.
pub type NodeId = u64;
