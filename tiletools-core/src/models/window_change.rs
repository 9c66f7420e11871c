use super::dto::RawNode;
use serde::{Deserialize, Serialize};

/// What happened to the container of a window event.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WindowChange {
    New,
    Close,
    Focus,
    Title,
    FullscreenMode,
    Move,
    Floating,
    Urgent,
    Mark,
    #[serde(other)]
    Other,
}

/// A `window` event from the event subscription.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowEvent {
    pub change: WindowChange,
    pub container: RawNode,
}

impl WindowEvent {
    #[must_use]
    pub fn is_new_window(&self) -> bool {
        self.change == WindowChange::New
    }
}
