use super::Rect;
use serde::{Deserialize, Serialize};

/// A monitor as reported by `get_outputs`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    #[serde(rename = "active", default)]
    pub is_active: bool,
    #[serde(rename = "primary", default)]
    pub is_primary: bool,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub current_workspace: Option<String>,
}

impl Output {
    #[must_use]
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            is_primary: false,
            rect,
            current_workspace: None,
        }
    }
}
