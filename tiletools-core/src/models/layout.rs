use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    SplitH,
    SplitV,
    Stacked,
    Tabbed,
    Dockarea,
    Output,
    /// Sway reports leaves without a layout.
    None,
}

impl Layout {
    /// Stacked containers pile their children top to bottom like `splitv`.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Layout::SplitV | Layout::Stacked)
    }

    #[must_use]
    pub fn is_split(self) -> bool {
        matches!(self, Layout::SplitH | Layout::SplitV)
    }

    /// Split layout that divides the longer side of a `width` x `height` area.
    #[must_use]
    pub fn split_along(width: i32, height: i32) -> Self {
        if width >= height {
            Layout::SplitH
        } else {
            Layout::SplitV
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::SplitH => "horizontal",
            Layout::SplitV => "vertical",
            Layout::Stacked => "stacked",
            Layout::Tabbed => "tabbed",
            Layout::Dockarea => "dockarea",
            Layout::Output => "output",
            Layout::None => "none",
        };
        f.write_str(name)
    }
}
