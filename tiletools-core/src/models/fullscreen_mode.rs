use serde::{Deserialize, Serialize};

/// Fullscreen state of a container, sent as an integer by the window manager.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum FullscreenMode {
    #[default]
    None,
    Output,
    Global,
}

impl FullscreenMode {
    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        self != FullscreenMode::None
    }
}

impl TryFrom<u8> for FullscreenMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Output),
            2 => Ok(Self::Global),
            other => Err(format!("unknown fullscreen mode {other}")),
        }
    }
}

impl From<FullscreenMode> for u8 {
    fn from(mode: FullscreenMode) -> Self {
        match mode {
            FullscreenMode::None => 0,
            FullscreenMode::Output => 1,
            FullscreenMode::Global => 2,
        }
    }
}
