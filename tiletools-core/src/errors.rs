use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Malformed tree: {0}")]
    MalformedTree(String),
    #[error("Workspace {num} belongs to output {index}, but only {available} outputs are active")]
    IndexOutOfRange {
        num: i32,
        index: usize,
        available: usize,
    },
    #[error("No free workspace slot in 1..={max}")]
    NoFreeSlot { max: i32 },
    #[error("`{0}` is neither a workspace number nor a mark")]
    UnknownTarget(String),
    #[error("Window manager rejected command: {reason}")]
    CommandFailed { reason: String },
    #[error("{program} exited with {status}: {stderr}")]
    Messenger {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("Parsing error: {0}")]
    Protocol(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TileError {
    /// Process exit status for a tool that failed with this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownTarget(_) => 1,
            Self::CommandFailed { .. } | Self::NoFreeSlot { .. } | Self::IndexOutOfRange { .. } => 2,
            Self::MalformedTree(_) => 3,
            Self::Protocol(_) | Self::Messenger { .. } | Self::Io(_) => 255,
        }
    }
}
