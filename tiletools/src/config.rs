//! `tiletools` general configuration

mod checks;
mod default;

use crate::utils::file_handler;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tiletools_core::{Flavor, MsgClient};

/// Everything read from `config.toml`. Missing keys take their default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `tiletools_core=debug`.
    pub log_level: String,
    pub flavor: Flavor,
    /// Messenger program; `i3-msg` or `swaymsg` depending on `flavor` when unset.
    pub messenger: Option<String>,
    /// Socket path, `~` and `$VARS` expanded. Falls back to `$I3SOCK` / `$SWAYSOCK`.
    pub socket: Option<String>,
    pub slots_per_output: i32,
    pub event_timeout_secs: u64,
    pub default_exec: String,
    // If you are on workspace 1 and you go to workspace 1 this takes you to the previous one
    pub auto_back_and_forth: bool,
}

/// Loads the user's config file, falling back to defaults if it cannot be read.
#[must_use]
pub fn load() -> Config {
    file_handler::load_config_file(None)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

impl Config {
    pub fn messenger(&self) -> &str {
        self.messenger
            .as_deref()
            .unwrap_or_else(|| self.flavor.messenger())
    }

    pub fn socket_path(&self) -> Option<PathBuf> {
        match &self.socket {
            Some(socket) => {
                let expanded = shellexpand::full(socket).map_or_else(
                    |err| {
                        tracing::warn!("Couldn't expand socket path {socket}: {err}");
                        socket.clone()
                    },
                    |path| path.into_owned(),
                );
                Some(PathBuf::from(expanded))
            }
            None => env::var_os(self.flavor.socket_env()).map(PathBuf::from),
        }
    }

    /// Client for the configured window manager.
    pub fn client(&self) -> MsgClient {
        MsgClient::new(self.messenger(), self.socket_path(), self.flavor)
    }
}

impl tiletools_core::Config for Config {
    fn slots_per_output(&self) -> i32 {
        self.slots_per_output
    }

    fn event_timeout(&self) -> Duration {
        Duration::from_secs(self.event_timeout_secs)
    }

    fn default_exec(&self) -> String {
        self.default_exec.clone()
    }

    fn auto_back_and_forth(&self) -> bool {
        self.auto_back_and_forth
    }
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}
