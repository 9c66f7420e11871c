use crate::reconcile::NumberingScheme;
use std::time::Duration;

/// Settings the actions need from the user's configuration.
pub trait Config {
    fn slots_per_output(&self) -> i32;

    /// How long split-and-exec waits for the new window.
    fn event_timeout(&self) -> Duration;

    /// Program started by split-and-exec when none is given.
    fn default_exec(&self) -> String;

    /// Whether asking for the current workspace jumps back to the previous one.
    fn auto_back_and_forth(&self) -> bool;

    fn numbering(&self) -> NumberingScheme {
        NumberingScheme::new(self.slots_per_output())
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct TestConfig {
    pub slots_per_output: i32,
    pub event_timeout: Duration,
    pub auto_back_and_forth: bool,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            slots_per_output: crate::reconcile::DEFAULT_SLOTS_PER_OUTPUT,
            event_timeout: Duration::from_millis(50),
            auto_back_and_forth: true,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn slots_per_output(&self) -> i32 {
        self.slots_per_output
    }

    fn event_timeout(&self) -> Duration {
        self.event_timeout
    }

    fn default_exec(&self) -> String {
        "i3-sensible-terminal".to_owned()
    }

    fn auto_back_and_forth(&self) -> bool {
        self.auto_back_and_forth
    }
}
