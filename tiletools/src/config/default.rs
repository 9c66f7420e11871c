use super::Config;
use tiletools_core::reconcile::DEFAULT_SLOTS_PER_OUTPUT;
use tiletools_core::Flavor;

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            flavor: Flavor::default(),
            messenger: None,
            socket: None,
            slots_per_output: DEFAULT_SLOTS_PER_OUTPUT,
            event_timeout_secs: 7,
            default_exec: "i3-sensible-terminal".to_owned(),
            auto_back_and_forth: true,
        }
    }
}
