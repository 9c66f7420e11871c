pub mod file_handler;
pub mod log;

use crate::Config;
use std::process::ExitCode;
use tiletools_core::TileError;
use tracing_subscriber::EnvFilter;

#[must_use]
pub const fn get_help_template() -> &'static str {
    "\
{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}
"
}

/// Loads the configuration and installs the global logger from its `log_level`.
pub fn init() -> Config {
    // Temporary logger until the config is parsed
    let log_guard = tracing::subscriber::set_default(log::get_subscribers(EnvFilter::new("warn")));
    let config = crate::load();
    drop(log_guard);

    let (subscribers, log_parse_err) = log::parse_log_level(&config.log_level);
    if let Err(err) = tracing::subscriber::set_global_default(subscribers) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
    if let Some(err) = log_parse_err {
        tracing::warn!("Error parsing log_level config: {err}");
    }
    config
}

/// Logs a failed run and turns it into the process exit status.
pub fn exit_status<E: Into<anyhow::Error>>(result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = err.into();
            tracing::error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// [`TileError::exit_code`] of the underlying error, 255 for anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<TileError>()
        .map_or(255, TileError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_come_from_the_core_error() {
        let err = anyhow::Error::from(TileError::UnknownTarget("mail".to_owned()));
        assert_eq!(exit_code(&err), 1);
        let err = anyhow::Error::from(TileError::NoFreeSlot { max: 20 });
        assert_eq!(exit_code(&err), 2);
        assert_eq!(exit_code(&anyhow::anyhow!("something else")), 255);
    }
}
