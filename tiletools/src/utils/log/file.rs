use std::fs;
use tracing::Subscriber;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "tiletools.log";

/// Appends to `$XDG_CACHE_HOME/tiletools/tiletools.log`. Without a usable cache directory
/// the layer is left out.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = get_log_writer().map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    subscriber.with(layer)
}

fn get_log_writer() -> Option<RollingFileAppender> {
    let dir = BaseDirectories::with_prefix("tiletools").ok()?.get_cache_home();
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("Couldn't create log directory {}: {err}", dir.display());
        return None;
    }
    Some(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
}
