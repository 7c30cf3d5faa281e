use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::{Settings, StdoutFormat};

use super::StartupError;

/// Installs the global subscriber. `RUST_LOG` wins over `logging.filter`.
pub fn init_tracing(settings: &Settings) -> Result<(), StartupError> {
    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter));

    let subscriber = Registry::default().with(filter);

    let fmt_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true);

    match settings.logging.stdout_format {
        StdoutFormat::Compact => {
            tracing::subscriber::set_global_default(subscriber.with(fmt_layer.compact()))?
        }
        StdoutFormat::Pretty => {
            tracing::subscriber::set_global_default(subscriber.with(fmt_layer.pretty()))?
        }
        StdoutFormat::Json => {
            tracing::subscriber::set_global_default(subscriber.with(fmt_layer.json()))?
        }
    }

    tracing::info!(format = settings.logging.stdout_format.as_ref(), "tracing initialized");

    Ok(())
}
