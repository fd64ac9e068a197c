use std::{fs::File, path::Path, sync::OnceLock};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const LOG_FILE: &str = "velero.log";

static TRACER: OnceLock<()> = OnceLock::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file subscriber once per process; later calls are no-ops.
pub fn setup_logger(log_dir: &str) -> std::io::Result<()> {
    if TRACER.get().is_some() {
        return Ok(());
    }

    let file = File::create(Path::new(log_dir).join(LOG_FILE))?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .with_filter(tracing_subscriber::filter::LevelFilter::from_level(Level::INFO));

    LOG_GUARD.set(guard).ok();
    tracing_subscriber::registry().with(file_layer).try_init().ok();
    TRACER.set(()).ok();

    Ok(())
}
