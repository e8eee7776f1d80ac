use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rotate once the log grows past this size (2 MB).
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;

/// Move an oversized log aside so the app always appends to a small file.
/// The previous generation is kept as `vitrine.log.old`.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }

    fs::rename(log_path, log_path.with_extension("log.old"))
}

/// Initialize logging to `{data_dir}/vitrine.log`.
///
/// The level comes from `RUST_LOG` when set, otherwise from `level`. The
/// terminal owns stdout, so nothing is ever logged there.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("vitrine.log");
    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("vitrine={level},vitrine_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("vitrine logging initialized (log_path={})", log_path.display());
    Ok(())
}
