//! Tracing setup.
//!
//! Log lines go to a file, not stdout: the terminal is the game surface.
//! Verbosity follows `ABYSS_LOG` (an `EnvFilter` directive string).

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "abyss.log";
const ENV_VAR: &str = "ABYSS_LOG";

/// Install the global subscriber. The returned guard must stay alive for
/// the duration of the process so buffered lines are flushed on exit.
pub fn init() -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
