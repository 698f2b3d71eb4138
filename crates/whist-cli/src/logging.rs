use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use whist_core::{Config, ConfigPaths};

/// Where log lines may go for the running command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The terminal belongs to the scoreboard; only a configured file is used.
    FileOnly,
}

/// Installs the global subscriber. `RUST_LOG` wins over `--verbose`, which
/// wins over the configured level.
pub fn init(config: &Config, paths: &ConfigPaths, verbose: bool, target: LogTarget) -> Result<()> {
    let level = if verbose { "debug" } else { config.logging.level.as_str() };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("parse log level {level:?}"))?,
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match (config.log_file(paths), target) {
        (Some(path), _) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, LogTarget::FileOnly) => return Ok(()),
        (None, LogTarget::Stderr) => builder.without_time().with_writer(io::stderr).try_init(),
    };
    installed.map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))
}
