//! File logging for the interactive session.
//!
//! The terminal belongs to the UI while it runs, so records go to a file
//! through `simplelog`'s [`WriteLogger`]; call sites use the `log` macros.

use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Parse a level name such as `info` or `DEBUG`; `off` disables logging.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(value.trim()).map_err(|_| {
		anyhow!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)")
	})
}

/// Install the global logger writing to `path`, creating parent directories
/// as needed. Nothing is installed for [`LevelFilter::Off`].
pub fn initialize(path: &Path, level: LevelFilter) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::create(path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_thread_level(LevelFilter::Off)
		.build();
	WriteLogger::init(level, config, file).context("a global logger is already installed")?;
	Ok(())
}
