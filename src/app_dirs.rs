//! Where `pagestyle` looks for its config file and writes its log.
//!
//! Nothing else touches the disk. Each location can be redirected with an
//! environment variable; otherwise `directories` picks the platform default.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "pagestyle";

/// Overrides the directory holding `config.toml`.
pub const CONFIG_DIR_ENV: &str = "PAGESTYLE_CONFIG_DIR";
/// Overrides the directory holding the default log file.
pub const CACHE_DIR_ENV: &str = "PAGESTYLE_CACHE_DIR";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "pagestyle.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine a home directory for pagestyle"))
}

/// An override value names a directory unless it is empty.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

pub fn get_config_dir() -> Result<PathBuf> {
	match override_dir(env::var_os(CONFIG_DIR_ENV)) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
	}
}

pub fn get_cache_dir() -> Result<PathBuf> {
	match override_dir(env::var_os(CACHE_DIR_ENV)) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.cache_dir().to_path_buf()),
	}
}

/// The user-wide config file, `<config dir>/config.toml`.
pub fn user_config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Log file used when neither config nor CLI names one.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_counts_as_unset() {
		assert_eq!(override_dir(None), None);
		assert_eq!(override_dir(Some(OsString::new())), None);
		assert_eq!(
			override_dir(Some(OsString::from("/tmp/pagestyle"))),
			Some(PathBuf::from("/tmp/pagestyle"))
		);
	}

	#[test]
	fn files_live_in_their_directories() {
		if let (Ok(config), Ok(dir)) = (user_config_file(), get_config_dir()) {
			assert_eq!(config, dir.join(CONFIG_FILE_NAME));
		}
		if let (Ok(log), Ok(dir)) = (default_log_file(), get_cache_dir()) {
			assert_eq!(log, dir.join(LOG_FILE_NAME));
		}
	}
}
