use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use pagestyle::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "PAGESTYLE";

/// Layer the config sources, lowest precedence first: the user config file,
/// `./.pagestyle.toml`, `./pagestyle.toml`, every `--config FILE`, then
/// `PAGESTYLE__SECTION__KEY` variables. CLI flags are applied later, on the
/// deserialized values.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	build_config_with(cli, environment())
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true)
}

fn build_config_with(cli: &CliArgs, environment: Environment) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}
	// explicitly named files must exist
	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder
		.add_source(environment)
		.build()
		.context("failed to read configuration")
}

/// Config files consulted unless `--no-config` is given.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Ok(path) = app_dirs::user_config_file() {
		files.push(path);
	}
	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pagestyle.toml"));
		files.push(current_dir.join("pagestyle.toml"));
	}
	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn working_directory_files_follow_the_user_file() {
		let files = default_config_files();
		let names: Vec<_> = files
			.iter()
			.rev()
			.take(2)
			.filter_map(|path| path.file_name())
			.collect();
		assert_eq!(names, ["pagestyle.toml", ".pagestyle.toml"]);
	}

	#[test]
	fn environment_overrides_config_files() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pagestyle.toml");
		fs::write(&path, "[defaults]\nfont_size = \"24\"\nfont_color = \"red\"\n").unwrap();
		let path = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["pagestyle", "--no-config", "--config", path.as_str()]);

		let vars = [("PAGESTYLE__DEFAULTS__FONT_SIZE".to_string(), "38".to_string())];
		let config =
			build_config_with(&cli, environment().source(Some(vars.into_iter().collect())))
				.unwrap();

		assert_eq!(config.get_string("defaults.font_size").unwrap(), "38");
		assert_eq!(config.get_string("defaults.font_color").unwrap(), "red");
	}

	#[test]
	fn no_config_skips_the_default_files() {
		let cli = CliArgs::parse_from(["pagestyle", "--no-config"]);
		let config = build_config_with(&cli, environment().source(Some(Default::default())))
			.unwrap();
		assert!(config.get_string("defaults.font_size").is_err());
	}
}
