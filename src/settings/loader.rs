use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use log::LevelFilter;
	use pagestyle::Dimension;

	use super::*;

	fn cli_with_config(contents: &str, extra: &[&str]) -> (tempfile::TempDir, CliArgs) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pagestyle.toml");
		fs::write(&path, contents).unwrap();
		let path = path.to_string_lossy().into_owned();
		let mut args = vec!["pagestyle", "--no-config", "--config", path.as_str()];
		args.extend_from_slice(extra);
		let cli = CliArgs::try_parse_from(args).unwrap();
		(dir, cli)
	}

	#[test]
	fn config_file_sets_the_session_defaults() {
		let (_dir, cli) = cli_with_config(
			r#"
[defaults]
font_family = "ubuntu"
font_size = 24
background_color = "black"

[logging]
level = "debug"
"#,
			&[],
		);
		let resolved = load(&cli).unwrap();
		assert_eq!(resolved.defaults.get(Dimension::FontFamily).value, "Ubuntu");
		assert_eq!(resolved.defaults.get(Dimension::FontSize).value, "24");
		assert_eq!(resolved.defaults.get(Dimension::BackgroundColor).value, "black");
		assert_eq!(resolved.defaults.get(Dimension::ContentWidth).value, "800");
		assert_eq!(resolved.log_level, LevelFilter::Debug);
	}

	#[test]
	fn cli_flags_override_the_file() {
		let (_dir, cli) = cli_with_config(
			"[article]\npath = \"from-config.txt\"\ntitle = \"Config title\"\n",
			&["cli.txt", "--title", "CLI title", "--log-level", "warn"],
		);
		let resolved = load(&cli).unwrap();
		assert_eq!(
			resolved.article_path.as_deref(),
			Some(std::path::Path::new("cli.txt"))
		);
		assert_eq!(resolved.article_title.as_deref(), Some("CLI title"));
		assert_eq!(resolved.log_level, LevelFilter::Warn);
	}

	#[test]
	fn unknown_default_value_is_rejected() {
		let (_dir, cli) = cli_with_config("[defaults]\nfont_color = \"teal\"\n", &[]);
		let err = load(&cli).unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("font_color"), "{message}");
		assert!(message.contains("'teal' is not a valid font-color option"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_fails() {
		let cli = CliArgs::try_parse_from([
			"pagestyle",
			"--no-config",
			"--config",
			"/definitely/not/here/pagestyle.toml",
		])
		.unwrap();
		assert!(load(&cli).is_err());
	}
}
