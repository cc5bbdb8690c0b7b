use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

use pagestyle::{Dimension, StyleSelection, app_dirs, logging};

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	article: ArticleSection,
	defaults: DefaultsSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ArticleSection {
	path: Option<PathBuf>,
	title: Option<String>,
}

/// Session defaults by option value; each must belong to its dimension.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DefaultsSection {
	font_family: Option<String>,
	font_size: Option<String>,
	font_color: Option<String>,
	background_color: Option<String>,
	content_width: Option<String>,
}

impl DefaultsSection {
	fn entries(&self) -> [(Dimension, &'static str, Option<&str>); 5] {
		[
			(Dimension::FontFamily, "font_family", self.font_family.as_deref()),
			(Dimension::FontSize, "font_size", self.font_size.as_deref()),
			(Dimension::FontColor, "font_color", self.font_color.as_deref()),
			(
				Dimension::BackgroundColor,
				"background_color",
				self.background_color.as_deref(),
			),
			(
				Dimension::ContentWidth,
				"content_width",
				self.content_width.as_deref(),
			),
		]
	}

	/// Overlay the configured values onto the built-in default selection.
	fn resolve(&self) -> Result<StyleSelection> {
		let mut selection = StyleSelection::default();
		for (dimension, key, value) in self.entries() {
			let Some(value) = value else {
				continue;
			};
			let option = dimension
				.find(value)
				.with_context(|| format!("invalid [defaults] {key}"))?;
			if let Some(next) = selection.with(dimension, option) {
				selection = next;
			}
		}
		Ok(selection)
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	file: Option<PathBuf>,
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.article.clone() {
			self.article.path = Some(path);
		}
		if let Some(title) = cli.title.clone() {
			self.article.title = Some(title);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the raw values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = self.defaults.resolve()?;

		let log_level = match self.logging.level.as_deref() {
			Some(level) => logging::parse_level(level).context("invalid [logging] level")?,
			None => LevelFilter::Info,
		};
		let log_file = match self.logging.file {
			Some(file) => file,
			None => app_dirs::default_log_file()?,
		};

		let article_title = self
			.article
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty());

		Ok(ResolvedConfig {
			article_path: self.article.path,
			article_title,
			defaults,
			log_file,
			log_level,
		})
	}
}
