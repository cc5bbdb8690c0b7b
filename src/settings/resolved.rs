use std::path::PathBuf;

use log::LevelFilter;
use pagestyle::StyleSelection;

/// Application-ready configuration derived from config files, environment
/// variables and CLI flags.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Article to display; the built-in sample when `None`.
	pub article_path: Option<PathBuf>,
	pub article_title: Option<String>,
	/// Distinguished default selection for the session.
	pub defaults: StyleSelection,
	pub log_file: PathBuf,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut out = String::from("Effective configuration:\n");
		match &self.article_path {
			Some(path) => out.push_str(&format!("  Article: {}\n", path.display())),
			None => out.push_str("  Article: (built-in sample)\n"),
		}
		if let Some(title) = &self.article_title {
			out.push_str(&format!("  Title: {title}\n"));
		}
		out.push_str("  Defaults:\n");
		for (dimension, option) in self.defaults.iter() {
			out.push_str(&format!("    {}: {}\n", dimension.title(), option.value));
		}
		out.push_str(&format!("  Log file: {}\n", self.log_file.display()));
		out.push_str(&format!("  Log level: {}\n", self.log_level));
		out
	}
}
