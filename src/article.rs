//! Read-only article content shown by the viewer.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const SAMPLE: &str = include_str!("../assets/sample_article.txt");

/// A title followed by paragraphs of prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
	pub title: String,
	pub paragraphs: Vec<String>,
}

impl Article {
	/// Parse plain text: the first non-empty line is the title, blank lines
	/// separate paragraphs, and line breaks inside a paragraph are joined
	/// with a space.
	#[must_use]
	pub fn parse(text: &str) -> Self {
		let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
		let title = lines.next().map(str::trim).unwrap_or_default().to_string();

		let mut paragraphs = Vec::new();
		let mut current: Vec<&str> = Vec::new();
		for line in lines {
			let trimmed = line.trim();
			if trimmed.is_empty() {
				if !current.is_empty() {
					paragraphs.push(current.join(" "));
					current.clear();
				}
			} else {
				current.push(trimmed);
			}
		}
		if !current.is_empty() {
			paragraphs.push(current.join(" "));
		}

		Self { title, paragraphs }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|source| Error::ArticleRead {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::parse(&text))
	}

	/// The article bundled with the binary.
	#[must_use]
	pub fn sample() -> Self {
		Self::parse(SAMPLE)
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
