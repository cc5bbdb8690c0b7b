use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while assembling the page.
///
/// None of these can occur once the host is mounted; panel operations are
/// total over the option catalog.
#[derive(Debug, Error)]
pub enum Error {
	#[error("mount point '#{0}' not found in page")]
	MissingMountPoint(String),

	#[error("'{value}' is not a valid {dimension} option (expected one of: {expected})")]
	UnknownOption {
		dimension: &'static str,
		value: String,
		expected: String,
	},

	#[error("failed to read article {}", path.display())]
	ArticleRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
