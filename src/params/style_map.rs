use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::StyleSelection;

/// Every variable name a [`StyleMap`] carries.
pub const VARIABLE_NAMES: [&str; 5] = [
	"--font-family",
	"--font-size",
	"--font-color",
	"--container-width",
	"--bg-color",
];

/// Style variables ready to be applied to a page element.
///
/// Always derived from a [`StyleSelection`]; there is no way to build one
/// with missing or extra keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<&'static str, String>);

impl StyleMap {
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		self.0.iter().map(|(name, value)| (*name, value.as_str()))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&StyleSelection> for StyleMap {
	fn from(selection: &StyleSelection) -> Self {
		Self(
			selection
				.iter()
				.map(|(dimension, option)| (dimension.variable(), option.value.to_string()))
				.collect(),
		)
	}
}

/// Formats as one `name: value;` declaration per line.
impl fmt::Display for StyleMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (name, value) in self.iter() {
			writeln!(f, "{name}: {value};")?;
		}
		Ok(())
	}
}
