use anyhow::Result;
use pagestyle::StyleMap;
use pagestyle::params::describe_options;

/// Print the style variables as `name: value;` declarations.
pub(crate) fn print_plain(map: &StyleMap) {
	print!("{map}");
}

/// Format the style variables as a pretty JSON object.
pub(crate) fn format_styles_json(map: &StyleMap) -> Result<String> {
	Ok(serde_json::to_string_pretty(map)?)
}

pub(crate) fn print_json(map: &StyleMap) -> Result<()> {
	println!("{}", format_styles_json(map)?);
	Ok(())
}

/// Print every dimension with its selectable options.
pub(crate) fn print_options() {
	print!("{}", describe_options());
}

#[cfg(test)]
mod tests {
	use pagestyle::StyleSelection;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_lists_every_variable() {
		let map = StyleSelection::default().style_map();
		let json = format_styles_json(&map).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["--font-family"], "Open Sans");
		assert_eq!(value["--font-size"], "18");
		assert_eq!(value["--container-width"], "800");
		assert_eq!(value.as_object().map(|object| object.len()), Some(5));
	}
}
