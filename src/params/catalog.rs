//! Static option sets for every style dimension.

use std::fmt::Write;

use super::{Dimension, StyleOption};

pub static FONT_FAMILIES: [StyleOption; 5] = [
	StyleOption::new("Open Sans", "Open Sans"),
	StyleOption::new("Ubuntu", "Ubuntu"),
	StyleOption::new("Cormorant Garamond", "Cormorant Garamond"),
	StyleOption::new("Days One", "Days One"),
	StyleOption::new("Merriweather", "Merriweather"),
];

pub static FONT_SIZES: [StyleOption; 3] = [
	StyleOption::new("18", "18px"),
	StyleOption::new("24", "24px"),
	StyleOption::new("38", "38px"),
];

pub static FONT_COLORS: [StyleOption; 8] = [
	StyleOption::new("black", "Black"),
	StyleOption::new("white", "White"),
	StyleOption::new("gray", "Gray"),
	StyleOption::new("red", "Red"),
	StyleOption::new("yellow", "Yellow"),
	StyleOption::new("green", "Green"),
	StyleOption::new("blue", "Blue"),
	StyleOption::new("magenta", "Magenta"),
];

pub static BACKGROUND_COLORS: [StyleOption; 8] = [
	StyleOption::new("white", "White"),
	StyleOption::new("black", "Black"),
	StyleOption::new("gray", "Gray"),
	StyleOption::new("red", "Red"),
	StyleOption::new("yellow", "Yellow"),
	StyleOption::new("green", "Green"),
	StyleOption::new("blue", "Blue"),
	StyleOption::new("magenta", "Magenta"),
];

pub static CONTENT_WIDTHS: [StyleOption; 3] = [
	StyleOption::new("548", "Narrow"),
	StyleOption::new("800", "Medium"),
	StyleOption::new("1394", "Wide"),
];

/// Render every dimension and its options as a plain-text listing.
#[must_use]
pub fn describe_options() -> String {
	let mut out = String::new();
	for dimension in Dimension::ALL {
		let _ = writeln!(out, "{} ({}):", dimension.title(), dimension.key());
		for option in dimension.options() {
			if option.label == option.value {
				let _ = writeln!(out, "  {}", option.value);
			} else {
				let _ = writeln!(out, "  {} ({})", option.value, option.label);
			}
		}
	}
	out
}
