//! Presentation parameters chosen by the reader.
//!
//! [`StyleOption`] values are drawn from static catalogs, one per
//! [`Dimension`]. A [`StyleSelection`] holds one option per dimension and
//! projects into the [`StyleMap`] of style variables applied to the viewer.

mod catalog;
mod option;
mod selection;
mod style_map;

pub use catalog::{
	BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS, FONT_FAMILIES, FONT_SIZES, describe_options,
};
pub use option::{Dimension, StyleOption};
pub use selection::StyleSelection;
pub use style_map::{StyleMap, VARIABLE_NAMES};
