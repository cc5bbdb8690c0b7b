//! The presentation settings panel.
//!
//! [`SettingsPanel`] owns whether it is open and a draft [`StyleSelection`]
//! that the form edits. Submitting hands the draft's [`StyleMap`] to the host
//! through the `on_update_styles` callback; resetting restores the defaults in
//! both places. While open, a press anywhere outside the toggle and the form
//! closes the panel.

mod field;
mod input;
mod layout;
mod render;
mod visibility;

use std::rc::Rc;

use log::{info, warn};

pub use layout::{FORM_WIDTH, PanelBounds, PanelLayout, TOGGLE_HEIGHT, TOGGLE_WIDTH};

use crate::page::PointerEvents;
use crate::params::{Dimension, StyleMap, StyleOption, StyleSelection};
use crate::ui::Theme;
use visibility::Visibility;

/// Receives every style map the panel emits.
pub type StyleCallback = Box<dyn FnMut(StyleMap)>;

/// A submit or reset request. Handlers mark it default-prevented so the
/// caller knows the event was consumed by the form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormEvent {
	default_prevented: bool,
}

impl FormEvent {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	#[must_use]
	pub fn default_prevented(&self) -> bool {
		self.default_prevented
	}
}

/// A focusable part of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
	Control(Dimension),
	Reset,
	Apply,
}

impl FormField {
	pub const ALL: [FormField; 7] = [
		FormField::Control(Dimension::FontFamily),
		FormField::Control(Dimension::FontSize),
		FormField::Control(Dimension::FontColor),
		FormField::Control(Dimension::BackgroundColor),
		FormField::Control(Dimension::ContentWidth),
		FormField::Reset,
		FormField::Apply,
	];

	fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|field| *field == self)
			.unwrap_or_default()
	}

	/// The field `delta` places away, wrapping around.
	#[must_use]
	pub fn offset(self, delta: isize) -> Self {
		let len = Self::ALL.len() as isize;
		let next = (self.index() as isize + delta).rem_euclid(len) as usize;
		Self::ALL[next]
	}
}

pub struct SettingsPanel {
	visibility: Rc<Visibility>,
	pointer_events: PointerEvents,
	draft: StyleSelection,
	defaults: StyleSelection,
	focus: FormField,
	layout: PanelLayout,
	theme: Theme,
	on_update_styles: StyleCallback,
}

impl SettingsPanel {
	/// Create a closed panel whose draft starts at `defaults`.
	pub fn new(
		pointer_events: PointerEvents,
		defaults: StyleSelection,
		on_update_styles: StyleCallback,
	) -> Self {
		Self {
			visibility: Rc::new(Visibility::default()),
			pointer_events,
			draft: defaults,
			defaults,
			focus: FormField::ALL[0],
			layout: PanelLayout::default(),
			theme: Theme::default(),
			on_update_styles,
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.visibility.is_open()
	}

	#[must_use]
	pub fn draft(&self) -> StyleSelection {
		self.draft
	}

	#[must_use]
	pub fn focus(&self) -> FormField {
		self.focus
	}

	#[must_use]
	pub fn layout(&self) -> PanelLayout {
		self.layout
	}

	/// Record where the panel is drawn. Presses are hit-tested against the
	/// latest layout.
	pub fn set_layout(&mut self, layout: PanelLayout) {
		self.layout = layout;
		self.visibility.set_bounds(layout.bounds());
	}

	/// Flip between open and closed.
	pub fn toggle_open(&mut self) {
		let open = !self.is_open();
		self.visibility.set_open(&self.pointer_events, open);
	}

	/// Close the panel if it is open.
	pub fn close(&mut self) {
		self.visibility.close();
	}

	/// Replace the draft's option for `dimension`, leaving the rest intact.
	pub fn on_field_change(&mut self, dimension: Dimension, option: StyleOption) {
		match self.draft.with(dimension, option) {
			Some(next) => self.draft = next,
			None => warn!("ignoring {:?} for {dimension}: not in its option set", option.value),
		}
	}

	/// Apply the draft: emit its style map once and close the panel.
	pub fn on_submit(&mut self, event: &mut FormEvent) {
		event.prevent_default();
		let styles = self.draft.style_map();
		info!("applying presentation settings: {}", summary(&self.draft));
		(self.on_update_styles)(styles);
		self.visibility.close();
	}

	/// Restore the defaults in the draft and emit their style map once.
	/// Leaves the panel open or closed as it was.
	pub fn on_reset(&mut self, event: &mut FormEvent) {
		event.prevent_default();
		self.draft = self.defaults;
		info!("resetting presentation settings to defaults");
		(self.on_update_styles)(self.defaults.style_map());
	}
}

fn summary(selection: &StyleSelection) -> String {
	selection
		.iter()
		.map(|(dimension, option)| format!("{dimension}={}", option.value))
		.collect::<Vec<_>>()
		.join(" ")
}
