use ratatui::style::{Color, Modifier, Style};

/// Styles for the settings panel chrome. The article itself is styled from
/// the page's style variables, not from here.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Panel border and the toggle button frame.
	pub border: Style,
	/// Form heading.
	pub heading: Style,
	/// Control titles.
	pub label: Style,
	/// Title of the control that has keyboard focus.
	pub focused: Style,
	/// Current value of a control.
	pub value: Style,
	/// Unselected radio items and select arrows.
	pub muted: Style,
	/// The apply button.
	pub apply: Style,
	/// The reset button.
	pub clear: Style,
}

impl Theme {
	/// Style for a button, highlighted when it has focus.
	#[must_use]
	pub fn button_style(&self, base: Style, focused: bool) -> Style {
		if focused {
			base.add_modifier(Modifier::REVERSED)
		} else {
			base
		}
	}

	#[must_use]
	pub fn label_style(&self, focused: bool) -> Style {
		if focused { self.focused } else { self.label }
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			border: Style::new().fg(Color::DarkGray),
			heading: Style::new().add_modifier(Modifier::BOLD),
			label: Style::new().fg(Color::Gray),
			focused: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			value: Style::new().add_modifier(Modifier::BOLD),
			muted: Style::new().fg(Color::DarkGray),
			apply: Style::new().fg(Color::Black).bg(Color::Green),
			clear: Style::new().fg(Color::Gray),
		}
	}
}
