use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear};

use super::field::FieldControl;
use super::layout::{APPLY_TITLE, PanelLayout, RESET_TITLE};
use super::{FormField, SettingsPanel};
use crate::params::Dimension;
use crate::ui::controls::{ArrowButton, Button, Separator};

const HEADING: &str = "SET PARAMETERS";

impl SettingsPanel {
	/// Lay the panel out over `area` and draw it. The form is only drawn
	/// while open; the toggle always is.
	pub fn render(&mut self, frame: &mut Frame, area: Rect) {
		self.set_layout(PanelLayout::compute(area));
		let layout = self.layout;
		let theme = &self.theme;

		frame.render_widget(
			ArrowButton {
				open: self.is_open(),
				theme,
			},
			layout.toggle,
		);

		if !self.is_open() {
			return;
		}

		frame.render_widget(Clear, layout.form);
		frame.render_widget(
			Block::bordered()
				.border_type(BorderType::Rounded)
				.border_style(theme.border),
			layout.form,
		);
		frame.render_widget(Line::styled(HEADING, theme.heading), layout.heading);

		for (dimension, area) in Dimension::ALL.into_iter().zip(layout.controls) {
			let focused = self.focus == FormField::Control(dimension);
			frame.render_widget(
				FieldControl::for_dimension(dimension, &self.draft, focused, theme),
				area,
			);
		}
		frame.render_widget(Separator { style: theme.border }, layout.separator);

		frame.render_widget(
			Button {
				title: RESET_TITLE,
				style: theme.button_style(theme.clear, self.focus == FormField::Reset),
			},
			layout.reset,
		);
		frame.render_widget(
			Button {
				title: APPLY_TITLE,
				style: theme.button_style(theme.apply, self.focus == FormField::Apply),
			},
			layout.apply,
		);
	}
}
