use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::field::FieldControl;
use super::{FormEvent, FormField, SettingsPanel};
use crate::page::PointerPress;
use crate::params::Dimension;

impl SettingsPanel {
	/// Process a key while the panel is open. Returns `false` when the key
	/// was not for the panel.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if !self.is_open() {
			return false;
		}
		match key.code {
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.on_reset(&mut FormEvent::new());
			}
			KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.offset(-1),
			KeyCode::Down | KeyCode::Tab => self.focus = self.focus.offset(1),
			KeyCode::Left => self.step_focused(-1),
			KeyCode::Right => self.step_focused(1),
			KeyCode::Enter => self.activate_focused(),
			KeyCode::Esc => self.close(),
			_ => return false,
		}
		true
	}

	/// Handle a pointer press aimed at the panel itself. Document-level
	/// listeners must already have seen the press.
	///
	/// Returns `true` when the press landed on the toggle or the open form.
	pub fn handle_press(&mut self, press: PointerPress) -> bool {
		if press.within(self.layout.toggle) {
			self.toggle_open();
			return true;
		}
		if !self.is_open() || !press.within(self.layout.form) {
			return false;
		}

		for (dimension, area) in Dimension::ALL.into_iter().zip(self.layout.controls) {
			if !press.within(area) {
				continue;
			}
			self.focus = FormField::Control(dimension);
			let picked = FieldControl::for_dimension(dimension, &self.draft, true, &self.theme)
				.press(area, press);
			if let Some(option) = picked {
				self.on_field_change(dimension, option);
			}
			return true;
		}

		if press.within(self.layout.reset) {
			self.focus = FormField::Reset;
			self.on_reset(&mut FormEvent::new());
		} else if press.within(self.layout.apply) {
			self.focus = FormField::Apply;
			self.on_submit(&mut FormEvent::new());
		}
		true
	}

	fn step_focused(&mut self, delta: isize) {
		match self.focus {
			FormField::Control(dimension) => {
				let next = FieldControl::for_dimension(dimension, &self.draft, true, &self.theme)
					.step(delta);
				if let Some(option) = next {
					self.on_field_change(dimension, option);
				}
			}
			FormField::Reset | FormField::Apply => {
				self.focus = if delta < 0 {
					FormField::Reset
				} else {
					FormField::Apply
				};
			}
		}
	}

	fn activate_focused(&mut self) {
		let mut event = FormEvent::new();
		match self.focus {
			FormField::Reset => self.on_reset(&mut event),
			FormField::Control(_) | FormField::Apply => self.on_submit(&mut event),
		}
	}
}
