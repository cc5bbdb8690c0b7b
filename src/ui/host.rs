//! The page host: mounts the settings panel next to the article viewer and
//! owns the applied style variables.

use std::rc::Rc;

use log::{debug, info};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::panel::{SettingsPanel, TOGGLE_WIDTH};
use super::viewer::ArticleViewer;
use crate::article::Article;
use crate::error::{Error, Result};
use crate::page::{Element, Page, PointerPress};
use crate::params::{StyleMap, StyleSelection};

/// Id of the element that carries the applied style variables.
pub const MAIN_ID: &str = "main";

/// Set every entry of `map` as a style property on `element`.
pub fn apply_style_map(element: &Element, map: &StyleMap) {
	for (name, value) in map.iter() {
		element.set_style_property(name, value);
	}
	debug!("applied {} style variables to #{}", map.len(), element.id());
}

/// What the runtime should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
	Continue,
	Quit,
}

pub struct Host {
	page: Page,
	main: Rc<Element>,
	panel: SettingsPanel,
	viewer: ArticleViewer,
	defaults: StyleSelection,
	initialized: bool,
}

impl Host {
	/// Mount into the element `mount_id` of `page` and apply `defaults`.
	///
	/// Fails with [`Error::MissingMountPoint`] when the page has no such
	/// element; nothing is rendered in that case.
	pub fn mount(
		mut page: Page,
		mount_id: &str,
		article: Article,
		defaults: StyleSelection,
	) -> Result<Self> {
		if page.element_by_id(mount_id).is_none() {
			return Err(Error::MissingMountPoint(mount_id.to_string()));
		}

		let main = page.create_element(MAIN_ID);
		let target = Rc::clone(&main);
		let panel = SettingsPanel::new(
			page.pointer_events().clone(),
			defaults,
			Box::new(move |map| apply_style_map(&target, &map)),
		);
		let viewer = ArticleViewer::new(article, Rc::clone(&main));

		let mut host = Self {
			page,
			main,
			panel,
			viewer,
			defaults,
			initialized: false,
		};
		host.initialize();
		info!("mounted into #{mount_id}");
		Ok(host)
	}

	/// Apply the default styles. Only the first call has any effect.
	pub fn initialize(&mut self) {
		if self.initialized {
			return;
		}
		self.initialized = true;
		self.apply_style_map(&self.defaults.style_map());
	}

	pub fn apply_style_map(&self, map: &StyleMap) {
		apply_style_map(&self.main, map);
	}

	/// The element holding the applied style variables.
	#[must_use]
	pub fn main_element(&self) -> &Rc<Element> {
		&self.main
	}

	#[must_use]
	pub fn page(&self) -> &Page {
		&self.page
	}

	#[must_use]
	pub fn panel(&self) -> &SettingsPanel {
		&self.panel
	}

	pub fn panel_mut(&mut self) -> &mut SettingsPanel {
		&mut self.panel
	}

	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let viewer_area = Rect {
			x: area.x.saturating_add(TOGGLE_WIDTH),
			width: area.width.saturating_sub(TOGGLE_WIDTH),
			..area
		};
		self.viewer.render(frame, viewer_area);
		self.panel.render(frame, area);
	}

	/// Route a key press: panel shortcuts first, then the open form, then
	/// viewer navigation. While the panel is open, keys the form does not use
	/// are dropped, so `q` only quits with the panel closed.
	pub fn handle_key(&mut self, key: KeyEvent) -> HostAction {
		let toggle = matches!(key.code, KeyCode::F(2))
			|| (key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL));
		if toggle {
			self.panel.toggle_open();
			return HostAction::Continue;
		}
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return HostAction::Quit;
		}
		if self.panel.handle_key(key) || self.panel.is_open() {
			return HostAction::Continue;
		}

		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return HostAction::Quit,
			KeyCode::Up | KeyCode::Char('k') => self.viewer.scroll_by(-1),
			KeyCode::Down | KeyCode::Char('j') => self.viewer.scroll_by(1),
			KeyCode::PageUp => self.viewer.scroll_by(-10),
			KeyCode::PageDown | KeyCode::Char(' ') => self.viewer.scroll_by(10),
			KeyCode::Home | KeyCode::Char('g') => self.viewer.scroll_to_top(),
			KeyCode::End | KeyCode::Char('G') => self.viewer.scroll_to_bottom(),
			_ => {}
		}
		HostAction::Continue
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				self.handle_press(PointerPress::new(mouse.column, mouse.row));
			}
			MouseEventKind::ScrollUp if !self.panel.is_open() => self.viewer.scroll_by(-3),
			MouseEventKind::ScrollDown if !self.panel.is_open() => self.viewer.scroll_by(3),
			_ => {}
		}
	}

	/// Deliver a press to document-level listeners, then to the panel.
	///
	/// Listeners registered by the panel's own reaction (opening via the
	/// toggle) therefore never observe the press that registered them.
	pub fn handle_press(&mut self, press: PointerPress) {
		self.page.pointer_events().dispatch(press);
		self.panel.handle_press(press);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::page::ROOT_ID;
	use crate::params::VARIABLE_NAMES;

	fn host() -> Host {
		Host::mount(
			Page::with_root(),
			ROOT_ID,
			Article::parse("Title\n\nBody"),
			StyleSelection::default(),
		)
		.expect("root exists")
	}

	fn applied(host: &Host) -> Vec<(String, String)> {
		VARIABLE_NAMES
			.iter()
			.map(|name| {
				let value = host.main_element().style_property(name).unwrap_or_default();
				((*name).to_string(), value)
			})
			.collect()
	}

	#[test]
	fn mount_applies_the_defaults() {
		let host = host();
		let expected = StyleSelection::default().style_map();
		for (name, value) in applied(&host) {
			assert_eq!(Some(value.as_str()), expected.get(&name), "{name}");
		}
	}

	#[test]
	fn mount_uses_the_given_defaults_and_the_page_pointer_source() {
		let defaults = StyleSelection::default()
			.with(
				crate::params::Dimension::FontSize,
				crate::params::Dimension::FontSize.find("38").unwrap(),
			)
			.unwrap();
		let mut host = Host::mount(Page::with_root(), ROOT_ID, Article::sample(), defaults)
			.expect("root exists");
		assert_eq!(
			host.main_element().style_property("--font-size").as_deref(),
			Some("38")
		);
		assert_eq!(host.panel().draft(), defaults);

		host.panel_mut().toggle_open();
		assert_eq!(host.page().pointer_events().listener_count(), 1);
	}

	#[test]
	fn mount_without_root_fails() {
		let err = Host::mount(
			Page::new(),
			ROOT_ID,
			Article::sample(),
			StyleSelection::default(),
		)
		.err()
		.expect("mount must fail");
		assert!(matches!(err, Error::MissingMountPoint(ref id) if id == ROOT_ID));
		assert_eq!(err.to_string(), "mount point '#root' not found in page");
	}

	#[test]
	fn initialize_runs_once() {
		let mut host = host();
		host.main_element().set_style_property("--font-size", "38");
		host.initialize();
		assert_eq!(
			host.main_element().style_property("--font-size").as_deref(),
			Some("38")
		);
	}

	#[test]
	fn apply_overwrites_every_variable() {
		let host = host();
		let selection = StyleSelection::default()
			.with(
				crate::params::Dimension::BackgroundColor,
				crate::params::Dimension::BackgroundColor.find("black").unwrap(),
			)
			.unwrap();
		host.apply_style_map(&selection.style_map());
		assert_eq!(
			host.main_element().style_property("--bg-color").as_deref(),
			Some("black")
		);
		assert_eq!(host.main_element().style().len(), VARIABLE_NAMES.len());
	}

	#[test]
	fn toggle_shortcuts_and_quit() {
		let mut host = host();
		let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
		assert_eq!(host.handle_key(ctrl_s), HostAction::Continue);
		assert!(host.panel().is_open());

		// Esc closes the open panel rather than quitting
		assert_eq!(
			host.handle_key(KeyEvent::from(KeyCode::Esc)),
			HostAction::Continue
		);
		assert!(!host.panel().is_open());

		assert_eq!(host.handle_key(KeyEvent::from(KeyCode::F(2))), HostAction::Continue);
		assert!(host.panel().is_open());
		assert_eq!(host.handle_key(KeyEvent::from(KeyCode::F(2))), HostAction::Continue);
		assert_eq!(host.handle_key(KeyEvent::from(KeyCode::Char('q'))), HostAction::Quit);
	}

	#[test]
	fn q_is_ignored_while_the_panel_is_open() {
		let mut host = host();
		host.panel_mut().toggle_open();
		assert_eq!(
			host.handle_key(KeyEvent::from(KeyCode::Char('q'))),
			HostAction::Continue
		);
		assert!(host.panel().is_open());
		assert_eq!(
			host.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
			HostAction::Quit
		);
	}

	#[test]
	fn outside_click_closes_after_a_draw() {
		let mut host = host();
		let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
		terminal.draw(|frame| host.draw(frame)).unwrap();

		host.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 2,
			row: 1,
			modifiers: KeyModifiers::NONE,
		});
		assert!(host.panel().is_open());
		assert_eq!(host.page().pointer_events().listener_count(), 1);

		host.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 100,
			row: 10,
			modifiers: KeyModifiers::NONE,
		});
		assert!(!host.panel().is_open());
		assert_eq!(host.page().pointer_events().listener_count(), 0);
	}
}
