//! End-to-end panel flows against a mounted host.

use std::cell::RefCell;
use std::rc::Rc;

use pagestyle::params::VARIABLE_NAMES;
use pagestyle::ui::FormEvent;
use pagestyle::ui::panel::{PanelLayout, TOGGLE_WIDTH};
use pagestyle::{
	Article, Dimension, Host, Page, PointerEvents, PointerPress, ROOT_ID, SettingsPanel,
	StyleMap, StyleSelection,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

fn mounted() -> Host {
	Host::mount(
		Page::with_root(),
		ROOT_ID,
		Article::parse("Flow\n\nA short body."),
		StyleSelection::default(),
	)
	.expect("page has a root")
}

fn applied(host: &Host) -> Vec<(String, Option<String>)> {
	VARIABLE_NAMES
		.iter()
		.map(|name| ((*name).to_string(), host.main_element().style_property(name)))
		.collect()
}

fn expected(map: &StyleMap) -> Vec<(String, Option<String>)> {
	VARIABLE_NAMES
		.iter()
		.map(|name| ((*name).to_string(), map.get(name).map(str::to_string)))
		.collect()
}

#[test]
fn open_change_size_and_submit_then_reset() {
	let events = PointerEvents::new();
	let emitted: Rc<RefCell<Vec<StyleMap>>> = Rc::default();
	let sink = Rc::clone(&emitted);
	let mut panel = SettingsPanel::new(
		events.clone(),
		StyleSelection::default(),
		Box::new(move |map| sink.borrow_mut().push(map)),
	);
	panel.set_layout(PanelLayout::compute(Rect::new(0, 0, 100, 30)));

	panel.toggle_open();
	let size = Dimension::FontSize.find("24").unwrap();
	panel.on_field_change(Dimension::FontSize, size);
	panel.on_submit(&mut FormEvent::new());

	assert!(!panel.is_open());
	{
		let emitted = emitted.borrow();
		assert_eq!(emitted.len(), 1);
		let map = &emitted[0];
		assert_eq!(map.len(), 5);
		assert_eq!(map.get("--font-family"), Some("Open Sans"));
		assert_eq!(map.get("--font-size"), Some("24"));
		assert_eq!(map.get("--font-color"), Some("black"));
		assert_eq!(map.get("--bg-color"), Some("white"));
		assert_eq!(map.get("--container-width"), Some("800"));
	}

	panel.on_reset(&mut FormEvent::new());
	assert!(!panel.is_open());
	assert_eq!(emitted.borrow().len(), 2);
	assert_eq!(emitted.borrow()[1], StyleSelection::default().style_map());
	assert_eq!(events.listener_count(), 0);
}

#[test]
fn host_applies_defaults_then_submitted_styles() {
	let mut host = mounted();
	assert_eq!(applied(&host), expected(&StyleSelection::default().style_map()));

	let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
	terminal.draw(|frame| host.draw(frame)).unwrap();

	// open with the toggle, pick the next font family, apply with Enter on Apply
	host.handle_press(PointerPress::new(1, 1));
	assert!(host.panel().is_open());
	host.handle_key(KeyEvent::from(KeyCode::Right));
	host.handle_key(KeyEvent::from(KeyCode::BackTab));
	host.handle_key(KeyEvent::from(KeyCode::Enter));

	assert!(!host.panel().is_open());
	assert_eq!(
		host.main_element().style_property("--font-family").as_deref(),
		Some("Ubuntu")
	);
	assert_eq!(host.page().pointer_events().listener_count(), 0);

	terminal.draw(|frame| host.draw(frame)).unwrap();
	let view = terminal.backend().to_string();
	assert!(view.contains("Ubuntu · 18px"));
}

#[test]
fn press_beside_the_open_panel_closes_without_applying() {
	let mut host = mounted();
	let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
	terminal.draw(|frame| host.draw(frame)).unwrap();

	host.panel_mut().toggle_open();
	host.handle_key(KeyEvent::from(KeyCode::Right));
	assert_eq!(host.panel().draft().get(Dimension::FontFamily).value, "Ubuntu");

	host.handle_press(PointerPress::new(TOGGLE_WIDTH + 60, 20));
	assert!(!host.panel().is_open());
	assert_eq!(
		host.main_element().style_property("--font-family").as_deref(),
		Some("Open Sans")
	);
}
