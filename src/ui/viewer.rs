//! Read-only article display styled from the page's style variables.

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::article::Article;
use crate::page::Element;

/// Pixels represented by one terminal column when converting
/// `--container-width`.
pub const PIXELS_PER_COLUMN: u16 = 10;
/// Font sizes at or above this render bold.
pub const BOLD_FONT_SIZE: u16 = 24;
const MIN_COLUMNS: u16 = 20;

/// Terminal rendition of the five style variables on the viewer element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerStyle {
	pub font_family: String,
	pub font_size: String,
	pub foreground: Color,
	pub background: Color,
	/// Content width in columns, before clamping to the frame.
	pub columns: u16,
	pub bold: bool,
}

impl ViewerStyle {
	/// Read the variables off `element`. Missing or unparsable values fall
	/// back to the terminal's own defaults.
	#[must_use]
	pub fn from_element(element: &Element) -> Self {
		let style = element.style();
		let font_size = style.property("--font-size").unwrap_or_default().to_string();
		let bold = font_size
			.parse::<u16>()
			.is_ok_and(|size| size >= BOLD_FONT_SIZE);
		let columns = style
			.property("--container-width")
			.and_then(|value| value.trim().parse::<u16>().ok())
			.map_or(u16::MAX, |pixels| (pixels / PIXELS_PER_COLUMN).max(MIN_COLUMNS));

		Self {
			font_family: style
				.property("--font-family")
				.unwrap_or_default()
				.to_string(),
			font_size,
			foreground: parse_color(style.property("--font-color")),
			background: parse_color(style.property("--bg-color")),
			columns,
			bold,
		}
	}

	#[must_use]
	pub fn text_style(&self) -> Style {
		let style = Style::new().fg(self.foreground).bg(self.background);
		if self.bold {
			style.add_modifier(Modifier::BOLD)
		} else {
			style
		}
	}
}

fn parse_color(value: Option<&str>) -> Color {
	value
		.and_then(|value| value.trim().parse::<Color>().ok())
		.unwrap_or(Color::Reset)
}

pub struct ArticleViewer {
	article: Article,
	element: Rc<Element>,
	scroll: u16,
	max_scroll: u16,
}

impl ArticleViewer {
	#[must_use]
	pub fn new(article: Article, element: Rc<Element>) -> Self {
		Self {
			article,
			element,
			scroll: 0,
			max_scroll: 0,
		}
	}

	#[must_use]
	pub fn scroll(&self) -> u16 {
		self.scroll
	}

	pub fn scroll_by(&mut self, delta: i32) {
		let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
		self.scroll = next as u16;
	}

	pub fn scroll_to_top(&mut self) {
		self.scroll = 0;
	}

	pub fn scroll_to_bottom(&mut self) {
		self.scroll = self.max_scroll;
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect) {
		let style = ViewerStyle::from_element(&self.element);
		let base = style.text_style();

		let title = if style.font_size.is_empty() {
			format!(" {} ", style.font_family)
		} else {
			format!(" {} · {}px ", style.font_family, style.font_size)
		};
		let background = Block::new().style(Style::new().bg(style.background));
		frame.render_widget(background, area);

		let columns = style.columns.min(area.width);
		let content = centered(area, columns);
		let block = Block::new()
			.title(Line::from(title).alignment(Alignment::Center))
			.padding(Padding::horizontal(1))
			.style(base);
		let inner = block.inner(content);

		let lines = wrap_article(&self.article, usize::from(inner.width), base);
		let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
		self.max_scroll = total.saturating_sub(inner.height);
		self.scroll = self.scroll.min(self.max_scroll);

		let paragraph = Paragraph::new(Text::from(lines))
			.block(block)
			.scroll((self.scroll, 0));
		frame.render_widget(paragraph, content);
	}
}

fn centered(area: Rect, columns: u16) -> Rect {
	let offset = area.width.saturating_sub(columns) / 2;
	Rect::new(area.x + offset, area.y, columns, area.height)
}

/// Lay the article out as display rows at `width`: the title, then each
/// paragraph after a blank row. Scrolling is bounded by the row count, so
/// wrapping happens here rather than in the paragraph widget.
fn wrap_article(article: &Article, width: usize, base: Style) -> Vec<Line<'static>> {
	let heading = base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
	let mut lines: Vec<Line<'static>> = wrap_words(&article.title, width)
		.into_iter()
		.map(|row| Line::styled(row, heading))
		.collect();
	for paragraph in &article.paragraphs {
		lines.push(Line::default());
		lines.extend(
			wrap_words(paragraph, width)
				.into_iter()
				.map(|row| Line::styled(row, base)),
		);
	}
	lines
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// across rows; an empty text still takes one row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut rows = Vec::new();
	let mut row = String::new();
	let mut row_width = 0;

	for word in text.split_whitespace() {
		let word_width = word.width();
		if row_width > 0 && row_width + 1 + word_width <= width {
			row.push(' ');
			row.push_str(word);
			row_width += 1 + word_width;
			continue;
		}
		if row_width > 0 {
			rows.push(std::mem::take(&mut row));
			row_width = 0;
		}
		if word_width <= width {
			row.push_str(word);
			row_width = word_width;
			continue;
		}
		for ch in word.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if row_width + ch_width > width && row_width > 0 {
				rows.push(std::mem::take(&mut row));
				row_width = 0;
			}
			row.push(ch);
			row_width += ch_width;
		}
	}

	if row_width > 0 || rows.is_empty() {
		rows.push(row);
	}
	rows
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::page::Page;
	use crate::params::StyleSelection;

	fn styled_element() -> Rc<Element> {
		let element = Page::new().create_element("main");
		for (name, value) in StyleSelection::default().style_map().iter() {
			element.set_style_property(name, value);
		}
		element
	}

	#[test]
	fn default_variables_map_to_terminal_styles() {
		let style = ViewerStyle::from_element(&styled_element());
		assert_eq!(style.font_family, "Open Sans");
		assert_eq!(style.foreground, Color::Black);
		assert_eq!(style.background, Color::White);
		assert_eq!(style.columns, 80);
		assert!(!style.bold);
	}

	#[test]
	fn large_fonts_render_bold_and_narrow_widths_keep_a_floor() {
		let element = styled_element();
		element.set_style_property("--font-size", "38");
		element.set_style_property("--container-width", "100");
		let style = ViewerStyle::from_element(&element);
		assert!(style.bold);
		assert_eq!(style.columns, MIN_COLUMNS);
	}

	#[test]
	fn unstyled_element_falls_back_to_terminal_defaults() {
		let element = Page::new().create_element("bare");
		let style = ViewerStyle::from_element(&element);
		assert_eq!(style.foreground, Color::Reset);
		assert_eq!(style.background, Color::Reset);
		assert_eq!(style.columns, u16::MAX);
	}

	#[test]
	fn render_centres_the_article_within_the_content_width() {
		let article = Article::parse("Title\n\nshort body");
		let mut viewer = ArticleViewer::new(article, styled_element());
		let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
		terminal
			.draw(|frame| viewer.render(frame, frame.area()))
			.unwrap();

		let buffer = terminal.backend().buffer();
		// 80 columns centred in 100: content starts at column 10, padded by one
		assert_eq!(buffer[(11, 1)].symbol(), "T");
		assert_eq!(buffer[(11, 1)].fg, Color::Black);
		assert_eq!(buffer[(0, 5)].bg, Color::White);
		let view = terminal.backend().to_string();
		assert!(view.contains("Open Sans · 18px"));
		assert!(view.contains("short body"));
	}

	#[test]
	fn scrolling_is_clamped_to_the_content() {
		let mut viewer = ArticleViewer::new(Article::sample(), styled_element());
		let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
		terminal
			.draw(|frame| viewer.render(frame, frame.area()))
			.unwrap();

		viewer.scroll_by(-5);
		assert_eq!(viewer.scroll(), 0);
		viewer.scroll_by(3);
		assert_eq!(viewer.scroll(), 3);
		viewer.scroll_to_bottom();
		let bottom = viewer.scroll();
		assert!(bottom > 3);
		viewer.scroll_by(100);
		assert_eq!(viewer.scroll(), bottom);
		viewer.scroll_to_top();
		assert_eq!(viewer.scroll(), 0);
	}

	#[test]
	fn last_word_is_reachable_at_the_bottom() {
		let words = vec!["aaaaaaaaaaaaaaa"; 9].join(" ");
		let article = Article::parse(&format!("T\n\n{words} zzzzzzzzzzzzzzz"));
		let mut viewer = ArticleViewer::new(article, styled_element());
		let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
		terminal
			.draw(|frame| viewer.render(frame, frame.area()))
			.unwrap();

		// title, blank row and ten one-word rows in a four-row viewport
		viewer.scroll_to_bottom();
		assert_eq!(viewer.scroll(), 8);
		terminal
			.draw(|frame| viewer.render(frame, frame.area()))
			.unwrap();
		assert!(terminal.backend().to_string().contains("zzzzzzzzzzzzzzz"));
	}

	#[test]
	fn words_wrap_greedily_by_display_width() {
		assert_eq!(wrap_words("one two three four", 9), ["one two", "three", "four"]);
		assert_eq!(wrap_words("abcdefghij", 4), ["abcd", "efgh", "ij"]);
		assert_eq!(wrap_words("", 10), [""]);
		assert_eq!(wrap_words("x  y", 0), ["x", "y"]);
	}
}
