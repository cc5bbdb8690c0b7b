//! Minimal page shell: identified elements carrying style declarations, and
//! the document-wide pointer event source.
//!
//! The shell does no layout of its own. Components look elements up by id,
//! write style variables onto them, and read those variables back when they
//! render.

mod pointer;

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

pub use pointer::{PointerEvents, PointerPress, Subscription};

/// Id of the element the host mounts into.
pub const ROOT_ID: &str = "root";

/// Named style properties set on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
	properties: BTreeMap<String, String>,
}

impl StyleDeclaration {
	pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.properties.insert(name.into(), value.into());
	}

	#[must_use]
	pub fn property(&self, name: &str) -> Option<&str> {
		self.properties.get(name).map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

/// A page element. Shared through `Rc` so that the component writing its
/// style and the one reading it can both hold on to it.
#[derive(Debug)]
pub struct Element {
	id: String,
	style: RefCell<StyleDeclaration>,
}

impl Element {
	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn set_style_property(&self, name: &str, value: &str) {
		self.style.borrow_mut().set_property(name, value);
	}

	#[must_use]
	pub fn style_property(&self, name: &str) -> Option<String> {
		self.style.borrow().property(name).map(str::to_owned)
	}

	/// Borrow the full declaration. Do not hold the guard across a call
	/// that may write to this element.
	#[must_use]
	pub fn style(&self) -> Ref<'_, StyleDeclaration> {
		self.style.borrow()
	}
}

/// Owner of every element and the pointer event source.
#[derive(Default)]
pub struct Page {
	elements: Vec<Rc<Element>>,
	pointer_events: PointerEvents,
}

impl Page {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A page with the [`ROOT_ID`] mount point already in place.
	#[must_use]
	pub fn with_root() -> Self {
		let mut page = Self::new();
		page.create_element(ROOT_ID);
		page
	}

	/// Create an element, or return the existing one with the same id.
	pub fn create_element(&mut self, id: impl Into<String>) -> Rc<Element> {
		let id = id.into();
		if let Some(existing) = self.element_by_id(&id) {
			return existing;
		}
		let element = Rc::new(Element {
			id,
			style: RefCell::default(),
		});
		self.elements.push(Rc::clone(&element));
		element
	}

	#[must_use]
	pub fn element_by_id(&self, id: &str) -> Option<Rc<Element>> {
		self.elements
			.iter()
			.find(|element| element.id == id)
			.map(Rc::clone)
	}

	#[must_use]
	pub fn pointer_events(&self) -> &PointerEvents {
		&self.pointer_events
	}
}
