use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use super::layout::PanelBounds;
use crate::page::{PointerEvents, PointerPress, Subscription};

/// Open/closed state of the panel together with the outside-press listener
/// that exists only while the panel is open.
///
/// The listener holds a [`Weak`] back-reference, so dropping the panel
/// drops this value, which drops the [`Subscription`] and deregisters the
/// listener.
#[derive(Debug, Default)]
pub(super) struct Visibility {
	open: Cell<bool>,
	bounds: Cell<PanelBounds>,
	outside_press: RefCell<Option<Subscription>>,
}

impl Visibility {
	pub(super) fn is_open(&self) -> bool {
		self.open.get()
	}

	pub(super) fn set_bounds(&self, bounds: PanelBounds) {
		self.bounds.set(bounds);
	}

	pub(super) fn set_open(self: &Rc<Self>, events: &PointerEvents, open: bool) {
		if open {
			self.open_with(events);
		} else {
			self.close();
		}
	}

	fn open_with(self: &Rc<Self>, events: &PointerEvents) {
		if self.open.replace(true) {
			return;
		}
		let weak: Weak<Self> = Rc::downgrade(self);
		let subscription = events.subscribe(move |press| {
			if let Some(visibility) = weak.upgrade() {
				visibility.on_document_press(press);
			}
		});
		*self.outside_press.borrow_mut() = Some(subscription);
		debug!("settings panel opened");
	}

	pub(super) fn close(&self) {
		let was_open = self.open.replace(false);
		let released = self.outside_press.borrow_mut().take();
		drop(released);
		if was_open {
			debug!("settings panel closed");
		}
	}

	fn on_document_press(&self, press: PointerPress) {
		if self.open.get() && !self.bounds.get().contains(press) {
			debug!(
				"pointer press at {},{} outside the settings panel",
				press.column, press.row
			);
			self.close();
		}
	}

	#[cfg(test)]
	pub(super) fn is_listening(&self) -> bool {
		self.outside_press.borrow().is_some()
	}
}
