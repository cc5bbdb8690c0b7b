//! Document-wide pointer press source.
//!
//! Listeners are registered through [`PointerEvents::subscribe`] and stay
//! registered exactly as long as the returned [`Subscription`] is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

/// A primary-button press at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
	pub column: u16,
	pub row: u16,
}

impl PointerPress {
	#[must_use]
	pub const fn new(column: u16, row: u16) -> Self {
		Self { column, row }
	}

	/// Whether the press landed inside `area`.
	#[must_use]
	pub fn within(&self, area: Rect) -> bool {
		area.contains(Position::new(self.column, self.row))
	}
}

type Listener = Rc<dyn Fn(PointerPress)>;

#[derive(Default)]
struct Registry {
	next_id: u64,
	listeners: Vec<(u64, Listener)>,
}

/// Cheaply cloneable handle to the page's pointer listener registry.
#[derive(Clone, Default)]
pub struct PointerEvents {
	registry: Rc<RefCell<Registry>>,
}

impl PointerEvents {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `listener` until the returned guard is dropped.
	#[must_use = "dropping the subscription deregisters the listener immediately"]
	pub fn subscribe(&self, listener: impl Fn(PointerPress) + 'static) -> Subscription {
		let mut registry = self.registry.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.listeners.push((id, Rc::new(listener)));
		Subscription {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Deliver `press` to every listener registered when dispatch starts.
	///
	/// Listeners may subscribe or drop subscriptions while being called;
	/// such changes take effect from the next dispatch. Returns how many
	/// listeners were notified.
	pub fn dispatch(&self, press: PointerPress) -> usize {
		let snapshot: Vec<Listener> = self
			.registry
			.borrow()
			.listeners
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		for listener in &snapshot {
			listener(press);
		}
		snapshot.len()
	}

	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.registry.borrow().listeners.len()
	}
}

/// Guard for a registered pointer listener. Dropping it deregisters the
/// listener.
pub struct Subscription {
	id: u64,
	registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry
				.borrow_mut()
				.listeners
				.retain(|(id, _)| *id != self.id);
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription").field("id", &self.id).finish()
	}
}
