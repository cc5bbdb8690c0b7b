//! Terminal event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::{Host, HostAction};

/// Upper bound on how long a frame waits for input.
const FRAME: Duration = Duration::from_millis(16);

/// Owns the terminal for the session; restores it when dropped, including on
/// an early return through `?`.
struct Session {
	terminal: DefaultTerminal,
}

impl Session {
	fn start() -> Result<Self> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		Ok(Self { terminal })
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		if let Err(err) = execute!(stdout(), DisableMouseCapture) {
			warn!("failed to disable mouse capture: {err}");
		}
		ratatui::restore();
	}
}

/// Drive `host` from terminal input until it asks to quit.
///
/// Each frame draws once, waits up to [`FRAME`] for input, then handles every
/// event already queued before drawing again.
pub fn run(host: &mut Host) -> Result<()> {
	let mut session = Session::start()?;
	info!("terminal session started");

	loop {
		session.terminal.draw(|frame| host.draw(frame))?;

		if !event::poll(FRAME)? {
			continue;
		}
		loop {
			if handle_event(host, event::read()?) == HostAction::Quit {
				info!("terminal session finished");
				return Ok(());
			}
			if !event::poll(Duration::ZERO)? {
				break;
			}
		}
	}
}

/// Route one terminal event. Key releases and repeats are ignored so that
/// toggles fire once per press.
fn handle_event(host: &mut Host, event: Event) -> HostAction {
	match event {
		Event::Key(key) if key.kind == KeyEventKind::Press => host.handle_key(key),
		Event::Mouse(mouse) => {
			host.handle_mouse(mouse);
			HostAction::Continue
		}
		_ => HostAction::Continue,
	}
}
