//! Terminal event abstraction.
//!
//! Wraps crossterm events into a smaller enum.  Reads block: the picker has
//! nothing to do between keystrokes.

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Events consumed by the picker loop.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Block until the next relevant terminal event.
pub fn next_event() -> std::io::Result<AppEvent> {
    loop {
        match event::read()? {
            // Windows reports releases too.
            CtEvent::Key(k) if k.kind != KeyEventKind::Release => return Ok(AppEvent::Key(k)),
            CtEvent::Resize(w, h) => return Ok(AppEvent::Resize(w, h)),
            _ => continue,
        }
    }
}
