//! Terminal event filtering.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the run loop should do with an incoming terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Forward the key to the screen.
    Key(KeyEvent),
    /// Redraw without touching state.
    Redraw,
    /// Nothing to do.
    Ignore,
    /// Exit regardless of focus.
    Exit,
}

/// Classifies raw terminal events before they reach the screen.
pub struct EventHandler;

impl EventHandler {
    #[must_use]
    pub fn classify(event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => EventResult::Ignore,
            Event::Key(key) if Self::is_force_quit(key) => EventResult::Exit,
            Event::Key(key) => EventResult::Key(*key),
            Event::Resize(..) => EventResult::Redraw,
            _ => EventResult::Ignore,
        }
    }

    /// Ctrl+C quits from any screen, including while typing.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }
}
