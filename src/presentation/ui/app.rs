//! Main application orchestrator.

use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::application::TaskStore;
use crate::domain::keybinding::Keymap;
use crate::infrastructure::AppConfig;
use crate::infrastructure::ids::id_generator;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{HomeKeyResult, HomeScreen, HomeScreenState};

pub struct App {
    screen: HomeScreenState,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let store = TaskStore::new(
            id_generator(config.tasks.id_source),
            config.tasks.edit_duplicate_policy,
        );
        let keymap = Keymap::with_overrides(&config.keybindings);
        let theme = Theme::new(&config.ui.accent_color);

        info!(
            id_source = ?config.tasks.id_source,
            policy = %config.tasks.edit_duplicate_policy,
            "Task list ready"
        );

        Self {
            screen: HomeScreenState::new(store, keymap, theme).with_footer(config.ui.show_footer),
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            match terminal_events.next().await {
                Some(Ok(event)) => {
                    if self.handle_event(&EventHandler::classify(&event)) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
                Some(Err(e)) => warn!(error = %e, "Failed to read terminal event"),
                None => {
                    debug!("Terminal event stream closed");
                    self.running = false;
                }
            }
        }

        info!(tasks = self.screen.store().len(), "Application exiting normally");
        Ok(())
    }

    /// Returns whether the screen needs a redraw.
    fn handle_event(&mut self, event: &EventResult) -> bool {
        match event {
            EventResult::Key(key) => {
                if self.screen.handle_key(*key) == HomeKeyResult::Quit {
                    self.running = false;
                }
                self.running
            }
            EventResult::Redraw => true,
            EventResult::Exit => {
                self.running = false;
                false
            }
            EventResult::Ignore => false,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(HomeScreen, frame.area(), &mut self.screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> EventResult {
        EventResult::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_uses_configured_policy() {
        let mut config = AppConfig::default();
        config.tasks.edit_duplicate_policy = crate::domain::DuplicatePolicy::ExemptSelf;

        let app = App::new(&config);

        assert_eq!(
            app.screen.store().policy(),
            crate::domain::DuplicatePolicy::ExemptSelf
        );
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = App::new(&AppConfig::default());

        assert!(!app.handle_event(&key(KeyCode::Esc)));
        assert!(!app.running);
    }

    #[test]
    fn test_force_quit_while_editing() {
        let mut app = App::new(&AppConfig::default());
        app.handle_event(&key(KeyCode::Char('a')));
        app.handle_event(&key(KeyCode::Enter));
        app.handle_event(&key(KeyCode::Tab));
        app.handle_event(&key(KeyCode::Char('e')));

        app.handle_event(&EventResult::Exit);

        assert!(!app.running);
    }

    #[test]
    fn test_keys_request_redraw() {
        let mut app = App::new(&AppConfig::default());

        assert!(app.handle_event(&key(KeyCode::Char('x'))));
        assert!(app.handle_event(&EventResult::Redraw));
        assert!(!app.handle_event(&EventResult::Ignore));
        assert!(app.running);
    }

    #[test]
    fn test_keybinding_overrides_reach_screen() {
        let mut config = AppConfig::default();
        config
            .keybindings
            .insert("x".to_string(), crate::domain::keybinding::Action::RemoveTask);
        let mut app = App::new(&config);
        app.handle_event(&key(KeyCode::Char('a')));
        app.handle_event(&key(KeyCode::Enter));
        app.handle_event(&key(KeyCode::Tab));

        app.handle_event(&key(KeyCode::Char('x')));

        assert!(app.screen.dialog().is_some());
    }
}
