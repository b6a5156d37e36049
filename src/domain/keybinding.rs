use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,

    // Focus
    FocusInput,
    FocusList,

    // Navigation
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,

    // Task actions
    AddTask,
    ToggleDone,
    StartEdit,
    SubmitEdit,
    CancelEdit,
    RemoveTask,

    // Dialog
    Confirm,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Compares code and modifiers. Shift is ignored for characters since
    /// terminals already report the shifted character.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.key.code != key.code {
            return false;
        }
        let strip = |m: KeyModifiers| match key.code {
            KeyCode::Char(_) => m.difference(KeyModifiers::SHIFT),
            _ => m,
        };
        strip(self.key.modifiers) == strip(key.modifiers)
    }
}

/// Parses specs such as `"Ctrl+q"`, `"Alt+Enter"`, `"Shift+Tab"` or `"x"`.
/// The plus key itself is written `"+"` or `"Ctrl++"`.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let (prefix, last) = match spec.strip_suffix('+') {
        Some("") => ("", "+"),
        Some(rest) if rest.ends_with('+') => (rest.strip_suffix('+')?, "+"),
        _ => match spec.rsplit_once('+') {
            Some(("", _)) => return None,
            Some(split) => split,
            None => ("", spec),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('+').filter(|_| !prefix.is_empty()) {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match last.trim() {
        "" => return None,
        name if name.chars().count() == 1 => KeyCode::Char(name.chars().next()?),
        name => match name.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            _ => return None,
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Keybindings per focus area. Only the list bindings can be overridden
/// from the configuration; the others drive text entry and stay fixed.
#[derive(Debug, Clone)]
pub struct Keymap {
    list: Vec<Keybind>,
    input: Vec<Keybind>,
    editing: Vec<Keybind>,
    dialog: Vec<Keybind>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            list: vec![
                Keybind::new(key(KeyCode::Char(' ')), Action::ToggleDone, "Done"),
                Keybind::new(key(KeyCode::Enter), Action::ToggleDone, "Done").hidden(),
                Keybind::new(key(KeyCode::Char('e')), Action::StartEdit, "Edit"),
                Keybind::new(key(KeyCode::Char('d')), Action::RemoveTask, "Remove"),
                Keybind::new(key(KeyCode::Delete), Action::RemoveTask, "Remove").hidden(),
                Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Char('g')), Action::SelectFirst, "First").hidden(),
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
                    Action::SelectLast,
                    "Last",
                )
                .hidden(),
                Keybind::new(key(KeyCode::Tab), Action::FocusInput, "New task"),
                Keybind::new(key(KeyCode::Char('i')), Action::FocusInput, "New task").hidden(),
                Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit"),
                Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit").hidden(),
            ],
            input: vec![
                Keybind::new(key(KeyCode::Enter), Action::AddTask, "Add"),
                Keybind::new(key(KeyCode::Tab), Action::FocusList, "Tasks"),
                Keybind::new(key(KeyCode::Down), Action::FocusList, "Tasks").hidden(),
                Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit"),
            ],
            editing: vec![
                Keybind::new(key(KeyCode::Enter), Action::SubmitEdit, "Save"),
                Keybind::new(key(KeyCode::Esc), Action::CancelEdit, "Cancel"),
            ],
            dialog: vec![
                Keybind::new(key(KeyCode::Enter), Action::Confirm, "Choose"),
                Keybind::new(key(KeyCode::Esc), Action::Dismiss, "Close"),
            ],
        }
    }
}

impl Keymap {
    /// Builds the default keymap with user overrides for the task list.
    ///
    /// An override replaces every default binding that used the same key.
    /// Unparseable key specs are skipped with a warning.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut keymap = Self::default();
        let mut specs: Vec<_> = overrides.iter().collect();
        specs.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in specs {
            let Some(event) = parse_key(spec) else {
                warn!(key = %spec, "Ignoring unparseable keybinding");
                continue;
            };
            keymap.list.retain(|k| !k.matches(&event));
            let label = keymap
                .list
                .iter()
                .find(|k| k.action == *action)
                .map_or_else(|| Cow::Owned(format!("{action:?}")), |k| k.label.clone());
            keymap.list.insert(0, Keybind::new(event, *action, label));
        }

        keymap
    }

    #[must_use]
    pub fn list_action(&self, key: &KeyEvent) -> Option<Action> {
        Self::lookup(&self.list, key)
    }

    #[must_use]
    pub fn input_action(&self, key: &KeyEvent) -> Option<Action> {
        Self::lookup(&self.input, key)
    }

    #[must_use]
    pub fn editing_action(&self, key: &KeyEvent) -> Option<Action> {
        Self::lookup(&self.editing, key)
    }

    #[must_use]
    pub fn dialog_action(&self, key: &KeyEvent) -> Option<Action> {
        Self::lookup(&self.dialog, key)
    }

    #[must_use]
    pub fn list_bindings(&self) -> &[Keybind] {
        &self.list
    }

    #[must_use]
    pub fn input_bindings(&self) -> &[Keybind] {
        &self.input
    }

    #[must_use]
    pub fn editing_bindings(&self) -> &[Keybind] {
        &self.editing
    }

    #[must_use]
    pub fn dialog_bindings(&self) -> &[Keybind] {
        &self.dialog
    }

    fn lookup(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
        bindings.iter().find(|k| k.matches(key)).map(|k| k.action)
    }
}
