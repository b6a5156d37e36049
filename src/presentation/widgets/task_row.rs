//! One task line with its inline rename mode.

use crate::domain::keybinding::{Action, Keymap};
use crate::domain::{Task, TaskId};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;
use crossterm::event::KeyEvent;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use tracing::debug;

const EDIT_ICON: &str = "✎";
const CANCEL_ICON: &str = "✕";
const REMOVE_ICON: &str = "✖";

/// Store calls a row asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRowAction {
    ToggleDone(TaskId),
    RequestRemoval(TaskId),
    CommitEdit { id: TaskId, title: String },
}

/// Per-row edit state. The draft only has focus while `is_editing`.
#[derive(Debug, Clone)]
pub struct TaskRowState {
    id: TaskId,
    committed: String,
    editing: bool,
    draft: TextInput,
}

impl TaskRowState {
    #[must_use]
    pub fn new(task: &Task) -> Self {
        let mut draft = TextInput::new("");
        draft.set_value(task.title());
        Self {
            id: task.id(),
            committed: task.title().to_string(),
            editing: false,
            draft,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn committed_title(&self) -> &str {
        &self.committed
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub const fn draft(&self) -> &TextInput {
        &self.draft
    }

    /// Picks up a title from a newer snapshot. Ignored while editing.
    pub fn refresh_title(&mut self, title: &str) {
        if self.editing || self.committed == title {
            return;
        }
        self.committed = title.to_string();
        self.draft.set_value(title);
    }

    pub fn start_editing(&mut self) {
        if self.editing {
            return;
        }
        debug!(id = %self.id, "Editing task");
        self.editing = true;
        self.draft.set_value(self.committed.as_str());
        self.draft.set_focused(true);
    }

    pub fn cancel_editing(&mut self) {
        self.draft.set_value(self.committed.as_str());
        self.leave_editing();
    }

    /// Emits the draft as an edit and resets the draft to the pre-edit
    /// title whether or not the store accepts it.
    pub fn submit_editing(&mut self) -> Option<TaskRowAction> {
        if !self.editing {
            return None;
        }
        let title = self.draft.take();
        self.draft.set_value(self.committed.as_str());
        self.leave_editing();
        Some(TaskRowAction::CommitEdit { id: self.id, title })
    }

    #[must_use]
    pub fn toggle(&self) -> Option<TaskRowAction> {
        if self.editing {
            None
        } else {
            Some(TaskRowAction::ToggleDone(self.id))
        }
    }

    /// Disabled while editing.
    #[must_use]
    pub fn remove(&self) -> Option<TaskRowAction> {
        if self.editing {
            None
        } else {
            Some(TaskRowAction::RequestRemoval(self.id))
        }
    }

    /// Keys while the row is in edit mode. Anything that is not save or
    /// cancel goes to the draft.
    pub fn handle_editing_key(&mut self, key: KeyEvent, keymap: &Keymap) -> Option<TaskRowAction> {
        match keymap.editing_action(&key) {
            Some(Action::SubmitEdit) => self.submit_editing(),
            Some(Action::CancelEdit) => {
                self.cancel_editing();
                None
            }
            _ => {
                self.draft.handle_key(key);
                None
            }
        }
    }

    fn leave_editing(&mut self) {
        self.editing = false;
        self.draft.set_focused(false);
    }
}

/// Renders a task as a single list line.
pub struct TaskRow<'a> {
    task: &'a Task,
    state: &'a TaskRowState,
    theme: &'a Theme,
}

impl<'a> TaskRow<'a> {
    #[must_use]
    pub const fn new(task: &'a Task, state: &'a TaskRowState, theme: &'a Theme) -> Self {
        Self { task, state, theme }
    }

    #[must_use]
    pub fn to_line(&self) -> Line<'a> {
        let marker = if self.task.is_done() { "[x] " } else { "[ ] " };
        let marker_style = if self.task.is_done() {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.base_style
        };

        let mut spans = vec![Span::styled(marker, marker_style)];

        if self.state.is_editing() {
            spans.extend(self.draft_spans());
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                CANCEL_ICON,
                Style::default().fg(self.theme.accent),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(REMOVE_ICON, self.theme.dimmed_style));
        } else {
            let title_style = if self.task.is_done() {
                self.theme.done_style
            } else {
                self.theme.base_style
            };
            spans.push(Span::styled(self.task.title().to_string(), title_style));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(EDIT_ICON, self.theme.dimmed_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(REMOVE_ICON, self.theme.dimmed_style));
        }

        Line::from(spans)
    }

    fn draft_spans(&self) -> Vec<Span<'a>> {
        let draft = self.state.draft();
        let value = draft.value();
        let split = value
            .char_indices()
            .nth(draft.cursor())
            .map_or(value.len(), |(i, _)| i);
        let (before, rest) = value.split_at(split);
        let mut rest_chars = rest.chars();
        let at = rest_chars.next().map_or_else(|| " ".to_string(), String::from);

        let text = Style::default().add_modifier(Modifier::UNDERLINED);
        vec![
            Span::styled(before.to_string(), text),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(rest_chars.as_str().to_string(), text),
        ]
    }
}

impl<'a> From<TaskRow<'a>> for ListItem<'a> {
    fn from(row: TaskRow<'a>) -> Self {
        ListItem::new(row.to_line())
    }
}
