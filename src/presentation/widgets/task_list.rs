//! Ordered list of task rows with a selection cursor.

use std::collections::HashMap;

use crate::domain::keybinding::{Action, Keymap};
use crate::domain::{TaskId, TaskList};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::task_row::{TaskRow, TaskRowAction, TaskRowState};
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tracing::debug;

/// What the list asks of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    Row(TaskRowAction),
    FocusInput,
    Quit,
}

/// Row states in snapshot order, rebuilt only when the snapshot changes.
#[derive(Debug, Default)]
pub struct TaskListState {
    snapshot: TaskList,
    rows: Vec<TaskRowState>,
    list_state: ListState,
    focused: bool,
}

impl TaskListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles rows with `tasks`. Returns `false` when it is the
    /// snapshot already shown.
    pub fn sync(&mut self, tasks: &TaskList) -> bool {
        if self.snapshot.ptr_eq(tasks) {
            return false;
        }

        let mut previous: HashMap<TaskId, TaskRowState> =
            self.rows.drain(..).map(|row| (row.id(), row)).collect();

        self.rows = tasks
            .iter()
            .map(|task| match previous.remove(&task.id()) {
                Some(mut row) => {
                    row.refresh_title(task.title());
                    row
                }
                None => TaskRowState::new(task),
            })
            .collect();

        debug!(
            rows = self.rows.len(),
            dropped = previous.len(),
            "Task list reconciled"
        );
        self.snapshot = tasks.clone();
        self.clamp_selection();
        true
    }

    #[must_use]
    pub fn rows(&self) -> &[TaskRowState] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&TaskRowState> {
        self.selected().and_then(|i| self.rows.get(i))
    }

    fn selected_row_mut(&mut self) -> Option<&mut TaskRowState> {
        self.list_state.selected().and_then(|i| self.rows.get_mut(i))
    }

    /// True while the selected row is being renamed.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.selected_row().is_some_and(TaskRowState::is_editing)
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected() {
            if i + 1 < self.rows.len() {
                self.list_state.select(Some(i + 1));
            }
        } else {
            self.select_first();
        }
    }

    pub fn select_previous(&mut self) {
        match self.selected() {
            Some(i) => self.list_state.select(Some(i.saturating_sub(1))),
            None => self.select_last(),
        }
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Handles a key while the list has focus.
    pub fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> Option<TaskListAction> {
        if let Some(row) = self.selected_row_mut().filter(|row| row.is_editing()) {
            return row
                .handle_editing_key(key, keymap)
                .map(TaskListAction::Row);
        }

        match keymap.list_action(&key)? {
            Action::NavigateUp => self.select_previous(),
            Action::NavigateDown => self.select_next(),
            Action::SelectFirst => self.select_first(),
            Action::SelectLast => self.select_last(),
            Action::ToggleDone => {
                return self
                    .selected_row()
                    .and_then(TaskRowState::toggle)
                    .map(TaskListAction::Row);
            }
            Action::RemoveTask => {
                return self
                    .selected_row()
                    .and_then(TaskRowState::remove)
                    .map(TaskListAction::Row);
            }
            Action::StartEdit => {
                if let Some(row) = self.selected_row_mut() {
                    row.start_editing();
                }
            }
            Action::FocusInput => return Some(TaskListAction::FocusInput),
            Action::Quit => return Some(TaskListAction::Quit),
            _ => {}
        }
        None
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.list_state.selected(), self.rows.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }
}

const LIST_TITLE: &str = " Tarefas ";
const EMPTY_HINT: &str = "Nenhuma tarefa por aqui";

pub struct TaskListView<'a> {
    theme: &'a Theme,
}

impl<'a> TaskListView<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for TaskListView<'_> {
    type State = TaskListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if state.focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(LIST_TITLE, border_style));

        if state.rows.is_empty() {
            Paragraph::new(EMPTY_HINT)
                .style(self.theme.dimmed_style)
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = state
            .snapshot
            .iter()
            .zip(&state.rows)
            .map(|(task, row)| TaskRow::new(task, row, self.theme).into())
            .collect();

        let highlight = if state.focused {
            self.theme.selection_style
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}
