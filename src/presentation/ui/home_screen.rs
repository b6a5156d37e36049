//! The only screen: new-task input above the task list.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::{debug, info};

use crate::NAME;
use crate::application::TaskStore;
use crate::domain::keybinding::{Action, Keymap};
use crate::domain::{Dialog, DialogOutcome, TaskError};
use crate::presentation::theme::Theme;
use crate::presentation::ui::dialog_popup::{DialogPopup, handle_dialog_key};
use crate::presentation::widgets::{
    FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TaskListAction,
    TaskListState, TaskListView, TaskRowAction, TextInput,
};

const INPUT_LABEL: &str = " Nova tarefa ";
const INPUT_PLACEHOLDER: &str = "Adicionar novo todo...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeKeyResult {
    Consumed,
    Quit,
}

/// Owns the task store. Rows only ever see snapshots of it.
pub struct HomeScreenState {
    store: TaskStore,
    input: TextInput,
    list: TaskListState,
    focus: HomeFocus,
    dialog: Option<Dialog>,
    keymap: Keymap,
    theme: Theme,
    show_footer: bool,
}

impl HomeScreenState {
    #[must_use]
    pub fn new(store: TaskStore, keymap: Keymap, theme: Theme) -> Self {
        let input = TextInput::new(INPUT_LABEL)
            .placeholder(INPUT_PLACEHOLDER)
            .accent(theme.accent);
        let mut list = TaskListState::new();
        list.sync(store.tasks());

        let mut state = Self {
            store,
            input,
            list,
            focus: HomeFocus::Input,
            dialog: None,
            keymap,
            theme,
            show_footer: true,
        };
        state.set_focus(HomeFocus::Input);
        state
    }

    #[must_use]
    pub const fn with_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    #[must_use]
    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub const fn input(&self) -> &TextInput {
        &self.input
    }

    #[must_use]
    pub const fn list(&self) -> &TaskListState {
        &self.list
    }

    pub fn set_focus(&mut self, focus: HomeFocus) {
        self.focus = focus;
        self.input.set_focused(focus == HomeFocus::Input);
        self.list.set_focused(focus == HomeFocus::List);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HomeKeyResult {
        if let Some(dialog) = self.dialog.as_mut() {
            if let Some(outcome) = handle_dialog_key(dialog, key, &self.keymap) {
                self.dialog = None;
                self.on_dialog_closed(outcome);
            }
            return HomeKeyResult::Consumed;
        }

        match self.focus {
            HomeFocus::Input => self.handle_input_key(key),
            HomeFocus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> HomeKeyResult {
        match self.keymap.input_action(&key) {
            Some(Action::AddTask) => self.add_task(),
            Some(Action::FocusList) => self.set_focus(HomeFocus::List),
            Some(Action::Quit) => return HomeKeyResult::Quit,
            _ => {
                self.input.handle_key(key);
            }
        }
        HomeKeyResult::Consumed
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> HomeKeyResult {
        match self.list.handle_key(key, &self.keymap) {
            Some(TaskListAction::Row(action)) => self.apply_row_action(action),
            Some(TaskListAction::FocusInput) => self.set_focus(HomeFocus::Input),
            Some(TaskListAction::Quit) => return HomeKeyResult::Quit,
            None => {}
        }
        HomeKeyResult::Consumed
    }

    /// Input is kept when the title is rejected so it can be fixed.
    fn add_task(&mut self) {
        match self.store.add(self.input.value()) {
            Ok(_) => {
                self.input.clear();
                self.list.sync(self.store.tasks());
                self.list.select_last();
            }
            Err(err) => self.reject(&err),
        }
    }

    fn apply_row_action(&mut self, action: TaskRowAction) {
        match action {
            TaskRowAction::ToggleDone(id) => {
                self.store.toggle_done(id);
            }
            TaskRowAction::RequestRemoval(id) => match self.store.request_removal(id) {
                Ok(request) => self.dialog = Some(Dialog::confirm_removal(request)),
                Err(err) => self.reject(&err),
            },
            TaskRowAction::CommitEdit { id, title } => {
                if let Err(err) = self.store.edit(id, &title) {
                    self.reject(&err);
                }
            }
        }
        self.list.sync(self.store.tasks());
    }

    fn on_dialog_closed(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Confirmed(request) => {
                if self.store.confirm_removal(&request) {
                    info!(title = %request.title(), "Task removed");
                }
                self.list.sync(self.store.tasks());
            }
            DialogOutcome::Dismissed => debug!("Dialog dismissed"),
        }
    }

    fn reject(&mut self, err: &TaskError) {
        if err.is_user_facing() {
            self.dialog = Some(Dialog::duplicate_title());
        } else {
            debug!(error = %err, "Ignoring operation on missing task");
        }
    }

    fn focus_context(&self) -> FocusContext {
        if self.dialog.is_some() {
            FocusContext::Dialog
        } else if self.list.is_editing() {
            FocusContext::Editing
        } else {
            match self.focus {
                HomeFocus::Input => FocusContext::Input,
                HomeFocus::List => FocusContext::List,
            }
        }
    }
}

pub struct HomeScreen;

impl StatefulWidget for HomeScreen {
    type State = HomeScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let footer_height = u16::from(state.show_footer);
        let [header_area, input_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        render_header(state, header_area, buf);
        (&state.input).render(input_area, buf);
        StatefulWidget::render(
            TaskListView::new(&state.theme),
            list_area,
            buf,
            &mut state.list,
        );
        if state.show_footer {
            render_footer(state, footer_area, buf);
        }

        if let Some(dialog) = &state.dialog {
            DialogPopup::new(dialog, &state.theme).render(area, buf);
        }
    }
}

fn render_header(state: &HomeScreenState, area: Rect, buf: &mut Buffer) {
    HeaderBar::new(NAME, state.store.len())
        .style(HeaderBarStyle::from_theme(&state.theme))
        .render(area, buf);
}

fn render_footer(state: &HomeScreenState, area: Rect, buf: &mut Buffer) {
    let context = state.focus_context();
    let bindings = match context {
        FocusContext::Input => state.keymap.input_bindings(),
        FocusContext::List => state.keymap.list_bindings(),
        FocusContext::Editing => state.keymap.editing_bindings(),
        FocusContext::Dialog => state.keymap.dialog_bindings(),
    };

    let tasks = state.store.tasks();
    let summary = (!tasks.is_empty()).then(|| format!("{}/{} ", tasks.done_count(), tasks.len()));

    FooterBar::new(bindings)
        .focus_context(context)
        .right_info(summary.as_deref())
        .style(FooterBarStyle::from_theme(&state.theme))
        .render(area, buf);
}
