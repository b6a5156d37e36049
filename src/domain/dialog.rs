//! Blocking dialogs shown on top of the task list.

use crate::domain::task_list::RemovalRequest;

pub const DUPLICATE_TITLE: &str = "Task já cadastrada";
pub const DUPLICATE_MESSAGE: &str = "Você não pode cadastrar uma task com o mesmo nome";
pub const REMOVE_TITLE: &str = "Remover item";
pub const REMOVE_MESSAGE: &str = "Tem certeza que você deseja remover esse item?";
pub const CHOICE_NO: &str = "Não";
pub const CHOICE_YES: &str = "Sim";
pub const ACKNOWLEDGE: &str = "OK";

/// Button highlighted in a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    No,
    Yes,
}

impl ConfirmChoice {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::No => Self::Yes,
            Self::Yes => Self::No,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => CHOICE_NO,
            Self::Yes => CHOICE_YES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// Single acknowledgement.
    Alert,
    /// Yes/No gate in front of a removal.
    Confirm {
        request: RemovalRequest,
        choice: ConfirmChoice,
    },
}

/// How a dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Dismissed,
    Confirmed(RemovalRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
}

impl Dialog {
    #[must_use]
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Alert,
        }
    }

    /// Alert raised when an add or edit collides with an existing title.
    #[must_use]
    pub fn duplicate_title() -> Self {
        Self::alert(DUPLICATE_TITLE, DUPLICATE_MESSAGE)
    }

    /// Confirmation shown before removing a task. Defaults to "No".
    #[must_use]
    pub fn confirm_removal(request: RemovalRequest) -> Self {
        Self {
            title: REMOVE_TITLE.to_string(),
            message: REMOVE_MESSAGE.to_string(),
            kind: DialogKind::Confirm {
                request,
                choice: ConfirmChoice::default(),
            },
        }
    }

    #[must_use]
    pub const fn choice(&self) -> Option<ConfirmChoice> {
        match &self.kind {
            DialogKind::Alert => None,
            DialogKind::Confirm { choice, .. } => Some(*choice),
        }
    }

    pub fn select(&mut self, selected: ConfirmChoice) {
        if let DialogKind::Confirm { choice, .. } = &mut self.kind {
            *choice = selected;
        }
    }

    pub fn toggle_choice(&mut self) {
        if let Some(choice) = self.choice() {
            self.select(choice.toggled());
        }
    }

    /// Closes the dialog with the highlighted choice.
    #[must_use]
    pub fn submit(self) -> DialogOutcome {
        match self.kind {
            DialogKind::Confirm {
                request,
                choice: ConfirmChoice::Yes,
            } => DialogOutcome::Confirmed(request),
            DialogKind::Confirm { .. } | DialogKind::Alert => DialogOutcome::Dismissed,
        }
    }
}
