use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::dialog::ACKNOWLEDGE;
use crate::domain::keybinding::{Action, Keymap};
use crate::domain::{ConfirmChoice, Dialog, DialogKind, DialogOutcome};
use crate::presentation::theme::Theme;

/// Applies a key to the open dialog. `Some` means the dialog closed.
pub fn handle_dialog_key(
    dialog: &mut Dialog,
    key: KeyEvent,
    keymap: &Keymap,
) -> Option<DialogOutcome> {
    match keymap.dialog_action(&key) {
        Some(Action::Confirm) => return Some(dialog.clone().submit()),
        Some(Action::Dismiss) => return Some(DialogOutcome::Dismissed),
        _ => {}
    }

    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let confirming = matches!(dialog.kind, DialogKind::Confirm { .. });
    match (confirming, key.code) {
        (false, KeyCode::Char('o' | 'O')) => Some(DialogOutcome::Dismissed),
        (true, KeyCode::Char('y' | 'Y' | 's' | 'S')) => {
            dialog.select(ConfirmChoice::Yes);
            Some(dialog.clone().submit())
        }
        (true, KeyCode::Char('n' | 'N')) => Some(DialogOutcome::Dismissed),
        (true, KeyCode::Left | KeyCode::Right | KeyCode::Tab) => {
            dialog.toggle_choice();
            None
        }
        _ => None,
    }
}

/// Centered modal drawn over the screen.
pub struct DialogPopup<'a> {
    dialog: &'a Dialog,
    theme: &'a Theme,
}

impl<'a> DialogPopup<'a> {
    #[must_use]
    pub const fn new(dialog: &'a Dialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    fn button(&self, label: &'a str, active: bool) -> Span<'a> {
        let style = if active {
            self.theme
                .selection_style
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style
        };
        Span::styled(format!(" {label} "), style)
    }

    fn buttons(&self) -> Line<'a> {
        let line = match self.dialog.kind {
            DialogKind::Alert => Line::from(self.button(ACKNOWLEDGE, true)),
            DialogKind::Confirm { choice, .. } => Line::from(vec![
                self.button(ConfirmChoice::No.label(), choice == ConfirmChoice::No),
                Span::raw("  "),
                self.button(ConfirmChoice::Yes.label(), choice == ConfirmChoice::Yes),
            ]),
        };
        line.centered()
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title_width = self.dialog.title.width() + 2;
        let wanted = self.dialog.message.width().max(title_width) + 4;
        let max_width = area.width.saturating_sub(4).clamp(1, 60);
        let width = u16::try_from(wanted).unwrap_or(u16::MAX).min(max_width);

        let inner_width = usize::from(width.saturating_sub(2).max(1));
        let message_lines = self.dialog.message.width().div_ceil(inner_width).max(1);
        let height = u16::try_from(message_lines)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for DialogPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = area.intersection(self.popup_area(area));
        if popup.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::from(format!(" {} ", self.dialog.title)).centered());
        let inner = block.inner(popup);

        Clear.render(popup, buf);
        block.render(popup, buf);

        let [message_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.dialog.message.as_str())
            .wrap(Wrap { trim: true })
            .centered()
            .render(message_area, buf);
        Paragraph::new(self.buttons()).render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialog::{DUPLICATE_MESSAGE, REMOVE_TITLE};
    use crate::domain::{RemovalRequest, Task};
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn confirm() -> Dialog {
        Dialog::confirm_removal(RemovalRequest::new(&Task::new(1_u64, "Buy milk")))
    }

    #[test_case(KeyCode::Enter ; "enter")]
    #[test_case(KeyCode::Esc ; "esc")]
    #[test_case(KeyCode::Char('o') ; "o")]
    fn test_alert_closes(code: KeyCode) {
        let mut dialog = Dialog::duplicate_title();
        assert_eq!(
            handle_dialog_key(&mut dialog, key(code), &Keymap::default()),
            Some(DialogOutcome::Dismissed)
        );
    }

    #[test]
    fn test_alert_ignores_other_keys() {
        let mut dialog = Dialog::duplicate_title();
        assert_eq!(
            handle_dialog_key(&mut dialog, key(KeyCode::Char('y')), &Keymap::default()),
            None
        );
    }

    #[test]
    fn test_confirm_enter_defaults_to_no() {
        let mut dialog = confirm();
        assert_eq!(
            handle_dialog_key(&mut dialog, key(KeyCode::Enter), &Keymap::default()),
            Some(DialogOutcome::Dismissed)
        );
    }

    #[test]
    fn test_confirm_after_moving_to_yes() {
        let keymap = Keymap::default();
        let mut dialog = confirm();

        assert_eq!(handle_dialog_key(&mut dialog, key(KeyCode::Right), &keymap), None);
        assert_eq!(dialog.choice(), Some(ConfirmChoice::Yes));

        let outcome = handle_dialog_key(&mut dialog, key(KeyCode::Enter), &keymap);
        assert!(matches!(outcome, Some(DialogOutcome::Confirmed(r)) if r.title() == "Buy milk"));
    }

    #[test_case(KeyCode::Char('y'), true ; "y confirms")]
    #[test_case(KeyCode::Char('s'), true ; "s confirms")]
    #[test_case(KeyCode::Char('n'), false ; "n declines")]
    #[test_case(KeyCode::Esc, false ; "esc declines")]
    fn test_confirm_shortcuts(code: KeyCode, confirmed: bool) {
        let mut dialog = confirm();
        let outcome = handle_dialog_key(&mut dialog, key(code), &Keymap::default());
        assert_eq!(
            matches!(outcome, Some(DialogOutcome::Confirmed(_))),
            confirmed
        );
        assert!(outcome.is_some());
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_popup_renders_literals() {
        let theme = Theme::default();
        let dialog = confirm();
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buffer::empty(area);

        DialogPopup::new(&dialog, &theme).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains(REMOVE_TITLE));
        assert!(text.contains(" Não "));
        assert!(text.contains(" Sim "));
    }

    #[test]
    fn test_popup_wraps_on_narrow_screen() {
        let theme = Theme::default();
        let dialog = Dialog::duplicate_title();
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);

        DialogPopup::new(&dialog, &theme).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Você não pode"));
        assert!(text.contains(ACKNOWLEDGE));
        assert!(!text.contains(DUPLICATE_MESSAGE));
    }
}
