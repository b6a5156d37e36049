use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub counter: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let counter_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            counter: Style::default().bg(counter_bg).fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            counter: Style::default().fg(Color::DarkGray),
        }
    }
}

/// "Você tem 1 tarefa" / "Você tem N tarefas".
#[must_use]
pub fn task_counter(count: usize) -> String {
    if count == 1 {
        "Você tem 1 tarefa".to_string()
    } else {
        format!("Você tem {count} tarefas")
    }
}

pub struct HeaderBar<'a> {
    app_name: &'a str,
    task_count: usize,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, task_count: usize) -> Self {
        Self {
            app_name,
            task_count,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let name_width = u16::try_from(name.chars().count()).unwrap_or(u16::MAX);
        let name_area = Rect::new(area.x, area.y, name_width.min(area.width), 1);
        Paragraph::new(Span::styled(name, self.style.app_name)).render(name_area, buf);

        let counter = format!(" {} ", task_counter(self.task_count));
        let counter_width = u16::try_from(counter.chars().count()).unwrap_or(u16::MAX);

        if counter_width < area.width.saturating_sub(name_width) {
            let right_x = area.right().saturating_sub(counter_width);
            let right_area = Rect::new(right_x, area.y, counter_width, 1);
            Paragraph::new(Line::from(Span::styled(counter, self.style.counter)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "Você tem 0 tarefas" ; "zero")]
    #[test_case(1, "Você tem 1 tarefa" ; "one")]
    #[test_case(5, "Você tem 5 tarefas" ; "many")]
    fn test_task_counter(count: usize, expected: &str) {
        assert_eq!(task_counter(count), expected);
    }

    #[test]
    fn test_header_renders_name_and_count() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("tasklist", 2).render(area, &mut buf);

        let text: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with(" TASKLIST "));
        assert!(text.trim_end().ends_with("Você tem 2 tarefas"));
    }

    #[test]
    fn test_counter_hidden_when_too_narrow() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("tasklist", 2).render(area, &mut buf);

        let text: String = (0..12).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(!text.contains("tarefas"));
    }
}
