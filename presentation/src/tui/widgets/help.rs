//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const KEYS: &[(&str, &str)] = &[
    ("1 2 3", "Diabetes / Heart Disease / Parkinson's tab"),
    ("Tab S-Tab", "Next / previous tab"),
    ("j/k ↓/↑", "Select field"),
    ("h/l ←/→", "Step value (choices cycle)"),
    ("H/L", "Step value x10"),
    ("Enter/e", "Type a value"),
    ("p/F5", "Predict"),
    ("r", "Reset form to defaults"),
    ("?", "Toggle this help"),
    ("q Ctrl+C", "Quit"),
];

const EDIT_KEYS: &[(&str, &str)] = &[("Enter", "Apply value"), ("Esc", "Cancel")];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str, keys: &'static [(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", key), Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {}", desc)),
            ])
        }));
        lines.push(Line::from(""));
        lines
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = Self::section("Keyboard Shortcuts", KEYS);
        lines.extend(Self::section("While Typing", EDIT_KEYS));
        lines.push(Line::from(Span::styled(
            "Changing any value clears the previous result.",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}
