//! Tab bar widget — one tab per condition

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use trihealth_domain::Condition;

pub struct TabBarWidget {
    active: Condition,
}

impl TabBarWidget {
    pub fn new(active: Condition) -> Self {
        Self { active }
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mut spans: Vec<Span> = Vec::new();

        for (i, condition) in Condition::ALL.iter().enumerate() {
            let label = format!(" {} {} Prediction ", i + 1, condition.display_name());
            if *condition == self.active {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(Color::Gray).bg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(" ", bg_style));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
