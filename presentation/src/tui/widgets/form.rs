//! Form widget — the input fields of the active condition

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FormWidget<'a> {
    state: &'a TuiState,
}

impl<'a> FormWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// First visible row so the selected field stays on screen
    fn scroll_offset(selected: usize, rows: usize, visible: usize) -> usize {
        if visible == 0 || rows <= visible {
            return 0;
        }
        let half = visible / 2;
        selected.saturating_sub(half).min(rows - visible)
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.state.form();
        let fields = form.input.schema().fields();
        let label_width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);

        let mut lines: Vec<Line> = Vec::with_capacity(fields.len() + 2);
        for (i, field) in fields.iter().enumerate() {
            let selected = i == form.selected;
            let editing = selected && self.state.mode == InputMode::Edit;

            let marker = if selected { "▶ " } else { "  " };
            let label_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let value_span = if editing {
                Span::styled(
                    format!("{}_", self.state.edit_buffer),
                    Style::default().fg(Color::Black).bg(Color::Green),
                )
            } else if selected {
                Span::styled(
                    format!("◀ {} ▶", form.display_value(field)),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(form.display_value(field), Style::default().fg(Color::Cyan))
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:<width$}  ", field.label, width = label_width), label_style),
                value_span,
                Span::styled(
                    format!("  {}", field.domain_hint()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!(" Predict {} ", self.state.active.display_name()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  p / F5", Style::default().fg(Color::DarkGray)),
        ]));

        let inner_height = area.height.saturating_sub(2) as usize;
        let offset = Self::scroll_offset(form.selected, lines.len(), inner_height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Inputs ", self.state.active.display_name()))
            .border_style(Style::default().fg(Color::Blue));

        Paragraph::new(lines)
            .block(block)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        // Everything fits
        assert_eq!(FormWidget::scroll_offset(5, 10, 20), 0);
        // Near the top
        assert_eq!(FormWidget::scroll_offset(2, 24, 10), 0);
        // Middle: selection centred
        assert_eq!(FormWidget::scroll_offset(12, 24, 10), 7);
        // Bottom: clamped so the last row is visible
        assert_eq!(FormWidget::scroll_offset(21, 24, 10), 14);
    }
}
