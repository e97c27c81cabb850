//! Status bar widget — mode indicator + key hints + flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_span = Span::styled(format!(" {} ", mode_text), mode_style);

        let right_text: String = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else {
            match mode {
                InputMode::Normal => {
                    "1-3:tab  j/k:field  h/l:step  e:edit  p:predict  r:reset  ?:help  q:quit".into()
                }
                InputMode::Edit => "Enter:apply  Esc:cancel  Ctrl+C:quit".into(),
            }
        };

        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![mode_span]), mode_width);

        // Right-aligned hints
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_line = Line::from(vec![Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
