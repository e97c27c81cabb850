//! Result card widget — positive (red), negative (green) or unavailable (yellow)

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use trihealth_domain::{PredictionOutcome, PredictionReport};

pub struct ResultCardWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResultCardWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn outcome_lines(report: &PredictionReport) -> (Color, Vec<Line<'static>>) {
        match &report.outcome {
            PredictionOutcome::Resolved { payload, .. } => {
                let color = if payload.severe { Color::Red } else { Color::Green };
                let lines = vec![
                    Line::from(Span::styled(
                        payload.title,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(payload.message),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Tip: ", Style::default().fg(Color::Cyan)),
                        Span::raw(payload.tip),
                    ]),
                ];
                (color, lines)
            }
            PredictionOutcome::Unavailable { reason } => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Prediction unavailable",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(reason.clone()),
                ];
                (Color::Yellow, lines)
            }
        }
    }

    fn feature_lines(report: &PredictionReport) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Feature vector",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(report.named_features().map(|(name, value)| {
            Line::from(Span::styled(
                format!("  {:<18} {}", name, value),
                Style::default().fg(Color::DarkGray),
            ))
        }));
        lines
    }
}

impl<'a> Widget for ResultCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, lines) = match &self.state.form().result {
            Some(report) => {
                let (color, mut lines) = Self::outcome_lines(report);
                if self.state.show_features {
                    lines.extend(Self::feature_lines(report));
                }
                (color, lines)
            }
            None => (
                Color::DarkGray,
                vec![Line::from(Span::styled(
                    "Press p to run the prediction.",
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Result ")
            .border_style(Style::default().fg(color));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
