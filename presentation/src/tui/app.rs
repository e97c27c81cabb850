//! TUI application — main loop
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── handle_key() ── RunPredictionUseCase (inline)
//!   └─ tick_interval ── flash expiry
//! ```
//!
//! Predictions run to completion inside the loop before the next key is read.

use super::mode::{self, InputMode, KeyAction};
use super::state::TuiState;
use super::widgets::{
    MainLayout, form::FormWidget, header::HeaderWidget, help::HelpWidget,
    result_card::ResultCardWidget, status_bar::StatusBarWidget, tab_bar::TabBarWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};
use trihealth_application::{RunPredictionInput, RunPredictionUseCase};
use trihealth_domain::Condition;

/// Main TUI application
pub struct TuiApp {
    use_case: RunPredictionUseCase,
    config: TuiConfig,
    model_info: [String; 3],
}

impl TuiApp {
    pub fn new(use_case: RunPredictionUseCase, config: TuiConfig) -> Self {
        Self {
            use_case,
            config,
            model_info: Default::default(),
        }
    }

    /// Model descriptions shown in the header, in tab order
    pub fn with_model_info(mut self, info: [String; 3]) -> Self {
        self.model_info = info;
        self
    }

    fn initial_state(&self) -> TuiState {
        TuiState::new()
            .with_show_features(self.config.show_features)
            .with_model_info(self.model_info.clone())
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = self.initial_state();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick_rate);
        info!("TUI started");

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(&mut state, key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            debug!("Terminal event error: {}", e);
                        }
                        None => break,
                    }
                }

                _ = tick.tick() => {
                    state.expire_flash(self.config.flash_duration);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        Ok(())
    }

    /// Map a key to an action and apply it
    pub fn handle_key(&self, state: &mut TuiState, key: KeyEvent) {
        let action = mode::handle_key(state.mode, key);
        self.apply(state, action);
    }

    fn apply(&self, state: &mut TuiState, action: KeyAction) {
        // Help overlay swallows everything except closing it and quitting
        if state.show_help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Cancel => state.show_help = false,
                KeyAction::Quit => state.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit => state.should_quit = true,
            KeyAction::SelectTab(condition) => state.select_tab(condition),
            KeyAction::NextTab => state.next_tab(),
            KeyAction::PrevTab => state.prev_tab(),
            KeyAction::NextField => state.select_next_field(),
            KeyAction::PrevField => state.select_prev_field(),
            KeyAction::Step(delta) => state.step_selected(delta),
            KeyAction::BeginEdit => state.begin_edit(),
            KeyAction::Predict => self.predict(state),
            KeyAction::Reset => state.reset_form(),
            KeyAction::ToggleHelp => state.toggle_help(),
            KeyAction::InsertChar(c) => state.push_char(c),
            KeyAction::DeleteChar => state.pop_char(),
            KeyAction::Commit => {
                if let Err(e) = state.commit_edit() {
                    state.set_flash(e.to_string());
                }
            }
            KeyAction::Cancel => {
                if state.mode == InputMode::Edit {
                    state.cancel_edit();
                }
            }
            KeyAction::None => {}
        }
    }

    /// Assemble, predict and store the result for the active tab
    fn predict(&self, state: &mut TuiState) {
        let condition: Condition = state.active;
        let input = RunPredictionInput::new(state.form().input.clone());

        match self.use_case.execute(input) {
            Ok(report) => {
                if !report.outcome.is_available() {
                    state.set_flash(format!("{} prediction unavailable", condition.display_name()));
                }
                state.set_result(report);
            }
            Err(e) => state.set_flash(e.to_string()),
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(TabBarWidget::new(state.active), layout.tab_bar);
        frame.render_widget(FormWidget::new(state), layout.form);
        frame.render_widget(ResultCardWidget::new(state), layout.result);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            frame.render_widget(HelpWidget::new(), help_area);
        }
    }
}
