//! TUI input modes and key mapping
//!
//! - Normal mode: tab and field navigation, stepping, predict
//! - Edit mode: typing a value for the selected field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trihealth_domain::Condition;

/// Step multiplier for `H` / `L`
pub const COARSE_STEP: i32 = 10;

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Edit,
}

impl InputMode {
    /// Mode indicator for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Edit => "EDIT",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Edit => Color::Green,
        }
    }
}

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    SelectTab(Condition),
    NextTab,
    PrevTab,
    NextField,
    PrevField,
    /// Move the selected value by this many steps
    Step(i32),
    BeginEdit,
    Predict,
    Reset,
    ToggleHelp,
    InsertChar(char),
    DeleteChar,
    Commit,
    Cancel,
    None,
}

/// Map a key event to an action for the given mode
pub fn handle_key(mode: InputMode, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Edit => handle_edit(key),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,

        KeyCode::Char('1') => KeyAction::SelectTab(Condition::Diabetes),
        KeyCode::Char('2') => KeyAction::SelectTab(Condition::HeartDisease),
        KeyCode::Char('3') => KeyAction::SelectTab(Condition::Parkinsons),
        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PrevTab,

        KeyCode::Char('j') | KeyCode::Down => KeyAction::NextField,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Char('h') | KeyCode::Left => KeyAction::Step(-1),
        KeyCode::Char('l') | KeyCode::Right => KeyAction::Step(1),
        KeyCode::Char('H') => KeyAction::Step(-COARSE_STEP),
        KeyCode::Char('L') => KeyAction::Step(COARSE_STEP),

        KeyCode::Enter | KeyCode::Char('e') => KeyAction::BeginEdit,
        KeyCode::Char('p') | KeyCode::F(5) => KeyAction::Predict,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Esc => KeyAction::Cancel,

        _ => KeyAction::None,
    }
}

fn handle_edit(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Commit,
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}
