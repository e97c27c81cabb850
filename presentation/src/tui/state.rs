//! TUI state: one form per condition plus UI chrome

use super::mode::InputMode;
use std::time::{Duration, Instant};
use trihealth_domain::{Condition, DomainError, FieldSpec, FormInput, PredictionReport};

/// One condition tab: its form, selection and last result
#[derive(Debug, Clone)]
pub struct FormState {
    pub input: FormInput,
    /// Index of the selected field in schema order
    pub selected: usize,
    /// Last prediction; cleared whenever an input changes
    pub result: Option<PredictionReport>,
}

impl FormState {
    pub fn new(condition: Condition) -> Self {
        Self {
            input: FormInput::defaults(condition),
            selected: 0,
            result: None,
        }
    }

    pub fn condition(&self) -> Condition {
        self.input.condition()
    }

    pub fn selected_field(&self) -> &'static FieldSpec {
        &self.input.schema().fields()[self.selected]
    }

    /// Formatted current value of a field
    pub fn display_value(&self, field: &FieldSpec) -> String {
        self.input
            .get(field.name)
            .map(|v| field.format_value(v))
            .unwrap_or_default()
    }

    /// Current value of a field as editable text, at full precision
    pub fn edit_value(&self, field: &FieldSpec) -> String {
        self.input
            .get(field.name)
            .map(|v| field.edit_text(v))
            .unwrap_or_default()
    }
}

/// Complete TUI state
#[derive(Debug)]
pub struct TuiState {
    pub active: Condition,
    pub forms: [FormState; 3],
    pub mode: InputMode,
    /// Text typed in Edit mode
    pub edit_buffer: String,
    pub show_help: bool,
    pub show_features: bool,
    /// Short model descriptions, indexed like [`Condition::ALL`]
    pub model_info: [String; 3],
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            active: Condition::Diabetes,
            forms: Condition::ALL.map(FormState::new),
            mode: InputMode::Normal,
            edit_buffer: String::new(),
            show_help: false,
            show_features: false,
            model_info: Default::default(),
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn with_show_features(mut self, show: bool) -> Self {
        self.show_features = show;
        self
    }

    pub fn with_model_info(mut self, info: [String; 3]) -> Self {
        self.model_info = info;
        self
    }

    pub fn form(&self) -> &FormState {
        &self.forms[self.active.index()]
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.forms[self.active.index()]
    }

    // ==================== Tabs ====================

    /// Switch tabs. Any pending edit is dropped.
    pub fn select_tab(&mut self, condition: Condition) {
        self.cancel_edit();
        self.active = condition;
    }

    pub fn next_tab(&mut self) {
        let next = (self.active.index() + 1) % Condition::ALL.len();
        self.select_tab(Condition::ALL[next]);
    }

    pub fn prev_tab(&mut self) {
        let len = Condition::ALL.len();
        let prev = (self.active.index() + len - 1) % len;
        self.select_tab(Condition::ALL[prev]);
    }

    // ==================== Fields ====================

    pub fn select_next_field(&mut self) {
        let form = self.form_mut();
        let count = form.input.schema().arity();
        form.selected = (form.selected + 1).min(count - 1);
    }

    pub fn select_prev_field(&mut self) {
        let form = self.form_mut();
        form.selected = form.selected.saturating_sub(1);
    }

    /// Nudge the selected field and clear the stale result
    pub fn step_selected(&mut self, delta: i32) {
        let form = self.form_mut();
        let name = form.selected_field().name;
        if form.input.step(name, delta).is_ok() {
            form.result = None;
        }
    }

    /// Restore the active form to its defaults
    pub fn reset_form(&mut self) {
        self.cancel_edit();
        let form = self.form_mut();
        form.input.reset();
        form.result = None;
        self.set_flash("Form reset to defaults");
    }

    // ==================== Edit buffer ====================

    /// Open the edit buffer pre-filled with the selected value
    pub fn begin_edit(&mut self) {
        let form = self.form();
        self.edit_buffer = form.edit_value(form.selected_field());
        self.mode = InputMode::Edit;
    }

    pub fn push_char(&mut self, c: char) {
        self.edit_buffer.push(c);
    }

    pub fn pop_char(&mut self) {
        self.edit_buffer.pop();
    }

    /// Validate and store the edit buffer.
    ///
    /// On error the previous value stays in place and the buffer is kept
    /// open so it can be corrected.
    pub fn commit_edit(&mut self) -> Result<(), DomainError> {
        let raw = self.edit_buffer.clone();
        let form = self.form_mut();
        let name = form.selected_field().name;
        form.input.set_text(name, &raw)?;
        form.result = None;
        self.cancel_edit();
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer.clear();
        self.mode = InputMode::Normal;
    }

    // ==================== Results ====================

    pub fn set_result(&mut self, report: PredictionReport) {
        let form = &mut self.forms[report.condition.index()];
        form.result = Some(report);
    }

    // ==================== Chrome ====================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trihealth_domain::{
        FeatureVector, FieldValue, PredictionLabel, PredictionOutcome, PredictionReport,
    };

    fn fake_result(condition: Condition) -> PredictionReport {
        PredictionReport::new(
            condition,
            FeatureVector::new(vec![0.0; condition.arity()]),
            PredictionOutcome::resolved(condition, PredictionLabel::Negative),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = TuiState::new();
        assert_eq!(state.active, Condition::Diabetes);
        assert_eq!(state.mode, InputMode::Normal);
        for (form, condition) in state.forms.iter().zip(Condition::ALL) {
            assert_eq!(form.condition(), condition);
            assert_eq!(form.input, FormInput::defaults(condition));
            assert!(form.result.is_none());
        }
    }

    #[test]
    fn test_tab_cycling() {
        let mut state = TuiState::new();
        state.next_tab();
        assert_eq!(state.active, Condition::HeartDisease);
        state.next_tab();
        state.next_tab();
        assert_eq!(state.active, Condition::Diabetes);
        state.prev_tab();
        assert_eq!(state.active, Condition::Parkinsons);
    }

    #[test]
    fn test_field_selection_is_bounded() {
        let mut state = TuiState::new();
        state.select_prev_field();
        assert_eq!(state.form().selected, 0);
        for _ in 0..20 {
            state.select_next_field();
        }
        assert_eq!(state.form().selected, 7);
    }

    #[test]
    fn test_step_clears_result() {
        let mut state = TuiState::new();
        state.set_result(fake_result(Condition::Diabetes));
        state.step_selected(1);
        assert!(state.form().result.is_none());
        assert_eq!(
            state.form().input.get("Pregnancies"),
            Some(&FieldValue::Number(2.0))
        );
    }

    #[test]
    fn test_commit_valid_edit() {
        let mut state = TuiState::new();
        state.select_next_field(); // Glucose
        state.begin_edit();
        assert_eq!(state.mode, InputMode::Edit);
        assert_eq!(state.edit_buffer, "100");

        state.edit_buffer.clear();
        for c in "148.5".chars() {
            state.push_char(c);
        }
        state.commit_edit().unwrap();

        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(
            state.form().input.get("Glucose"),
            Some(&FieldValue::Number(148.5))
        );
    }

    #[test]
    fn test_rejected_edit_keeps_previous_value() {
        let mut state = TuiState::new();
        state.set_result(fake_result(Condition::Diabetes));
        state.select_next_field(); // Glucose
        state.begin_edit();
        state.edit_buffer = "999".to_string();

        let err = state.commit_edit().unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange { .. }));
        assert_eq!(state.mode, InputMode::Edit);
        assert_eq!(
            state.form().input.get("Glucose"),
            Some(&FieldValue::Number(100.0))
        );
        assert!(state.form().result.is_some());
    }

    #[test]
    fn test_untouched_edit_keeps_every_value() {
        let mut state = TuiState::new();
        for condition in Condition::ALL {
            state.select_tab(condition);
            let arity = state.form().input.schema().arity();
            for index in 0..arity {
                state.form_mut().selected = index;
                // Off-grid decimals come from stepping away from the midpoint
                state.step_selected(3);
                let before = state.form().input.clone();

                state.begin_edit();
                state.commit_edit().unwrap();

                let field = state.form().selected_field();
                assert_eq!(
                    state.form().input.get(field.name),
                    before.get(field.name),
                    "{}: edit buffer was {:?}",
                    field.name,
                    state.form().edit_value(field)
                );
            }
            assert_eq!(state.mode, InputMode::Normal);
        }
    }

    #[test]
    fn test_untouched_edit_keeps_midpoint_defaults() {
        let mut state = TuiState::new();
        state.select_tab(Condition::Parkinsons);
        for index in 0..Condition::Parkinsons.arity() {
            state.form_mut().selected = index;
            state.begin_edit();
            state.commit_edit().unwrap();
        }
        assert_eq!(state.form().input, FormInput::defaults(Condition::Parkinsons));
    }

    #[test]
    fn test_switching_tabs_cancels_edit_and_keeps_forms() {
        let mut state = TuiState::new();
        state.step_selected(3);
        state.begin_edit();
        state.select_tab(Condition::Parkinsons);
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.edit_buffer.is_empty());

        state.select_tab(Condition::Diabetes);
        assert_eq!(
            state.form().input.get("Pregnancies"),
            Some(&FieldValue::Number(4.0))
        );
    }

    #[test]
    fn test_reset_form() {
        let mut state = TuiState::new();
        state.select_tab(Condition::HeartDisease);
        state.select_next_field(); // sex
        state.step_selected(1);
        assert_eq!(
            state.form().input.get("sex"),
            Some(&FieldValue::Category("Female"))
        );

        state.reset_form();
        assert_eq!(state.form().input, FormInput::defaults(Condition::HeartDisease));
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_result_is_stored_on_its_own_tab() {
        let mut state = TuiState::new();
        state.set_result(fake_result(Condition::Parkinsons));
        assert!(state.form().result.is_none());
        assert!(state.forms[2].result.is_some());
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
