//! Form input: the named scalar values entered for one condition

use crate::core::condition::Condition;
use crate::core::error::DomainError;
use crate::schema::{FeatureSchema, FieldSpec, FieldValue};
use std::collections::HashMap;

/// Values entered for one condition, keyed by feature name (Entity)
///
/// Every value passes its field's bound check on the way in, so a
/// `FormInput` never holds an out-of-range value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    condition: Condition,
    values: HashMap<&'static str, FieldValue>,
}

impl FormInput {
    /// Create a form with every field at its declared default
    pub fn defaults(condition: Condition) -> Self {
        let schema = FeatureSchema::for_condition(condition);
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name, f.default_value()))
            .collect();
        Self { condition, values }
    }

    /// Create a form with no values set
    pub fn empty(condition: Condition) -> Self {
        Self {
            condition,
            values: HashMap::new(),
        }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn schema(&self) -> &'static FeatureSchema {
        FeatureSchema::for_condition(self.condition)
    }

    /// Current value of a field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let field = self.schema().field(name)?;
        self.values.get(field.name)
    }

    /// Set a numeric value, checking it against the field's bounds
    pub fn set_number(&mut self, name: &str, value: f64) -> Result<(), DomainError> {
        let field = self.lookup(name)?;
        let value = field.validate_number(value)?;
        self.values.insert(field.name, value);
        Ok(())
    }

    /// Set a value from user text (numbers, or labels for category fields)
    pub fn set_text(&mut self, name: &str, raw: &str) -> Result<(), DomainError> {
        let field = self.lookup(name)?;
        let value = field.parse(raw)?;
        self.values.insert(field.name, value);
        Ok(())
    }

    /// Nudge a field by `delta` steps (saturating for numbers, wrapping for lists)
    pub fn step(&mut self, name: &str, delta: i32) -> Result<FieldValue, DomainError> {
        let field = self.lookup(name)?;
        let current = self
            .values
            .get(field.name)
            .copied()
            .unwrap_or_else(|| field.default_value());
        let next = field.step_value(&current, delta);
        self.values.insert(field.name, next);
        Ok(next)
    }

    /// Builder-style [`FormInput::set_text`]
    pub fn with(mut self, name: &str, raw: &str) -> Result<Self, DomainError> {
        self.set_text(name, raw)?;
        Ok(self)
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::defaults(self.condition);
    }

    fn lookup(&self, name: &str) -> Result<&'static FieldSpec, DomainError> {
        self.schema()
            .field(name)
            .ok_or_else(|| DomainError::UnknownField {
                condition: self.condition.to_string(),
                field: name.to_string(),
            })
    }
}
