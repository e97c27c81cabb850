//! Feature schemas
//!
//! A [`FeatureSchema`] is the ordered list of named inputs a condition's
//! classifier was trained on. The assembler, the input forms, the CLI parser
//! and the artifact loader all read order from here, so reordering a
//! control can never silently reorder the feature vector.

mod catalog;
pub mod field;

pub use field::{CategoryOption, FieldKind, FieldSpec, FieldValue};

use crate::core::condition::Condition;

/// Ordered field list for one condition (Value Object)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSchema {
    condition: Condition,
    fields: &'static [FieldSpec],
}

static DIABETES_SCHEMA: FeatureSchema = FeatureSchema {
    condition: Condition::Diabetes,
    fields: &catalog::DIABETES,
};

static HEART_DISEASE_SCHEMA: FeatureSchema = FeatureSchema {
    condition: Condition::HeartDisease,
    fields: &catalog::HEART_DISEASE,
};

static PARKINSONS_SCHEMA: FeatureSchema = FeatureSchema {
    condition: Condition::Parkinsons,
    fields: &catalog::PARKINSONS,
};

impl FeatureSchema {
    /// The built-in schema for a condition
    pub fn for_condition(condition: Condition) -> &'static FeatureSchema {
        match condition {
            Condition::Diabetes => &DIABETES_SCHEMA,
            Condition::HeartDisease => &HEART_DISEASE_SCHEMA,
            Condition::Parkinsons => &PARKINSONS_SCHEMA,
        }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Length of the feature vector
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Feature names in training order
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Look up a field by name (exact match first, then case-insensitive)
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Index of a field in the feature vector
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.fields
            .iter()
            .position(|f| f.name == name)
            .or_else(|| {
                self.fields
                    .iter()
                    .position(|f| f.name.eq_ignore_ascii_case(name))
            })
    }

    /// Check a list of names against this schema's order
    pub fn matches_order<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == self.fields.len()
            && names
                .iter()
                .zip(self.fields)
                .all(|(n, f)| n.as_ref() == f.name)
    }
}
