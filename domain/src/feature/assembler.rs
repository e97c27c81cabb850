//! Feature Assembler: named form values → ordered feature vector

use super::FeatureVector;
use crate::core::error::DomainError;
use crate::input::FormInput;
use crate::schema::FeatureSchema;

/// Builds feature vectors in schema order.
///
/// The only transformation applied is category encoding (e.g. `sex`:
/// Male → 1, Female → 0). Numbers pass through untouched.
pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Assemble the vector for `input` using the schema of its condition
    pub fn assemble(input: &FormInput) -> Result<FeatureVector, DomainError> {
        Self::assemble_with(input.schema(), input)
    }

    /// Assemble against an explicit schema
    pub fn assemble_with(
        schema: &FeatureSchema,
        input: &FormInput,
    ) -> Result<FeatureVector, DomainError> {
        if schema.condition() != input.condition() {
            return Err(DomainError::ConditionMismatch {
                expected: schema.condition().to_string(),
                actual: input.condition().to_string(),
            });
        }

        let values = schema
            .fields()
            .iter()
            .map(|field| {
                let value = input
                    .get(field.name)
                    .ok_or_else(|| DomainError::MissingField(field.name.to_string()))?;
                field.encode(value)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureVector::new(values))
    }
}
