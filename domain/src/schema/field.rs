//! Field specifications: bounds, defaults and encoding for one input

use crate::core::error::DomainError;
use serde::Serialize;

/// One labelled option of a categorical field and the number it encodes to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryOption {
    pub label: &'static str,
    pub code: f64,
}

/// Input kind with its declared bounds and default
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Whole number in `[min, max]`
    Integer { min: i64, max: i64, default: i64 },
    /// Real number in `[min, max]`
    Decimal { min: f64, max: f64, default: f64 },
    /// Real number in `[min, max]`, defaulting to the midpoint
    Slider { min: f64, max: f64 },
    /// One of a fixed list of numeric codes
    Choice {
        options: &'static [i64],
        default: i64,
    },
    /// One of a fixed list of labels, each encoded to a number
    Category {
        options: &'static [CategoryOption],
        default: usize,
    },
}

/// A value held by a form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Category(&'static str),
}

impl FieldValue {
    /// Numeric value, if this is not a category
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Category(_) => None,
        }
    }
}

/// Specification of a single named input (Value Object)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Feature name as used at training time
    pub name: &'static str,
    /// Label shown next to the control
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    /// The value the control starts with
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Integer { default, .. } => FieldValue::Number(default as f64),
            FieldKind::Decimal { default, .. } => FieldValue::Number(default),
            FieldKind::Slider { min, max } => FieldValue::Number((min + max) / 2.0),
            FieldKind::Choice { default, .. } => FieldValue::Number(default as f64),
            FieldKind::Category { options, default } => FieldValue::Category(options[default].label),
        }
    }

    /// Lowest and highest value this field can encode to
    pub fn bounds(&self) -> (f64, f64) {
        match self.kind {
            FieldKind::Integer { min, max, .. } => (min as f64, max as f64),
            FieldKind::Decimal { min, max, .. } | FieldKind::Slider { min, max } => (min, max),
            FieldKind::Choice { options, .. } => {
                let min = options.iter().copied().min().unwrap_or(0);
                let max = options.iter().copied().max().unwrap_or(0);
                (min as f64, max as f64)
            }
            FieldKind::Category { options, .. } => options.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), o| (lo.min(o.code), hi.max(o.code)),
            ),
        }
    }

    /// Whether the field is picked from a list rather than typed
    pub fn is_discrete(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Choice { .. } | FieldKind::Category { .. }
        )
    }

    /// Increment used when nudging the value.
    ///
    /// Real-valued fields step at two decades below their range, so a
    /// 0..200 field moves by 1 and a 0.0016..0.033 slider by 0.0001.
    pub fn step(&self) -> f64 {
        match self.kind {
            FieldKind::Integer { .. } | FieldKind::Choice { .. } | FieldKind::Category { .. } => {
                1.0
            }
            FieldKind::Decimal { min, max, .. } | FieldKind::Slider { min, max } => {
                let range = (max - min).abs();
                if range == 0.0 {
                    1.0
                } else {
                    10f64.powi(range.log10().floor() as i32 - 2)
                }
            }
        }
    }

    /// Check a numeric value against the declared bounds.
    ///
    /// Values at exactly `min` or `max` are accepted unchanged.
    pub fn validate_number(&self, value: f64) -> Result<FieldValue, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NotANumber {
                field: self.name.to_string(),
                value: value.to_string(),
            });
        }

        match self.kind {
            FieldKind::Integer { min, max, .. } => {
                if value.fract() != 0.0 {
                    return Err(DomainError::NotAnInteger {
                        field: self.name.to_string(),
                        value,
                    });
                }
                self.check_range(value, min as f64, max as f64)
            }
            FieldKind::Decimal { min, max, .. } | FieldKind::Slider { min, max } => {
                self.check_range(value, min, max)
            }
            FieldKind::Choice { options, .. } => {
                if value.fract() == 0.0 && options.contains(&(value as i64)) {
                    Ok(FieldValue::Number(value))
                } else {
                    Err(DomainError::InvalidChoice {
                        field: self.name.to_string(),
                        value,
                        options: options.to_vec(),
                    })
                }
            }
            FieldKind::Category { options, .. } => options
                .iter()
                .find(|o| o.code == value)
                .map(|o| FieldValue::Category(o.label))
                .ok_or_else(|| self.invalid_category(&value.to_string())),
        }
    }

    /// Parse user text into a validated value.
    ///
    /// Category fields accept their labels (case-insensitive) or codes.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, DomainError> {
        let raw = raw.trim();

        if let FieldKind::Category { options, .. } = self.kind
            && let Some(option) = options.iter().find(|o| o.label.eq_ignore_ascii_case(raw))
        {
            return Ok(FieldValue::Category(option.label));
        }

        let value: f64 = raw.parse().map_err(|_| match self.kind {
            FieldKind::Category { .. } => self.invalid_category(raw),
            _ => DomainError::NotANumber {
                field: self.name.to_string(),
                value: raw.to_string(),
            },
        })?;

        self.validate_number(value)
    }

    /// Encode a value into the number the classifier sees
    pub fn encode(&self, value: &FieldValue) -> Result<f64, DomainError> {
        match (self.kind, value) {
            (FieldKind::Category { options, .. }, FieldValue::Category(label)) => options
                .iter()
                .find(|o| o.label == *label)
                .map(|o| o.code)
                .ok_or_else(|| self.invalid_category(label)),
            (FieldKind::Category { .. }, FieldValue::Number(v)) => {
                Err(self.invalid_category(&v.to_string()))
            }
            (_, FieldValue::Number(v)) => Ok(*v),
            (_, FieldValue::Category(label)) => Err(DomainError::NotANumber {
                field: self.name.to_string(),
                value: label.to_string(),
            }),
        }
    }

    /// Move a value by `delta` steps.
    ///
    /// Numeric fields saturate at their bounds; list fields wrap around.
    pub fn step_value(&self, current: &FieldValue, delta: i32) -> FieldValue {
        match self.kind {
            FieldKind::Integer { min, max, .. } => {
                let v = current.as_number().unwrap_or(min as f64) as i64;
                FieldValue::Number((v + delta as i64).clamp(min, max) as f64)
            }
            FieldKind::Decimal { min, max, .. } | FieldKind::Slider { min, max } => {
                let step = self.step();
                let v = current.as_number().unwrap_or(min);
                let moved = ((v + delta as f64 * step) / step).round() * step;
                FieldValue::Number(moved.clamp(min, max))
            }
            FieldKind::Choice { options, .. } => {
                let pos = current
                    .as_number()
                    .and_then(|v| options.iter().position(|o| *o as f64 == v))
                    .unwrap_or(0);
                let next = wrap_index(pos, delta, options.len());
                FieldValue::Number(options[next] as f64)
            }
            FieldKind::Category { options, .. } => {
                let pos = match current {
                    FieldValue::Category(label) => {
                        options.iter().position(|o| o.label == *label).unwrap_or(0)
                    }
                    FieldValue::Number(_) => 0,
                };
                let next = wrap_index(pos, delta, options.len());
                FieldValue::Category(options[next].label)
            }
        }
    }

    /// Render a value for display
    pub fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Category(label) => label.to_string(),
            FieldValue::Number(v) => match self.kind {
                FieldKind::Integer { .. } | FieldKind::Choice { .. } | FieldKind::Category { .. } => {
                    format!("{:.0}", v)
                }
                FieldKind::Decimal { .. } | FieldKind::Slider { .. } => {
                    let decimals = (-self.step().log10().floor()).max(0.0) as usize + 2;
                    trim_decimal(format!("{:.*}", decimals.min(10), v))
                }
            },
        }
    }

    /// Full-precision text that [`FieldSpec::parse`] reads back to the same value
    pub fn edit_text(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Category(label) => label.to_string(),
            FieldValue::Number(v) => v.to_string(),
        }
    }

    /// Short description of the accepted domain, e.g. `[0, 200]` or `Male | Female`
    pub fn domain_hint(&self) -> String {
        match self.kind {
            FieldKind::Choice { options, .. } => options
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(" | "),
            FieldKind::Category { options, .. } => options
                .iter()
                .map(|o| o.label)
                .collect::<Vec<_>>()
                .join(" | "),
            _ => {
                let (min, max) = self.bounds();
                format!(
                    "[{}, {}]",
                    self.format_value(&FieldValue::Number(min)),
                    self.format_value(&FieldValue::Number(max))
                )
            }
        }
    }

    fn check_range(&self, value: f64, min: f64, max: f64) -> Result<FieldValue, DomainError> {
        if value < min || value > max {
            Err(DomainError::OutOfRange {
                field: self.name.to_string(),
                value,
                min,
                max,
            })
        } else {
            Ok(FieldValue::Number(value))
        }
    }

    fn invalid_category(&self, value: &str) -> DomainError {
        let options = match self.kind {
            FieldKind::Category { options, .. } => {
                options.iter().map(|o| o.label.to_string()).collect()
            }
            _ => Vec::new(),
        };
        DomainError::InvalidCategory {
            field: self.name.to_string(),
            value: value.to_string(),
            options,
        }
    }
}

fn wrap_index(pos: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (pos as i64 + delta as i64).rem_euclid(len as i64) as usize
}

fn trim_decimal(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
