//! Validation of a raw parameter bag against a [`ParamSchema`].

use std::collections::BTreeMap;

use serde_json::Value;

use super::schema::{FieldKind, FieldSpec, ParamSchema};
use super::{ParamBag, ParamValue, ValidatedParams};
use crate::forge::error::{FieldError, FieldErrorKind, ValidationReport};

impl ParamSchema {
    /// Validates and normalises `bag`.
    ///
    /// Every unknown key, type error, illegal value, range violation and
    /// exclusivity conflict is collected into one report. `null` values count
    /// as unset. When several accepted keys for one field are present, the
    /// canonical name wins, then aliases in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationReport`] describing every problem found.
    pub fn validate(&self, bag: &ParamBag) -> Result<ValidatedParams, ValidationReport> {
        let mut report = ValidationReport {
            schema: self.name().to_owned(),
            ..ValidationReport::default()
        };

        report.unsupported = bag
            .keys()
            .filter(|key| self.field_for_key(key).is_none())
            .cloned()
            .collect();

        let mut values = BTreeMap::new();
        for field in self.fields() {
            let supplied = field
                .accepted_keys()
                .find_map(|key| bag.get(key).filter(|value| !value.is_null()).map(|value| (key, value)));

            match supplied {
                Some((key, value)) => match coerce(field, key, value) {
                    Ok(Some(coerced)) => {
                        values.insert(field.name.to_owned(), coerced);
                    }
                    Ok(None) => {}
                    Err(error) => report.field_errors.push(error),
                },
                None => {
                    if let Some(default) = field.default {
                        values.insert(field.name.to_owned(), ParamValue::Integer(default));
                    }
                }
            }
        }

        for &(first, second) in self.exclusive_pairs() {
            if values.contains_key(first) && values.contains_key(second) {
                report.field_errors.push(FieldError {
                    field: first.to_owned(),
                    kind: FieldErrorKind::MutuallyExclusive,
                    message: format!("{first} and {second} are mutually exclusive"),
                });
            }
        }

        if report.is_empty() {
            return Ok(ValidatedParams::new(values));
        }

        report.supported = self.supported_fields();
        Err(report)
    }
}

/// Checks one supplied value. `Ok(None)` means the value collapsed to "no
/// filter" (blank labels).
fn coerce(field: &FieldSpec, key: &str, value: &Value) -> Result<Option<ParamValue>, FieldError> {
    match &field.kind {
        FieldKind::Text => value
            .as_str()
            .map(|text| Some(ParamValue::Text(text.to_owned())))
            .ok_or_else(|| invalid_type(key, "a string", value)),
        FieldKind::Choice(allowed) => {
            let text = value
                .as_str()
                .ok_or_else(|| invalid_type(key, "a string", value))?;
            if allowed.contains(&text) {
                Ok(Some(ParamValue::Text(text.to_owned())))
            } else {
                Err(FieldError {
                    field: key.to_owned(),
                    kind: FieldErrorKind::InvalidValue,
                    message: format!(
                        "invalid {key} `{text}`, must be one of {}",
                        allowed.join(", ")
                    ),
                })
            }
        }
        FieldKind::Integer { min, max } => {
            let number = as_integer(value).ok_or_else(|| invalid_type(key, "an integer", value))?;
            check_range(key, number, *min, *max)?;
            Ok(Some(ParamValue::Integer(number)))
        }
        FieldKind::Flag => as_flag(value)
            .map(|flag| Some(ParamValue::Flag(flag)))
            .ok_or_else(|| invalid_type(key, "a boolean", value)),
        FieldKind::Labels => coerce_labels(key, value),
        FieldKind::IntegerList => {
            let items = value
                .as_array()
                .ok_or_else(|| invalid_type(key, "a list of integers", value))?;
            items
                .iter()
                .map(|item| as_integer(item).ok_or_else(|| invalid_type(key, "a list of integers", value)))
                .collect::<Result<Vec<_>, _>>()
                .map(|numbers| Some(ParamValue::IntegerList(numbers)))
        }
    }
}

/// Labels accept a list of names or one comma-joined string. Names are
/// trimmed, blanks dropped, and the result is joined with commas. An empty
/// result means no label filter.
fn coerce_labels(key: &str, value: &Value) -> Result<Option<ParamValue>, FieldError> {
    let mut names: Vec<&str> = Vec::new();
    match value {
        Value::String(text) => names.extend(text.split(',')),
        Value::Array(items) => {
            for item in items {
                let text = item
                    .as_str()
                    .ok_or_else(|| invalid_type(key, "a string or a list of strings", value))?;
                names.extend(text.split(','));
            }
        }
        _ => return Err(invalid_type(key, "a string or a list of strings", value)),
    }

    let joined = names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    if joined.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ParamValue::Text(joined)))
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn check_range(key: &str, number: i64, min: Option<i64>, max: Option<i64>) -> Result<(), FieldError> {
    let below = min.is_some_and(|lower| number < lower);
    let above = max.is_some_and(|upper| number > upper);
    if !below && !above {
        return Ok(());
    }

    let bounds = match (min, max) {
        (Some(lower), Some(upper)) => format!("between {lower} and {upper}"),
        (Some(lower), None) => format!("at least {lower}"),
        (None, Some(upper)) => format!("at most {upper}"),
        (None, None) => String::new(),
    };
    Err(FieldError {
        field: key.to_owned(),
        kind: FieldErrorKind::OutOfRange,
        message: format!("{key} must be {bounds}, got {number}"),
    })
}

fn invalid_type(key: &str, expected: &str, value: &Value) -> FieldError {
    FieldError {
        field: key.to_owned(),
        kind: FieldErrorKind::InvalidType,
        message: format!("{key} must be {expected}, got {value}"),
    }
}
