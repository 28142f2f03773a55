//! Intake validation.
//!
//! Turns a raw JSON submission into a canonical [`SymptomIntake`]. Fields are checked in a
//! fixed order and the first invalid one rejects the whole submission; nothing is clamped or
//! partially accepted.
//!
//! Both the `snake_case` field names and their `camelCase` spellings are accepted. A field set
//! to `null` is treated as absent.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::{Map, Value};
use triage_types::{Age, Severity, Sex};

use crate::intake::SymptomIntake;

/// Category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ValidationErrorKind {
    OutOfRange,
    MissingRequired,
    WrongType,
}

/// Reason a raw intake submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is out of range: {detail}")]
    OutOfRange { field: &'static str, detail: String },

    #[error("{field} is required")]
    MissingRequired { field: &'static str },

    #[error("{field} must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field, or `<root>` when the payload itself is malformed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::MissingRequired { field }
            | ValidationError::WrongType { field, .. } => field,
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
            ValidationError::MissingRequired { .. } => ValidationErrorKind::MissingRequired,
            ValidationError::WrongType { .. } => ValidationErrorKind::WrongType,
        }
    }
}

/// Validates a raw intake submission and shapes it into a [`SymptomIntake`].
///
/// Fields are checked in declaration order: age, sex, symptoms, onset, severity, medications,
/// conditions, emergency_signs, additional_notes. Unknown fields are ignored.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first invalid field:
/// - `WrongType` if the payload is not an object or a field has the wrong JSON type,
/// - `MissingRequired` if `symptoms` is absent,
/// - `OutOfRange` if `age` is outside 0–120, `severity` outside 1–10, or `sex` is not one of
///   the enumerated values.
pub fn normalize_intake(raw: &Value) -> Result<SymptomIntake, ValidationError> {
    let obj = raw.as_object().ok_or(ValidationError::WrongType {
        field: "<root>",
        expected: "an object",
    })?;

    let age = optional_integer(obj, "age", "age", Age::MIN..=Age::MAX)?
        .map(|years| {
            Age::new(years).map_err(|e| ValidationError::OutOfRange {
                field: "age",
                detail: e.to_string(),
            })
        })
        .transpose()?;

    let sex = optional_string(obj, "sex", "sex")?
        .map(|value| {
            value
                .parse::<Sex>()
                .map_err(|e| ValidationError::OutOfRange {
                    field: "sex",
                    detail: e.to_string(),
                })
        })
        .transpose()?;

    let symptoms = match lookup(obj, "symptoms", "symptoms") {
        Some(value) => string_list("symptoms", value)?,
        None => return Err(ValidationError::MissingRequired { field: "symptoms" }),
    };

    let onset = optional_string(obj, "onset", "onset")?;

    let severity = optional_integer(obj, "severity", "severity", Severity::MIN..=Severity::MAX)?
        .map(|score| {
            Severity::new(score).map_err(|e| ValidationError::OutOfRange {
                field: "severity",
                detail: e.to_string(),
            })
        })
        .transpose()?;

    let medications = optional_string_list(obj, "medications", "medications")?;
    let conditions = optional_string_list(obj, "conditions", "conditions")?;

    let emergency_signs = match lookup(obj, "emergency_signs", "emergencySigns") {
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "emergency_signs",
                expected: "a boolean",
            })
        }
        None => false,
    };

    let additional_notes = optional_string(obj, "additional_notes", "additionalNotes")?;

    Ok(SymptomIntake {
        age,
        sex,
        symptoms,
        onset,
        severity,
        medications,
        conditions,
        emergency_signs,
        additional_notes,
    })
}

fn lookup<'a>(obj: &'a Map<String, Value>, snake: &str, camel: &str) -> Option<&'a Value> {
    obj.get(snake)
        .or_else(|| obj.get(camel))
        .filter(|value| !value.is_null())
}

/// Reads an integer field. Numbers that do not fit `i64` are range-checked against `range`
/// here, so the error reports the submitted value rather than a saturated cast.
fn optional_integer(
    obj: &Map<String, Value>,
    field: &'static str,
    camel: &str,
    range: RangeInclusive<i64>,
) -> Result<Option<i64>, ValidationError> {
    let Some(value) = lookup(obj, field, camel) else {
        return Ok(None);
    };

    if let Some(n) = value.as_i64() {
        return Ok(Some(n));
    }

    // Whole-valued floats and out-of-range `u64`s are integers on the wire too.
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && value.as_u64().is_none() => {
            if (*range.start() as f64..=*range.end() as f64).contains(&f) {
                Ok(Some(f as i64))
            } else {
                Err(out_of_range(field, value, &range))
            }
        }
        Some(_) if value.as_u64().is_some() => Err(out_of_range(field, value, &range)),
        _ => Err(ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
    }
}

fn out_of_range(
    field: &'static str,
    value: &Value,
    range: &RangeInclusive<i64>,
) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        detail: format!(
            "value {value} is outside the range {}..={}",
            range.start(),
            range.end()
        ),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &'static str,
    camel: &str,
) -> Result<Option<String>, ValidationError> {
    match lookup(obj, field, camel) {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
        None => Ok(None),
    }
}

fn optional_string_list(
    obj: &Map<String, Value>,
    field: &'static str,
    camel: &str,
) -> Result<Vec<String>, ValidationError> {
    match lookup(obj, field, camel) {
        Some(value) => string_list(field, value),
        None => Ok(Vec::new()),
    }
}

fn string_list(field: &'static str, value: &Value) -> Result<Vec<String>, ValidationError> {
    let wrong_type = || ValidationError::WrongType {
        field,
        expected: "an array of strings",
    };

    let items = value.as_array().ok_or_else(wrong_type)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let text = item.as_str().ok_or_else(wrong_type)?.trim();
        if !text.is_empty() {
            out.push(text.to_owned());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_submission() {
        let raw = json!({
            "age": 30,
            "sex": "female",
            "symptoms": ["headache", "fatigue", "mild fever"],
            "onset": "2 days ago",
            "severity": 5,
            "medications": ["ibuprofen", "vitamin D"],
            "conditions": ["hypertension"],
            "emergency_signs": false,
            "additional_notes": "Symptoms seem to worsen in the evening"
        });

        let intake = normalize_intake(&raw).expect("valid intake");
        assert_eq!(intake.age.map(|a| a.years()), Some(30));
        assert_eq!(intake.sex, Some(Sex::Female));
        assert_eq!(intake.symptoms, vec!["headache", "fatigue", "mild fever"]);
        assert_eq!(intake.onset.as_deref(), Some("2 days ago"));
        assert_eq!(intake.severity.map(|s| s.score()), Some(5));
        assert_eq!(intake.medications, vec!["ibuprofen", "vitamin D"]);
        assert!(!intake.emergency_signs);
    }

    #[test]
    fn accepts_minimal_submission_with_empty_symptoms() {
        let intake = normalize_intake(&json!({ "symptoms": [] })).expect("valid intake");
        assert!(intake.symptoms.is_empty());
        assert_eq!(intake.severity, None);
        assert_eq!(intake.effective_severity().score(), 1);
        assert!(!intake.emergency_signs);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let raw = json!({
            "symptoms": ["cough"],
            "emergencySigns": true,
            "additionalNotes": "night only"
        });
        let intake = normalize_intake(&raw).expect("valid intake");
        assert!(intake.emergency_signs);
        assert_eq!(intake.additional_notes.as_deref(), Some("night only"));
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        let raw = json!({ "symptoms": ["  cough ", "   ", ""], "onset": "  " });
        let intake = normalize_intake(&raw).expect("valid intake");
        assert_eq!(intake.symptoms, vec!["cough"]);
        assert_eq!(intake.onset, None);
    }

    #[test]
    fn null_fields_are_absent() {
        let raw = json!({ "symptoms": ["cough"], "age": null, "severity": null });
        let intake = normalize_intake(&raw).expect("valid intake");
        assert_eq!(intake.age, None);
        assert_eq!(intake.severity, None);
    }

    #[test]
    fn rejects_missing_symptoms() {
        let err = normalize_intake(&json!({ "severity": 3 })).expect_err("missing symptoms");
        assert_eq!(err, ValidationError::MissingRequired { field: "symptoms" });
        assert_eq!(err.kind(), ValidationErrorKind::MissingRequired);
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = normalize_intake(&json!(["headache"])).expect_err("array payload");
        assert_eq!(err.field(), "<root>");
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
    }

    #[test]
    fn rejects_out_of_range_severity_without_clamping() {
        for bad in [0, 11, -3] {
            let err = normalize_intake(&json!({ "symptoms": [], "severity": bad }))
                .expect_err("out of range severity");
            assert_eq!(err.field(), "severity");
            assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
        }
    }

    #[test]
    fn rejects_out_of_range_age() {
        let err = normalize_intake(&json!({ "symptoms": [], "age": 121 })).expect_err("age 121");
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
        assert!(normalize_intake(&json!({ "symptoms": [], "age": 120 })).is_ok());
        assert!(normalize_intake(&json!({ "symptoms": [], "age": 0 })).is_ok());
    }

    #[test]
    fn rejects_unknown_sex() {
        let err = normalize_intake(&json!({ "symptoms": [], "sex": "robot" }))
            .expect_err("unknown sex");
        assert!(matches!(err, ValidationError::OutOfRange { field: "sex", .. }));
    }

    #[test]
    fn rejects_wrong_types() {
        let cases = [
            (json!({ "symptoms": "headache" }), "symptoms"),
            (json!({ "symptoms": ["ok", 3] }), "symptoms"),
            (json!({ "symptoms": [], "severity": "five" }), "severity"),
            (json!({ "symptoms": [], "severity": 5.5 }), "severity"),
            (json!({ "symptoms": [], "emergency_signs": "yes" }), "emergency_signs"),
            (json!({ "symptoms": [], "medications": [true] }), "medications"),
            (json!({ "symptoms": [], "onset": 12 }), "onset"),
        ];

        for (raw, field) in cases {
            let err = normalize_intake(&raw).expect_err("wrong type");
            assert_eq!(err.kind(), ValidationErrorKind::WrongType, "{raw}");
            assert_eq!(err.field(), field, "{raw}");
        }
    }

    #[test]
    fn accepts_whole_valued_floats() {
        let intake = normalize_intake(&json!({ "symptoms": [], "severity": 8.0 }))
            .expect("whole float");
        assert_eq!(intake.severity.map(|s| s.score()), Some(8));
    }

    #[test]
    fn huge_values_report_the_submitted_number() {
        let raw: Value =
            serde_json::from_str(r#"{ "symptoms": [], "severity": 18446744073709551615 }"#)
                .expect("json");
        let err = normalize_intake(&raw).expect_err("u64 max");
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "severity",
                detail: "value 18446744073709551615 is outside the range 1..=10".into(),
            }
        );

        let err = normalize_intake(&json!({ "symptoms": [], "age": 1e20 })).expect_err("1e20");
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
        assert!(!err.to_string().contains("9223372036854775807"), "{err}");
    }

    #[test]
    fn reports_first_invalid_field_only() {
        // age is checked before severity.
        let raw = json!({ "symptoms": [], "age": 500, "severity": 50 });
        let err = normalize_intake(&raw).expect_err("two bad fields");
        assert_eq!(err.field(), "age");
    }
}
