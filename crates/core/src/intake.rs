//! Canonical symptom intake record.

use serde::Serialize;
use triage_types::{Age, Severity, Sex};

/// A validated symptom report.
///
/// Values of this type only come out of [`crate::validation::normalize_intake`] or are
/// assembled from already range-checked parts, so `age` and `severity` are always in range.
/// List fields hold trimmed, non-blank entries in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SymptomIntake {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    /// Operator-asserted override that forces the urgent tier.
    pub emergency_signs: bool,
    /// Display-only; never consulted by classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl SymptomIntake {
    /// Creates an intake with only the given symptoms set.
    pub fn with_symptoms<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Severity used for classification. An unset severity counts as the mildest score.
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or_default()
    }
}
