//! Request and response bodies for the triage HTTP surface.

use serde::{Deserialize, Serialize};
use triage_core::{
    ChatMessage, IntakeOutcome, SymptomIntake, TriageResult, ValidationError,
    ValidationErrorKind,
};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Documented shape of an intake submission.
///
/// The REST handler reads the raw JSON body instead of this type so that validation can name
/// the offending field. `camelCase` spellings of the multi-word fields are accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IntakeReq {
    /// Whole years, 0 to 120.
    pub age: Option<i64>,
    /// One of `male`, `female`, `other`, `prefer_not_to_say`.
    pub sex: Option<String>,
    pub symptoms: Vec<String>,
    pub onset: Option<String>,
    /// 1 to 10. Treated as 1 when absent.
    pub severity: Option<i64>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub emergency_signs: bool,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TriageRes {
    pub intake: SymptomIntake,
    pub triage: TriageResult,
    pub message: ChatMessage,
}

impl From<IntakeOutcome> for TriageRes {
    fn from(outcome: IntakeOutcome) -> Self {
        Self {
            intake: outcome.intake,
            triage: outcome.triage,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyReq {
    pub messages: Vec<ChatMessage>,
    /// Most recent triage result for the session, if any.
    #[serde(default)]
    pub triage: Option<TriageResult>,
}

/// A persisted-shape assistant message. Identity and timestamp are assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyRes {
    /// UUID v4.
    pub id: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeRes {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MentalHealthReq {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MentalHealthRes {
    pub concern: bool,
    /// Empty unless `concern` is true.
    pub resources: Vec<String>,
}

/// Field-level description of a rejected intake.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationErrorRes {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl From<&ValidationError> for ValidationErrorRes {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field().to_owned(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
