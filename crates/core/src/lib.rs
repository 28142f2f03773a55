//! # Triage Core
//!
//! Rule-based symptom triage and chat-turn composition.
//!
//! This crate contains the decision engine only:
//! - intake validation into a canonical [`SymptomIntake`]
//! - ordered tier classification into a [`TriageResult`]
//! - crisis interception for free-text chat input
//! - composition of assistant replies
//!
//! Every operation is a pure function of its input and the keyword tables loaded at startup.
//!
//! **No API concerns**: HTTP serving, persistence, identifiers and timestamps belong to the
//! caller (`api-rest`, `cli`).

pub mod chat;
pub mod classifier;
pub mod composer;
pub mod config;
pub mod constants;
pub mod crisis;
pub mod error;
pub mod intake;
pub mod keywords;
pub mod mental_health;
pub mod templates;
pub mod validation;

use std::sync::Arc;

use serde::Serialize;

pub use chat::{ChatMessage, ChatRole};
pub use classifier::{CatalogId, TriageClassifier, TriageLevel, TriageResult};
pub use composer::{compose_intake_message, ResponseComposer};
pub use config::CoreConfig;
pub use crisis::CrisisInterceptor;
pub use error::{CoreError, CoreResult};
pub use intake::SymptomIntake;
pub use keywords::{ChatTopic, KeywordTables};
pub use validation::{normalize_intake, ValidationError, ValidationErrorKind};

/// Everything produced for one intake submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IntakeOutcome {
    pub intake: SymptomIntake,
    pub triage: TriageResult,
    pub message: ChatMessage,
}

/// Triage operations over a shared, read-only configuration.
///
/// Cheap to clone; safe to call concurrently from any number of handlers.
#[derive(Clone, Debug)]
pub struct TriageService {
    cfg: Arc<CoreConfig>,
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new(Arc::new(CoreConfig::default()))
    }
}

impl TriageService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn tables(&self) -> &KeywordTables {
        self.cfg.keyword_tables()
    }

    /// Validate a raw intake submission and classify it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in `raw`.
    pub fn classify(&self, raw: &serde_json::Value) -> Result<TriageResult, ValidationError> {
        let intake = self.normalize(raw)?;
        Ok(self.classify_intake(&intake))
    }

    /// Classify an already-validated intake. Cannot fail.
    pub fn classify_intake(&self, intake: &SymptomIntake) -> TriageResult {
        let result = TriageClassifier::new(self.tables()).classify(intake);
        tracing::info!(
            level = %result.level,
            symptoms = intake.symptoms.len(),
            "intake classified"
        );
        result
    }

    /// Validate, classify and compose the assistant message for an intake in one step.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in `raw`.
    pub fn process_intake(&self, raw: &serde_json::Value) -> Result<IntakeOutcome, ValidationError> {
        let intake = self.normalize(raw)?;
        let triage = self.classify_intake(&intake);
        let message = ChatMessage::assistant(compose_intake_message(&triage));
        Ok(IntakeOutcome {
            intake,
            triage,
            message,
        })
    }

    /// Answer the latest chat turn. Never fails.
    pub fn compose_chat_reply(
        &self,
        messages: &[ChatMessage],
        triage: Option<&TriageResult>,
    ) -> ChatMessage {
        ResponseComposer::new(self.tables()).compose_chat_reply(messages, triage)
    }

    /// Whether `text` must be answered with the crisis message.
    pub fn intercepts_crisis(&self, text: &str) -> bool {
        CrisisInterceptor::new(self.tables()).intercepts(text)
    }

    pub fn detects_mental_health_concern(&self, text: &str) -> bool {
        mental_health::detects_concern(text, self.tables())
    }

    pub fn mental_health_resources(&self) -> &'static [&'static str] {
        mental_health::resources()
    }

    /// Opening assistant message for a new chat session.
    pub fn welcome_message(&self) -> ChatMessage {
        ChatMessage::assistant(templates::SESSION_WELCOME)
    }

    fn normalize(&self, raw: &serde_json::Value) -> Result<SymptomIntake, ValidationError> {
        normalize_intake(raw).inspect_err(|err| {
            tracing::warn!(field = err.field(), kind = ?err.kind(), "intake rejected: {err}");
        })
    }
}
