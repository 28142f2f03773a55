//! Response composition.
//!
//! Two independent paths live here:
//! - the intake path renders a [`TriageResult`] into a structured assessment message;
//! - the chat path answers a free-text turn by crisis interception, then a keyword-to-template
//!   lookup over [`KeywordTables::topics`]. It never runs the triage classifier, and its topic
//!   table is separate from the classifier's keyword sets.

use crate::chat::{ChatMessage, ChatRole};
use crate::classifier::{TriageLevel, TriageResult};
use crate::crisis::CrisisInterceptor;
use crate::keywords::{contains_any, ChatTopic, KeywordTables};
use crate::templates::{
    COLD_FLU_REPLY, CRISIS_RESPONSE, GENERAL_REPLY, GREETING, HEADACHE_REPLY, INTAKE_DISCLAIMER,
    INTAKE_PREAMBLE, PAIN_REPLY, URGENT_BANNER,
};

/// Renders the assistant message for a classified intake.
///
/// Layout: preamble, assessment line, bulleted recommendations in result order, the urgent
/// banner (urgent only), then the disclaimer.
pub fn compose_intake_message(result: &TriageResult) -> String {
    let mut out = String::new();
    out.push_str(INTAKE_PREAMBLE);
    out.push_str("\n\n**Assessment**: ");
    out.push_str(&result.reasoning);
    out.push_str("\n\n**Recommendations**:\n");
    for rec in &result.recommendations {
        out.push_str("\u{2022} ");
        out.push_str(rec);
        out.push('\n');
    }

    if result.level == TriageLevel::Urgent {
        out.push('\n');
        out.push_str(URGENT_BANNER);
    }

    out.push_str("\n\n");
    out.push_str(INTAKE_DISCLAIMER);
    out
}

/// Long-form reply for a chat topic.
pub fn topic_reply(topic: ChatTopic) -> &'static str {
    match topic {
        ChatTopic::ColdFlu => COLD_FLU_REPLY,
        ChatTopic::Headache => HEADACHE_REPLY,
        ChatTopic::Pain => PAIN_REPLY,
    }
}

/// Builds assistant replies for chat turns.
#[derive(Clone, Debug)]
pub struct ResponseComposer<'a> {
    tables: &'a KeywordTables,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(tables: &'a KeywordTables) -> Self {
        Self { tables }
    }

    /// First topic, in table order, with a keyword contained in `text`.
    pub fn topic_for(&self, text: &str) -> Option<ChatTopic> {
        self.tables
            .topics()
            .iter()
            .find(|entry| contains_any(text, &entry.keywords))
            .map(|entry| entry.topic)
    }

    /// Free-text reply body for `text`, falling back to the general reply.
    pub fn chat_reply_text(&self, text: &str) -> &'static str {
        self.topic_for(text).map_or(GENERAL_REPLY, topic_reply)
    }

    /// Answers the latest turn of a conversation. Never fails.
    ///
    /// - no messages, or the latest is not from the user: the greeting;
    /// - crisis language in the latest user message: the crisis text, verbatim;
    /// - otherwise: the topic reply for the latest user message.
    ///
    /// `triage` is accepted for callers that hold an intake result for the session; it does not
    /// change the reply.
    pub fn compose_chat_reply(
        &self,
        messages: &[ChatMessage],
        triage: Option<&TriageResult>,
    ) -> ChatMessage {
        let latest = match messages.last() {
            Some(msg) if msg.role == ChatRole::User => msg,
            _ => return ChatMessage::assistant(GREETING),
        };

        if let Some(keyword) = CrisisInterceptor::new(self.tables).matched_keyword(&latest.content)
        {
            tracing::warn!(keyword, "crisis language intercepted");
            return ChatMessage::assistant(CRISIS_RESPONSE);
        }

        tracing::debug!(triage_level = ?triage.map(|t| t.level), "composing chat reply");
        ChatMessage::assistant(self.chat_reply_text(&latest.content))
    }
}
