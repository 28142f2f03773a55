//! Triage classification.
//!
//! An intake is classified by walking [`TRIAGE_RULES`] top to bottom and taking the first rule
//! whose predicate holds. The last rule always matches, so classification is total over
//! validated intakes.
//!
//! Precedence: urgent, then see-doctor, then self-care. `emergency_signs` alone is enough for
//! urgent even at the mildest severity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    SEE_DOCTOR_GUIDE_IDS, SEE_DOCTOR_PRODUCT_IDS, SEE_DOCTOR_SEVERITY_THRESHOLD,
    SELF_CARE_GUIDE_IDS, SELF_CARE_PRODUCT_IDS,
};
use crate::intake::SymptomIntake;
use crate::keywords::{first_match, KeywordTables};

/// Urgency tier. Variants are declared in increasing severity, so `Ord` follows urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    SelfCare,
    SeeDoctor,
    Urgent,
}

impl TriageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TriageLevel::SelfCare => "self_care",
            TriageLevel::SeeDoctor => "see_doctor",
            TriageLevel::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference into an external guide or product catalog. Never checked for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct CatalogId(pub u64);

fn catalog_ids(ids: &[u64]) -> Vec<CatalogId> {
    ids.iter().copied().map(CatalogId).collect()
}

/// Outcome of classifying one intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TriageResult {
    pub level: TriageLevel,
    pub reasoning: String,
    pub recommendations: Vec<String>,
    pub recommended_guide_ids: Vec<CatalogId>,
    pub recommended_product_ids: Vec<CatalogId>,
}

/// One entry of the ordered rule list.
pub struct TriageRule {
    pub level: TriageLevel,
    matches: fn(&SymptomIntake, &KeywordTables) -> bool,
    build: fn() -> TriageResult,
}

impl TriageRule {
    pub fn matches(&self, intake: &SymptomIntake, tables: &KeywordTables) -> bool {
        (self.matches)(intake, tables)
    }

    pub fn build(&self) -> TriageResult {
        (self.build)()
    }
}

/// Tier rules in evaluation order.
pub static TRIAGE_RULES: [TriageRule; 3] = [
    TriageRule {
        level: TriageLevel::Urgent,
        matches: is_urgent,
        build: urgent_result,
    },
    TriageRule {
        level: TriageLevel::SeeDoctor,
        matches: needs_doctor,
        build: see_doctor_result,
    },
    TriageRule {
        level: TriageLevel::SelfCare,
        matches: always,
        build: self_care_result,
    },
];

fn symptom_match<'a>(intake: &SymptomIntake, keywords: &'a [String]) -> Option<&'a str> {
    intake
        .symptoms
        .iter()
        .find_map(|symptom| first_match(symptom, keywords))
}

fn is_urgent(intake: &SymptomIntake, tables: &KeywordTables) -> bool {
    if intake.emergency_signs {
        tracing::debug!("urgent: emergency signs asserted");
        return true;
    }
    match symptom_match(intake, tables.emergency()) {
        Some(keyword) => {
            tracing::debug!(keyword, "urgent: emergency keyword matched");
            true
        }
        None => false,
    }
}

fn needs_doctor(intake: &SymptomIntake, tables: &KeywordTables) -> bool {
    let severity = intake.effective_severity().score();
    if severity >= SEE_DOCTOR_SEVERITY_THRESHOLD {
        tracing::debug!(severity, "see_doctor: severity at or above threshold");
        return true;
    }
    match symptom_match(intake, tables.severe()) {
        Some(keyword) => {
            tracing::debug!(keyword, "see_doctor: severe keyword matched");
            true
        }
        None => false,
    }
}

fn always(_: &SymptomIntake, _: &KeywordTables) -> bool {
    true
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn urgent_result() -> TriageResult {
    TriageResult {
        level: TriageLevel::Urgent,
        reasoning: "Emergency symptoms detected that require immediate medical attention."
            .into(),
        recommendations: strings(&[
            "Call emergency services immediately (911 or local emergency number)",
            "Do not delay seeking immediate medical care",
            "If possible, have someone accompany you to the hospital",
        ]),
        // Urgent cases carry no shopping or reading suggestions.
        recommended_guide_ids: Vec::new(),
        recommended_product_ids: Vec::new(),
    }
}

fn see_doctor_result() -> TriageResult {
    TriageResult {
        level: TriageLevel::SeeDoctor,
        reasoning: "Your symptoms are concerning and should be evaluated by a healthcare professional."
            .into(),
        recommendations: strings(&[
            "Schedule an appointment with your doctor within 24-48 hours",
            "Monitor symptoms and seek immediate care if they worsen",
            "Consider urgent care if your doctor is not available",
        ]),
        recommended_guide_ids: catalog_ids(SEE_DOCTOR_GUIDE_IDS),
        recommended_product_ids: catalog_ids(SEE_DOCTOR_PRODUCT_IDS),
    }
}

fn self_care_result() -> TriageResult {
    TriageResult {
        level: TriageLevel::SelfCare,
        reasoning: "Your symptoms appear to be mild and may be managed with self-care measures."
            .into(),
        recommendations: strings(&[
            "Rest and stay hydrated",
            "Monitor symptoms for any changes",
            "Consider over-the-counter remedies as appropriate",
            "Seek medical care if symptoms persist or worsen",
        ]),
        recommended_guide_ids: catalog_ids(SELF_CARE_GUIDE_IDS),
        recommended_product_ids: catalog_ids(SELF_CARE_PRODUCT_IDS),
    }
}

/// Applies the tier rules to validated intakes.
#[derive(Clone, Debug)]
pub struct TriageClassifier<'a> {
    tables: &'a KeywordTables,
}

impl<'a> TriageClassifier<'a> {
    pub fn new(tables: &'a KeywordTables) -> Self {
        Self { tables }
    }

    /// The rule that decides `intake`: the first one, in order, whose predicate holds.
    pub fn matching_rule(&self, intake: &SymptomIntake) -> &'static TriageRule {
        TRIAGE_RULES
            .iter()
            .find(|rule| rule.matches(intake, self.tables))
            .unwrap_or(&TRIAGE_RULES[TRIAGE_RULES.len() - 1])
    }

    /// Classifies a validated intake. Cannot fail.
    pub fn classify(&self, intake: &SymptomIntake) -> TriageResult {
        self.matching_rule(intake).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_types::Severity;

    fn classify(intake: &SymptomIntake) -> TriageResult {
        let tables = KeywordTables::default();
        TriageClassifier::new(&tables).classify(intake)
    }

    fn with_severity(symptoms: &[&str], score: i64) -> SymptomIntake {
        SymptomIntake {
            severity: Some(Severity::new(score).expect("valid severity")),
            ..SymptomIntake::with_symptoms(symptoms.iter().copied())
        }
    }

    #[test]
    fn rules_are_ordered_by_decreasing_urgency() {
        let levels: Vec<TriageLevel> = TRIAGE_RULES.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![TriageLevel::Urgent, TriageLevel::SeeDoctor, TriageLevel::SelfCare]
        );
        assert!(TriageLevel::Urgent > TriageLevel::SeeDoctor);
        assert!(TriageLevel::SeeDoctor > TriageLevel::SelfCare);
    }

    #[test]
    fn emergency_signs_force_urgent_at_any_severity() {
        for score in 1..=10 {
            let intake = SymptomIntake {
                emergency_signs: true,
                ..with_severity(&["slight itch"], score)
            };
            let result = classify(&intake);
            assert_eq!(result.level, TriageLevel::Urgent, "severity {score}");
        }
    }

    #[test]
    fn chest_pain_is_urgent_in_any_case() {
        let result = classify(&with_severity(&["Sudden CHEST Pain"], 1));
        assert_eq!(result.level, TriageLevel::Urgent);
        assert_eq!(result.recommendations.len(), 3);
        assert!(result.recommended_guide_ids.is_empty());
        assert!(result.recommended_product_ids.is_empty());
    }

    #[test]
    fn severity_threshold_is_inclusive_at_eight() {
        assert_eq!(classify(&with_severity(&["runny nose"], 7)).level, TriageLevel::SelfCare);
        assert_eq!(classify(&with_severity(&["runny nose"], 8)).level, TriageLevel::SeeDoctor);
    }

    #[test]
    fn severe_keyword_dominates_low_severity() {
        let result = classify(&with_severity(&["severe headache"], 3));
        assert_eq!(result.level, TriageLevel::SeeDoctor);
        assert_eq!(result.recommended_guide_ids, vec![CatalogId(1), CatalogId(2)]);
        assert_eq!(result.recommended_product_ids, vec![CatalogId(1), CatalogId(4)]);
    }

    #[test]
    fn emergency_keyword_beats_severe_keyword() {
        let result = classify(&with_severity(&["high fever", "head injury"], 9));
        assert_eq!(result.level, TriageLevel::Urgent);
    }

    #[test]
    fn mild_headache_is_self_care_with_fixed_placeholders() {
        let result = classify(&with_severity(&["mild headache"], 3));
        assert_eq!(result.level, TriageLevel::SelfCare);
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.recommended_guide_ids, vec![CatalogId(1), CatalogId(3)]);
        assert_eq!(result.recommended_product_ids, vec![CatalogId(2), CatalogId(5)]);
    }

    #[test]
    fn missing_severity_counts_as_mildest() {
        let result = classify(&SymptomIntake::with_symptoms(["sneezing"]));
        assert_eq!(result.level, TriageLevel::SelfCare);
    }

    #[test]
    fn empty_symptom_list_is_self_care() {
        let result = classify(&SymptomIntake::default());
        assert_eq!(result.level, TriageLevel::SelfCare);
    }

    #[test]
    fn notes_and_history_are_not_consulted() {
        let intake = SymptomIntake {
            additional_notes: Some("had chest pain last year".into()),
            conditions: vec!["stroke in 2019".into()],
            medications: vec!["high fever reducer".into()],
            ..with_severity(&["tired"], 2)
        };
        assert_eq!(classify(&intake).level, TriageLevel::SelfCare);
    }

    #[test]
    fn classification_is_deterministic() {
        let intake = with_severity(&["severe pain in knee"], 5);
        let first = serde_json::to_vec(&classify(&intake)).expect("serialize");
        let second = serde_json::to_vec(&classify(&intake)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn level_serialises_snake_case() {
        let json = serde_json::to_value(classify(&with_severity(&["confusion"], 1)))
            .expect("serialize");
        assert_eq!(json["level"], "see_doctor");
        assert_eq!(json["recommended_guide_ids"], serde_json::json!([1, 2]));
    }
}
