//! Constants used throughout the triage core crate.
//!
//! The keyword sets below are the compiled-in defaults for [`crate::keywords::KeywordTables`].
//! All entries are lowercase; matching lowercases the input and tests substring containment.

/// Symptom phrases that force the urgent tier.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe bleeding",
    "unconscious",
    "stroke",
    "heart attack",
    "severe allergic reaction",
    "poisoning",
    "severe burns",
    "broken bone",
    "head injury",
];

/// Symptom phrases that raise a non-urgent intake to the see-doctor tier.
pub const SEVERE_KEYWORDS: &[&str] = &[
    "high fever",
    "persistent vomiting",
    "severe pain",
    "blood in stool",
    "blood in urine",
    "severe headache",
    "vision problems",
    "confusion",
];

/// Free-text phrases that preempt normal chat generation with the crisis message.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "self harm",
    "hurt myself",
    "emergency",
    "can't breathe",
    "chest pain",
    "overdose",
];

/// Chat topic keywords, in match priority order.
pub const COLD_FLU_KEYWORDS: &[&str] = &["cold", "flu"];
pub const HEADACHE_KEYWORDS: &[&str] = &["headache"];
pub const PAIN_KEYWORDS: &[&str] = &["pain"];

/// Phrases that indicate a mental-health concern in free text.
pub const MENTAL_HEALTH_KEYWORDS: &[&str] = &[
    "depression",
    "anxiety",
    "panic",
    "suicide",
    "self harm",
    "mental health",
    "therapy",
    "counseling",
    "psychiatrist",
    "medication",
    "mood",
];

/// Severity score at or above which an intake is referred to a doctor.
pub const SEE_DOCTOR_SEVERITY_THRESHOLD: u8 = 8;

/// Guide catalog entries suggested for the see-doctor tier.
pub const SEE_DOCTOR_GUIDE_IDS: &[u64] = &[1, 2];

/// Product catalog entries suggested for the see-doctor tier (thermometer, first aid kit).
pub const SEE_DOCTOR_PRODUCT_IDS: &[u64] = &[1, 4];

/// Guide catalog entries suggested for the self-care tier.
pub const SELF_CARE_GUIDE_IDS: &[u64] = &[1, 3];

/// Product catalog entries suggested for the self-care tier (vitamins, supplements).
pub const SELF_CARE_PRODUCT_IDS: &[u64] = &[2, 5];

/// Maximum size of a keyword override file.
pub const MAX_RULES_FILE_BYTES: u64 = 256 * 1024;
