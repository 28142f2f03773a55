//! Fixed user-facing message text.

/// Reply when there is no user turn to answer.
pub const GREETING: &str = "Hello! I'm your AI Health Assistant. I'm here to provide general health information and guidance. Please note that I cannot diagnose medical conditions or replace professional medical advice. How can I help you today?";

/// First assistant message of a new chat session.
pub const SESSION_WELCOME: &str = "Hello! I'm your AI Health Assistant. Before we begin, I'd like to gather some information about your symptoms to better assist you. Would you like to start with a symptom intake form?";

/// Emitted verbatim whenever the crisis interceptor fires.
pub const CRISIS_RESPONSE: &str = "\u{1F6A8} **IMPORTANT**: If you are experiencing a medical emergency or having thoughts of self-harm, please contact emergency services immediately:

\u{2022} **Emergency**: 911 (US) or your local emergency number
\u{2022} **Crisis Hotline**: 988 (US Suicide & Crisis Lifeline)

I'm here to provide general health information, but I cannot replace professional medical care in emergency situations. Please reach out to qualified professionals who can provide immediate assistance.";

pub const INTAKE_PREAMBLE: &str =
    "Thank you for completing the symptom intake. Based on your responses:";

pub const URGENT_BANNER: &str = "\u{1F6A8} **URGENT**: Please seek immediate medical attention.";

pub const INTAKE_DISCLAIMER: &str = "*Disclaimer: This assessment is for informational purposes only and does not replace professional medical advice.*";

/// Footer closing the cold/flu template.
pub const CHAT_DISCLAIMER: &str = "*Disclaimer: This information is for educational purposes only and is not a substitute for professional medical advice.*";

pub const COLD_FLU_REPLY: &str = "I understand you're asking about cold or flu symptoms. Here are some general self-care tips:

\u{2022} **Rest**: Get plenty of sleep to help your body recover
\u{2022} **Hydration**: Drink lots of fluids like water, herbal tea, and warm broth
\u{2022} **Symptom relief**: Consider over-the-counter medications for comfort

**When to see a doctor:**
- Fever above 101.5\u{B0}F (38.6\u{B0}C)
- Symptoms lasting more than 10 days
- Difficulty breathing
- Severe headache or sinus pain

Would you like me to suggest some products that might help with symptom relief?

*Disclaimer: This information is for educational purposes only and is not a substitute for professional medical advice.*";

pub const HEADACHE_REPLY: &str = "Headaches can have various causes. Here are some general relief strategies:

\u{2022} **Rest**: Try lying down in a dark, quiet room
\u{2022} **Hydration**: Dehydration is a common headache trigger
\u{2022} **Temperature therapy**: Apply a cold or warm compress to your head or neck
\u{2022} **Gentle massage**: Massage your temples and neck area

**When to seek medical help:**
- Sudden, severe headache unlike any before
- Headache with fever, stiff neck, or confusion
- Headache after a head injury
- Chronic headaches interfering with daily life

Would you like recommendations for headache relief products or more information about headache types?

*Remember: Never ignore severe or persistent headaches. Always consult a healthcare professional for proper diagnosis.*";

pub const PAIN_REPLY: &str = "I understand you're experiencing pain. Pain management depends on the type and severity:

\u{2022} **Mild pain**: Rest, ice/heat therapy, over-the-counter pain relievers
\u{2022} **Chronic pain**: Requires professional medical evaluation
\u{2022} **Severe pain**: Should be evaluated by a healthcare provider

**Red flags that need immediate attention:**
- Severe, sudden onset pain
- Pain with fever or other concerning symptoms
- Pain that interferes with daily activities

I'd recommend speaking with a healthcare professional for proper pain assessment and management strategies.

*This is general information only. For persistent or severe pain, please consult a medical professional.*";

pub const GENERAL_REPLY: &str = "Thank you for sharing your health concern with me. I'm here to provide general health information and support.

Based on what you've told me, I'd recommend:

\u{2022} **Monitor your symptoms** and note any changes
\u{2022} **Stay hydrated** and get adequate rest
\u{2022} **Consider gentle self-care measures** as appropriate
\u{2022} **Seek professional medical advice** if symptoms persist or worsen

I can help you find relevant health guides or suggest products that might be helpful for general wellness. Would you like me to provide some recommendations?

**Important reminder**: I provide general health information only and cannot diagnose medical conditions. For specific medical concerns, please consult with a qualified healthcare professional.

Is there anything specific about your symptoms or health concerns you'd like to discuss further?";

/// Support lines offered alongside a mental-health concern, in display order.
pub const MENTAL_HEALTH_RESOURCES: &[&str] = &[
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "NAMI (National Alliance on Mental Illness): 1-800-950-NAMI",
    "SAMHSA National Helpline: 1-800-662-4357",
];
