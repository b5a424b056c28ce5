use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AssistantError, Result};

/// Response key used when no intent rule matches.
pub const DEFAULT_RESPONSE_KEY: &str = "default";

/// Top-level assistant configuration.
///
/// Built once at startup and handed to the classifier and the session;
/// nothing reads it through a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Intent rules in evaluation order. The `default` fallback is implicit.
    pub rules: Vec<IntentRule>,
    /// Canned reply text, keyed by response key
    pub responses: BTreeMap<String, String>,
    /// Assistant message seeded into every fresh transcript
    pub welcome_message: String,
    /// Quick questions offered near the start of a conversation
    pub suggested_prompts: Vec<String>,
    /// Simulated "composing" delay before each reply
    pub response_delay_ms: u32,
    /// Suggested prompts are offered while the transcript holds at most this many messages
    pub suggestion_threshold: usize,
}

/// A keyword rule: matches if any keyword is a substring of the lower-cased utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub response_key: String,
    pub keywords: Vec<String>,
}

impl IntentRule {
    pub fn new(response_key: &str, keywords: &[&str]) -> Self {
        Self {
            response_key: response_key.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        let responses = DEFAULT_RESPONSES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            rules: default_rules(),
            responses,
            welcome_message: WELCOME_MESSAGE.to_string(),
            suggested_prompts: SUGGESTED_PROMPTS.iter().map(|p| p.to_string()).collect(),
            response_delay_ms: 1000,
            suggestion_threshold: 2,
        }
    }
}

impl AssistantConfig {
    /// Parse a JSON config. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AssistantConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every rule can match and every response key resolves.
    pub fn validate(&self) -> Result<()> {
        if self.response_delay_ms == 0 {
            return Err(AssistantError::Config(
                "response_delay_ms must be greater than zero".to_string(),
            ));
        }
        if !self.responses.contains_key(DEFAULT_RESPONSE_KEY) {
            return Err(AssistantError::Config(format!(
                "missing '{}' response",
                DEFAULT_RESPONSE_KEY
            )));
        }

        for rule in &self.rules {
            if rule.response_key == DEFAULT_RESPONSE_KEY {
                return Err(AssistantError::Config(format!(
                    "'{}' is the implicit fallback and cannot be a rule",
                    DEFAULT_RESPONSE_KEY
                )));
            }
            if !self.responses.contains_key(&rule.response_key) {
                return Err(AssistantError::Config(format!(
                    "rule '{}' has no response",
                    rule.response_key
                )));
            }
            if rule.keywords.is_empty() {
                return Err(AssistantError::Config(format!(
                    "rule '{}' has no keywords",
                    rule.response_key
                )));
            }
            for keyword in &rule.keywords {
                if keyword.is_empty() {
                    return Err(AssistantError::Config(format!(
                        "rule '{}' has an empty keyword",
                        rule.response_key
                    )));
                }
                // Utterances are lower-cased before matching
                if keyword.to_lowercase() != *keyword {
                    return Err(AssistantError::Config(format!(
                        "rule '{}' keyword '{}' must be lowercase",
                        rule.response_key, keyword
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn response(&self, key: &str) -> Option<&str> {
        self.responses.get(key).map(String::as_str)
    }
}

/// Declared rule order. Order decides the winner for utterances that hit
/// several rules, so do not sort.
fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new("skills", &["skill", "tech", "stack"]),
        IntentRule::new("projects", &["project", "work", "built"]),
        IntentRule::new("experience", &["experience", "journey", "background"]),
        IntentRule::new("resume", &["resume", "cv", "download"]),
        IntentRule::new("contact", &["contact", "email", "reach"]),
        IntentRule::new("hello", &["hello", "hi", "hey"]),
    ]
}

const WELCOME_MESSAGE: &str =
    "Hi! I'm the AI Portfolio Assistant. Ask me about Guruprasad's skills, projects, or experience!";

const SUGGESTED_PROMPTS: &[&str] = &[
    "What are your skills?",
    "Tell me about your projects",
    "What is your experience?",
];

const DEFAULT_RESPONSES: &[(&str, &str)] = &[
    (
        "skills",
        "I specialize in full-stack development using the MERN Stack (MongoDB, Express.js, React.js, Node.js) \
         and building AI-integrated web applications. I am proficient in JavaScript, TypeScript, Python, \
         RESTful APIs, and modern UI frameworks like Tailwind CSS and Bootstrap. I also have experience with \
         cloud platforms and tools such as Firebase, AWS, Appwrite, GitHub, and Vercel, along with data \
         visualization and 3D libraries like D3.js and Three.js.",
    ),
    (
        "projects",
        "My featured projects include KISAN VISION INDIA, a smart crop analytics and advisory dashboard with \
         interactive maps and an AI chatbot supporting multiple Indian languages, and StudyMate, an AI-powered \
         PDF analyzer that enables users to ask questions and receive document-based answers. I have also built \
         a real-time Trivia Quiz application with Firebase authentication, leaderboards, and engaging 3D \
         animations. These projects demonstrate strong full-stack development, AI integration, and \
         problem-solving skills.",
    ),
    (
        "experience",
        "I am a Computer Science & Engineering undergraduate with hands-on experience in building \
         production-ready full-stack applications. My experience includes developing React dashboards, Node.js \
         backend APIs, AI-powered systems, and cloud-deployed applications. I actively participate in \
         hackathons and competitive programming and continuously improve through self-driven learning and \
         real-world projects.",
    ),
    (
        "resume",
        "My resume highlights expertise in MERN Stack development, AI-powered applications, data \
         visualization, and cloud deployment. It includes projects focused on agriculture analytics, \
         intelligent document processing, and interactive web applications, along with achievements in \
         state-level hackathons. Would you like to view or download my resume?",
    ),
    (
        "contact",
        "You can reach Guruprasad Parashuram Pishe at guruprasadpishe@gmail.com. I am open to internships and \
         entry-level software engineering or full-stack developer roles. You can also connect with me via \
         LinkedIn or GitHub through the contact section below.",
    ),
    (
        "hello",
        "Hello! I'm Guruprasad’s AI Portfolio Assistant 🤖. I can help you explore his skills, projects, \
         experience, certifications, or resume. What would you like to know?",
    ),
    (
        DEFAULT_RESPONSE_KEY,
        "I can help you learn more about Guruprasad’s skills, projects, experience, resume, or contact \
         details. Try asking about 'skills', 'projects', 'experience', 'resume', or 'contact'.",
    ),
];
