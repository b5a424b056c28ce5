//! Keyword intent classifier.
//!
//! Lower-cases the utterance and walks the rules in declared order; the first
//! rule with a keyword contained anywhere in the utterance wins. There is no
//! tokenization or scoring, so "this" matches the `hi` keyword.

use std::collections::BTreeMap;

use assistant_types::config::{AssistantConfig, IntentRule, DEFAULT_RESPONSE_KEY};

/// Maps free text to a response key and its canned reply.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    responses: BTreeMap<String, String>,
}

impl IntentClassifier {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            rules: config.rules.clone(),
            responses: config.responses.clone(),
        }
    }

    /// Resolve an utterance to a response key. Total: anything that matches
    /// no rule, including the empty string, yields `default`.
    pub fn classify(&self, utterance: &str) -> &str {
        let lowered = utterance.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|rule| rule.response_key.as_str())
            .unwrap_or(DEFAULT_RESPONSE_KEY)
    }

    /// Look up reply text. Unknown keys fall back to the `default` reply.
    pub fn response_for(&self, key: &str) -> &str {
        self.responses
            .get(key)
            .or_else(|| self.responses.get(DEFAULT_RESPONSE_KEY))
            .map(String::as_str)
            .unwrap_or("")
    }
}
