//! Config loading. The page may embed an override as
//! `<script id="assistant-config" type="application/json">`; anything
//! missing or invalid falls back to the built-in portfolio content.

use assistant_types::config::AssistantConfig;

const CONFIG_ELEMENT_ID: &str = "assistant-config";

pub fn load_config(document: &web_sys::Document) -> AssistantConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("Using built-in assistant config");
        return AssistantConfig::default();
    };

    match AssistantConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Assistant config loaded from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}. Using built-in config.", CONFIG_ELEMENT_ID, e);
            AssistantConfig::default()
        }
    }
}
