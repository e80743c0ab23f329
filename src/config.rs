use log::Level;
use serde::Deserialize;
use web_sys::Document;

use crate::error::PageResult;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every page behavior. Any field left out of the JSON keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Height of the fixed header, subtracted from every scroll target.
    pub header_offset: f64,
    pub header_shadow_threshold: f64,
    pub warn_hide_threshold: f64,
    pub mobile_breakpoint: f64,
    pub resize_debounce_ms: u32,
    pub cart_feedback_ms: u32,
    pub body_fade_delay_ms: u32,
    pub slider_ids: Vec<String>,
    pub age_redirect_url: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            header_shadow_threshold: 100.0,
            warn_hide_threshold: 10.0,
            mobile_breakpoint: 768.0,
            resize_debounce_ms: 250,
            cart_feedback_ms: 2000,
            body_fade_delay_ms: 100,
            slider_ids: vec![
                "merrymiSlider".to_string(),
                "jnrSlider".to_string(),
                "fumotSlider".to_string(),
            ],
            age_redirect_url: "https://www.google.pl".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// element is absent or its JSON does not parse.
    pub fn from_document(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring page config: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_override() {
        let config =
            PageConfig::from_json(r#"{"headerOffset": 64, "sliderIds": ["promoSlider"]}"#).unwrap();
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.slider_ids, vec!["promoSlider".to_string()]);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.age_redirect_url, "https://www.google.pl");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{headerOffset: }").is_err());
        assert!(PageConfig::from_json(r#"{"resizeDebounceMs": -5}"#).is_err());
    }
}
