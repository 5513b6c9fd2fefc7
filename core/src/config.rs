use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scroll::{NAV_OFFSET_PX, SCROLL_TOP_THRESHOLD_PX};

pub const DEFAULT_LAZY_POLYFILL_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config override must be a JSON object")]
    NotAnObject,
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Timings and thresholds for the page behaviors. Every field falls back to
/// its default when absent, so a runtime override may name only what it
/// changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub modal_hide_delay_ms: u32,
    pub submit_send_delay_ms: u32,
    pub status_clear_delay_ms: u32,
    pub scroll_top_threshold_px: f64,
    pub scroll_top_hide_delay_ms: u32,
    pub nav_offset_px: f64,
    pub fade_stagger_ms: u32,
    pub lazy_polyfill_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            modal_hide_delay_ms: 300,
            submit_send_delay_ms: 1500,
            status_clear_delay_ms: 5000,
            scroll_top_threshold_px: SCROLL_TOP_THRESHOLD_PX,
            scroll_top_hide_delay_ms: 300,
            nav_offset_px: NAV_OFFSET_PX,
            fade_stagger_ms: 100,
            lazy_polyfill_url: DEFAULT_LAZY_POLYFILL_URL.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        PageConfig::default().overlay_json(raw)
    }

    /// Applies the keys present in `raw` on top of `self`.
    pub fn overlay_json(&self, raw: &str) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(self)?;
        let Value::Object(overrides) = serde_json::from_str::<Value>(raw)? else {
            return Err(ConfigError::NotAnObject);
        };
        let Some(fields) = merged.as_object_mut() else {
            return Err(ConfigError::NotAnObject);
        };
        for (key, value) in overrides {
            fields.insert(key, value);
        }
        let config: PageConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_frame_ms == 0 {
            return Err(ConfigError::Zero {
                field: "counter_frame_ms",
            });
        }
        if self.counter_duration_ms == 0 {
            return Err(ConfigError::Zero {
                field: "counter_duration_ms",
            });
        }
        Ok(())
    }

    /// Blank overrides are ignored.
    pub fn with_polyfill_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
            self.lazy_polyfill_url = url.to_string();
        }
        self
    }
}
