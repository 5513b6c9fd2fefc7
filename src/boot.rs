use std::cell::RefCell;

use js_sys::{Reflect, JSON};
use portfolio_core::PageConfig;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::page::PageController;

const CONFIG_GLOBAL: &str = "__PORTFOLIO_CONFIG";

thread_local! {
    static PAGE: RefCell<Option<PageController>> = RefCell::new(None);
}

fn build_time_polyfill_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_LAZY_POLYFILL_URL")
        .or(option_env!("TRUNK_PUBLIC_PORTFOLIO_LAZY_POLYFILL_URL"))
}

/// Defaults, then build-time env, then `window.__PORTFOLIO_CONFIG` (a JSON
/// string or a plain object).
pub(crate) fn load_page_config(window: &Window) -> PageConfig {
    let base = PageConfig::default().with_polyfill_url(build_time_polyfill_url());
    let Some(raw) = runtime_config_json(window) else {
        return base;
    };
    match base.overlay_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("ignoring window config", err.to_string());
            base
        }
    }
}

fn runtime_config_json(window: &Window) -> Option<String> {
    let value = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    JSON::stringify(&value).ok().map(String::from)
}

/// Keeps the installed listeners alive for the rest of the page's life.
pub(crate) fn retain(page: PageController) {
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_global(value: &JsValue) {
        let window = web_sys::window().expect("window");
        Reflect::set(&window, &JsValue::from_str(CONFIG_GLOBAL), value).expect("set global");
    }

    fn clear_global() {
        set_global(&JsValue::UNDEFINED);
    }

    #[wasm_bindgen_test]
    fn missing_global_uses_defaults() {
        clear_global();
        let window = web_sys::window().expect("window");
        let config = load_page_config(&window);
        assert_eq!(config.modal_hide_delay_ms, 300);
    }

    #[wasm_bindgen_test]
    fn json_string_overrides_fields() {
        set_global(&JsValue::from_str(r#"{"fade_stagger_ms": 40}"#));
        let window = web_sys::window().expect("window");
        let config = load_page_config(&window);
        clear_global();
        assert_eq!(config.fade_stagger_ms, 40);
        assert_eq!(config.submit_send_delay_ms, 1500);
    }

    #[wasm_bindgen_test]
    fn plain_object_overrides_fields() {
        let object = js_sys::Object::new();
        Reflect::set(
            &object,
            &JsValue::from_str("status_clear_delay_ms"),
            &JsValue::from_f64(2500.0),
        )
        .expect("set field");
        set_global(&object);
        let window = web_sys::window().expect("window");
        let config = load_page_config(&window);
        clear_global();
        assert_eq!(config.status_clear_delay_ms, 2500);
    }

    #[wasm_bindgen_test]
    fn invalid_global_falls_back() {
        set_global(&JsValue::from_str(r#"{"counter_frame_ms": 0}"#));
        let window = web_sys::window().expect("window");
        let config = load_page_config(&window);
        clear_global();
        assert_eq!(config.counter_frame_ms, 16);
    }
}
