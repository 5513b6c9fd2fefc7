use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement, Window};

use crate::dom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LazyLoading {
    Native { images: usize },
    Polyfill,
}

/// `"loading" in HTMLImageElement.prototype`.
pub(crate) fn native_lazy_loading(window: &Window) -> bool {
    let Ok(constructor) = Reflect::get(window, &JsValue::from_str("HTMLImageElement")) else {
        return false;
    };
    let Ok(prototype) = Reflect::get(&constructor, &JsValue::from_str("prototype")) else {
        return false;
    };
    if !prototype.is_object() {
        return false;
    }
    Reflect::has(&prototype, &JsValue::from_str("loading")).unwrap_or(false)
}

pub(crate) fn defer_images(document: &Document) -> usize {
    let images = dom::query_all(document, "img");
    for image in &images {
        let _ = image.set_attribute("loading", "lazy");
    }
    images.len()
}

pub(crate) fn load_polyfill(document: &Document, url: &str) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let script = document
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()?;
    script.set_src(url);
    body.append_child(&script)?;
    Ok(())
}

pub(crate) fn install(
    window: &Window,
    document: &Document,
    polyfill_url: &str,
) -> Result<LazyLoading, JsValue> {
    if native_lazy_loading(window) {
        return Ok(LazyLoading::Native {
            images: defer_images(document),
        });
    }
    load_polyfill(document, polyfill_url)?;
    Ok(LazyLoading::Polyfill)
}
