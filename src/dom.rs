use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList};

pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(crate) fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

fn node_list_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub(crate) fn toggle_class(element: &Element, class: &str) {
    let _ = element.class_list().toggle(class);
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub(crate) fn hide(element: &Element) {
    let _ = element.set_attribute("hidden", "");
}

pub(crate) fn unhide(element: &Element) {
    let _ = element.remove_attribute("hidden");
}

pub(crate) fn is_same(a: &JsValue, b: &JsValue) -> bool {
    js_sys::Object::is(a, b)
}

/// Current value of an `<input>` or `<textarea>`; empty for anything else.
pub(crate) fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub(crate) fn click(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.click();
    }
}

pub(crate) fn focus(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}
