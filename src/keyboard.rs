use gloo::events::{EventListener, EventListenerOptions};
use portfolio_core::keys::is_activation_key;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use crate::dom;

pub(crate) const ACTIVATABLE_SELECTOR: &str = "a, button";

/// Enter and Space click the focused link or button instead of their default
/// behavior (Space would otherwise scroll the page).
pub(crate) fn install_activation(elements: &[Element]) -> Vec<EventListener> {
    elements
        .iter()
        .map(|element| {
            let target = element.clone();
            EventListener::new_with_options(
                element,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if !is_activation_key(&key_event.key()) {
                        return;
                    }
                    event.prevent_default();
                    dom::click(&target);
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixture::Fixture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn key_down(key: &str) -> KeyboardEvent {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_cancelable(true);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
    }

    #[wasm_bindgen_test]
    fn enter_and_space_click_once() {
        let fixture = Fixture::page();
        let button = fixture.find("#ctaButton");
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let _click = EventListener::new(&button, "click", move |_event: &Event| {
            counter.set(counter.get() + 1);
        });
        let _listeners = install_activation(std::slice::from_ref(&button));

        let enter = key_down("Enter");
        let _ = button.dispatch_event(&enter);
        assert!(enter.default_prevented());
        assert_eq!(clicks.get(), 1);

        let space = key_down(" ");
        let _ = button.dispatch_event(&space);
        assert!(space.default_prevented());
        assert_eq!(clicks.get(), 2);
    }

    #[wasm_bindgen_test]
    fn other_keys_pass_through() {
        let fixture = Fixture::page();
        let button = fixture.find("#ctaButton");
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let _click = EventListener::new(&button, "click", move |_event: &Event| {
            counter.set(counter.get() + 1);
        });
        let _listeners = install_activation(std::slice::from_ref(&button));

        let tab = key_down("Tab");
        let _ = button.dispatch_event(&tab);
        assert!(!tab.default_prevented());
        assert_eq!(clicks.get(), 0);
    }
}
