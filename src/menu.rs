use gloo::events::EventListener;
use portfolio_core::keys::{aria_bool, toggled_expanded};
use web_sys::{Element, Event};

use crate::dom;

const ACTIVE_CLASS: &str = "active";
const ARIA_EXPANDED: &str = "aria-expanded";

#[derive(Clone)]
pub(crate) struct MobileMenu {
    toggle: Element,
    nav: Element,
}

impl MobileMenu {
    pub(crate) fn new(toggle: Element, nav: Element) -> Self {
        Self { toggle, nav }
    }

    pub(crate) fn toggle(&self) {
        dom::toggle_class(&self.nav, ACTIVE_CLASS);
        dom::toggle_class(&self.toggle, ACTIVE_CLASS);
        let expanded = toggled_expanded(self.toggle.get_attribute(ARIA_EXPANDED).as_deref());
        let _ = self.toggle.set_attribute(ARIA_EXPANDED, aria_bool(expanded));
    }

    pub(crate) fn collapse(&self) {
        dom::remove_class(&self.nav, ACTIVE_CLASS);
        dom::remove_class(&self.toggle, ACTIVE_CLASS);
        let _ = self.toggle.set_attribute(ARIA_EXPANDED, aria_bool(false));
    }

    pub(crate) fn install(&self) -> Vec<EventListener> {
        let mut listeners = Vec::new();
        let menu = self.clone();
        listeners.push(EventListener::new(&self.toggle, "click", move |_event: &Event| {
            menu.toggle();
        }));
        for link in dom::query_all_in(&self.nav, "a") {
            let menu = self.clone();
            listeners.push(EventListener::new(&link, "click", move |_event: &Event| {
                menu.collapse();
            }));
        }
        listeners
    }
}
