use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_core::{nav_link_selector, scroll_top_visible, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};

use crate::dom;

const VISIBLE_CLASS: &str = "visible";
const ACTIVE_CLASS: &str = "active";

pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub(crate) fn install_smooth_scroll(trigger: &Element, target: Element) -> EventListener {
    EventListener::new(trigger, "click", move |_event: &Event| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })
}

#[derive(Clone)]
pub(crate) struct ScrollTopControl {
    button: Element,
    threshold: f64,
    hide_delay_ms: u32,
}

impl ScrollTopControl {
    pub(crate) fn new(button: Element, threshold: f64, hide_delay_ms: u32) -> Self {
        Self {
            button,
            threshold,
            hide_delay_ms,
        }
    }

    pub(crate) fn sync(&self, scroll_y: f64) {
        if scroll_top_visible(scroll_y, self.threshold) {
            dom::add_class(&self.button, VISIBLE_CLASS);
            dom::unhide(&self.button);
            return;
        }
        dom::remove_class(&self.button, VISIBLE_CLASS);
        let button = self.button.clone();
        Timeout::new(self.hide_delay_ms, move || {
            // Scrolling back past the threshold during the fade keeps it shown.
            if !dom::has_class(&button, VISIBLE_CLASS) {
                dom::hide(&button);
            }
        })
        .forget();
    }

    pub(crate) fn install(&self, window: &Window) -> Vec<EventListener> {
        let control = self.clone();
        let source = window.clone();
        let on_scroll = EventListener::new(window, "scroll", move |_event: &Event| {
            control.sync(scroll_y(&source));
        });
        let target = window.clone();
        let on_click = EventListener::new(&self.button, "click", move |_event: &Event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_to_with_scroll_to_options(&options);
        });
        vec![on_scroll, on_click]
    }
}

/// Marks the navigation link of whichever section the viewport is in.
#[derive(Clone)]
pub(crate) struct NavHighlighter {
    document: Document,
    sections: Vec<HtmlElement>,
    offset: f64,
}

impl NavHighlighter {
    pub(crate) fn new(document: Document, sections: Vec<Element>, offset: f64) -> Self {
        let sections = sections
            .into_iter()
            .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            document,
            sections,
            offset,
        }
    }

    pub(crate) fn highlight(&self, scroll_y: f64) {
        for section in &self.sections {
            let id = section.id();
            if id.is_empty() {
                continue;
            }
            let Ok(Some(link)) = self.document.query_selector(&nav_link_selector(&id)) else {
                continue;
            };
            let bounds = SectionBounds {
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            };
            if bounds.contains(scroll_y, self.offset) {
                dom::add_class(&link, ACTIVE_CLASS);
            } else {
                dom::remove_class(&link, ACTIVE_CLASS);
            }
        }
    }

    pub(crate) fn install(&self, window: &Window) -> EventListener {
        let highlighter = self.clone();
        let source = window.clone();
        EventListener::new(window, "scroll", move |_event: &Event| {
            highlighter.highlight(scroll_y(&source));
        })
    }
}
