use gloo::events::EventListener;
use portfolio_core::{ContactField, PageConfig};
use web_sys::{Document, Element, HtmlFormElement, Window};

use crate::contact::{ContactForm, SubmitTimings};
use crate::dom;
use crate::keyboard;
use crate::lazy_images::{self, LazyLoading};
use crate::menu::MobileMenu;
use crate::modal::ProjectModal;
use crate::observer::VisibilityObserver;
use crate::reveal::{self, CounterTimings};
use crate::scroll::{self, NavHighlighter, ScrollTopControl};

/// Every listener and observer bound to the page. Dropping it unbinds them.
#[derive(Default)]
pub(crate) struct PageController {
    listeners: Vec<EventListener>,
    observers: Vec<VisibilityObserver>,
    lazy_loading: Option<LazyLoading>,
}

impl PageController {
    pub(crate) fn install(window: &Window, document: &Document, config: &PageConfig) -> Self {
        let mut page = Self::default();
        page.install_menu(document);
        page.install_smooth_scroll(document);
        page.install_reveals(document, config);
        page.install_modal(document, config);
        page.install_contact(document, config);
        page.install_scroll_tracking(window, document, config);
        page.listeners.extend(keyboard::install_activation(&dom::query_all(
            document,
            keyboard::ACTIVATABLE_SELECTOR,
        )));
        match lazy_images::install(window, document, &config.lazy_polyfill_url) {
            Ok(mode) => page.lazy_loading = Some(mode),
            Err(_) => gloo::console::warn!("lazy image loading unavailable"),
        }
        page
    }

    pub(crate) fn lazy_loading(&self) -> Option<&LazyLoading> {
        self.lazy_loading.as_ref()
    }

    fn install_menu(&mut self, document: &Document) {
        let toggle = dom::element_by_id::<Element>(document, "menuToggle");
        let nav = dom::element_by_id::<Element>(document, "navLinks");
        let (Some(toggle), Some(nav)) = (toggle, nav) else {
            gloo::console::warn!("menu skipped: #menuToggle or #navLinks missing");
            return;
        };
        self.listeners.extend(MobileMenu::new(toggle, nav).install());
    }

    fn install_smooth_scroll(&mut self, document: &Document) {
        let trigger = dom::element_by_id::<Element>(document, "ctaButton");
        let target = dom::element_by_id::<Element>(document, "projects");
        let (Some(trigger), Some(target)) = (trigger, target) else {
            gloo::console::warn!("smooth scroll skipped: #ctaButton or #projects missing");
            return;
        };
        self.listeners.push(scroll::install_smooth_scroll(&trigger, target));
    }

    fn install_reveals(&mut self, document: &Document, config: &PageConfig) {
        let timings = CounterTimings {
            duration_ms: config.counter_duration_ms,
            frame_ms: config.counter_frame_ms,
        };
        let observers = [
            reveal::observe_counters(&dom::query_all(document, ".stat-card"), timings),
            reveal::observe_skill_bars(&dom::query_all(document, ".skill-progress")),
            reveal::observe_fade_ins(
                &dom::query_all(document, ".project-card, .skill-category"),
                config.fade_stagger_ms,
            ),
        ];
        for observer in observers {
            match observer {
                Ok(observer) => self.observers.push(observer),
                Err(_) => gloo::console::warn!("intersection observer unavailable"),
            }
        }
    }

    fn install_modal(&mut self, document: &Document, config: &PageConfig) {
        let modal = dom::element_by_id::<Element>(document, "projectModal");
        let title = dom::element_by_id::<Element>(document, "modalTitle");
        let body = dom::element_by_id::<Element>(document, "modalBody");
        let close = document.query_selector(".modal-close").ok().flatten();
        let (Some(modal), Some(title), Some(body), Some(close)) = (modal, title, body, close)
        else {
            gloo::console::warn!("project modal skipped: modal elements missing");
            return;
        };
        let modal = ProjectModal::new(modal, title, body, close, config.modal_hide_delay_ms);
        let buttons = dom::query_all(document, ".project-button");
        self.listeners.extend(modal.install(document, &buttons));
    }

    fn install_contact(&mut self, document: &Document, config: &PageConfig) {
        let form = dom::element_by_id::<HtmlFormElement>(document, "contactForm");
        let status = dom::element_by_id::<Element>(document, "formStatus");
        let [name, email, message] = ContactField::ALL
            .map(|field| dom::element_by_id::<Element>(document, field.element_id()));
        let (Some(form), Some(status), Some(name), Some(email), Some(message)) =
            (form, status, name, email, message)
        else {
            gloo::console::warn!("contact form skipped: form elements missing");
            return;
        };
        let timings = SubmitTimings {
            send_delay_ms: config.submit_send_delay_ms,
            clear_delay_ms: config.status_clear_delay_ms,
        };
        let contact = ContactForm::new(form, status, [name, email, message], timings);
        self.listeners.extend(contact.install());
    }

    fn install_scroll_tracking(&mut self, window: &Window, document: &Document, config: &PageConfig) {
        match dom::element_by_id::<Element>(document, "scrollToTop") {
            Some(button) => {
                let control = ScrollTopControl::new(
                    button,
                    config.scroll_top_threshold_px,
                    config.scroll_top_hide_delay_ms,
                );
                self.listeners.extend(control.install(window));
            }
            None => gloo::console::warn!("scroll-to-top skipped: #scrollToTop missing"),
        }
        let sections = dom::query_all(document, "section[id]");
        let highlighter = NavHighlighter::new(document.clone(), sections, config.nav_offset_px);
        self.listeners.push(highlighter.install(window));
    }
}

#[cfg(test)]
impl PageController {
    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
