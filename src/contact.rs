use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use portfolio_core::contact::{STATUS_CLASS, STATUS_SENDING, STATUS_SENT, STATUS_SUCCESS_CLASS};
use portfolio_core::{validate_contact, ContactDraft, ContactField};
use web_sys::{Element, Event, HtmlFormElement};

use crate::dom;

const ERROR_CLASS: &str = "error";
const ERROR_REGION: &str = ".error-message";

#[derive(Clone, Copy, Debug)]
pub(crate) struct SubmitTimings {
    pub(crate) send_delay_ms: u32,
    pub(crate) clear_delay_ms: u32,
}

#[derive(Clone)]
pub(crate) struct ContactForm {
    form: HtmlFormElement,
    status: Element,
    name: Element,
    email: Element,
    message: Element,
    timings: SubmitTimings,
}

impl ContactForm {
    pub(crate) fn new(
        form: HtmlFormElement,
        status: Element,
        [name, email, message]: [Element; 3],
        timings: SubmitTimings,
    ) -> Self {
        Self {
            form,
            status,
            name,
            email,
            message,
            timings,
        }
    }

    fn field(&self, field: ContactField) -> &Element {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: dom::field_value(&self.name),
            email: dom::field_value(&self.email),
            message: dom::field_value(&self.message),
        }
    }

    /// Full pass over all three fields: clears every group, then marks the
    /// failing ones.
    pub(crate) fn validate(&self) -> bool {
        for field in ContactField::ALL {
            clear_error(self.field(field));
        }
        let report = validate_contact(&self.draft());
        for failure in report.failures() {
            show_error(self.field(failure.field()), &failure.to_string());
        }
        report.is_valid()
    }

    /// Simulated send. Returns `false` without touching the status when the
    /// form does not validate.
    pub(crate) fn submit(&self) -> bool {
        if !self.validate() {
            return false;
        }
        self.status.set_text_content(Some(STATUS_SENDING));
        self.status.set_class_name(STATUS_CLASS);

        let status = self.status.clone();
        let form = self.form.clone();
        let clear_delay_ms = self.timings.clear_delay_ms;
        Timeout::new(self.timings.send_delay_ms, move || {
            status.set_text_content(Some(STATUS_SENT));
            dom::add_class(&status, STATUS_SUCCESS_CLASS);
            form.reset();
            Timeout::new(clear_delay_ms, move || {
                status.set_text_content(Some(""));
                status.set_class_name(STATUS_CLASS);
            })
            .forget();
        })
        .forget();
        true
    }

    pub(crate) fn install(&self) -> Vec<EventListener> {
        let mut listeners = Vec::new();
        let contact = self.clone();
        listeners.push(EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                contact.submit();
            },
        ));
        for field in ContactField::ALL {
            let element = self.field(field).clone();
            let contact = self.clone();
            listeners.push(EventListener::new(&element, "blur", move |_event: &Event| {
                contact.validate();
            }));
            let target = element.clone();
            listeners.push(EventListener::new(&element, "input", move |_event: &Event| {
                let in_error = target
                    .parent_element()
                    .map(|group| dom::has_class(&group, ERROR_CLASS))
                    .unwrap_or(false);
                if in_error {
                    clear_error(&target);
                }
            }));
        }
        listeners
    }
}

fn show_error(field: &Element, message: &str) {
    let Some(group) = field.parent_element() else {
        return;
    };
    dom::add_class(&group, ERROR_CLASS);
    if let Some(region) = dom::query(&group, ERROR_REGION) {
        region.set_text_content(Some(message));
    }
}

fn clear_error(field: &Element) {
    let Some(group) = field.parent_element() else {
        return;
    };
    dom::remove_class(&group, ERROR_CLASS);
    if let Some(region) = dom::query(&group, ERROR_REGION) {
        region.set_text_content(Some(""));
    }
}
