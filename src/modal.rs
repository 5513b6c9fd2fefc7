use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_core::catalog::{detail_blocks, project_by_id, DetailBlock, ProjectDetail};
use portfolio_core::keys::is_dismiss_key;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::dom;

const ACTIVE_CLASS: &str = "active";
const PROJECT_ATTR: &str = "data-project";

#[derive(Clone)]
pub(crate) struct ProjectModal {
    modal: Element,
    title: Element,
    body: Element,
    close: Element,
    hide_delay_ms: u32,
}

impl ProjectModal {
    pub(crate) fn new(
        modal: Element,
        title: Element,
        body: Element,
        close: Element,
        hide_delay_ms: u32,
    ) -> Self {
        Self {
            modal,
            title,
            body,
            close,
            hide_delay_ms,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        dom::has_class(&self.modal, ACTIVE_CLASS)
    }

    /// Shows the project's details. Returns `false`, leaving the DOM as it
    /// was, when the id is missing or not in the catalog.
    pub(crate) fn open(&self, project_id: Option<&str>) -> bool {
        let Some(project) = project_id.and_then(project_by_id) else {
            return false;
        };
        let Some(document) = self.body.owner_document() else {
            return false;
        };
        let Ok(content) = render_detail(&document, project) else {
            return false;
        };
        self.title.set_text_content(Some(project.title));
        self.body.set_text_content(None);
        for node in content {
            let _ = self.body.append_child(&node);
        }
        dom::add_class(&self.modal, ACTIVE_CLASS);
        dom::unhide(&self.modal);
        dom::focus(&self.close);
        true
    }

    /// Hides visually now; drops out of the accessibility tree once the
    /// closing transition has had time to run.
    pub(crate) fn close(&self) {
        dom::remove_class(&self.modal, ACTIVE_CLASS);
        let modal = self.modal.clone();
        Timeout::new(self.hide_delay_ms, move || dom::hide(&modal)).forget();
    }

    pub(crate) fn install(&self, document: &Document, buttons: &[Element]) -> Vec<EventListener> {
        let mut listeners = Vec::new();
        for button in buttons {
            let modal = self.clone();
            let source = button.clone();
            listeners.push(EventListener::new(button, "click", move |_event: &Event| {
                modal.open(source.get_attribute(PROJECT_ATTR).as_deref());
            }));
        }

        let modal = self.clone();
        listeners.push(EventListener::new(&self.close, "click", move |_event: &Event| {
            modal.close();
        }));

        let modal = self.clone();
        listeners.push(EventListener::new(&self.modal, "click", move |event: &Event| {
            let Some(target) = event.target() else {
                return;
            };
            if dom::is_same(&target, &modal.modal) {
                modal.close();
            }
        }));

        let modal = self.clone();
        listeners.push(EventListener::new(document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_dismiss_key(&event.key()) && modal.is_open() {
                modal.close();
            }
        }));
        listeners
    }
}

fn render_detail(document: &Document, project: &ProjectDetail) -> Result<Vec<Element>, JsValue> {
    let mut nodes = Vec::new();
    for block in detail_blocks(project) {
        let node = match block {
            DetailBlock::Heading(text) => {
                let paragraph = document.create_element("p")?;
                let strong = document.create_element("strong")?;
                strong.set_text_content(Some(text));
                paragraph.append_child(&strong)?;
                paragraph
            }
            DetailBlock::Paragraph(text) => {
                let paragraph = document.create_element("p")?;
                paragraph.set_text_content(Some(text));
                paragraph
            }
            DetailBlock::List(items) => {
                let list = document.create_element("ul")?;
                for item in items {
                    let entry = document.create_element("li")?;
                    entry.set_text_content(Some(item));
                    list.append_child(&entry)?;
                }
                list
            }
        };
        nodes.push(node);
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixture::Fixture;
    use gloo::timers::future::TimeoutFuture;
    use portfolio_core::catalog::PROJECT_CATALOG;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn modal(fixture: &Fixture, hide_delay_ms: u32) -> ProjectModal {
        ProjectModal::new(
            fixture.find("#projectModal"),
            fixture.find("#modalTitle"),
            fixture.find("#modalBody"),
            fixture.find(".modal-close"),
            hide_delay_ms,
        )
    }

    fn list_texts(list: &Element) -> Vec<String> {
        dom::query_all_in(list, "li")
            .iter()
            .map(|item| item.text_content().unwrap_or_default())
            .collect()
    }

    #[wasm_bindgen_test]
    fn open_renders_every_project() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 300);
        for project in PROJECT_CATALOG {
            assert!(modal.open(Some(project.id)));
            assert_eq!(modal.title.text_content().as_deref(), Some(project.title));
            let lists = dom::query_all_in(&modal.body, "ul");
            assert_eq!(lists.len(), 2);
            assert_eq!(list_texts(&lists[0]), project.technologies.to_vec());
            assert_eq!(list_texts(&lists[1]), project.features.to_vec());
            assert!(modal.is_open());
            assert!(!modal.modal.has_attribute("hidden"));
        }
    }

    #[wasm_bindgen_test]
    fn unknown_project_leaves_dom_untouched() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 300);
        let before = fixture.root().inner_html();
        assert!(!modal.open(Some("spaceship")));
        assert!(!modal.open(None));
        assert_eq!(fixture.root().inner_html(), before);
        assert!(modal.modal.has_attribute("hidden"));
    }

    #[wasm_bindgen_test]
    fn button_click_opens_matching_project() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 300);
        let buttons = dom::query_all_in(fixture.root(), ".project-button");
        let _listeners = modal.install(&fixture.document(), &buttons);
        dom::click(&fixture.find(".project-button[data-project=\"weather\"]"));
        assert!(modal.is_open());
        assert_eq!(modal.title.text_content().as_deref(), Some("Weather App"));
    }

    #[wasm_bindgen_test(async)]
    async fn close_hides_after_delay() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 50);
        assert!(modal.open(Some("ecommerce")));
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.modal.has_attribute("hidden"));
        TimeoutFuture::new(120).await;
        assert!(modal.modal.has_attribute("hidden"));
    }

    fn key_down(key: &str) -> KeyboardEvent {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
    }

    #[wasm_bindgen_test(async)]
    async fn escape_while_closed_does_nothing() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 20);
        let document = fixture.document();
        let _listeners = modal.install(&document, &[]);

        let _ = document.dispatch_event(&key_down("Escape"));
        assert!(!modal.is_open());
        assert!(modal.modal.has_attribute("hidden"));

        assert!(modal.open(Some("portfolio")));
        TimeoutFuture::new(80).await;
        assert!(modal.is_open());
        assert!(!modal.modal.has_attribute("hidden"));
    }

    #[wasm_bindgen_test(async)]
    async fn only_escape_closes_open_modal() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 20);
        let document = fixture.document();
        let _listeners = modal.install(&document, &[]);
        assert!(modal.open(Some("portfolio")));

        let _ = document.dispatch_event(&key_down("Enter"));
        let _ = modal.title.dispatch_event(&key_down("a"));
        TimeoutFuture::new(80).await;
        assert!(modal.is_open());
        assert!(!modal.modal.has_attribute("hidden"));

        let _ = document.dispatch_event(&key_down("Escape"));
        assert!(!modal.is_open());
        assert!(!modal.modal.has_attribute("hidden"));
        TimeoutFuture::new(80).await;
        assert!(modal.modal.has_attribute("hidden"));
    }

    #[wasm_bindgen_test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let fixture = Fixture::page();
        let modal = modal(&fixture, 300);
        let _listeners = modal.install(&fixture.document(), &[]);
        assert!(modal.open(Some("weather")));

        dom::click(&modal.title);
        assert!(modal.is_open());

        dom::click(&modal.modal);
        assert!(!modal.is_open());
    }
}
