mod boot;
mod contact;
mod dom;
mod keyboard;
mod lazy_images;
mod menu;
mod modal;
mod observer;
mod page;
mod reveal;
mod scroll;
#[cfg(test)]
mod test_fixture;

use lazy_images::LazyLoading;
use page::PageController;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = boot::load_page_config(&window);
    let page = PageController::install(&window, &document, &config);
    match page.lazy_loading() {
        Some(LazyLoading::Native { images }) => {
            gloo::console::log!("lazy loading images", *images as u32);
        }
        Some(LazyLoading::Polyfill) => {
            gloo::console::log!("native lazy loading unsupported, loading polyfill");
        }
        None => {}
    }
    boot::retain(page);
    gloo::console::log!("Portfolio website loaded successfully!");
}
