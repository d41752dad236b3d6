pub mod app;
pub mod layout;
pub mod pages;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document not available");
    let host = document
        .get_element_by_id("app")
        .expect("#app host element not found")
        .unchecked_into::<web_sys::HtmlElement>();

    leptos::mount::mount_to(host, app::App).forget();
}
