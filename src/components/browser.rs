//! Helpers for the `wasm-bindgen-test` browser tests that live next to each
//! component.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// A fresh `<div>` attached to the document body.
pub fn mount_point() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

pub fn find(parent: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .unwrap()
        .map(|el| el.dyn_into::<HtmlElement>().unwrap())
}

/// Yields to the browser for `ms` milliseconds.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}
