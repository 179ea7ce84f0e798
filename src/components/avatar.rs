use leptos::{html, prelude::*};

use crate::catalog::{AVATAR_URL, OWNER_INITIALS, OWNER_NAME};

/// True for an image the browser has finished with but could not decode.
pub fn image_load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Runs `on_error` if `img` already failed, e.g. before hydration attached
/// the `error` listener. Returns whether it did.
pub fn report_if_already_failed(img: &web_sys::HtmlImageElement, on_error: Callback<()>) -> bool {
    let failed = image_load_failed(img.complete(), img.natural_width());
    if failed {
        log::debug!("avatar failed before hydration, showing initials");
        on_error.run(());
    }
    failed
}

/// Profile picture that falls back to initials once the image fails to load.
///
/// `failed` is owned by the page and latches, so the image is never requested
/// again after an error.
#[component]
pub fn Avatar(
    #[prop(into)] failed: Signal<bool>,
    #[prop(into)] on_error: Callback<()>,
    #[prop(default = AVATAR_URL)] src: &'static str,
) -> impl IntoView {
    let image_ref = NodeRef::<html::Img>::new();

    // the server-rendered <img> may have errored before `on:error` existed
    Effect::new(move |_| {
        if let Some(img) = image_ref.get() {
            report_if_already_failed(&img, on_error);
        }
    });

    view! {
        <div class="avatar w-20 h-20 rounded-full overflow-hidden ring-2 ring-white/10 shadow-inner relative bg-slate-800 flex items-center justify-center text-white font-bold">
            <Show
                when=move || !failed.get()
                fallback=|| {
                    view! {
                        <div class="avatar__initials flex items-center justify-center w-full h-full text-xl">
                            {OWNER_INITIALS}
                        </div>
                    }
                }
            >
                <img
                    node_ref=image_ref
                    src=src
                    alt=OWNER_NAME
                    class="avatar__image w-full h-full object-cover"
                    on:error=move |_| {
                        log::debug!("avatar failed to load, showing initials");
                        on_error.run(());
                    }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_counts_as_failed() {
        assert!(image_load_failed(true, 0));
    }

    #[test]
    fn loading_or_loaded_image_is_not_failed() {
        assert!(!image_load_failed(false, 0));
        assert!(!image_load_failed(true, 320));
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::super::*;
        use leptos::tachys::view::RenderHtml;

        fn render(failed: bool) -> String {
            Owner::new().with(|| {
                view! { <Avatar failed=failed on_error={|()| {}} /> }.to_html()
            })
        }

        #[test]
        fn shows_image_by_default() {
            let html = render(false);
            assert!(html.contains(AVATAR_URL));
            assert!(!html.contains("avatar__initials"));
        }

        #[test]
        fn shows_initials_after_failure() {
            let html = render(true);
            assert!(html.contains("avatar__initials"));
            assert!(html.contains(">AC<"));
            assert!(!html.contains(AVATAR_URL));
        }
    }

    #[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
    mod browser {
        use super::super::*;
        use crate::components::browser::{find, mount_point, sleep};
        use std::sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        };
        use wasm_bindgen::JsCast;
        use wasm_bindgen_test::wasm_bindgen_test;

        const MISSING: &str = "/no-such-avatar.png";

        #[wasm_bindgen_test]
        async fn image_that_failed_before_listeners_is_reported() {
            let document = web_sys::window().unwrap().document().unwrap();
            let img = document
                .create_element("img")
                .unwrap()
                .dyn_into::<web_sys::HtmlImageElement>()
                .unwrap();
            img.set_src(MISSING);
            document.body().unwrap().append_child(&img).unwrap();
            // the error event fires here with nobody listening
            sleep(500).await;

            let errors = Arc::new(AtomicUsize::new(0));
            let on_error = {
                let errors = Arc::clone(&errors);
                Callback::new(move |()| {
                    errors.fetch_add(1, Ordering::SeqCst);
                })
            };

            assert!(report_if_already_failed(&img, on_error));
            assert_eq!(errors.load(Ordering::SeqCst), 1);
            img.remove();
        }

        #[wasm_bindgen_test]
        async fn broken_avatar_falls_back_to_initials() {
            let parent = mount_point();
            let failed = RwSignal::new(false);
            let _handle = leptos::mount::mount_to(parent.clone(), move || {
                view! {
                    <Avatar
                        failed=failed
                        on_error={Callback::new(move |()| failed.set(true))}
                        src=MISSING
                    />
                }
            });

            sleep(500).await;

            assert!(failed.get_untracked());
            assert!(find(&parent, ".avatar__initials").is_some());
            assert!(find(&parent, "img").is_none());
        }
    }
}
