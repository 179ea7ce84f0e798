use leptos::prelude::*;

/// Full-screen viewer for a single image.
///
/// Renders nothing while `src` is `None`. Clicking the backdrop or the Close
/// button runs `on_close`; clicks inside the panel stop at the panel.
#[component]
pub fn ImageModal(
    #[prop(into)] src: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            src.get()
                .map(|src| {
                    view! {
                        <div
                            class="image-modal__overlay fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4"
                            role="dialog"
                            aria-modal="true"
                            aria-label="Certificate preview"
                            on:click=move |_| on_close.run(())
                        >
                            <div
                                class="image-modal__panel max-w-3xl w-full bg-white/5 p-3 rounded"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <img src=src alt="certificate" class="w-full h-auto rounded" />
                                <div class="mt-2 text-right">
                                    <button
                                        type="button"
                                        class="px-3 py-1 rounded bg-indigo-600 text-white"
                                        on:click=move |_| on_close.run(())
                                    >
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
