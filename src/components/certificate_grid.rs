use leptos::prelude::*;

/// Thumbnail grid; clicking a thumbnail asks the page to open it in the
/// image viewer.
#[component]
pub fn CertificateGrid(
    certificates: &'static [&'static str],
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="certificate-grid grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
            {certificates
                .iter()
                .enumerate()
                .map(|(i, &src)| {
                    view! {
                        <button
                            type="button"
                            class="certificate rounded-xl overflow-hidden border border-white/10 shadow hover:scale-[1.02] transition"
                            aria-label=format!("Enlarge certificate {}", i + 1)
                            on:click=move |_| on_open.run(src.to_string())
                        >
                            <img
                                src=src
                                alt=format!("cert-{i}")
                                loading="lazy"
                                class="w-full h-52 object-cover cursor-pointer"
                            />
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::catalog::CERTIFICATES;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_every_certificate_in_order() {
        let html = Owner::new().with(|| {
            view! { <CertificateGrid certificates={&CERTIFICATES} on_open={|_: String| {}} /> }.to_html()
        });
        assert_eq!(html.matches("class=\"certificate ").count(), CERTIFICATES.len());
        let first = html.find("/images/cert1.png");
        let last = html.find("/images/cert4.png");
        assert!(first.is_some() && first < last);
    }

    #[test]
    fn empty_list_renders_empty_grid() {
        let html = Owner::new().with(|| {
            view! { <CertificateGrid certificates={&[]} on_open={|_: String| {}} /> }.to_html()
        });
        assert!(html.contains("certificate-grid"));
        assert!(!html.contains("<img"));
    }
}
