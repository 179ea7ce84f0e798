use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::catalog::{Section, CERTIFICATES, OWNER_NAME};
use crate::components::{
    About, CertificateGrid, Contact, FilterBar, Header, Hero, ImageModal, ProjectGrid,
    ProjectGridEmpty,
};
use crate::state::{PortfolioState, Theme};

/// Current background theme plus the way to change it, for the navbar toggle.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
    pub on_change: Callback<Theme>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Title text=format!("{OWNER_NAME} · Portfolio")/>
        <Meta name="description" content="Backend developer portfolio: Python, Django and the MERN stack."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Owns every piece of interaction state; children get
/// read-only signals and callbacks that go through [`PortfolioState`].
#[component]
fn HomePage() -> impl IntoView {
    let state = RwSignal::new(PortfolioState::default());

    let theme = Memo::new(move |_| state.with(PortfolioState::theme));
    let filter = Memo::new(move |_| state.with(PortfolioState::filter));
    let visible = Memo::new(move |_| state.with(PortfolioState::visible_projects));
    let modal_image = Memo::new(move |_| state.with(PortfolioState::modal_image));
    let avatar_failed = Memo::new(move |_| state.with(PortfolioState::avatar_failed));

    provide_context(ThemeContext {
        current: theme.into(),
        on_change: Callback::new(move |next| state.update(|s| s.select_theme(next))),
    });

    let select_filter = Callback::new(move |next| state.update(|s| s.select_filter(next)));
    let open_modal = Callback::new(move |src: String| state.update(|s| s.open_modal(src)));
    let close_modal = Callback::new(move |()| state.update(PortfolioState::close_modal));
    let avatar_error = Callback::new(move |()| state.update(PortfolioState::mark_avatar_failed));

    let year = chrono::Utc::now().year();

    view! {
        <div class=move || {
            let theme = theme.get();
            format!(
                "portfolio theme-{theme} min-h-screen bg-gradient-to-br {} {}",
                theme.gradient_class(),
                theme.text_class(),
            )
        }>
            <Header />

            <main class="max-w-6xl mx-auto px-6 py-12">
                <Hero avatar_failed=avatar_failed on_avatar_error=avatar_error />

                <section id=Section::Projects.id() class="projects mt-14">
                    <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                        <h2 class="text-2xl font-bold">"Selected projects"</h2>
                        <FilterBar
                            active=filter
                            project_count=Signal::derive(move || visible.with(Vec::len))
                            on_select=select_filter
                        />
                    </div>
                    {move || {
                        let projects = visible.get();
                        if projects.is_empty() {
                            view! { <ProjectGridEmpty /> }.into_any()
                        } else {
                            view! { <ProjectGrid projects=projects /> }.into_any()
                        }
                    }}
                </section>

                <section id=Section::Certificates.id() class="certificates mt-14">
                    <h2 class="text-2xl font-bold mb-6">"Certificates"</h2>
                    <CertificateGrid certificates=&CERTIFICATES on_open=open_modal />
                </section>

                <About />

                <Contact />

                <footer class="mt-12 text-center text-slate-400 text-sm">
                    {format!("© {year} {OWNER_NAME} · Built with Rust & Leptos")}
                </footer>
            </main>

            <ImageModal src=modal_image on_close=close_modal />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_home() -> String {
        Owner::new().with(|| view! { <HomePage /> }.to_html())
    }

    #[test]
    fn every_section_id_appears_exactly_once() {
        let html = render_home();
        for section in Section::ALL {
            let needle = format!("id=\"{}\"", section.id());
            assert_eq!(html.matches(&needle).count(), 1, "section {}", section.id());
        }
    }

    #[test]
    fn every_nav_link_has_a_target() {
        let html = render_home();
        for section in Section::ALL {
            assert!(html.contains(&format!("href=\"{}\"", section.href())));
            assert!(html.contains(&format!("id=\"{}\"", section.id())));
        }
    }

    #[test]
    fn initial_render_uses_defaults() {
        let html = render_home();
        assert!(html.contains("theme-blue"));
        assert!(html.contains(Theme::Blue.gradient_class()));
        assert_eq!(html.matches("project-card ").count(), 6);
        assert!(!html.contains("image-modal__overlay"));
        assert!(html.contains("avatar__image"));
        assert!(html.contains("6 projects"));
    }

    #[test]
    fn footer_carries_current_year() {
        let html = render_home();
        let year = chrono::Utc::now().year();
        assert!(html.contains(&year.to_string()));
    }
}
