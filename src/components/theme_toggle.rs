use leptos::prelude::*;

use super::icons::{DropletIcon, MoonIcon, SunIcon};
use crate::app::ThemeContext;
use crate::state::Theme;

/// Navbar button that cycles the page background: dark → blue → light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let cycle = move |_| {
        let next = theme.current.get_untracked().next();
        log::debug!("switching background theme to {next}");
        theme.on_change.run(next);
    };

    let label = move || format!("Switch to {} background", theme.current.get().next());

    view! {
        <button
            type="button"
            class=move || format!("theme-toggle theme-toggle--{} p-2 rounded-md hover:bg-white/10 transition", theme.current.get())
            on:click=cycle
            aria-label=label
            title=label
        >
            {move || match theme.current.get() {
                Theme::Dark => view! { <MoonIcon /> }.into_any(),
                Theme::Blue => view! { <DropletIcon /> }.into_any(),
                Theme::Light => view! { <SunIcon /> }.into_any(),
            }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(current: Theme) -> String {
        Owner::new().with(|| {
            provide_context(ThemeContext {
                current: Signal::stored(current),
                on_change: Callback::new(|_: Theme| {}),
            });
            view! { <ThemeToggle /> }.to_html()
        })
    }

    #[test]
    fn labels_the_next_theme() {
        let html = render(Theme::Blue);
        assert!(html.contains("theme-toggle--blue"));
        assert!(html.contains("Switch to light background"));
    }

    #[test]
    fn light_wraps_to_dark() {
        let html = render(Theme::Light);
        assert!(html.contains("Switch to dark background"));
    }
}
