use leptos::prelude::*;

use super::icons::{ExternalLinkIcon, GithubIcon};
use crate::catalog::{Link, Project};

const LINK_CLASS: &str = "text-xs inline-flex items-center gap-2 px-3 py-2 rounded-md border border-white/8 hover:bg-white/6 transition";

/// One outbound card link. Placeholders still render, as inert `#` links.
#[component]
fn CardLink(link: Link, label: &'static str, children: Children) -> impl IntoView {
    if link.is_placeholder() {
        view! {
            <a
                href=link.href()
                class=format!("{LINK_CLASS} card-link--placeholder opacity-60 cursor-not-allowed")
                aria-disabled="true"
                title=format!("{label} link not available yet")
                on:click=|ev| ev.prevent_default()
            >
                {label}
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a
                href=link.href()
                target="_blank"
                rel="noreferrer"
                class=LINK_CLASS
                title=link.host()
            >
                {label}
                {children()}
            </a>
        }
        .into_any()
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card bg-gradient-to-tr from-white/4 to-white/6 border border-white/6 rounded-2xl overflow-hidden shadow-md transition-transform hover:-translate-y-2 hover:scale-[1.02]">
            <div class="h-44 bg-slate-800 relative">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="project-img w-full h-full brightness-75 object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-transparent to-black/40" />
            </div>
            <div class="p-4">
                <div class="flex items-start justify-between gap-3">
                    <div>
                        <h3 class="text-lg font-semibold">{project.title}</h3>
                        <p class="project-stack text-xs text-slate-300 mt-1">{project.stack}</p>
                    </div>
                    <div class="project-badge text-xs px-2 py-1 rounded-md bg-white/6">
                        {project.kind.label()}
                    </div>
                </div>
                <p class="project-description mt-3 text-sm text-slate-300">{project.description}</p>
                <div class="mt-4 flex items-center gap-2">
                    <CardLink link=project.live label="Live">
                        <ExternalLinkIcon />
                    </CardLink>
                    <CardLink link=project.repo label="Code">
                        <GithubIcon />
                    </CardLink>
                </div>
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;
    use leptos::tachys::view::RenderHtml;

    fn render(project: &'static Project) -> String {
        Owner::new().with(|| view! { <ProjectCard project=project /> }.to_html())
    }

    #[test]
    fn renders_project_fields() {
        let html = render(&PROJECTS[2]);
        assert!(html.contains("Code Editor"));
        assert!(html.contains("Django • Ace Editor"));
        assert!(html.contains("/images/codeeditor.png.png"));
        assert!(html.contains("https://code-editor-py.onrender.com"));
        assert!(html.contains("https://github.com/AkhilChauhan-UK/code_Editor.py"));
    }

    #[test]
    fn placeholder_links_are_rendered_not_omitted() {
        let html = render(&PROJECTS[3]);
        assert_eq!(html.matches("<a href").count(), 2);
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("card-link--placeholder"));
        assert!(html.contains("https://password-manager-nu-eight.vercel.app"));
    }

    #[test]
    fn real_links_open_in_new_tab() {
        let html = render(&PROJECTS[2]);
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert!(!html.contains("card-link--placeholder"));
    }
}
