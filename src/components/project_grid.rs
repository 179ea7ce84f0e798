use leptos::prelude::*;

use super::ProjectCard;
use crate::catalog::Project;

#[component]
pub fn ProjectGrid(projects: Vec<&'static Project>) -> impl IntoView {
    view! {
        <div class="project-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty flex flex-col items-center gap-3 py-12 text-slate-400">
            <svg viewBox="0 0 200 200" class="project-empty-art w-24 h-24" aria-hidden="true">
                <circle cx="100" cy="100" r="80" fill="none" stroke="currentColor" stroke-opacity="0.3" stroke-width="1"/>
                <circle cx="100" cy="100" r="50" fill="none" stroke="currentColor" stroke-opacity="0.3" stroke-width="1"/>
                <line x1="20" y1="100" x2="180" y2="100" stroke="currentColor" stroke-opacity="0.3" stroke-width="1"/>
                <line x1="100" y1="20" x2="100" y2="180" stroke="currentColor" stroke-opacity="0.3" stroke-width="1"/>
            </svg>
            <p class="project-empty-text text-sm">"No projects match this filter"</p>
        </div>
    }
}
