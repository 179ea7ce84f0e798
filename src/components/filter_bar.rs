use leptos::prelude::*;

use crate::state::ProjectFilter;

fn project_count_label(count: usize) -> String {
    if count == 1 {
        "1 project".to_string()
    } else {
        format!("{count} projects")
    }
}

#[component]
pub fn FilterBar(
    #[prop(into)] active: Signal<ProjectFilter>,
    #[prop(into)] project_count: Signal<usize>,
    #[prop(into)] on_select: Callback<ProjectFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar flex items-center gap-3">
            <span class="filter-count text-xs text-slate-400">
                {move || project_count_label(project_count.get())}
            </span>
            <div class="filter-options flex items-center gap-2" role="group" aria-label="Filter projects by type">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_active = move || active.get() == filter;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active() {
                                        "filter-btn active px-3 py-1 rounded-full text-sm bg-indigo-600 transition"
                                    } else {
                                        "filter-btn px-3 py-1 rounded-full text-sm bg-white/6 transition"
                                    }
                                }
                                aria-pressed=move || is_active().to_string()
                                on:click=move |_| on_select.run(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralises() {
        assert_eq!(project_count_label(0), "0 projects");
        assert_eq!(project_count_label(1), "1 project");
        assert_eq!(project_count_label(6), "6 projects");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn marks_only_the_active_filter() {
        use crate::catalog::ProjectKind;
        use leptos::tachys::view::RenderHtml;

        let html = Owner::new().with(|| {
            view! {
                <FilterBar
                    active=ProjectFilter::Kind(ProjectKind::Mern)
                    project_count=3usize
                    on_select={|_: ProjectFilter| {}}
                />
            }
            .to_html()
        });

        assert_eq!(html.matches("filter-btn active").count(), 1);
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert!(html.contains(">All<"));
        assert!(html.contains(">Django<"));
        assert!(html.contains(">MERN<"));
        assert!(html.contains("3 projects"));
    }
}
