use leptos::prelude::*;

#[component]
pub fn ExperienceItem(
    period: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    tag: &'static str,
) -> impl IntoView {
    view! {
        <div class="experience-item flex gap-4">
            <div class="flex flex-col items-center shrink-0">
                <div class="w-3 h-3 rounded-full bg-indigo-500 mt-1" />
                <div class="w-px h-full bg-white/6 mt-2" />
            </div>
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <h4 class="text-sm font-semibold">{title}</h4>
                    <div class="experience-item__tag text-xs text-slate-400">{tag}</div>
                </div>
                <div class="text-xs text-indigo-200 mt-1">
                    {subtitle}
                    " • "
                    <span class="experience-item__period text-slate-400">{period}</span>
                </div>
                <p class="text-sm text-slate-300 mt-2">{description}</p>
            </div>
        </div>
    }
}
