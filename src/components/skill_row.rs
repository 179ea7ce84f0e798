use leptos::prelude::*;

/// Label plus a proficiency bar. `pct` is trusted to be within 0–100.
#[component]
pub fn SkillRow(name: &'static str, #[prop(default = 60)] pct: u8) -> impl IntoView {
    let label = format!("{pct}%");
    let width = format!("width: {pct}%");

    view! {
        <div class="skill-row">
            <div class="flex items-center justify-between text-xs">
                <div class="skill-row__name text-slate-200">{name}</div>
                <div class="skill-row__pct text-slate-400">{label}</div>
            </div>
            <div
                class="w-full h-2 bg-white/6 rounded-full mt-1 overflow-hidden"
                role="progressbar"
                aria-label=name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=pct.to_string()
            >
                <div class="skill-row__bar h-2 bg-indigo-500 rounded-full transition-all" style=width />
            </div>
        </div>
    }
}

/// A titled card of related skill rows.
#[component]
pub fn SkillGroup(title: &'static str, blurb: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="skill-group p-4 bg-white/6 rounded-lg border border-white/8">
            <h4 class="text-sm font-medium text-indigo-200">{title}</h4>
            <p class="text-xs text-slate-300 mt-2">{blurb}</p>
            <div class="mt-4 space-y-3">{children()}</div>
        </div>
    }
}
