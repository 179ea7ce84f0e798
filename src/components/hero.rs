use leptos::prelude::*;

use super::{Avatar, RoleRotator};
use crate::catalog::{Section, OWNER_NAME, OWNER_ROLE, ROLES, ROLE_DISPLAY};

const PRIMARY_STACK: [&str; 3] = ["Django", "Python", "MERN"];

#[component]
fn StatTile(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="stat-tile p-3 bg-white/6 rounded-lg text-sm text-center">
            <div class="text-xs text-slate-300">{label}</div>
            <div class="font-semibold">{value}</div>
        </div>
    }
}

#[component]
pub fn Hero(
    #[prop(into)] avatar_failed: Signal<bool>,
    #[prop(into)] on_avatar_error: Callback<()>,
) -> impl IntoView {
    view! {
        <header id=Section::Hero.id() class="hero grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
            <div>
                <h1 class="text-4xl md:text-3xl font-extrabold leading-tight animate-role-in">
                    "Specialized in Backend Development with Django & Node.js. "
                    <br />
                    "Skilled in MERN Stack."
                </h1>
                <p class="mt-4 text-slate-300 max-w-xl">
                    "I am a backend-focused developer specializing in Python & Django, with additional expertise in Node.js & the MERN stack. I design scalable APIs, maintainable services, and deliver reliable production deployments."
                    <span class="inline-block ml-2">
                        " — "
                        <RoleRotator phrases=ROLES.to_vec() display=ROLE_DISPLAY />
                    </span>
                </p>
                <div class="mt-6 flex gap-3">
                    <a href=Section::Projects.href() class="px-5 py-3 rounded-lg bg-indigo-600 hover:bg-indigo-500 transition">
                        "View projects"
                    </a>
                    <a href=Section::Contact.href() class="px-5 py-3 rounded-lg border border-white/8 hover:bg-white/5 transition">
                        "Hire me"
                    </a>
                </div>
                <div class="mt-8 flex gap-4 items-center">
                    <div class="text-xs text-slate-400">"Primary stack"</div>
                    <div class="flex gap-2">
                        {PRIMARY_STACK
                            .into_iter()
                            .map(|tech| view! { <div class="px-3 py-1 rounded-full bg-white/6 text-xs">{tech}</div> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="relative transition-transform hover:-translate-y-2">
                <div class="profile-card rounded-2xl bg-white/4 border border-white/6 p-6 shadow-lg">
                    <div class="flex items-center gap-4">
                        <Avatar failed=avatar_failed on_error=on_avatar_error />
                        <div>
                            <div class="font-semibold text-lg">{OWNER_NAME}</div>
                            <div class="text-xs text-slate-300">{OWNER_ROLE}</div>
                        </div>
                    </div>
                    <div class="mt-4 text-slate-300 text-sm">
                        "I build resilient backends with Django & Node.js (MERN), optimize database queries, and deploy services with Docker and CI/CD."
                    </div>
                    <div class="mt-4 grid grid-cols-2 gap-3">
                        <StatTile label="Experience" value="1+ year" />
                        <StatTile label="Open to" value="Remote / Hybrid" />
                    </div>
                </div>
                <div class="absolute -right-10 -bottom-6 w-36 h-36 rounded-full bg-indigo-700/20 blur-3xl pointer-events-none" />
            </div>
        </header>
    }
}
