use leptos::prelude::*;

use super::ThemeToggle;
use crate::catalog::{Section, OWNER_INITIALS, OWNER_NAME};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="header sticky top-0 left-0 w-full bg-black/30 backdrop-blur z-50 border-b border-white/10">
            <div class="max-w-6xl mx-auto px-6 py-3 flex items-center justify-between">
                <a href=Section::Hero.href() class="flex items-center gap-3">
                    <div class="header__monogram w-9 h-9 rounded-md bg-gradient-to-tr from-indigo-500 to-pink-500 flex items-center justify-center font-bold text-sm">
                        {OWNER_INITIALS}
                    </div>
                    <div class="header__name font-semibold">{OWNER_NAME}</div>
                </a>
                <div class="flex items-center gap-6">
                    <div class="header__nav hidden md:flex items-center gap-6 text-sm">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a href=section.href() class="hover:text-indigo-400 transition">
                                        {section.nav_label()}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}
