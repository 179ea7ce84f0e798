use leptos::prelude::*;

use super::icons::{MailIcon, MapPinIcon};
use crate::catalog::{Section, EMAIL, GITHUB, LINKEDIN, LOCATION};

const FIELD_CLASS: &str =
    "px-3 py-2 rounded-md bg-transparent border border-white/10 outline-none";

/// Contact details and a message form. The form is presentational only and
/// has no submit handler.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="contact mt-14 bg-white/4 p-6 rounded-2xl border border-white/6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-xl font-semibold">"Get in touch"</h3>
                    <p class="mt-2 text-slate-300">
                        "Available for backend roles, Web Development, freelance & contract work."
                    </p>
                    <div class="mt-4 space-y-3 text-slate-300">
                        <div class="flex items-center gap-3">
                            <MailIcon />
                            <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                        </div>
                        <div class="flex items-center gap-3">
                            <MapPinIcon />
                            <span>{LOCATION}</span>
                        </div>
                    </div>
                    <div class="mt-4 flex gap-3">
                        <a href=GITHUB.href() class="px-3 py-2 rounded-md border border-white/8">"GitHub"</a>
                        <a href=LINKEDIN.href() class="px-3 py-2 rounded-md border border-white/8">"LinkedIn"</a>
                    </div>
                </div>

                <form class="contact-form p-4 rounded-lg bg-white/6">
                    <div class="grid gap-3">
                        <input name="name" placeholder="Your name" aria-label="Your name" class=FIELD_CLASS />
                        <input name="email" type="email" placeholder="Email" aria-label="Email" class=FIELD_CLASS />
                        <textarea name="message" rows="4" placeholder="Message" aria-label="Message" class=FIELD_CLASS />
                        <div class="flex justify-between items-center">
                            <button type="submit" class="px-4 py-2 rounded-md bg-indigo-600 hover:bg-indigo-500">
                                "Send message"
                            </button>
                            <div class="text-xs text-slate-400">"Or DM me on LinkedIn"</div>
                        </div>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_form_fields_without_action() {
        let html = Owner::new().with(|| view! { <Contact /> }.to_html());
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"message\""));
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("action="));
    }

    #[test]
    fn linkedin_is_a_placeholder_link() {
        let html = Owner::new().with(|| view! { <Contact /> }.to_html());
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("https://github.com/AkhilChauhan-UK"));
    }
}
