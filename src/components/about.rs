use leptos::prelude::*;

use super::{ExperienceItem, SkillGroup, SkillRow};
use crate::catalog::{Section, CERTIFICATIONS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about mt-14 grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-white/4 p-6 rounded-2xl border border-white/6">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="text-xl font-semibold">"Technical Skills"</h3>
                        <p class="mt-2 text-slate-300 max-w-xl">
                            "Focused on backend engineering and full-stack (MERN) development. Below are grouped skills with approximate proficiency."
                        </p>
                    </div>
                    <div class="hidden sm:flex items-center gap-2 text-xs text-slate-400">
                        <span class="px-2 py-1 rounded-md bg-white/6">"Pro"</span>
                    </div>
                </div>

                <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 gap-6">
                    <SkillGroup
                        title="Backend (Python / Django)"
                        blurb="APIs, authentication, server-side logic and integrations."
                    >
                        <SkillRow name="Python" pct=92 />
                        <SkillRow name="Django" pct=90 />
                        <SkillRow name="Django REST Framework" pct=86 />
                        <SkillRow name="API Design (REST)" pct=84 />
                    </SkillGroup>
                    <SkillGroup
                        title="MERN Stack"
                        blurb="Client + server development using React, Node and MongoDB."
                    >
                        <SkillRow name="React.js" pct=76 />
                        <SkillRow name="Node.js" pct=70 />
                        <SkillRow name="Express.js" pct=70 />
                        <SkillRow name="MongoDB" pct=72 />
                    </SkillGroup>
                    <SkillGroup
                        title="Databases & Tools"
                        blurb="Working knowledge of relational & NoSQL systems and container workflows."
                    >
                        <SkillRow name="PostgreSQL" pct=78 />
                        <SkillRow name="Redis" pct=60 />
                        <SkillRow name="Docker" pct=74 />
                        <SkillRow name="Git / GitHub" pct=88 />
                    </SkillGroup>
                    <SkillGroup title="Other / Cloud" blurb="Supporting tech and libraries.">
                        <SkillRow name="HTML / CSS / JS" pct=84 />
                        <SkillRow name="Next.js" pct=60 />
                        <SkillRow name="Postman" pct=80 />
                        <SkillRow name="GCP (basics)" pct=55 />
                    </SkillGroup>
                </div>
            </div>

            <aside class="experience bg-white/4 p-6 rounded-2xl border border-white/6">
                <div class="flex items-start justify-between">
                    <h3 class="text-xl font-semibold">"Experience"</h3>
                    <span class="text-xs text-slate-400">"Timeline"</span>
                </div>
                <div class="mt-4 space-y-5">
                    <ExperienceItem
                        period="1 Year"
                        title="XWLS Pvt Ltd & Vikas Welding"
                        subtitle="Non-tech role"
                        description="Worked in a non-technical capacity — developed communication, coordination and process skills that strengthen project delivery."
                        tag="2019–2020"
                    />
                    <ExperienceItem
                        period="2 Months"
                        title="Python Programming Internship"
                        subtitle="Backend & Automation Internship"
                        description="Completed focused internship in Python — built small automation scripts, data handling and backend tasks."
                        tag="2023"
                    />
                    <ExperienceItem
                        period="4 Months"
                        title="Freelancer"
                        subtitle="Backend / Full-stack freelance"
                        description="Delivered 4 months of freelance projects (APIs, small MERN features, deployments and bug fixes)."
                        tag="2024"
                    />
                </div>
                <div class="mt-6">
                    <h4 class="text-sm font-semibold text-slate-200">"Certifications"</h4>
                    <ul class="mt-3 space-y-2 text-slate-300 text-sm">
                        {CERTIFICATIONS
                            .into_iter()
                            .map(|name| view! { <li>"• "{name}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </aside>
        </section>
    }
}
