use leptos::prelude::*;

use crate::portfolio::{
    skill_category, Skill, ABOUT, CERTIFICATIONS, EDUCATION, EXPERIENCE, PROJECTS, SKILL_CATEGORIES,
};

#[component]
fn Section(
    anchor: &'static str,
    title: &'static str,
    #[prop(optional)] muted: bool,
    children: Children,
) -> impl IntoView {
    let class = if muted {
        "py-16 px-4 bg-muted/50"
    } else {
        "py-16 px-4"
    };
    view! {
        <section id=anchor class=class>
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold mb-8 text-center">{title}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section anchor="about" title="About me" muted=true>
            <div class="max-w-4xl mx-auto text-center space-y-6">
                {ABOUT
                    .iter()
                    .map(|p| view! { <p class="text-lg leading-relaxed">{*p}</p> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let (border, fill) = skill.tier().classes();
    let percent = skill.percent();
    view! {
        <div class="flex flex-col gap-1 w-full max-w-[180px]">
            <div class=format!(
                "flex w-full justify-between py-1.5 px-3 rounded-md border text-sm {border}",
            )>
                <span>{skill.name}</span>
                <span class="text-xs text-muted-foreground">{format!("{percent}%")}</span>
            </div>
            <div class="h-1.5 w-full rounded-full bg-muted overflow-hidden">
                <div class=format!("h-full {fill}") style=format!("width: {percent}%") />
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (selected, set_selected) = signal(SKILL_CATEGORIES[0].id);

    view! {
        <Section anchor="skills" title="Technical skills">
            <div class="max-w-4xl mx-auto">
                <div class="grid w-full grid-cols-4 rounded-md bg-muted p-1" role="tablist">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            let id = category.id;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (selected() == id).to_string()
                                    class=move || {
                                        if selected() == id {
                                            "rounded-sm py-1.5 text-sm font-medium bg-background shadow"
                                        } else {
                                            "rounded-sm py-1.5 text-sm font-medium text-muted-foreground"
                                        }
                                    }
                                    on:click=move |_| set_selected(id)
                                >
                                    {category.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    skill_category(selected())
                        .map(|category| {
                            view! {
                                <div class="mt-6 flex flex-wrap gap-2" role="tabpanel">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <SkillBadge skill=*skill /> })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </Section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <Section anchor="projects" title="Featured projects" muted=true>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="overflow-hidden flex flex-col h-full rounded-lg border bg-card shadow-sm">
                                <div class="relative h-48 w-full overflow-hidden">
                                    <img
                                        src=project.image_src()
                                        alt=project.title
                                        class="h-full w-full object-cover hover:scale-105 transition-transform"
                                    />
                                </div>
                                <h3 class="px-6 pt-6 text-xl font-semibold">{project.title}</h3>
                                <div class="px-6 py-4 flex-grow">
                                    <p class="text-muted-foreground mb-4">{project.description}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-2 py-0.5 text-xs rounded-md bg-secondary">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="flex gap-2 px-6 pb-6">
                                    <a
                                        href=project.demo_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex-1 text-center border rounded-md py-1.5 text-sm"
                                    >
                                        "Demo"
                                    </a>
                                    <a
                                        href=project.repo_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex-1 text-center border rounded-md py-1.5 text-sm"
                                    >
                                        <i class="devicon-github-plain mr-2" />
                                        "Code"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn TimelineCard(
    title: &'static str,
    subtitle: &'static str,
    badge: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border bg-card shadow-sm p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-xl font-semibold">{title}</h3>
                    <p class="text-sm text-muted-foreground">{subtitle}</p>
                </div>
                <span class="px-2 py-0.5 text-xs rounded-md border">{badge}</span>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <Section anchor="experience" title="Work experience">
            <div class="max-w-4xl mx-auto space-y-8">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <TimelineCard title=job.role subtitle=job.company badge=job.period>
                                <ul class="list-disc pl-5 space-y-3">
                                    {job.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </TimelineCard>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <Section anchor="education" title="Education and certifications" muted=true>
            <div class="max-w-4xl mx-auto space-y-8">
                {EDUCATION
                    .iter()
                    .map(|e| {
                        view! {
                            <TimelineCard title=e.title subtitle=e.institution badge=e.period>
                                <p>{e.summary}</p>
                            </TimelineCard>
                        }
                    })
                    .collect_view()}
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
                    {CERTIFICATIONS
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="rounded-lg border bg-card shadow-sm p-6">
                                    <h3 class="text-lg font-semibold">{c.title}</h3>
                                    <p class="text-sm text-muted-foreground">{c.issuer}</p>
                                    <p class="text-sm mt-4">{c.duration_line()}</p>
                                    <p class="text-sm text-muted-foreground mt-2">{c.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}
