use leptos::prelude::*;

use super::{
    card::{AnimatedCard, CardContent, CardHeader, CardTitle},
    icons::{HasGlyph, Icon},
};
use crate::content::{ACHIEVEMENTS, CERTIFICATIONS, EDUCATION, EXPERIENCE, PROJECTS, SKILLS};

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-3xl font-bold mb-8 text-blue-400 text-center">{text}</h2> }
}

#[component]
fn BulletList(items: &'static [&'static str], #[prop(optional)] spaced: bool) -> impl IntoView {
    let class = if spaced {
        "list-disc pl-5 space-y-2 text-gray-300"
    } else {
        "list-disc pl-5 text-gray-300"
    };
    view! {
        <ul class=class>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience">
            <SectionHeading text="Work Experience" />
            <div class="space-y-8">
                {EXPERIENCE
                    .iter()
                    .enumerate()
                    .map(|(index, job)| {
                        view! {
                            <AnimatedCard index=index>
                                <CardHeader>
                                    <CardTitle class="text-xl">{job.title}</CardTitle>
                                    <p class="text-sm text-gray-400">
                                        {job.organization} " | " {job.period}
                                    </p>
                                </CardHeader>
                                <CardContent>
                                    <BulletList items=job.highlights spaced=true />
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects">
            <SectionHeading text="Projects" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <AnimatedCard index=index>
                                <CardHeader>
                                    <CardTitle class="text-xl">{project.title}</CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <p class="text-gray-300">{project.description}</p>
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education">
            <SectionHeading text="Education & Certifications" />
            <div class="space-y-8">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(index, degree)| {
                        view! {
                            <AnimatedCard index=index>
                                <CardHeader>
                                    <CardTitle class="text-xl">{degree.degree}</CardTitle>
                                    <p class="text-sm text-gray-400">
                                        {degree.institution} " | " {degree.date}
                                    </p>
                                </CardHeader>
                                <CardContent class="p-6 pt-0 text-gray-300">
                                    {degree
                                        .honors
                                        .iter()
                                        .map(|line| view! { <p>{*line}</p> })
                                        .collect_view()}
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(index, cert)| {
                            view! {
                                <AnimatedCard index=index>
                                    <CardContent class="p-4">
                                        <p class="text-gray-300">{*cert}</p>
                                    </CardContent>
                                </AnimatedCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills">
            <SectionHeading text="Skills" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(index, category)| {
                        view! {
                            <AnimatedCard index=index>
                                <CardHeader>
                                    <CardTitle class="text-xl flex items-center">
                                        <Icon
                                            glyph=category.icon.glyph()
                                            class="h-6 w-6 text-blue-400"
                                        />
                                        <span class="ml-2">{category.label}</span>
                                    </CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <BulletList items=category.skills />
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements">
            <SectionHeading text="Achievements & Hobbies" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {ACHIEVEMENTS
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        view! {
                            <AnimatedCard index=index>
                                <CardHeader>
                                    <CardTitle class="text-xl">{group.title}</CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <BulletList items=group.items />
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
