use std::time::Duration;

use leptos::prelude::*;

use super::card::{AnimatedCard, CardContent, CardHeader, CardTitle, Reveal};
use crate::{content::PROFILE, motion::Entrance};

#[component]
pub fn Hero() -> impl IntoView {
    let photo = PROFILE.photo;
    view! {
        <section
            id="hero"
            class="text-center min-h-[calc(100vh-80px)] flex flex-col justify-center items-center space-y-8"
        >
            <Reveal
                entrance=Entrance::Zoom
                class="relative w-48 h-48 rounded-full overflow-hidden border-4 border-blue-600 shadow-lg"
            >
                <img
                    src=photo.src
                    alt=photo.alt
                    width=photo.width.to_string()
                    height=photo.height.to_string()
                    class="h-full w-full object-cover"
                />
            </Reveal>
            <Reveal entrance=Entrance::Lift delay=Duration::from_millis(200)>
                <h2 class="text-5xl sm:text-6xl font-extrabold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                    {PROFILE.headline}
                </h2>
            </Reveal>
            <Reveal entrance=Entrance::Fade delay=Duration::from_millis(400)>
                <p class="text-xl text-gray-400 mb-8 max-w-2xl">{PROFILE.tagline}</p>
            </Reveal>
            <Reveal entrance=Entrance::Rise delay=Duration::from_millis(600)>
                <a
                    href=PROFILE.resume_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center rounded-md px-8 py-3 text-lg bg-blue-600 hover:bg-blue-700 text-white"
                >
                    "Download Resume"
                </a>
            </Reveal>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="max-w-4xl mx-auto">
            <AnimatedCard>
                <CardHeader>
                    <CardTitle class="text-2xl">"About Me"</CardTitle>
                </CardHeader>
                <CardContent>
                    <p class="text-gray-300 leading-relaxed">{PROFILE.summary}</p>
                </CardContent>
            </AnimatedCard>
        </section>
    }
}
