use std::time::Duration;

use leptos::prelude::*;

use super::{
    avatar::Avatar,
    card::Reveal,
    icons::{HasGlyph, Icon},
};
use crate::{content::PROFILE, motion::Entrance};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="flex justify-between items-center p-6 bg-gray-800/90 backdrop-blur-md sticky top-0 border-b border-gray-700 z-50">
            <Reveal entrance=Entrance::FromLeft class="flex items-center space-x-4">
                <Avatar
                    image=PROFILE.thumbnail
                    fallback=PROFILE.initials
                    class="h-12 w-12 border-2 border-blue-600"
                />
                <h1 class="text-3xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-purple-600">
                    {PROFILE.name}
                </h1>
            </Reveal>
            <nav>
                <Reveal
                    entrance=Entrance::FromRight
                    delay=Duration::from_millis(200)
                    class="flex space-x-2"
                >
                    <SocialLinks />
                </Reveal>
            </nav>
        </header>
    }
}

/// Icon buttons for every profile link.
#[component]
pub fn SocialLinks() -> impl IntoView {
    PROFILE
        .links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex h-10 w-10 items-center justify-center rounded-md text-gray-300 hover:text-white hover:bg-gray-700"
                    aria-label=link.label
                >
                    <Icon glyph=link.kind.glyph() class="h-5 w-5" />
                    <span class="sr-only">{link.label}</span>
                </a>
            }
        })
        .collect_view()
}
