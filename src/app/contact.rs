use leptos::prelude::*;

use super::icons::{HasGlyph, Icon};
use crate::content::{SocialKind, CONTACT_BLURB, PROFILE};

#[component]
pub fn Contact() -> impl IntoView {
    let email = PROFILE.link(SocialKind::Email).map(|link| {
        view! {
            <a
                href=link.href
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center rounded-md px-8 py-3 text-lg bg-blue-600 hover:bg-blue-700 text-white"
            >
                <Icon glyph=link.kind.glyph() class="mr-2 h-5 w-5" />
                "Email Me"
            </a>
        }
    });
    let linkedin = PROFILE.link(SocialKind::LinkedIn).map(|link| {
        view! {
            <a
                href=link.href
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center rounded-md px-8 py-3 text-lg border border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-white"
            >
                <Icon glyph=link.kind.glyph() class="mr-2 h-5 w-5" />
                "Connect on LinkedIn"
            </a>
        }
    });
    view! {
        <section id="contact" class="text-center max-w-2xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-blue-400">"Get in Touch"</h2>
            <p class="mb-8 text-gray-300">{CONTACT_BLURB}</p>
            <div class="flex justify-center space-x-4">{email} {linkedin}</div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center py-6 mt-12 bg-gray-800/90 backdrop-blur-md border-t border-gray-700">
            <p class="text-gray-400">
                {format!("© {} {}. All rights reserved.", PROFILE.copyright_year, PROFILE.name)}
            </p>
        </footer>
    }
}
