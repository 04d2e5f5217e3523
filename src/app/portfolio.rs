use leptos::prelude::*;

use super::{
    background::StarfieldBackground,
    contact::{Contact, Footer},
    header::Header,
    hero::{About, Hero},
    sections::{
        AchievementsSection, EducationSection, ExperienceSection, ProjectsSection, SkillsSection,
    },
};
use crate::motion::MountState;

/// Tracks the first client render. Stays [`MountState::Unmounted`] on the
/// server since effects only run in the browser.
pub fn use_mount_state() -> Signal<MountState> {
    let state = RwSignal::new(MountState::Unmounted);
    Effect::new(move |_| state.update(MountState::mount));
    state.into()
}

/// The page is only drawn once mounted, so the server never renders the
/// randomized starfield or half-played entrance animations.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let mount_state = use_mount_state();
    view! {
        <Show when=move || mount_state.get().is_mounted()>
            <Portfolio />
        </Show>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100">
            <StarfieldBackground />
            <div class="relative z-10">
                <Header />
                <main class="container mx-auto px-6 py-12 space-y-24">
                    <Hero />
                    <About />
                    <ExperienceSection />
                    <ProjectsSection />
                    <EducationSection />
                    <SkillsSection />
                    <AchievementsSection />
                    <Contact />
                </main>
                <Footer />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_to_string;
    use crate::content::{SocialKind, PROFILE, SKILLS};

    #[test]
    fn test_mount_state_stays_unmounted_on_server() {
        let owner = Owner::new();
        owner.with(|| {
            let state = use_mount_state();
            assert_eq!(state.get_untracked(), MountState::Unmounted);
            assert!(!state.get_untracked().is_mounted());
        });
    }

    #[test]
    fn test_nothing_rendered_before_mount() {
        let html = render_to_string(|| view! { <PortfolioPage /> });
        assert!(!html.contains(PROFILE.name));
        assert!(!html.contains("<section"));
        assert!(!html.contains("<canvas"));
    }

    #[test]
    fn test_mounted_document_has_every_section() {
        let html = render_to_string(|| view! { <Portfolio /> });
        for id in [
            "hero",
            "about",
            "experience",
            "projects",
            "education",
            "skills",
            "achievements",
            "contact",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(html.contains("<canvas"));
        assert!(html.contains("<footer"));
        assert!(html.contains(SKILLS[0].label));
    }

    #[test]
    fn test_background_starts_opaque() {
        let html = render_to_string(|| view! { <Portfolio /> });
        assert!(html.contains("opacity: 1"));
    }

    #[test]
    fn test_outbound_links_open_in_new_context() {
        let html = render_to_string(|| view! { <Portfolio /> });
        for link in PROFILE.links {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
        assert!(html.contains(&format!("href=\"{}\"", PROFILE.resume_url)));

        let anchors = html.matches("<a ").count();
        let new_context = html.matches("target=\"_blank\"").count();
        assert!(anchors > 0);
        assert_eq!(anchors, new_context);
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            anchors
        );
    }

    #[test]
    fn test_every_icon_is_inline_svg() {
        let html = render_to_string(|| view! { <Portfolio /> });
        let contact_buttons = [SocialKind::Email, SocialKind::LinkedIn]
            .into_iter()
            .filter(|kind| PROFILE.link(*kind).is_some())
            .count();
        let icons = PROFILE.links.len() + contact_buttons + SKILLS.len();

        assert!(!html.contains("<i "));
        assert_eq!(html.matches("<svg").count(), icons);
        assert_eq!(html.matches("viewBox=\"0 0 24 24\"").count(), icons);
        assert!(html.matches("<path").count() >= icons);
    }
}
