use leptos::prelude::*;

use crate::content::Image;

/// Round, cropped profile picture. Shows `fallback` (initials) when the image
/// can't be loaded.
#[component]
pub fn Avatar(
    image: Image,
    fallback: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    view! {
        <span class=format!("relative flex shrink-0 overflow-hidden rounded-full {class}")>
            <Show
                when=move || !broken.get()
                fallback=move || {
                    view! {
                        <span class="flex h-full w-full items-center justify-center rounded-full bg-gray-700 font-bold">
                            {fallback}
                        </span>
                    }
                }
            >
                <img
                    src=image.src
                    alt=image.alt
                    width=image.width.to_string()
                    height=image.height.to_string()
                    class="aspect-square h-full w-full object-cover"
                    on:error=move |_| set_broken.set(true)
                />
            </Show>
        </span>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_to_string;
    use crate::content::PROFILE;

    #[test]
    fn test_avatar_renders_image_first() {
        let html = render_to_string(|| {
            view! { <Avatar image=PROFILE.thumbnail fallback=PROFILE.initials /> }
        });
        assert!(html.contains("src=\"/images/avatar.jpg\""));
        assert!(html.contains("object-cover"));
        assert!(!html.contains(">NS<"));
    }
}
