use std::time::Duration;

use leptos::prelude::*;

use crate::motion::{stagger_delay, Entrance};

/// Plays `entrance` once, `delay` after the element is inserted.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("{} {class}", entrance.class()) style=entrance.style(delay)>
            {children()}
        </div>
    }
}

/// Content card that rises into place. `index` is the card's position in its
/// stagger group.
#[component]
pub fn AnimatedCard(
    #[prop(optional)] index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let entrance = Entrance::Rise;
    view! {
        <div
            class=entrance.class()
            style=entrance.style(stagger_delay(index))
            data-stagger=index.to_string()
        >
            <div class=format!(
                "rounded-lg bg-gray-800 border border-gray-700 shadow-lg hover:shadow-blue-500/20 transition-all duration-300 {class}",
            )>{children()}</div>
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=format!("font-bold text-blue-400 {class}")>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "p-6 pt-0".to_string()
    } else {
        class
    };
    view! { <div class=class>{children()}</div> }
}
