//! Timing and interpolation helpers behind the page's entrance animations,
//! the scroll-linked background fade, and the first-mount guard.

use std::time::Duration;

/// Offset between consecutive items of a stagger group.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Length of every entrance transition.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

/// Scroll progress at which the background is fully transparent.
pub const FADE_END: f64 = 0.5;

/// Entrance delay of the item at `index` in a stagger group.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// One-shot transition played when an element enters the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    /// Fade in while rising 50px.
    #[default]
    Rise,
    /// Fade in while rising 20px.
    Lift,
    /// Fade in while sliding 50px from the left.
    FromLeft,
    /// Fade in while sliding 50px from the right.
    FromRight,
    /// Fade in while growing from half size.
    Zoom,
    Fade,
}

impl Entrance {
    /// Stylesheet class that carries the keyframes.
    pub fn class(&self) -> &'static str {
        match self {
            Entrance::Rise => "enter-rise",
            Entrance::Lift => "enter-lift",
            Entrance::FromLeft => "enter-from-left",
            Entrance::FromRight => "enter-from-right",
            Entrance::Zoom => "enter-zoom",
            Entrance::Fade => "enter-fade",
        }
    }

    /// Inline timing for this entrance starting after `delay`.
    pub fn style(&self, delay: Duration) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms;",
            ENTRANCE_DURATION.as_millis(),
            delay.as_millis()
        )
    }
}

/// Normalized vertical scroll position in `[0, 1]`.
///
/// A document no taller than the viewport cannot scroll and reports 0.
pub fn scroll_progress(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Opacity of the decorative background for a given scroll progress.
///
/// Linear from 1 at progress 0 down to 0 at [`FADE_END`], held at 0 after.
pub fn background_opacity(progress: f64) -> f64 {
    (1.0 - progress / FADE_END).clamp(0.0, 1.0)
}

/// Whether the page has finished its first client-side render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

impl MountState {
    /// Moves to [`MountState::Mounted`]. There is no way back.
    pub fn mount(&mut self) {
        *self = MountState::Mounted;
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, MountState::Mounted)
    }
}
