use std::{
    cell::{OnceCell, RefCell},
    f64::consts::TAU,
    rc::Rc,
};

use leptos::{html, prelude::*};
use leptos_use::{
    use_raf_fn, use_window_scroll, use_window_size, utils::Pausable, UseRafFnCallbackArgs,
    UseWindowSizeReturn,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    error::BackgroundError,
    motion::{background_opacity, scroll_progress},
    starfield::{FrameLoop, ProjectedStar, Renderer, Starfield, StarfieldConfig, Surface},
};

const STAR_COLOR: &str = "#ffffff";

/// 2D context of the background canvas.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn attach(canvas: HtmlCanvasElement) -> Result<Self, BackgroundError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackgroundError::ContextRejected(format!("{e:?}")))?
            .ok_or(BackgroundError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackgroundError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    /// Matches the backing store to the displayed size and clears it.
    fn begin_frame(&mut self) -> (f64, f64) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        let (width, height) = (width as f64, height as f64);
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str(STAR_COLOR);
        (width, height)
    }

    fn fill_disc(&mut self, star: &ProjectedStar) -> Result<(), BackgroundError> {
        self.ctx.begin_path();
        self.ctx
            .arc(star.x, star.y, star.radius, 0.0, TAU)
            .map_err(|e| BackgroundError::Draw(format!("{e:?}")))?;
        self.ctx.fill();
        Ok(())
    }
}

fn document_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Rotating starfield behind the page, fading out over the first half of the
/// scroll. Left out entirely if the canvas can't be drawn on.
#[component]
pub fn StarfieldBackground(#[prop(optional)] config: Option<StarfieldConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (failed, set_failed) = signal(false);

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let opacity = Memo::new(move |_| {
        background_opacity(scroll_progress(
            scroll_y.get(),
            document_height(),
            height.get(),
        ))
    });

    let frames = RefCell::new(FrameLoop::<CanvasSurface>::default());
    let stop = Rc::new(OnceCell::<Box<dyn Fn()>>::new());
    let Pausable { pause, .. } = use_raf_fn({
        let stop = Rc::clone(&stop);
        move |args: UseRafFnCallbackArgs| {
            let frame = frames.borrow_mut().tick(args.timestamp, || {
                canvas_ref.get_untracked().map(|canvas| {
                    let field = Starfield::generate(config, js_sys::Math::random);
                    CanvasSurface::attach(canvas).map(|surface| Renderer::new(surface, field))
                })
            });
            if let Err(e) = frame {
                log::warn!("starfield disabled: {e}");
                set_failed.set(true);
                if let Some(stop) = stop.get() {
                    stop();
                }
            }
        }
    });
    let _ = stop.set(Box::new(pause.clone()));
    // stop the frame loop as soon as the page goes away
    on_cleanup(pause);

    view! {
        <Show when=move || !failed.get()>
            <div
                class="fixed inset-0 z-0 pointer-events-none"
                style=move || format!("opacity: {}", opacity.get())
            >
                <canvas
                    node_ref=canvas_ref
                    class="block h-full w-full"
                    role="img"
                    aria-label="Animated star background"
                ></canvas>
            </div>
        </Show>
    }
}
