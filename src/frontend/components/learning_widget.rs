//! Canvas host for the animated [`Scene`] plus its step panel.

use std::f64::consts::TAU;

use leptos::ev;
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::scene::{DrawCmd, FrameLoop, FrameScheduler, Scene, STEP_COUNT};

const LABEL_FONT: &str = "600 13px ui-monospace, SFMono-Regular, Menlo, monospace";
const LABEL_COLOR: &str = "#f8fafc";

/// `requestAnimationFrame` behind the [`FrameScheduler`] seam.
struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = AnimationFrameRequestHandle;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<Self::Handle> {
        request_animation_frame_with_handle(move || callback(now_ms())).ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or_default()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Matches the drawing buffer to the element's layout size.
fn fit_canvas(canvas: &HtmlCanvasElement, scene: StoredValue<Scene>) {
    let (width, height) = (canvas.client_width().max(1), canvas.client_height().max(1));
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    scene.update_value(|s| s.resize(width as f32, height as f32));
}

fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    let camera = scene.camera();
    ctx.clear_rect(0.0, 0.0, camera.width as f64, camera.height as f64);

    for cmd in scene.draw_list() {
        match cmd {
            DrawCmd::Polygon { points, fill, .. } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                ctx.set_fill_style_str(&fill.css());
                ctx.fill();
            }
            DrawCmd::Disc {
                center, radius, fill, ..
            } => {
                ctx.begin_path();
                if ctx
                    .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
                    .is_ok()
                {
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill();
                }
            }
            DrawCmd::Segment {
                from,
                to,
                stroke,
                width,
                ..
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(&stroke.css());
                ctx.set_line_width(width as f64);
                ctx.stroke();
            }
            DrawCmd::Label { at, text } => {
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_fill_style_str(LABEL_COLOR);
                let _ = ctx.fill_text(&text, at.x as f64, at.y as f64);
            }
        }
    }
}

#[component]
pub fn LearningWidget() -> impl IntoView {
    let scene = StoredValue::new(Scene::new());
    let frames = StoredValue::new_local(None::<FrameLoop<RafScheduler>>);
    let canvas_ref = NodeRef::<Canvas>::new();

    let step = RwSignal::new(0usize);
    let playing = RwSignal::new(true);
    let sync = move || {
        scene.with_value(|s| {
            step.set(s.step());
            playing.set(s.is_playing());
        })
    };

    // Without a canvas or 2D context the widget stays blank.
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            tracing::debug!("2d context unavailable, learning widget disabled");
            return;
        };
        fit_canvas(&canvas, scene);

        let mut last: Option<f64> = None;
        let frame_loop = FrameLoop::new(RafScheduler, move |now| {
            let dt = last.map_or(0.0, |prev| ((now - prev) / 1000.0) as f32);
            last = Some(now);
            scene.update_value(|s| {
                s.advance(dt);
            });
            scene.with_value(|s| paint(&ctx, s));
        });
        frame_loop.start();
        // Replacing an earlier loop drops it, which cancels its pending frame.
        frames.set_value(Some(frame_loop));
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            fit_canvas(&canvas, scene);
        }
    });
    let pointer = window_event_listener(ev::pointermove, move |ev| {
        let win = window();
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0);
        let nx = ev.client_x() as f64 / width * 2.0 - 1.0;
        let ny = ev.client_y() as f64 / height * 2.0 - 1.0;
        scene.update_value(|s| s.point_at(nx as f32, ny as f32));
    });

    on_cleanup(move || {
        frames.try_update_value(|f| {
            if let Some(frame_loop) = f.take() {
                frame_loop.stop();
            }
        });
        resize.remove();
        pointer.remove();
    });

    let current = move || crate::scene::step(step.get());

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-5 gap-6 items-stretch">
            <div class="lg:col-span-3 rounded-xl overflow-hidden border border-slate-700 bg-slate-900 shadow-2xl shadow-black/50">
                <canvas node_ref=canvas_ref class="w-full h-80 md:h-[26rem] block" aria-hidden="true"></canvas>
            </div>
            <div class="lg:col-span-2 flex flex-col rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                <p class="text-xs uppercase tracking-wider text-orange-400 mb-2">
                    {move || format!("Step {} of {}", step.get() + 1, STEP_COUNT)}
                </p>
                <h3 class="text-2xl font-semibold text-white mb-2">{move || current().title}</h3>
                <p class="text-slate-400 text-sm leading-relaxed mb-4">{move || current().description}</p>
                <pre class="flex-grow p-4 rounded-lg bg-slate-950 border border-slate-800 text-sm text-emerald-300 font-mono overflow-x-auto">
                    <code>{move || current().code}</code>
                </pre>
                <div class="flex items-center justify-between mt-6">
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="btn-ghost text-sm px-4 py-2"
                            on:click=move |_| {
                                scene.update_value(Scene::prev);
                                sync();
                            }
                        >
                            "Previous"
                        </button>
                        <button
                            type="button"
                            class="btn-ghost text-sm px-4 py-2"
                            on:click=move |_| {
                                scene.update_value(Scene::toggle_playing);
                                sync();
                            }
                        >
                            {move || if playing.get() { "Pause" } else { "Play" }}
                        </button>
                        <button
                            type="button"
                            class="btn-primary text-sm px-4 py-2"
                            on:click=move |_| {
                                scene.update_value(Scene::next);
                                sync();
                            }
                        >
                            "Next"
                        </button>
                    </div>
                    <div class="flex gap-2">
                        {(0..STEP_COUNT)
                            .map(|i| {
                                view! {
                                    <button
                                        type="button"
                                        aria-label=format!("Go to step {}", i + 1)
                                        class=move || {
                                            if step.get() == i {
                                                "w-3 h-3 rounded-full bg-orange-400"
                                            } else {
                                                "w-3 h-3 rounded-full bg-slate-700 hover:bg-slate-500"
                                            }
                                        }
                                        on:click=move |_| {
                                            scene.update_value(|s| s.select(i));
                                            sync();
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
