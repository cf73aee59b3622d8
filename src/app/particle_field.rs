use leptos::{html, prelude::*};

/// Canvas behind the intro. Particles gather around the pointer and get
/// swallowed by hovered `data-particle-target` elements.
#[component]
pub fn ParticleField() -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    driver::run(canvas, expect_context::<super::theme::ThemeContext>());

    view! {
        <canvas
            node_ref=canvas
            aria-hidden="true"
            class="pointer-events-none absolute left-1/2 top-0 -z-10 h-full w-screen -translate-x-1/2"
        ></canvas>
    }
}

#[cfg(feature = "hydrate")]
mod driver {
    use leptos::{ev, html, prelude::*};
    use leptos_use::{use_document, use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

    use crate::{
        app::theme::ThemeContext,
        frames::{backing_scale, is_mobile},
        particles::{
            normalize_in_rect, normalize_point, FieldConfig, ParticleField, PointerTracker,
            Viewport,
        },
    };

    const TARGET_SELECTOR: &str = "[data-particle-target]";
    const DARK_COLOR: &str = "#80ffff";
    const LIGHT_COLOR: &str = "#000000";
    /// Capsule proportions in world units before scaling.
    const PARTICLE_WIDTH: f64 = 0.2;
    const PARTICLE_LENGTH: f64 = 0.6;

    #[derive(Default)]
    struct Scene {
        field: Option<ParticleField>,
        tracker: PointerTracker,
        /// CSS size the canvas backing store was last sized for.
        size: (f64, f64),
        scale: f64,
    }

    pub fn run(canvas: NodeRef<html::Canvas>, theme: ThemeContext) {
        let scene = StoredValue::new_local(Scene::default());

        let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
            let Some(canvas) = canvas.get_untracked() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let point = normalize_in_rect(
                e.client_x() as f64,
                e.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            scene.update_value(|s| s.tracker.set_pointer(point));
        });

        // mouseover bubbles, so entering any descendant of a target counts
        let _ = use_event_listener(use_document(), ev::mouseover, move |e| {
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(TARGET_SELECTOR).ok().flatten());
            let hovered = match (target, canvas.get_untracked()) {
                (Some(target), Some(canvas)) => {
                    let field = canvas.get_bounding_client_rect();
                    let rect = target.get_bounding_client_rect();
                    normalize_point(
                        rect.left() + rect.width() / 2.0,
                        rect.top() + rect.height() / 2.0,
                        field.left(),
                        field.top(),
                        field.width(),
                        field.height(),
                    )
                }
                _ => None,
            };
            scene.update_value(|s| s.tracker.set_hovered(hovered));
        });

        // no related target: the pointer left the window
        let _ = use_event_listener(use_window(), ev::mouseout, move |e| {
            if e.related_target().is_some() {
                return;
            }
            scene.update_value(|s| {
                s.tracker.set_pointer(None);
                s.tracker.set_hovered(None);
            });
        });

        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let Some(canvas) = canvas.get_untracked() else {
                return;
            };
            let color = if theme.is_dark_untracked() {
                DARK_COLOR
            } else {
                LIGHT_COLOR
            };
            scene.update_value(|s| s.frame(&canvas, args.timestamp, color));
        });
    }

    impl Scene {
        fn frame(&mut self, canvas: &HtmlCanvasElement, now_ms: f64, color: &str) {
            let size = (canvas.client_width() as f64, canvas.client_height() as f64);
            if size.0 <= 0.0 || size.1 <= 0.0 {
                return;
            }
            let Some(ctx) = context_2d(canvas) else {
                return;
            };
            if size != self.size {
                self.resize(canvas, size);
            }

            let viewport = Viewport::from_pixels(size.0, size.1);
            let attractor = self.tracker.attractor();
            let field = self.field.get_or_insert_with(|| {
                ParticleField::new(
                    FieldConfig::for_viewport_width(size.0),
                    viewport,
                    fastrand::Rng::new(),
                )
            });

            let ppu = viewport.px_per_unit();
            let _ = ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);
            ctx.clear_rect(0.0, 0.0, size.0, size.1);
            ctx.set_fill_style_str(color);

            for particle in field.tick(now_ms, now_ms / 1000.0, attractor, viewport) {
                if particle.is_hidden() {
                    continue;
                }
                let (x, y, depth) = viewport.to_screen(particle.position);
                let unit = particle.scale * ppu * depth;
                let (w, h) = (PARTICLE_WIDTH * unit, PARTICLE_LENGTH * unit);
                if w < 0.1 {
                    continue;
                }
                ctx.save();
                let _ = ctx.translate(x, y);
                // canvas y points down, world y points up
                let _ = ctx.rotate(-particle.heading);
                ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
                ctx.restore();
            }
        }

        fn resize(&mut self, canvas: &HtmlCanvasElement, size: (f64, f64)) {
            let mobile = is_mobile(size.0);
            if self.size.0 > 0.0 && mobile != is_mobile(self.size.0) {
                // particle count depends on the breakpoint
                self.field = None;
            }
            self.scale = backing_scale(window().device_pixel_ratio(), mobile);
            canvas.set_width((size.0 * self.scale).round() as u32);
            canvas.set_height((size.1 * self.scale).round() as u32);
            self.size = size;
        }
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }
}
