use leptos::{html, prelude::*};

use crate::frames::{HeroKeyframe, SequenceConfig, PIN_DISTANCE_PX};

/// Pinned full-screen canvas that scrubs through the snow frames as the page
/// scrolls past it.
#[component]
pub fn HeroScroll() -> impl IntoView {
    let config = SequenceConfig::default();
    let container = NodeRef::<html::Section>::new();
    let canvas = NodeRef::<html::Canvas>::new();
    let keyframe = RwSignal::new(HeroKeyframe::at(0.0, config.frame_count));

    #[cfg(feature = "hydrate")]
    driver::run(
        config,
        driver::Handles {
            container,
            canvas,
            keyframe,
            loading: expect_context::<super::loading::LoadingContext>(),
        },
    );
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <section
            node_ref=container
            class="relative w-full"
            style:height=format!("calc(100vh + {PIN_DISTANCE_PX}px)")
        >
            <div class="sticky top-0 h-screen w-full overflow-hidden bg-black">
                <canvas
                    node_ref=canvas
                    class="absolute inset-0 h-full w-full"
                    style:opacity=move || keyframe.with(|k| k.canvas_opacity.to_string())
                    style:filter=move || keyframe.with(|k| format!("blur({}px)", k.canvas_blur_px))
                ></canvas>
                <div
                    class="absolute inset-0 flex flex-col items-center justify-center text-center text-white pointer-events-none"
                    style:opacity=move || keyframe.with(|k| k.caption_opacity.to_string())
                    style:transform=move || {
                        keyframe.with(|k| format!("translateY({}px)", k.caption_offset_px))
                    }
                >
                    <h1 class="text-4xl sm:text-6xl font-bold tracking-tight">"Khadon"</h1>
                    <p class="mt-4 text-lg text-white/80">"Scroll to explore"</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
mod driver {
    use futures::future::join_all;
    use leptos::{ev, html, prelude::*, task::spawn_local};
    use leptos_use::{use_event_listener, use_window};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, ImageSmoothingQuality,
    };

    use crate::{
        app::loading::LoadingContext,
        frames::{
            backing_scale, cover_rect, is_mobile, scroll_progress, FrameSequence, HeroKeyframe,
            LoadEvent, SequenceConfig,
        },
    };

    struct Driver {
        sequence: FrameSequence,
        images: Vec<Option<HtmlImageElement>>,
        /// Fractional frame the scroll position asks for.
        position: f64,
        drawn: Option<usize>,
        render_scheduled: bool,
        backing: (u32, u32),
    }

    #[derive(Clone, Copy)]
    pub struct Handles {
        pub container: NodeRef<html::Section>,
        pub canvas: NodeRef<html::Canvas>,
        pub keyframe: RwSignal<HeroKeyframe>,
        pub loading: LoadingContext,
    }

    /// Everything the callbacks need. All handles are `Copy`; the driver state
    /// is disposed with the component, after which every access is a no-op.
    #[derive(Clone, Copy)]
    struct Hero {
        state: StoredValue<Driver, LocalStorage>,
        handles: Handles,
    }

    pub fn run(config: SequenceConfig, handles: Handles) {
        let min_load_time = config.min_load_time;
        let load_timeout = config.load_timeout;
        let hero = Hero {
            state: StoredValue::new_local(Driver {
                images: vec![None; config.frame_count],
                sequence: FrameSequence::new(config),
                position: 0.0,
                drawn: None,
                render_scheduled: false,
                backing: (0, 0),
            }),
            handles,
        };

        let min_load_timer = set_timeout_with_handle(
            move || hero.apply(|s| s.min_load_time_elapsed()),
            min_load_time,
        )
        .ok();
        let timeout_timer =
            set_timeout_with_handle(move || hero.apply(|s| s.timed_out()), load_timeout).ok();
        on_cleanup(move || {
            for handle in [min_load_timer, timeout_timer].into_iter().flatten() {
                handle.clear();
            }
        });

        spawn_local(load_frames(hero));

        let _ = use_event_listener(use_window(), ev::scroll, move |_| hero.on_scroll());
        let _ = use_event_listener(use_window(), ev::resize, move |_| hero.on_resize());
        let _ = use_event_listener(
            use_window(),
            ev::Custom::<web_sys::Event>::new("orientationchange"),
            move |_| hero.on_resize(),
        );

        Effect::new(move |_| {
            if handles.canvas.get().is_some() {
                hero.on_resize();
            }
        });
    }

    /// Priority first frame, then the batches in order. Frames inside a batch
    /// decode concurrently. Stops early once the component is gone.
    async fn load_frames(hero: Hero) {
        let Some((first, batches)) = hero.state.try_update_value(|d| {
            d.sequence.start();
            let config = d.sequence.config();
            ((0, config.frame_url(0)), config.batches())
        }) else {
            return;
        };

        load_frame(hero, first.0, first.1).await;

        for batch in batches {
            let Some(frames) = hero.state.try_with_value(|d| {
                batch
                    .map(|i| (i, d.sequence.config().frame_url(i)))
                    .collect::<Vec<_>>()
            }) else {
                return;
            };
            join_all(
                frames
                    .into_iter()
                    .map(|(index, url)| load_frame(hero, index, url)),
            )
            .await;
        }
    }

    async fn load_frame(hero: Hero, index: usize, url: String) {
        let image = match HtmlImageElement::new() {
            Ok(image) => {
                image.set_src(&url);
                match JsFuture::from(image.decode()).await {
                    Ok(_) => Some(image),
                    Err(_) => {
                        log::debug!("couldn't decode {url}");
                        None
                    }
                }
            }
            Err(_) => None,
        };

        let decoded = image.is_some();
        let _ = hero.state.try_update_value(|d| {
            if let Some(slot) = d.images.get_mut(index) {
                *slot = image;
            }
        });
        hero.apply(|s| {
            if decoded {
                s.record_decoded(index)
            } else {
                s.record_failed(index)
            }
        });
    }

    impl Hero {
        /// Runs a sequence transition and reacts to the events it produces.
        fn apply(self, f: impl FnOnce(&mut FrameSequence) -> Vec<LoadEvent>) {
            let Some(events) = self.state.try_update_value(|d| f(&mut d.sequence)) else {
                return;
            };
            let loading = self.handles.loading;
            for event in events {
                match event {
                    LoadEvent::FirstFrame => self.schedule_render(),
                    LoadEvent::Progress(percent) => loading.set_progress(percent),
                    LoadEvent::Ready => {
                        loading.mark_ready();
                        self.on_scroll();
                    }
                    LoadEvent::Failed(err) => {
                        log::warn!("hero playback degraded: {err}");
                        loading.fail();
                        self.on_scroll();
                    }
                }
            }
        }

        fn on_scroll(self) {
            let Some(section) = self.handles.container.get_untracked() else {
                return;
            };
            let Some(frame_count) = self.state.try_with_value(|d| d.sequence.config().frame_count)
            else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            let viewport_height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let keyframe =
                HeroKeyframe::at(scroll_progress(rect.top(), rect.height(), viewport_height), frame_count);
            self.handles.keyframe.set(keyframe);

            let playing = self
                .state
                .try_update_value(|d| {
                    let playing = d.sequence.playback_enabled();
                    if playing {
                        d.position = keyframe.frame;
                    }
                    playing
                })
                .unwrap_or(false);
            if playing {
                self.schedule_render();
            }
        }

        fn on_resize(self) {
            let _ = self.state.try_update_value(|d| d.drawn = None);
            self.on_scroll();
            self.schedule_render();
        }

        /// Coalesces any number of requests into one draw per animation frame.
        fn schedule_render(self) {
            let first = self
                .state
                .try_update_value(|d| !std::mem::replace(&mut d.render_scheduled, true))
                .unwrap_or(false);
            if first {
                request_animation_frame(move || self.render());
            }
        }

        fn render(self) {
            let canvas = self.handles.canvas.get_untracked();
            let _ = self.state.try_update_value(|d| {
                d.render_scheduled = false;
                if let Some(canvas) = canvas {
                    draw(d, &canvas);
                }
            });
        }
    }

    fn draw(d: &mut Driver, canvas: &HtmlCanvasElement) {
        let window = window();
        let css_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let css_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let scale = backing_scale(window.device_pixel_ratio(), is_mobile(css_width));
        let backing = (
            (css_width * scale).round() as u32,
            (css_height * scale).round() as u32,
        );
        if backing != d.backing {
            canvas.set_width(backing.0);
            canvas.set_height(backing.1);
            d.backing = backing;
            d.drawn = None;
        }

        let position = if d.sequence.playback_enabled() {
            d.position
        } else {
            0.0
        };
        // nothing decoded nearby: keep whatever is on the canvas
        let Some(index) = d.sequence.resolve_frame(position) else {
            return;
        };
        if d.drawn == Some(index) {
            return;
        }
        let Some(image) = d.images.get(index).and_then(Option::as_ref) else {
            return;
        };
        let Some(ctx) = context_2d(canvas) else {
            return;
        };
        let (width, height) = (backing.0 as f64, backing.1 as f64);
        let Some((x, y, w, h)) = cover_rect(
            image.natural_width() as f64,
            image.natural_height() as f64,
            width,
            height,
        ) else {
            return;
        };

        ctx.set_image_smoothing_enabled(true);
        ctx.set_image_smoothing_quality(ImageSmoothingQuality::High);
        ctx.clear_rect(0.0, 0.0, width, height);
        if ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)
            .is_ok()
        {
            d.drawn = Some(index);
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
