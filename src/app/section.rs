use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::section::{SectionName, SectionTracker};

/// Share of a section that has to be on screen before it becomes active.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Single owner of the active nav section.
#[derive(Clone, Copy)]
pub struct ActiveSectionContext {
    tracker: RwSignal<SectionTracker>,
}

impl ActiveSectionContext {
    pub fn active(&self) -> SectionName {
        self.tracker.with(|t| t.active())
    }

    /// Explicit nav click; suppresses scroll observations for the cooldown.
    pub fn navigate_to(&self, section: SectionName) {
        let now = now_ms();
        self.tracker.update(|t| t.click(section, now));
    }

    pub fn observe(&self, section: SectionName) {
        let now = now_ms();
        self.tracker.maybe_update(|t| t.observe_visible(section, now));
    }
}

pub fn provide_active_section_context() -> ActiveSectionContext {
    let ctx = ActiveSectionContext {
        tracker: RwSignal::new(SectionTracker::default()),
    };
    provide_context(ctx);
    ctx
}

pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Marks `section` active whenever at least `threshold` of the returned node
/// is visible. The observer belongs to the calling component and goes away
/// with it.
pub fn use_section_in_view(section: SectionName, threshold: f64) -> NodeRef<html::Section> {
    let ctx = expect_context::<ActiveSectionContext>();
    let node = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            // browsers report ratios a hair under the threshold they fired for
            let visible = entries
                .iter()
                .any(|e| e.is_intersecting() && e.intersection_ratio() + 0.01 >= threshold);
            if visible {
                ctx.observe(section);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    node
}
