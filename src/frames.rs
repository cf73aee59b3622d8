//! Image-sequence scrubber core.
//!
//! The hero section fakes a video by drawing numbered still frames onto a
//! canvas as the page scrolls. Frames stream in the background: the first
//! frame is fetched on its own, the rest in fixed-size batches. This module
//! owns the bookkeeping for that process and the rule the renderer relies on:
//! [`FrameSequence::resolve_frame`] only ever hands back a frame that has
//! finished decoding.

use std::{ops::Range, time::Duration};

use thiserror::Error;

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll distance the hero stays pinned for.
pub const PIN_DISTANCE_PX: f64 = 2000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceConfig {
    pub frame_count: usize,
    pub frame_dir: &'static str,
    pub batch_size: usize,
    /// Frames `1..critical_batch_end` load together right after the first one.
    pub critical_batch_end: usize,
    pub required_fraction: f64,
    pub max_failures: usize,
    pub max_lookback: usize,
    pub load_timeout: Duration,
    pub min_load_time: Duration,
    pub progress_step: u8,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: 120,
            frame_dir: "/assets/snow",
            batch_size: 15,
            critical_batch_end: 15,
            required_fraction: 0.5,
            max_failures: 24,
            max_lookback: 10,
            load_timeout: Duration::from_secs(20),
            min_load_time: Duration::from_millis(800),
            progress_step: 5,
        }
    }
}

impl SequenceConfig {
    /// Frame files are numbered from 1 and zero padded to three digits.
    pub fn frame_url(&self, index: usize) -> String {
        format!("{}/ezgif-frame-{:03}.png", self.frame_dir, index + 1)
    }

    pub fn required_frames(&self) -> usize {
        (self.frame_count as f64 * self.required_fraction).ceil() as usize
    }

    /// Load plan for everything after frame 0, in order.
    pub fn batches(&self) -> Vec<Range<usize>> {
        if self.frame_count <= 1 {
            return Vec::new();
        }
        let mut batches = Vec::new();
        let critical_end = self.critical_batch_end.clamp(1, self.frame_count);
        if critical_end > 1 {
            batches.push(1..critical_end);
        }
        let step = self.batch_size.max(1);
        let mut start = critical_end;
        while start < self.frame_count {
            let end = (start + step).min(self.frame_count);
            batches.push(start..end);
            start = end;
        }
        batches
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Pending,
    Decoded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    NotStarted,
    /// Waiting on the required share of frames.
    Loading,
    /// Enough frames decoded; waiting out the minimum load time.
    PartiallyReady,
    /// Scroll-driven playback is on.
    Playback,
    /// Gave up waiting. Terminal; still counts as ready.
    Error,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("hero frames did not load within {0:?}")]
    TimedOut(Duration),
    #[error("{failed} hero frames failed to load (limit {ceiling})")]
    TooManyFailures { failed: usize, ceiling: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    /// The priority frame decoded; an initial draw is possible.
    FirstFrame,
    Progress(u8),
    Ready,
    Failed(LoadError),
}

#[derive(Debug, Clone)]
pub struct FrameSequence {
    config: SequenceConfig,
    frames: Vec<FrameStatus>,
    decoded: usize,
    failed: usize,
    phase: LoadPhase,
    min_time_elapsed: bool,
    reported_progress: u8,
    error: Option<LoadError>,
}

impl FrameSequence {
    pub fn new(config: SequenceConfig) -> Self {
        let frames = vec![FrameStatus::Pending; config.frame_count];
        Self {
            config,
            frames,
            decoded: 0,
            failed: 0,
            phase: LoadPhase::NotStarted,
            min_time_elapsed: false,
            reported_progress: 0,
            error: None,
        }
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn decoded_count(&self) -> usize {
        self.decoded
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn status(&self, index: usize) -> Option<FrameStatus> {
        self.frames.get(index).copied()
    }

    pub fn is_decoded(&self, index: usize) -> bool {
        self.status(index) == Some(FrameStatus::Decoded)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Playback | LoadPhase::Error)
    }

    pub fn has_error(&self) -> bool {
        self.phase == LoadPhase::Error
    }

    pub fn playback_enabled(&self) -> bool {
        self.is_ready()
    }

    /// Settled (decoded or failed) frames as a rounded percentage.
    pub fn progress(&self) -> u8 {
        if self.config.frame_count == 0 {
            return 100;
        }
        let settled = (self.decoded + self.failed) as f64;
        ((settled / self.config.frame_count as f64) * 100.0).round() as u8
    }

    pub fn start(&mut self) {
        if self.phase == LoadPhase::NotStarted {
            log::debug!(
                "loading {} hero frames from {}",
                self.config.frame_count,
                self.config.frame_dir
            );
            self.phase = LoadPhase::Loading;
        }
    }

    pub fn record_decoded(&mut self, index: usize) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        if !self.settle(index, FrameStatus::Decoded) {
            return events;
        }
        self.decoded += 1;
        if index == 0 {
            events.push(LoadEvent::FirstFrame);
        }
        self.push_progress(&mut events);
        self.advance(&mut events);
        events
    }

    /// A failed frame counts towards progress but is never drawn.
    pub fn record_failed(&mut self, index: usize) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        if !self.settle(index, FrameStatus::Failed) {
            return events;
        }
        self.failed += 1;
        log::debug!("hero frame {index} failed ({} so far)", self.failed);
        self.push_progress(&mut events);
        if self.failed > self.config.max_failures {
            self.fail(
                LoadError::TooManyFailures {
                    failed: self.failed,
                    ceiling: self.config.max_failures,
                },
                &mut events,
            );
        }
        self.advance(&mut events);
        events
    }

    pub fn min_load_time_elapsed(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        self.min_time_elapsed = true;
        self.advance(&mut events);
        events
    }

    pub fn timed_out(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        if matches!(
            self.phase,
            LoadPhase::NotStarted | LoadPhase::Loading | LoadPhase::PartiallyReady
        ) {
            self.fail(LoadError::TimedOut(self.config.load_timeout), &mut events);
        }
        events
    }

    /// Maps a fractional frame position to a drawable frame.
    ///
    /// The nominal frame is `floor(position)` clamped to the sequence. If it
    /// has not decoded yet, up to `max_lookback` earlier frames are tried.
    /// `None` means nothing nearby is drawable and the canvas should be left
    /// as it is.
    pub fn resolve_frame(&self, position: f64) -> Option<usize> {
        let last = self.frames.len().checked_sub(1)?;
        let nominal = if position.is_finite() && position > 0.0 {
            (position.floor() as usize).min(last)
        } else {
            0
        };
        for back in 0..=self.config.max_lookback {
            let index = nominal.checked_sub(back)?;
            if self.is_decoded(index) {
                return Some(index);
            }
        }
        None
    }

    fn settle(&mut self, index: usize, status: FrameStatus) -> bool {
        match self.frames.get_mut(index) {
            Some(slot) if *slot == FrameStatus::Pending => {
                *slot = status;
                if self.phase == LoadPhase::NotStarted {
                    self.phase = LoadPhase::Loading;
                }
                true
            }
            _ => false,
        }
    }

    fn push_progress(&mut self, events: &mut Vec<LoadEvent>) {
        let progress = self.progress();
        let stepped = progress >= self.reported_progress.saturating_add(self.config.progress_step);
        let finished = progress == 100 && self.reported_progress < 100;
        if stepped || finished {
            self.reported_progress = progress;
            events.push(LoadEvent::Progress(progress));
        }
    }

    fn advance(&mut self, events: &mut Vec<LoadEvent>) {
        if self.phase == LoadPhase::Loading && self.decoded >= self.config.required_frames() {
            self.phase = LoadPhase::PartiallyReady;
        }
        if self.phase == LoadPhase::PartiallyReady && self.min_time_elapsed {
            log::debug!("hero playback enabled after {} frames", self.decoded);
            self.phase = LoadPhase::Playback;
            events.push(LoadEvent::Ready);
        }
    }

    fn fail(&mut self, error: LoadError, events: &mut Vec<LoadEvent>) {
        if self.phase == LoadPhase::Error {
            return;
        }
        log::warn!("{error}");
        self.phase = LoadPhase::Error;
        self.error = Some(error.clone());
        events.push(LoadEvent::Failed(error));
    }
}

/// How far through the pinned region the page has scrolled, 0..=1.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let scrollable = rect_height - viewport_height;
    if !rect_top.is_finite() || !scrollable.is_finite() {
        return 0.0;
    }
    if scrollable <= 0.0 {
        return if rect_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-rect_top / scrollable).clamp(0.0, 1.0)
}

/// Everything the hero draws at one point of the pinned timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroKeyframe {
    pub frame: f64,
    pub canvas_opacity: f64,
    pub canvas_blur_px: f64,
    pub caption_opacity: f64,
    pub caption_offset_px: f64,
}

impl HeroKeyframe {
    const LENGTH: f64 = 10.0;
    const FADE_OUT_START: f64 = 8.5;
    const CANVAS_REST_OPACITY: f64 = 0.1;
    const CANVAS_REST_BLUR: f64 = 10.0;
    const CAPTION_TRAVEL: f64 = 50.0;

    pub fn at(progress: f64, frame_count: usize) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let t = progress * Self::LENGTH;

        let (canvas_opacity, canvas_blur_px) = if t < 1.0 {
            let e = ease_out(t);
            (
                lerp(Self::CANVAS_REST_OPACITY, 1.0, e),
                lerp(Self::CANVAS_REST_BLUR, 0.0, e),
            )
        } else if t > Self::FADE_OUT_START {
            let e = ease_in((t - Self::FADE_OUT_START) / (Self::LENGTH - Self::FADE_OUT_START));
            (
                lerp(1.0, Self::CANVAS_REST_OPACITY, e),
                lerp(0.0, Self::CANVAS_REST_BLUR, e),
            )
        } else {
            (1.0, 0.0)
        };

        let (caption_opacity, caption_offset_px) = if t <= 1.0 {
            (t, lerp(Self::CAPTION_TRAVEL, 0.0, t))
        } else if t <= 2.0 {
            let e = t - 1.0;
            (1.0 - e, lerp(0.0, -Self::CAPTION_TRAVEL, e))
        } else {
            (0.0, -Self::CAPTION_TRAVEL)
        };

        Self {
            frame: progress * frame_count.saturating_sub(1) as f64,
            canvas_opacity,
            canvas_blur_px,
            caption_opacity,
            caption_offset_px,
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in(t: f64) -> f64 {
    t * t
}

/// Destination rectangle that covers the viewport while keeping the image
/// aspect ratio, centred. `(x, y, width, height)`.
pub fn cover_rect(
    image_width: f64,
    image_height: f64,
    view_width: f64,
    view_height: f64,
) -> Option<(f64, f64, f64, f64)> {
    if image_width <= 0.0 || image_height <= 0.0 || view_width <= 0.0 || view_height <= 0.0 {
        return None;
    }
    let scale = (view_width / image_width).max(view_height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;
    Some((
        (view_width - width) / 2.0,
        (view_height - height) / 2.0,
        width,
        height,
    ))
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// Device pixel ratio used for the canvas backing store, capped lower on
/// mobile.
pub fn backing_scale(device_pixel_ratio: f64, mobile: bool) -> f64 {
    let cap = if mobile { 1.5 } else { 2.0 };
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    dpr.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SequenceConfig {
        SequenceConfig {
            frame_count: 20,
            batch_size: 4,
            critical_batch_end: 5,
            required_fraction: 0.5,
            max_failures: 3,
            max_lookback: 3,
            progress_step: 5,
            ..SequenceConfig::default()
        }
    }

    #[test]
    fn test_frame_urls_are_one_based_and_padded() {
        let config = SequenceConfig::default();
        assert_eq!(config.frame_url(0), "/assets/snow/ezgif-frame-001.png");
        assert_eq!(config.frame_url(119), "/assets/snow/ezgif-frame-120.png");
    }

    #[test]
    fn test_batches_cover_each_frame_once() {
        let config = SequenceConfig::default();
        let batches = config.batches();
        assert_eq!(batches.first(), Some(&(1..15)));
        let mut seen = vec![false; config.frame_count];
        seen[0] = true;
        for batch in &batches {
            assert!(batch.len() <= config.batch_size);
            for i in batch.clone() {
                assert!(!seen[i], "frame {i} scheduled twice");
                seen[i] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_batches_degenerate_sequences() {
        let config = SequenceConfig {
            frame_count: 1,
            ..SequenceConfig::default()
        };
        assert!(config.batches().is_empty());
        let config = SequenceConfig {
            frame_count: 3,
            critical_batch_end: 0,
            batch_size: 0,
            ..SequenceConfig::default()
        };
        assert_eq!(config.batches(), vec![1..2, 2..3]);
    }

    #[test]
    fn test_first_frame_event() {
        let mut seq = FrameSequence::new(small_config());
        seq.start();
        assert_eq!(seq.phase(), LoadPhase::Loading);
        let events = seq.record_decoded(0);
        assert_eq!(events.first(), Some(&LoadEvent::FirstFrame));
        assert_eq!(seq.resolve_frame(0.0), Some(0));
    }

    #[test]
    fn test_ready_needs_fraction_and_min_time() {
        let mut seq = FrameSequence::new(small_config());
        seq.start();
        for i in 0..9 {
            seq.record_decoded(i);
        }
        assert_eq!(seq.phase(), LoadPhase::Loading);
        seq.record_decoded(9);
        assert_eq!(seq.phase(), LoadPhase::PartiallyReady);
        assert!(!seq.is_ready());

        let events = seq.min_load_time_elapsed();
        assert_eq!(events, vec![LoadEvent::Ready]);
        assert_eq!(seq.phase(), LoadPhase::Playback);
        assert!(seq.is_ready());
        assert!(!seq.has_error());

        // later timeout is harmless
        assert!(seq.timed_out().is_empty());
        assert_eq!(seq.phase(), LoadPhase::Playback);
    }

    #[test]
    fn test_min_time_first_then_frames() {
        let mut seq = FrameSequence::new(small_config());
        seq.start();
        assert!(seq.min_load_time_elapsed().is_empty());
        let mut ready = false;
        for i in 0..10 {
            ready |= seq.record_decoded(i).contains(&LoadEvent::Ready);
        }
        assert!(ready);
    }

    #[test]
    fn test_timeout_forces_ready_with_error() {
        let mut seq = FrameSequence::new(small_config());
        seq.start();
        seq.record_decoded(0);
        let events = seq.timed_out();
        assert_eq!(
            events,
            vec![LoadEvent::Failed(LoadError::TimedOut(Duration::from_secs(20)))]
        );
        assert!(seq.is_ready());
        assert!(seq.has_error());

        // error is terminal, frames keep decoding
        seq.min_load_time_elapsed();
        for i in 1..20 {
            seq.record_decoded(i);
        }
        assert_eq!(seq.phase(), LoadPhase::Error);
        assert_eq!(seq.resolve_frame(19.0), Some(19));
    }

    #[test]
    fn test_failure_ceiling() {
        let mut seq = FrameSequence::new(small_config());
        seq.start();
        for i in 1..4 {
            assert!(!seq
                .record_failed(i)
                .iter()
                .any(|e| matches!(e, LoadEvent::Failed(_))));
        }
        let events = seq.record_failed(4);
        assert!(events.contains(&LoadEvent::Failed(LoadError::TooManyFailures {
            failed: 4,
            ceiling: 3
        })));
        assert!(seq.is_ready());
        assert!(seq.has_error());
        // a second failure event is never emitted
        assert!(!seq
            .record_failed(5)
            .iter()
            .any(|e| matches!(e, LoadEvent::Failed(_))));
    }

    #[test]
    fn test_duplicate_and_out_of_range_records_ignored() {
        let mut seq = FrameSequence::new(small_config());
        seq.record_decoded(3);
        assert!(seq.record_decoded(3).is_empty());
        assert!(seq.record_failed(3).is_empty());
        assert!(seq.record_decoded(99).is_empty());
        assert_eq!(seq.decoded_count(), 1);
        assert_eq!(seq.failed_count(), 0);
        assert_eq!(seq.status(3), Some(FrameStatus::Decoded));
    }

    #[test]
    fn test_progress_monotonic_and_throttled() {
        let mut seq = FrameSequence::new(small_config());
        let mut reported = Vec::new();
        for i in 0..20 {
            let events = if i % 7 == 3 {
                seq.record_failed(i)
            } else {
                seq.record_decoded(i)
            };
            for e in events {
                if let LoadEvent::Progress(p) = e {
                    reported.push(p);
                }
            }
        }
        assert_eq!(reported.last(), Some(&100));
        assert!(reported.windows(2).all(|w| w[1] >= w[0] + 5 || w[1] == 100));
        assert!(reported.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_resolve_walks_back_to_decoded() {
        let mut seq = FrameSequence::new(small_config());
        seq.record_decoded(0);
        seq.record_decoded(5);
        assert_eq!(seq.resolve_frame(7.9), Some(5));
        assert_eq!(seq.resolve_frame(5.0), Some(5));
        // lookback of 3 from 9 reaches 6 at most
        assert_eq!(seq.resolve_frame(9.2), None);
        assert_eq!(seq.resolve_frame(3.0), Some(0));
    }

    #[test]
    fn test_resolve_clamps_position() {
        let mut seq = FrameSequence::new(small_config());
        seq.record_decoded(0);
        seq.record_decoded(19);
        assert_eq!(seq.resolve_frame(500.0), Some(19));
        assert_eq!(seq.resolve_frame(-4.0), Some(0));
        assert_eq!(seq.resolve_frame(f64::NAN), Some(0));
        assert_eq!(seq.resolve_frame(f64::INFINITY), Some(0));
    }

    #[test]
    fn test_resolve_never_returns_undecoded_frame() {
        let mut seq = FrameSequence::new(small_config());
        for i in [0, 2, 3, 11, 12, 17] {
            seq.record_decoded(i);
        }
        for i in [1, 4, 13] {
            seq.record_failed(i);
        }
        let mut position = -1.0;
        while position < 25.0 {
            if let Some(i) = seq.resolve_frame(position) {
                assert!(seq.is_decoded(i), "resolved undecoded frame {i}");
                assert!(i as f64 <= position.max(0.0));
            }
            position += 0.25;
        }
    }

    #[test]
    fn test_empty_sequence() {
        let seq = FrameSequence::new(SequenceConfig {
            frame_count: 0,
            ..SequenceConfig::default()
        });
        assert_eq!(seq.resolve_frame(0.0), None);
        assert_eq!(seq.progress(), 100);
    }

    #[test]
    fn test_scroll_progress() {
        // section is 100vh + pin distance tall
        assert_eq!(scroll_progress(0.0, 2800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-1000.0, 2800.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-5000.0, 2800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 2800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-1.0, 500.0, 800.0), 1.0);
        assert_eq!(scroll_progress(f64::NAN, 2800.0, 800.0), 0.0);
    }

    #[test]
    fn test_keyframe_endpoints() {
        let start = HeroKeyframe::at(0.0, 120);
        assert_eq!(start.frame, 0.0);
        assert!((start.canvas_opacity - 0.1).abs() < 1e-9);
        assert!((start.canvas_blur_px - 10.0).abs() < 1e-9);
        assert_eq!(start.caption_opacity, 0.0);

        let caption = HeroKeyframe::at(0.1, 120);
        assert!((caption.caption_opacity - 1.0).abs() < 1e-9);
        assert!((caption.canvas_opacity - 1.0).abs() < 1e-9);

        let middle = HeroKeyframe::at(0.5, 120);
        assert_eq!(middle.canvas_opacity, 1.0);
        assert_eq!(middle.caption_opacity, 0.0);
        assert!((middle.frame - 59.5).abs() < 1e-9);

        let end = HeroKeyframe::at(1.0, 120);
        assert_eq!(end.frame, 119.0);
        assert!((end.canvas_opacity - 0.1).abs() < 1e-9);
        assert!((end.canvas_blur_px - 10.0).abs() < 1e-9);

        assert_eq!(HeroKeyframe::at(7.0, 120), end);
    }

    #[test]
    fn test_cover_rect() {
        // wide image on a tall screen: height fills, width overflows
        let (x, y, w, h) = cover_rect(1920.0, 1080.0, 400.0, 800.0).unwrap();
        assert!((h - 800.0).abs() < 1e-9);
        assert!(w > 400.0);
        assert!((x - (400.0 - w) / 2.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        assert!(cover_rect(0.0, 10.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn test_backing_scale() {
        assert_eq!(backing_scale(3.0, true), 1.5);
        assert_eq!(backing_scale(3.0, false), 2.0);
        assert_eq!(backing_scale(1.0, false), 1.0);
        assert_eq!(backing_scale(f64::NAN, false), 1.0);
        assert!(is_mobile(400.0));
        assert!(!is_mobile(1280.0));
    }
}
