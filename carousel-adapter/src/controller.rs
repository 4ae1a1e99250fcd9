use carousel::{Carousel, CarouselOptions, ManualDirection};

use crate::{Easing, Tween};

/// Default duration of an animated manual scroll.
const DEFAULT_SCROLL_DURATION_MS: u64 = 480;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and
/// composes the full widget behavior: frame-driven auto-advance, the
/// hover/interaction gate, and tween-based manual scrolling.
///
/// This type does not hold any UI objects. A host drives it by calling:
/// - `on_viewport_width` / `on_track_width` when layout changes
/// - `on_pointer_enter` / `on_pointer_leave` for the hover gate
/// - `scroll(direction, now_ms)` when an arrow is clicked
/// - `tick(now_ms)` each frame, applying the returned offset to its real
///   scroll container
///
/// Wrap corrections come back through `tick` as part of the returned offset
/// and must be applied instantly; only the manual scroll is animated.
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    tween: Option<Tween>,
    viewport_width: u32,
    scroll_duration_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(c: Carousel) -> Self {
        Self {
            c,
            tween: None,
            viewport_width: 0,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel {
        self.c
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms.max(1);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Drops any active manual-scroll tween. The offset stays wherever the
    /// last sample put it; the next tick wrap-corrects if needed.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_width(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
    }

    pub fn on_track_width(&mut self, track_width: u64) {
        self.c.set_track_width(track_width);
    }

    pub fn on_pointer_enter(&mut self) {
        self.c.set_hovered(true);
    }

    pub fn on_pointer_leave(&mut self) {
        self.c.set_hovered(false);
    }

    /// Services a manual "scroll left/right" request.
    ///
    /// Pre-corrects the offset across the wrap boundary in the direction of
    /// travel (instantly), then starts a tween to a viewport-proportional
    /// target. A click landing mid-animation replaces the running tween; the
    /// replacement starts from the pre-corrected offset, not from the old
    /// tween's last sample, so the pre-correction is never undone.
    ///
    /// Returns the tween target.
    pub fn scroll(&mut self, direction: ManualDirection, now_ms: u64) -> u64 {
        let from = self.c.prepare_manual(direction);
        let to = self.c.manual_target(direction, self.viewport_width);
        self.tween = Some(Tween::new(
            from,
            to,
            now_ms,
            self.scroll_duration_ms,
            self.easing,
        ));
        to
    }

    /// Advances the widget by one frame and returns the offset the host
    /// should apply.
    ///
    /// While a manual tween is active it drives the offset (auto-advance is
    /// suspended); when it finishes, a wrap correction snaps the offset back
    /// into the middle copy before auto-advance resumes. Otherwise this is
    /// the carousel's auto tick, gated by the hover flag.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        if let Some(tween) = self.tween {
            self.c.set_offset(tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.tween = None;
                self.c.wrap_correct();
            }
            return self.c.offset();
        }
        self.c.tick().offset
    }
}
