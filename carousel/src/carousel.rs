use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{
    COPIES, CarouselOptions, FrameState, ManualDirection, ScrollState, Slot, TickResult,
    TrackState, WrapCorrection,
};

/// A headless infinite-looping carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - The host drives it by reporting track geometry and pointer events and by
///   calling [`Carousel::tick`] once per animation frame.
/// - The returned offsets are applied by the host to its real scroll
///   container; wrap corrections must be applied without animation.
///
/// The track consists of [`COPIES`] consecutive copies of the card list. The
/// engine keeps the offset logically inside the middle copy: whenever a tick
/// or a manual scroll pushes it into the first or third copy, the offset jumps
/// by exactly one copy-width. The two positions are pixel-identical, so the
/// jump is unobservable.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    /// Prefix sums of the card width estimates for one copy; `prefix[count]`
    /// is the estimated copy width.
    prefix: Vec<u64>,
    /// Live track width reported by the host, which takes precedence over the
    /// estimate-derived width.
    measured_width: Option<u64>,
    offset: u64,
    hovered: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a new carousel from options.
    ///
    /// If `options.initial_track_width` is set it is applied immediately, and
    /// the initial offset is resolved against the resulting copy-width (one
    /// copy-width in by default, so the middle copy is showing at rest).
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            count = options.count,
            enabled = options.enabled,
            step = options.step,
            "Carousel::new"
        );
        let mut c = Self {
            prefix: Vec::new(),
            measured_width: options.initial_track_width,
            offset: 0,
            hovered: false,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.rebuild_widths();
        c.offset = c.options.initial_offset.resolve(c.copy_width());
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    fn reset_to_initial(&mut self) {
        self.measured_width = self.options.initial_track_width;
        self.offset = self.options.initial_offset.resolve(self.copy_width());
        self.hovered = false;
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        let prev_count = self.options.count;
        let was_enabled = self.options.enabled;
        let card_width_unchanged = Arc::ptr_eq(&self.options.card_width, &options.card_width);
        self.options = options;
        ctrace!(
            count = self.options.count,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );

        if self.options.count != prev_count || !card_width_unchanged {
            self.rebuild_widths();
        }
        if !self.options.enabled {
            self.hovered = false;
        } else if !was_enabled {
            self.reset_to_initial();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, which decides what needs rebuilding.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame a host might update the track width, the hover flag
    /// and the offset together; without batching each setter may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_widths();
        self.notify();
    }

    pub fn set_card_width(&mut self, f: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.options.card_width = Arc::new(f);
        self.rebuild_widths();
        self.notify();
    }

    pub fn set_step(&mut self, step: u32) {
        if self.options.step == step {
            return;
        }
        self.options.step = step;
        self.notify();
    }

    pub fn set_wrap_epsilon(&mut self, wrap_epsilon: u64) {
        if self.options.wrap_epsilon == wrap_epsilon {
            return;
        }
        self.options.wrap_epsilon = wrap_epsilon;
        self.notify();
    }

    pub fn set_track_width_provider(
        &mut self,
        provider: Option<impl Fn() -> u64 + Send + Sync + 'static>,
    ) {
        self.options.track_width_provider = provider.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if enabled {
            self.reset_to_initial();
        } else {
            self.hovered = false;
        }
        self.notify();
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Sets the hover flag. Takes effect on the next tick; no immediate
    /// offset change is required.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.notify();
    }

    /// Full width of the three-copy track: the live measured width when one
    /// has been reported, else three times the estimated copy width.
    pub fn track_width(&self) -> u64 {
        match self.measured_width {
            Some(w) => w,
            None => self.estimated_copy_width().saturating_mul(COPIES),
        }
    }

    /// Width of one copy of the card list. Zero means "not laid out yet";
    /// every tick is then a no-op.
    pub fn copy_width(&self) -> u64 {
        self.track_width() / COPIES
    }

    /// Reports the live rendered track width (e.g. after a layout pass).
    pub fn set_track_width(&mut self, width: u64) {
        if self.measured_width == Some(width) {
            return;
        }
        self.measured_width = Some(width);
        self.offset = self.offset.min(self.track_width());
        self.notify();
    }

    /// Re-reads the injected width provider, if any, and returns the current
    /// track width.
    pub fn refresh_track_width(&mut self) -> u64 {
        if let Some(p) = self.options.track_width_provider.clone() {
            self.set_track_width(p());
        }
        self.track_width()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Sets the offset directly (clamped to the track). Used by adapters to
    /// write back sampled positions of an animated manual scroll; wrap
    /// correction is deliberately not applied here, the next tick (or an
    /// explicit [`Carousel::wrap_correct`]) handles it.
    pub fn set_offset(&mut self, offset: u64) {
        let clamped = offset.min(self.track_width());
        if self.offset == clamped {
            return;
        }
        self.offset = clamped;
        self.notify();
    }

    /// Advances the loop by one animation frame.
    ///
    /// Refreshes the track width from the injected provider, auto-advances by
    /// `step` unless hovered, then wrap-corrects. Returns the offset the host
    /// should apply this frame. A zero copy-width makes this a no-op.
    ///
    /// Ticks are strictly sequential; the host's frame scheduler must not
    /// overlap invocations (single-threaded, cooperative scheduling).
    pub fn tick(&mut self) -> TickResult {
        if !self.options.enabled {
            return TickResult {
                offset: self.offset,
                advanced: false,
                correction: None,
            };
        }
        let mut advanced = false;
        let mut correction = None;
        self.batch_update(|c| {
            // The width refresh goes through the setter so a provider-reported
            // change notifies even on an otherwise silent (hovered) tick.
            if let Some(p) = c.options.track_width_provider.clone() {
                c.set_track_width(p());
            }
            let cw = c.copy_width();
            if cw == 0 {
                return;
            }
            if !c.hovered && c.options.step > 0 {
                c.offset = c.offset.saturating_add(c.options.step as u64);
                advanced = true;
            }
            // The correction still runs while hovered: a manual scroll may
            // have parked the offset outside the middle copy.
            correction = c.wrap_correct_with(cw);
            if advanced || correction.is_some() {
                c.notify();
            }
        });
        ctrace!(offset = self.offset, advanced, "tick");
        TickResult {
            offset: self.offset,
            advanced,
            correction,
        }
    }

    /// Applies the wrap correction immediately, outside of a tick.
    ///
    /// Adapters call this when an animated manual scroll finishes, so the
    /// offset is back inside the middle copy before auto-advance resumes.
    pub fn wrap_correct(&mut self) -> Option<WrapCorrection> {
        if !self.options.enabled {
            return None;
        }
        let cw = self.copy_width();
        if cw == 0 {
            return None;
        }
        let correction = self.wrap_correct_with(cw);
        if correction.is_some() {
            self.notify();
        }
        correction
    }

    fn wrap_correct_with(&mut self, cw: u64) -> Option<WrapCorrection> {
        debug_assert!(cw > 0);
        let mut correction = None;
        while self.offset >= cw.saturating_mul(2) {
            self.offset -= cw;
            correction = Some(WrapCorrection::Backward);
        }
        if self.offset <= self.options.wrap_epsilon {
            self.offset = self.offset.saturating_add(cw);
            correction = Some(WrapCorrection::Forward);
        }
        correction
    }

    /// Defensively pre-corrects the offset across the wrap boundary in the
    /// direction of travel, so a subsequent animated manual scroll has a full
    /// copy-width of room and never crosses a wrap point mid-animation.
    ///
    /// Returns the (possibly corrected) offset the animation should start
    /// from.
    pub fn prepare_manual(&mut self, direction: ManualDirection) -> u64 {
        if !self.options.enabled {
            return self.offset;
        }
        let cw = self.copy_width();
        if cw == 0 {
            return self.offset;
        }
        match direction {
            ManualDirection::Left => {
                if self.offset < cw {
                    self.offset = self.offset.saturating_add(cw);
                    ctrace!(offset = self.offset, "prepare_manual: corrected forward");
                    self.notify();
                }
            }
            ManualDirection::Right => {
                if self.offset >= cw.saturating_mul(2) {
                    self.offset -= cw;
                    ctrace!(offset = self.offset, "prepare_manual: corrected backward");
                    self.notify();
                }
            }
        }
        self.offset
    }

    /// Distance in pixels a manual scroll travels, adapted to how many cards
    /// fit on screen: nearly a full viewport on narrow viewports, roughly one
    /// card group on wide ones.
    pub fn manual_delta(&self, viewport_width: u32) -> u64 {
        let fraction = if viewport_width < self.options.narrow_breakpoint {
            self.options.narrow_fraction
        } else {
            self.options.wide_fraction
        };
        (viewport_width as f32 * fraction) as u64
    }

    /// Target offset of a manual scroll issued now. Call
    /// [`Carousel::prepare_manual`] first; the animated transition between
    /// the current offset and the target is the adapter's job.
    pub fn manual_target(&self, direction: ManualDirection, viewport_width: u32) -> u64 {
        let delta = self.manual_delta(viewport_width);
        let target = match direction {
            ManualDirection::Left => self.offset.saturating_sub(delta),
            ManualDirection::Right => self.offset.saturating_add(delta),
        };
        target.min(self.track_width())
    }

    /// Index of the card rendered at `offset`, if the offset is on the track.
    ///
    /// Content identity depends only on `offset % copy_width`, which is what
    /// makes wrap corrections unobservable.
    pub fn card_at(&self, offset: u64) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        let cw = self.copy_width();
        let sum = self.estimated_copy_width();
        if cw == 0 || sum == 0 || offset >= cw.saturating_mul(COPIES) {
            return None;
        }
        let local = offset % cw;
        let mut card = 0;
        for i in 0..self.options.count {
            if self.card_start_in_copy(i, cw) <= local {
                card = i;
            } else {
                break;
            }
        }
        Some(card)
    }

    /// The card occurrence rendered at `offset`, with its track geometry.
    pub fn slot_at(&self, offset: u64) -> Option<Slot> {
        let index = self.card_at(offset)?;
        let cw = self.copy_width();
        let copy = (offset / cw) as usize;
        Some(self.slot(copy, index, cw))
    }

    /// Emits every card occurrence intersecting the window
    /// `[offset, offset + viewport_width)`, in track order, without
    /// allocating.
    pub fn for_each_visible_slot(&self, viewport_width: u32, f: impl FnMut(Slot)) {
        self.for_each_visible_slot_for(self.offset, viewport_width, f);
    }

    /// Same as [`Carousel::for_each_visible_slot`] for an explicit offset.
    pub fn for_each_visible_slot_for(
        &self,
        offset: u64,
        viewport_width: u32,
        mut f: impl FnMut(Slot),
    ) {
        if !self.options.enabled || self.options.count == 0 || viewport_width == 0 {
            return;
        }
        let cw = self.copy_width();
        if cw == 0 || self.estimated_copy_width() == 0 {
            return;
        }
        let view_end = offset.saturating_add(viewport_width as u64);

        'copies: for copy in 0..COPIES as usize {
            for index in 0..self.options.count {
                let slot = self.slot(copy, index, cw);
                if slot.start >= view_end {
                    break 'copies;
                }
                if slot.end() > offset {
                    f(slot);
                }
            }
        }
    }

    /// Collects visible slots into `out` (clears `out` first).
    pub fn collect_visible_slots(&self, viewport_width: u32, out: &mut Vec<Slot>) {
        out.clear();
        self.for_each_visible_slot(viewport_width, |s| out.push(s));
    }

    pub fn track_state(&self) -> TrackState {
        TrackState {
            width: self.track_width(),
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            hovered: self.hovered,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            track: self.track_state(),
            scroll: self.scroll_state(),
        }
    }

    pub fn restore_track_state(&mut self, track: TrackState) {
        self.set_track_width(track.width);
    }

    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.batch_update(|c| {
            c.set_offset(scroll.offset);
            c.set_hovered(scroll.hovered);
        });
    }

    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.batch_update(|c| {
            c.restore_track_state(frame.track);
            c.restore_scroll_state(frame.scroll);
        });
    }

    /// Estimated width of one copy (sum of the card width estimates).
    fn estimated_copy_width(&self) -> u64 {
        self.prefix.last().copied().unwrap_or(0)
    }

    /// Start of card `index` within a copy, scaled from the estimate space to
    /// the live copy width. Exact when the live width matches the estimates
    /// (and when cards are uniform), proportional otherwise.
    fn card_start_in_copy(&self, index: usize, cw: u64) -> u64 {
        let sum = self.estimated_copy_width();
        if sum == 0 {
            return 0;
        }
        ((self.prefix[index] as u128 * cw as u128) / sum as u128) as u64
    }

    fn slot(&self, copy: usize, index: usize, cw: u64) -> Slot {
        let start_in_copy = self.card_start_in_copy(index, cw);
        let end_in_copy = self.card_start_in_copy(index + 1, cw);
        Slot {
            copy,
            index,
            start: (copy as u64).saturating_mul(cw).saturating_add(start_in_copy),
            width: end_in_copy.saturating_sub(start_in_copy),
        }
    }

    fn rebuild_widths(&mut self) {
        cdebug!(count = self.options.count, "rebuild_widths");
        self.prefix.clear();
        self.prefix.reserve_exact(self.options.count + 1);
        let mut acc = 0u64;
        self.prefix.push(0);
        for i in 0..self.options.count {
            acc = acc.saturating_add((self.options.card_width)(i) as u64);
            self.prefix.push(acc);
        }
    }
}
