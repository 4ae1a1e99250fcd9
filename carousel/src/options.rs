use alloc::sync::Arc;

use crate::carousel::Carousel;

/// A callback fired when the carousel's observable state changes.
///
/// Hosts typically use this to schedule a re-render or to push the new offset
/// into their real scroll container.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Estimated width in pixels of the card at a given index (one copy).
///
/// Used to derive the track width whenever no live measurement is available.
pub type CardWidthFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// A capability that reads the live rendered width of the whole track.
///
/// The engine re-queries this on every tick instead of caching the result,
/// since the width depends on viewport size. Abstracting the measurement as a
/// closure keeps the wrap arithmetic unit-testable without a rendering
/// surface.
pub type TrackWidthProvider = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// Seed the offset to one copy-width, so the carousel rests at the start
    /// of the middle copy. This is the default.
    MiddleCopy,
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `Carousel::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self, copy_width: u64) -> u64 {
        match self {
            Self::MiddleCopy => copy_width,
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::MiddleCopy
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MiddleCopy => f.write_str("MiddleCopy"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: closures are stored in `Arc`s so hosts can tweak a few
/// fields and call `Carousel::set_options` without reallocating them.
pub struct CarouselOptions {
    /// Number of cards in one copy of the list.
    pub count: usize,
    pub card_width: CardWidthFn,

    /// Pixels the offset auto-advances per tick while not hovered.
    pub step: u32,

    /// Offsets at or below this value are treated as "strayed into the first
    /// copy" and corrected forward by one copy-width. A small slack (rather
    /// than exactly 0) absorbs sub-pixel rounding in host scroll containers.
    pub wrap_epsilon: u64,

    /// Enables/disables the engine. When disabled, ticks are no-ops and query
    /// methods return empty results.
    pub enabled: bool,

    /// Viewport widths strictly below this are "narrow" for manual scrolling.
    pub narrow_breakpoint: u32,
    /// Fraction of the viewport width a manual scroll travels on narrow
    /// viewports (near one full card).
    pub narrow_fraction: f32,
    /// Fraction of the viewport width a manual scroll travels on wide
    /// viewports (roughly one card group).
    pub wide_fraction: f32,

    /// The initial rendered track width, if already known at construction.
    pub initial_track_width: Option<u64>,

    /// Initial scroll offset.
    pub initial_offset: InitialOffset,

    /// Optional live track width measurement, re-read on every tick.
    pub track_width_provider: Option<TrackWidthProvider>,

    /// Optional callback fired when the carousel's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    /// Creates options for a carousel of `count` cards per copy.
    ///
    /// `card_width(i)` should return the card's rendered width estimate in
    /// pixels. The estimate only matters until the host reports a live track
    /// width.
    pub fn new(count: usize, card_width: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            card_width: Arc::new(card_width),
            step: 1,
            wrap_epsilon: 5,
            enabled: true,
            narrow_breakpoint: 768,
            narrow_fraction: 0.85,
            wide_fraction: 0.30,
            initial_track_width: None,
            initial_offset: InitialOffset::default(),
            track_width_provider: None,
            on_change: None,
        }
    }

    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn with_wrap_epsilon(mut self, wrap_epsilon: u64) -> Self {
        self.wrap_epsilon = wrap_epsilon;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_manual_fractions(mut self, narrow_fraction: f32, wide_fraction: f32) -> Self {
        self.narrow_fraction = narrow_fraction;
        self.wide_fraction = wide_fraction;
        self
    }

    pub fn with_narrow_breakpoint(mut self, narrow_breakpoint: u32) -> Self {
        self.narrow_breakpoint = narrow_breakpoint;
        self
    }

    pub fn with_initial_track_width(mut self, initial_track_width: Option<u64>) -> Self {
        self.initial_track_width = initial_track_width;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_track_width_provider(
        mut self,
        provider: Option<impl Fn() -> u64 + Send + Sync + 'static>,
    ) -> Self {
        self.track_width_provider = provider.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            card_width: Arc::clone(&self.card_width),
            step: self.step,
            wrap_epsilon: self.wrap_epsilon,
            enabled: self.enabled,
            narrow_breakpoint: self.narrow_breakpoint,
            narrow_fraction: self.narrow_fraction,
            wide_fraction: self.wide_fraction,
            initial_track_width: self.initial_track_width,
            initial_offset: self.initial_offset.clone(),
            track_width_provider: self.track_width_provider.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("step", &self.step)
            .field("wrap_epsilon", &self.wrap_epsilon)
            .field("enabled", &self.enabled)
            .field("narrow_breakpoint", &self.narrow_breakpoint)
            .field("narrow_fraction", &self.narrow_fraction)
            .field("wide_fraction", &self.wide_fraction)
            .field("initial_track_width", &self.initial_track_width)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
