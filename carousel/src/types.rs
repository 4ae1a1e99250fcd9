use alloc::string::String;

/// Number of consecutive copies of the card list laid out on the track.
///
/// Three copies (previous, current, next) leave a full copy of slack on either
/// side of the middle one, so a wrap correction never exposes an empty edge.
pub const COPIES: u64 = 3;

/// Direction of a manual "scroll left/right" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManualDirection {
    Left,
    Right,
}

/// An instantaneous one-copy-width jump applied when the offset strays outside
/// the middle copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapCorrection {
    /// The offset was pushed ahead by one copy-width (it had drifted into the
    /// first copy, at or below the wrap epsilon).
    Forward,
    /// The offset was pulled back by one copy-width (it had reached the third
    /// copy, at or past twice the copy-width).
    Backward,
}

/// Outcome of a single animation-frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickResult {
    /// The post-correction scroll offset the host should apply this frame.
    pub offset: u64,
    /// Whether the offset auto-advanced (false while hovered or when the
    /// track has no measurable width).
    pub advanced: bool,
    /// The wrap correction applied this tick, if any.
    pub correction: Option<WrapCorrection>,
}

/// A display card. The engine treats this as opaque immutable input; it is
/// never validated or transformed, only positioned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Internal page route activated when the card is clicked outside a drag.
    pub link: String,
    pub image: String,
    pub icon: String,
}

/// One card occurrence on the rendered track.
///
/// The same card index appears once per copy; slots exactly one copy-width
/// apart are visually identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Which copy this occurrence belongs to (0, 1 or 2).
    pub copy: usize,
    /// Card index within the copy.
    pub index: usize,
    /// Start offset on the track, in pixels.
    pub start: u64,
    /// Width on the track, in pixels.
    pub width: u64,
}

impl Slot {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.width)
    }
}
