/// A lightweight, serializable snapshot of the track geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackState {
    /// Full rendered width of the three-copy track, in pixels.
    pub width: u64,
}

/// A lightweight, serializable snapshot of the scroll loop state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub hovered: bool,
}

/// A combined snapshot of track + scroll state.
///
/// Useful for restoring a carousel across host re-layouts without coupling the
/// engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub track: TrackState,
    pub scroll: ScrollState,
}
