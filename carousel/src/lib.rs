//! A headless infinite-looping carousel engine.
//!
//! For adapter-level utilities (smooth manual scrolling, frame tasks), see the
//! `carousel-adapter` crate.
//!
//! The engine owns the scroll bookkeeping for a marquee-style carousel: the track
//! renders the card list three times back-to-back, and the engine keeps the
//! visible window perpetually inside the middle copy by applying instantaneous
//! wrap corrections of exactly one copy-width. Because any two offsets one
//! copy-width apart show pixel-identical content, the corrections are invisible
//! and the carousel appears to scroll without bound.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the rendered track width (setter or injected provider)
//! - one `tick()` per animation frame
//! - pointer enter/leave events for the hover gate
//! - the offset write-back into its real scroll container
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod state;
mod types;
mod visibility;


pub use carousel::Carousel;
pub use options::{
    CardWidthFn, CarouselOptions, InitialOffset, OnChangeCallback, TrackWidthProvider,
};
pub use state::{FrameState, ScrollState, TrackState};
pub use types::{COPIES, Card, ManualDirection, Slot, TickResult, WrapCorrection};
pub use visibility::{ElementKey, VisibilityOptions, VisibilityRegistry, VisibilityTrigger};
