//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the loop math and state.
//! This crate provides small, framework-neutral helpers commonly needed by
//! hosts:
//!
//! - A [`Controller`] composing auto-advance, the hover gate and tween-based
//!   manual scrolling into one frame-driven widget
//! - The animation loop as an explicit cancellable task ([`FrameTask`] /
//!   [`FrameHandle`]), so the teardown contract is testable without a real
//!   display refresh driver
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod frame;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use frame::{FrameHandle, FrameTask};
pub use tween::{Easing, Tween};
