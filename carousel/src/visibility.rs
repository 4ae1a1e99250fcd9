//! A reusable "has this element been seen" gate for entrance animations.
//!
//! The host feeds intersection updates (visible fraction of the observed
//! element) into a [`VisibilityTrigger`]; page sections read the latched flag
//! to gate their fade-in. [`VisibilityRegistry`] tracks one trigger per
//! element key so a watch is never registered twice for the same element.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type WatchMap<K> = HashMap<K, VisibilityTrigger>;
#[cfg(not(feature = "std"))]
type WatchMap<K> = BTreeMap<K, VisibilityTrigger>;

#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ElementKey for K {}

#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ElementKey for K {}

/// Configuration for a [`VisibilityTrigger`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityOptions {
    /// Fraction of the element's area that must be visible to trigger.
    pub threshold: f32,
    /// Stop watching after the first trigger; the flag then never changes
    /// again.
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

/// A one-shot visibility latch: `Unseen` until the observed element first
/// intersects the viewport past the threshold, `Seen` from then on.
///
/// The flag never resets to false, even without `trigger_once`; the
/// non-latching variant only keeps the watch registered.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityTrigger {
    options: VisibilityOptions,
    seen: bool,
    watching: bool,
}

impl VisibilityTrigger {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            seen: false,
            watching: true,
        }
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Whether intersection updates are still being consumed. False after
    /// `release`, or after the first trigger with `trigger_once`.
    pub fn is_watching(&self) -> bool {
        self.watching
    }

    /// Feeds one intersection update (`ratio` = visible fraction of the
    /// element, 0.0 when not intersecting). Returns the current flag.
    pub fn on_intersection(&mut self, ratio: f32) -> bool {
        if !self.watching {
            return self.seen;
        }
        if ratio >= self.options.threshold {
            if !self.seen {
                self.seen = true;
                ctrace!(ratio, "visibility latched");
            }
            if self.options.trigger_once {
                self.watching = false;
            }
        }
        self.seen
    }

    /// Revokes the watch. The host calls this on unmount regardless of
    /// whether the trigger ever fired.
    pub fn release(&mut self) {
        self.watching = false;
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}

/// Owns the visibility triggers of a mounted page, keyed by element.
///
/// Guarantees at most one watch registration per element key; dropping the
/// registry releases every watch.
#[derive(Clone, Debug)]
pub struct VisibilityRegistry<K> {
    watches: WatchMap<K>,
}

impl<K: ElementKey> Default for VisibilityRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ElementKey> VisibilityRegistry<K> {
    pub fn new() -> Self {
        Self {
            watches: WatchMap::new(),
        }
    }

    /// Registers a watch for `key`. Returns false (and leaves the existing
    /// watch untouched) when the key is already observed.
    pub fn observe(&mut self, key: K, options: VisibilityOptions) -> bool {
        if self.watches.contains_key(&key) {
            return false;
        }
        self.watches.insert(key, VisibilityTrigger::new(options));
        true
    }

    /// Routes an intersection update to the trigger for `key`. Returns the
    /// flag, or `None` when the key was never observed.
    pub fn on_intersection(&mut self, key: &K, ratio: f32) -> Option<bool> {
        self.watches.get_mut(key).map(|t| t.on_intersection(ratio))
    }

    pub fn is_seen(&self, key: &K) -> bool {
        self.watches.get(key).is_some_and(|t| t.is_seen())
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watches.get(key).is_some_and(|t| t.is_watching())
    }

    /// Releases the watch for `key`. Returns whether it existed.
    pub fn release(&mut self, key: &K) -> bool {
        self.watches.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}
