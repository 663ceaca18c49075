// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom change notifications.
//!
//! Gesture entry points on [`ZoomController`](crate::ZoomController) take a
//! [`ZoomObserver`] and call it synchronously, once per processed pinch
//! sample. Closures taking a [`ZoomChanged`] are observers, and
//! [`ZoomChangeLog`] records everything it sees.

use alloc::vec::Vec;

use crate::gesture::{PanGesture, SwipeGesture};

/// Zoom factor before and after a processed pinch sample.
///
/// Emitted even when both values are equal, for example when consecutive
/// samples are clamped to the same bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomChanged {
    /// Zoom factor before the sample.
    pub old: f64,
    /// Zoom factor after the sample.
    pub new: f64,
}

/// A callback sink for controller notifications.
pub trait ZoomObserver {
    /// Called after a pinch sample updated the zoom factor.
    fn zoom_changed(&mut self, change: ZoomChanged);

    /// Called for every pan sample. The controller itself ignores pans.
    fn pan_triggered(&mut self, gesture: &PanGesture) {
        let _ = gesture;
    }

    /// Called for every swipe sample. The controller itself ignores swipes.
    fn swipe_triggered(&mut self, gesture: &SwipeGesture) {
        let _ = gesture;
    }
}

impl<F> ZoomObserver for F
where
    F: FnMut(ZoomChanged),
{
    fn zoom_changed(&mut self, change: ZoomChanged) {
        self(change);
    }
}

/// Records every zoom change in arrival order.
#[derive(Clone, Debug, Default)]
pub struct ZoomChangeLog {
    changes: Vec<ZoomChanged>,
}

impl ZoomChangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded changes, oldest first.
    #[must_use]
    pub fn changes(&self) -> &[ZoomChanged] {
        &self.changes
    }

    /// Returns the most recent change, if any.
    #[must_use]
    pub fn last(&self) -> Option<ZoomChanged> {
        self.changes.last().copied()
    }

    /// Number of recorded changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Forgets all recorded changes.
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl ZoomObserver for ZoomChangeLog {
    fn zoom_changed(&mut self, change: ZoomChanged) {
        self.changes.push(change);
    }
}
