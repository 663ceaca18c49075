// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View Zoom: pinch-zoom and scroll control for 2D viewports.
//!
//! This crate turns pinch gestures and programmatic requests into a bounded,
//! anchored, uniform scale transform for a scrollable view, and answers scroll
//! position queries derived from that transform. It focuses on:
//! - Pinch zoom clamped to configurable bounds, anchored under the pinch
//!   center.
//! - Programmatic zoom anchored at the viewport center.
//! - Scroll position and scroll range queries, and per-axis scrolling.
//! - Re-synthesizing a held tap as a click on touch-only platforms.
//!
//! It does **not** own the view. The host widget implements [`ViewportHost`]
//! to supply geometry and accept transforms, and the platform's gesture
//! recognizer feeds [`Gesture`] samples into [`ZoomController::on_gesture`].
//! [`SceneView`] is a headless host for tests and toolkit-less setups.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_view_zoom::{
//!     GestureState, PinchGesture, SceneView, ZoomChangeLog, ZoomChanged, ZoomController,
//! };
//!
//! let view = SceneView::new(Size::new(800.0, 600.0), Rect::new(0.0, 0.0, 2000.0, 1500.0));
//! let mut zoomer = ZoomController::new(view);
//! let mut log = ZoomChangeLog::new();
//!
//! let center = Point::new(200.0, 150.0);
//! let mut start = PinchGesture::new(GestureState::Started, 1.0, center);
//! zoomer.on_pinch(&mut start, &mut log);
//!
//! // The recognizer reports more than the upper bound allows.
//! let mut update = PinchGesture::new(GestureState::Updated, 6.0, center);
//! zoomer.on_pinch(&mut update, &mut log);
//!
//! assert_eq!(zoomer.zoom(), 4.0);
//! assert_eq!(log.last(), Some(ZoomChanged { old: 1.0, new: 4.0 }));
//! assert_eq!(zoomer.max_scroll_x(), 1200.0);
//! ```
//!
//! ## Externally applied transforms
//!
//! When another component owns the view transform, disable transform writes.
//! The controller keeps tracking zoom and keeps notifying:
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_view_zoom::{
//!     Gesture, GestureState, PinchGesture, SceneView, ViewportHost, ZoomChanged,
//!     ZoomController,
//! };
//!
//! let view = SceneView::new(Size::new(400.0, 400.0), Rect::new(0.0, 0.0, 400.0, 400.0));
//! let mut zoomer = ZoomController::new(view);
//! zoomer.disable_transform_writes();
//!
//! let mut seen = Vec::new();
//! let mut pinch: Gesture =
//!     PinchGesture::new(GestureState::Updated, 2.0, Point::new(10.0, 10.0)).into();
//! zoomer.on_gesture(&mut pinch, &mut |c: ZoomChanged| seen.push(c));
//!
//! assert_eq!(zoomer.zoom(), 2.0);
//! assert_eq!(seen.len(), 1);
//! assert_eq!(zoomer.host().transform().as_coeffs()[0], 1.0);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are rebuilt from the zoom factor and an anchor on every change
//!   and never accumulated.
//! - Pinch zoom is clamped to the bounds; [`ZoomController::set_zoom`] is not.
//! - Pan and swipe samples are routed to [`ZoomObserver`] hooks and otherwise
//!   ignored.
//! - Diagnostics go through `tracing`; the crate never installs a subscriber.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod anchor;
mod controller;
mod gesture;
mod hold;
mod host;
mod observer;
mod options;
mod scene_view;

pub use anchor::{anchored_scale, clamp_zoom, uniform_scale};
pub use controller::ZoomController;
pub use gesture::{
    Gesture, GestureKind, GestureState, PanGesture, PinchGesture, SwipeGesture, TapAndHoldGesture,
};
pub use hold::{HeldTapState, PointerButton, PointerPhase, SyntheticPointerEvent};
pub use host::ViewportHost;
pub use observer::{ZoomChangeLog, ZoomChanged, ZoomObserver};
pub use options::{ZoomOptions, ZoomOptionsError};
pub use scene_view::{SceneView, SceneViewDebugInfo};
