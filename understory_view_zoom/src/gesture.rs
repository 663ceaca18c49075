// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture samples delivered by a platform gesture recognizer.
//!
//! Recognizers report each gesture as a tagged [`Gesture`] value, decoded once
//! at the boundary between the platform and the controller. Only
//! [`Gesture::Pinch`] and [`Gesture::TapAndHold`] carry behavior; pan and swipe
//! samples are routed to [`ZoomObserver`](crate::ZoomObserver) hooks and
//! otherwise left alone.

use kurbo::{Point, Vec2};

/// Lifecycle phase of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// First sample of the gesture.
    Started,
    /// Intermediate sample.
    Updated,
    /// Last sample of the gesture.
    Ended,
}

/// Two-finger pinch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    /// Lifecycle phase.
    pub state: GestureState,
    /// Scale accumulated since the gesture started.
    ///
    /// The controller may overwrite this value: it rebases it on `Started`
    /// and clamps it into the zoom bounds on every sample.
    pub total_scale_factor: f64,
    /// Pinch center in view coordinates.
    pub center_point: Point,
}

impl PinchGesture {
    /// Creates a pinch sample.
    #[must_use]
    pub fn new(state: GestureState, total_scale_factor: f64, center_point: Point) -> Self {
        Self {
            state,
            total_scale_factor,
            center_point,
        }
    }
}

/// One-finger pan sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Lifecycle phase.
    pub state: GestureState,
    /// Movement since the previous sample, in view coordinates.
    pub delta: Vec2,
}

/// Swipe sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    /// Lifecycle phase.
    pub state: GestureState,
    /// Swipe direction in degrees, counterclockwise from the positive x axis.
    pub swipe_angle: f64,
}

/// Held single-finger touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapAndHoldGesture {
    /// Lifecycle phase.
    pub state: GestureState,
    /// Touch position in platform-global coordinates.
    ///
    /// The origin means the recognizer had no valid position.
    pub position: Point,
}

/// A gesture sample tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Pinch to zoom.
    Pinch(PinchGesture),
    /// Pan.
    Pan(PanGesture),
    /// Swipe.
    Swipe(SwipeGesture),
    /// Held tap.
    TapAndHold(TapAndHoldGesture),
}

impl Gesture {
    /// Returns the kind tag of this sample.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Pinch(_) => GestureKind::Pinch,
            Self::Pan(_) => GestureKind::Pan,
            Self::Swipe(_) => GestureKind::Swipe,
            Self::TapAndHold(_) => GestureKind::TapAndHold,
        }
    }

    /// Returns the lifecycle phase of this sample.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match self {
            Self::Pinch(g) => g.state,
            Self::Pan(g) => g.state,
            Self::Swipe(g) => g.state,
            Self::TapAndHold(g) => g.state,
        }
    }

    /// Position of this kind when several gestures arrive in one event.
    fn routing_order(&self) -> u8 {
        match self {
            Self::Swipe(_) => 0,
            Self::Pan(_) => 1,
            Self::Pinch(_) => 2,
            Self::TapAndHold(_) => 3,
        }
    }

    /// Sorts a batch of gestures into routing order: swipe, pan, pinch, hold.
    ///
    /// The sort is stable, so samples of the same kind keep their order.
    pub fn sort_for_routing(gestures: &mut [Self]) {
        gestures.sort_by_key(Self::routing_order);
    }
}

impl From<PinchGesture> for Gesture {
    fn from(g: PinchGesture) -> Self {
        Self::Pinch(g)
    }
}

impl From<PanGesture> for Gesture {
    fn from(g: PanGesture) -> Self {
        Self::Pan(g)
    }
}

impl From<SwipeGesture> for Gesture {
    fn from(g: SwipeGesture) -> Self {
        Self::Swipe(g)
    }
}

impl From<TapAndHoldGesture> for Gesture {
    fn from(g: TapAndHoldGesture) -> Self {
        Self::TapAndHold(g)
    }
}

/// Gesture kinds a host can be asked to recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// See [`Gesture::Pinch`].
    Pinch,
    /// See [`Gesture::Pan`].
    Pan,
    /// See [`Gesture::Swipe`].
    Swipe,
    /// See [`Gesture::TapAndHold`].
    TapAndHold,
}
