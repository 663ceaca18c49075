// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::hold::PointerButton;

/// Construction-time settings for a [`ZoomController`](crate::ZoomController).
///
/// The defaults match a plain desktop setup: zoom `1.0`, pinch limits
/// `[0.1, 4.0]`, transform writes on and held-tap clicks off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOptions {
    /// Zoom factor applied when the controller is created.
    pub initial_zoom: f64,
    /// Lower bound for pinch-driven zoom.
    pub min_zoom: f64,
    /// Upper bound for pinch-driven zoom.
    pub max_zoom: f64,
    /// Whether the controller writes transforms to the host.
    ///
    /// `false` starts the controller with writes already disabled, as if
    /// [`ZoomController::disable_transform_writes`](crate::ZoomController::disable_transform_writes)
    /// had been called first.
    pub transform_writes: bool,
    /// Re-synthesize held taps as clicks. Meant for touch-only platforms.
    pub held_tap_click: bool,
    /// Button reported by held-tap clicks.
    pub held_tap_button: PointerButton,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            initial_zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 4.0,
            transform_writes: true,
            held_tap_click: false,
            held_tap_button: PointerButton::Secondary,
        }
    }
}

impl ZoomOptions {
    /// Sets the initial zoom factor.
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Sets the pinch zoom bounds.
    #[must_use]
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Enables or disables transform writes.
    #[must_use]
    pub fn with_transform_writes(mut self, enabled: bool) -> Self {
        self.transform_writes = enabled;
        self
    }

    /// Enables held-tap clicks reported with `button`.
    #[must_use]
    pub fn with_held_tap_click(mut self, button: PointerButton) -> Self {
        self.held_tap_click = true;
        self.held_tap_button = button;
        self
    }

    /// Checks that the bounds are usable.
    ///
    /// The initial zoom is not checked against the bounds: programmatic zoom
    /// may lie outside the pinch range.
    pub fn validate(&self) -> Result<(), ZoomOptionsError> {
        if !(self.initial_zoom.is_finite()
            && self.min_zoom.is_finite()
            && self.max_zoom.is_finite())
        {
            return Err(ZoomOptionsError::NonFinite);
        }
        if self.min_zoom <= 0.0 {
            return Err(ZoomOptionsError::NonPositiveMin { min: self.min_zoom });
        }
        if self.min_zoom > self.max_zoom {
            return Err(ZoomOptionsError::InvertedBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(())
    }
}

/// Error returned when [`ZoomOptions`] cannot configure a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomOptionsError {
    /// A zoom value is NaN or infinite.
    NonFinite,
    /// The lower bound is zero or negative.
    NonPositiveMin {
        /// The rejected lower bound.
        min: f64,
    },
    /// The lower bound exceeds the upper bound.
    InvertedBounds {
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
}

impl fmt::Display for ZoomOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "zoom options must be finite"),
            Self::NonPositiveMin { min } => {
                write!(f, "minimum zoom {min} must be greater than zero")
            }
            Self::InvertedBounds { min, max } => {
                write!(f, "minimum zoom {min} exceeds maximum zoom {max}")
            }
        }
    }
}

impl core::error::Error for ZoomOptionsError {}
