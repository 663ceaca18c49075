// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure zoom math: bound clamping and anchor-preserving scale transforms.

use kurbo::{Affine, Point};

/// Clamps `zoom` into `[min, max]`.
///
/// Values above `max` become `max`, then values below `min` become `min`.
/// Unlike [`f64::clamp`] this never panics: with inverted bounds
/// (`min > max`) the result is `min`.
#[must_use]
pub fn clamp_zoom(zoom: f64, min: f64, max: f64) -> f64 {
    let zoom = if zoom > max { max } else { zoom };
    if zoom < min { min } else { zoom }
}

/// Builds a content→view transform with uniform scale `zoom` that maps
/// `anchor_content` onto `anchor_view`.
///
/// This is the translate-scale-translate composition: move the anchor to the
/// origin, scale, then move it to where it must stay visible.
#[must_use]
pub fn anchored_scale(zoom: f64, anchor_view: Point, anchor_content: Point) -> Affine {
    Affine::translate(anchor_view.to_vec2())
        * Affine::scale(zoom)
        * Affine::translate(-anchor_content.to_vec2())
}

/// Returns the horizontal scale factor of an axis-aligned transform.
///
/// Transforms produced by [`anchored_scale`] are uniform, so this is their
/// zoom factor.
#[must_use]
pub fn uniform_scale(transform: Affine) -> f64 {
    transform.as_coeffs()[0]
}
