// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::anchor::anchored_scale;
use crate::gesture::GestureKind;
use crate::hold::SyntheticPointerEvent;

/// The scrollable view a [`ZoomController`](crate::ZoomController) drives.
///
/// Coordinates come in two spaces:
/// - **content** (scene/document) coordinates, in which
///   [`content_bounds`](Self::content_bounds) is expressed;
/// - **view** coordinates, device pixels relative to the viewport's top-left
///   corner.
///
/// [`transform`](Self::transform) is the content→view mapping. How the host
/// splits it into scale and scroll offset is its own business; the controller
/// only replaces it wholesale and observes it through the mapping methods.
pub trait ViewportHost {
    /// Current content→view transform.
    fn transform(&self) -> Affine;

    /// Replaces the content→view transform.
    fn set_transform(&mut self, transform: Affine);

    /// Viewport size in pixels.
    fn viewport_size(&self) -> Size;

    /// Extent of the content in content coordinates.
    fn content_bounds(&self) -> Rect;

    /// Scrolls so that `content_pt` appears at the viewport center.
    fn center_on(&mut self, content_pt: Point);

    /// Maps a view point into content coordinates.
    fn view_to_content_point(&self, pt: Point) -> Point;

    /// Maps a content point into view coordinates.
    fn content_to_view_point(&self, pt: Point) -> Point;

    /// Maps a view rectangle into content coordinates, returning the bounding
    /// box of its corners.
    fn view_to_content_rect(&self, rect: Rect) -> Rect;

    /// Applies a uniform `zoom` so that the content under `anchor_view` stays
    /// under it.
    ///
    /// The default builds the transform with [`anchored_scale`] and passes it
    /// to [`set_transform`](Self::set_transform). Hosts with a built-in
    /// "anchor under pointer" mode can override this to let that mode do the
    /// anchoring; the visual result must be the same.
    ///
    /// If the current transform cannot be inverted (after a zoom of `0`), the
    /// center of the content bounds is anchored instead.
    fn scale_about(&mut self, zoom: f64, anchor_view: Point) {
        let mut anchor_content = self.view_to_content_point(anchor_view);
        if !anchor_content.is_finite() {
            anchor_content = self.content_bounds().center();
        }
        self.set_transform(anchored_scale(zoom, anchor_view, anchor_content));
    }

    /// Maps a point from platform-global coordinates into view coordinates.
    ///
    /// The default is the identity, for hosts whose recognizer already
    /// reports viewport-local positions.
    fn global_to_view_point(&self, pt: Point) -> Point {
        pt
    }

    /// Asks the platform to recognize `kind` on this viewport.
    fn grab_gesture(&mut self, kind: GestureKind) {
        let _ = kind;
    }

    /// Delivers a synthesized pointer event to the viewport.
    fn post_pointer_event(&mut self, event: SyntheticPointerEvent) {
        let _ = event;
    }
}

impl<H: ViewportHost + ?Sized> ViewportHost for &mut H {
    fn transform(&self) -> Affine {
        (**self).transform()
    }

    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    fn content_bounds(&self) -> Rect {
        (**self).content_bounds()
    }

    fn center_on(&mut self, content_pt: Point) {
        (**self).center_on(content_pt);
    }

    fn view_to_content_point(&self, pt: Point) -> Point {
        (**self).view_to_content_point(pt)
    }

    fn content_to_view_point(&self, pt: Point) -> Point {
        (**self).content_to_view_point(pt)
    }

    fn view_to_content_rect(&self, rect: Rect) -> Rect {
        (**self).view_to_content_rect(rect)
    }

    fn scale_about(&mut self, zoom: f64, anchor_view: Point) {
        (**self).scale_about(zoom, anchor_view);
    }

    fn global_to_view_point(&self, pt: Point) -> Point {
        (**self).global_to_view_point(pt)
    }

    fn grab_gesture(&mut self, kind: GestureKind) {
        (**self).grab_gesture(kind);
    }

    fn post_pointer_event(&mut self, event: SyntheticPointerEvent) {
        (**self).post_pointer_event(event);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};

    use super::ViewportHost;

    /// Inverts the transform on every query, like most toolkit views do.
    struct FreshInverseHost {
        transform: Affine,
    }

    impl ViewportHost for FreshInverseHost {
        fn transform(&self) -> Affine {
            self.transform
        }

        fn set_transform(&mut self, transform: Affine) {
            self.transform = transform;
        }

        fn viewport_size(&self) -> Size {
            Size::new(100.0, 100.0)
        }

        fn content_bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 400.0, 200.0)
        }

        fn center_on(&mut self, _content_pt: Point) {}

        fn view_to_content_point(&self, pt: Point) -> Point {
            self.transform.inverse() * pt
        }

        fn content_to_view_point(&self, pt: Point) -> Point {
            self.transform * pt
        }

        fn view_to_content_rect(&self, rect: Rect) -> Rect {
            self.transform.inverse().transform_rect_bbox(rect)
        }
    }

    #[test]
    fn scale_about_recovers_from_zero_zoom() {
        let mut host = FreshInverseHost {
            transform: Affine::IDENTITY,
        };
        let anchor = Point::new(50.0, 50.0);

        host.scale_about(0.0, anchor);
        host.scale_about(2.0, anchor);

        assert!(host.transform().is_finite());
        // The content center is now under the anchor.
        let under = host.view_to_content_point(anchor);
        assert!((under.x - 200.0).abs() < 1e-9);
        assert!((under.y - 100.0).abs() < 1e-9);
    }
}
