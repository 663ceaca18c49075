// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::host::ViewportHost;

/// Headless scrollable view over a content plane.
///
/// `SceneView` is a minimal [`ViewportHost`]: it stores a viewport size,
/// content bounds and a content→view transform, and answers the mapping
/// queries a [`ZoomController`](crate::ZoomController) needs. Use it when no
/// toolkit widget owns the view, or as a model to mirror into one.
///
/// Scrolling is not clamped to the content bounds.
#[derive(Clone, Debug)]
pub struct SceneView {
    viewport_size: Size,
    content_bounds: Rect,
    global_origin: Point,
    content_to_view: Affine,
    view_to_content: Affine,
}

impl SceneView {
    /// Creates a view with an identity transform: the content origin sits at
    /// the viewport's top-left corner at zoom `1.0`.
    #[must_use]
    pub fn new(viewport_size: Size, content_bounds: Rect) -> Self {
        Self {
            viewport_size,
            content_bounds,
            global_origin: Point::ORIGIN,
            content_to_view: Affine::IDENTITY,
            view_to_content: Affine::IDENTITY,
        }
    }

    /// Resizes the viewport, keeping the content point at the viewport center
    /// in place.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == size {
            return;
        }
        let center = self.view_to_content_point(self.view_center());
        self.viewport_size = size;
        self.center_on(center);
    }

    /// Replaces the content bounds. The transform is left alone.
    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
    }

    /// Position of the viewport's top-left corner in platform-global
    /// coordinates.
    #[must_use]
    pub fn global_origin(&self) -> Point {
        self.global_origin
    }

    /// Moves the viewport within platform-global coordinates.
    pub fn set_global_origin(&mut self, origin: Point) {
        self.global_origin = origin;
    }

    /// Returns the viewport rectangle in view coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.viewport_size)
    }

    /// Returns the viewport center in view coordinates.
    #[must_use]
    pub fn view_center(&self) -> Point {
        self.view_rect().center()
    }

    /// Returns the content rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.view_to_content_rect(self.view_rect())
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SceneViewDebugInfo {
        SceneViewDebugInfo {
            viewport_size: self.viewport_size,
            content_bounds: self.content_bounds,
            global_origin: self.global_origin,
            visible_content_rect: self.visible_content_rect(),
            transform: self.content_to_view,
        }
    }

    fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let transform = Affine::translate(delta) * self.content_to_view;
        self.set_transform(transform);
    }
}

impl ViewportHost for SceneView {
    fn transform(&self) -> Affine {
        self.content_to_view
    }

    fn set_transform(&mut self, transform: Affine) {
        self.content_to_view = transform;
        // A singular transform (zoom 0) keeps the last usable inverse, so the
        // content under the anchor stays known and a later zoom can recover.
        let det = transform.determinant();
        if det != 0.0 && det.is_finite() {
            self.view_to_content = transform.inverse();
        }
    }

    fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    fn center_on(&mut self, content_pt: Point) {
        let delta = self.view_center() - self.content_to_view_point(content_pt);
        self.pan_by_view(delta);
    }

    fn view_to_content_point(&self, pt: Point) -> Point {
        self.view_to_content * pt
    }

    fn content_to_view_point(&self, pt: Point) -> Point {
        self.content_to_view * pt
    }

    fn view_to_content_rect(&self, rect: Rect) -> Rect {
        // Bounding box of the mapped corners; exact for axis-aligned scales.
        let corners = [
            rect.origin(),
            Point::new(rect.max_x(), rect.y0),
            Point::new(rect.x0, rect.max_y()),
            Point::new(rect.max_x(), rect.max_y()),
        ]
        .map(|p| self.view_to_content * p);
        let mut out = Rect::from_points(corners[0], corners[1]);
        out = out.union_pt(corners[2]);
        out.union_pt(corners[3])
    }

    fn global_to_view_point(&self, pt: Point) -> Point {
        pt - self.global_origin.to_vec2()
    }
}

/// Debug snapshot of a [`SceneView`] state.
#[derive(Clone, Copy, Debug)]
pub struct SceneViewDebugInfo {
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Content bounds in content coordinates.
    pub content_bounds: Rect,
    /// Viewport top-left corner in platform-global coordinates.
    pub global_origin: Point,
    /// Content rectangle currently visible through the viewport.
    pub visible_content_rect: Rect,
    /// Current content→view transform.
    pub transform: Affine,
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};

    use super::SceneView;
    use crate::host::ViewportHost;

    fn view() -> SceneView {
        SceneView::new(
            Size::new(800.0, 600.0),
            Rect::new(0.0, 0.0, 2000.0, 1500.0),
        )
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn starts_at_identity() {
        let v = view();
        assert_eq!(v.transform(), Affine::IDENTITY);
        assert_eq!(v.visible_content_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn point_mapping_roundtrip() {
        let mut v = view();
        v.set_transform(Affine::translate((-35.0, 12.0)) * Affine::scale(2.5));

        let content = Point::new(10.0, -5.0);
        let back = v.view_to_content_point(v.content_to_view_point(content));
        assert!(close(back, content));
    }

    #[test]
    fn center_on_moves_point_to_view_center() {
        let mut v = view();
        v.set_transform(Affine::scale(2.0));

        let target = Point::new(700.0, 450.0);
        v.center_on(target);
        assert!(close(v.content_to_view_point(target), v.view_center()));
        // Scale is untouched.
        assert_eq!(v.transform().as_coeffs()[0], 2.0);
    }

    #[test]
    fn visible_rect_shrinks_with_zoom() {
        let mut v = view();
        v.set_transform(Affine::scale(2.0));
        assert_eq!(v.visible_content_rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn resize_keeps_center_point() {
        let mut v = view();
        v.center_on(Point::new(1000.0, 750.0));
        v.set_viewport_size(Size::new(400.0, 200.0));

        assert!(close(
            v.view_to_content_point(v.view_center()),
            Point::new(1000.0, 750.0)
        ));
        assert_eq!(v.debug_info().viewport_size, Size::new(400.0, 200.0));
    }

    #[test]
    fn default_scale_about_keeps_anchor() {
        let mut v = view();
        v.center_on(Point::new(500.0, 500.0));
        let anchor = Point::new(123.0, 456.0);
        let before = v.view_to_content_point(anchor);

        v.scale_about(3.0, anchor);

        assert!(close(v.view_to_content_point(anchor), before));
        assert_eq!(v.transform().as_coeffs()[0], 3.0);
    }

    #[test]
    fn singular_transform_keeps_last_inverse() {
        let mut v = view();
        v.center_on(Point::new(1000.0, 750.0));
        let center = v.view_center();
        let under = v.view_to_content_point(center);

        v.scale_about(0.0, center);
        assert_eq!(v.transform().as_coeffs()[0], 0.0);
        assert!(close(v.view_to_content_point(center), under));

        v.scale_about(1.0, center);
        assert!(close(v.view_to_content_point(center), under));
        assert_eq!(v.visible_content_rect(), Rect::new(600.0, 450.0, 1400.0, 1050.0));
    }

    #[test]
    fn global_points_are_offset_by_origin() {
        let mut v = view();
        v.set_global_origin(Point::new(100.0, 50.0));
        assert_eq!(
            v.global_to_view_point(Point::new(130.0, 70.0)),
            Point::new(30.0, 20.0)
        );
    }

    #[test]
    fn zero_size_viewport_does_not_panic() {
        let mut v = SceneView::new(Size::ZERO, Rect::ZERO);
        v.center_on(Point::new(5.0, 5.0));
        let visible = v.visible_content_rect();
        assert_eq!(visible.width(), 0.0);
        assert_eq!(visible.height(), 0.0);
    }
}
