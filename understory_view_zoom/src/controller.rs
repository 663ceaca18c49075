// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use tracing::{debug, trace};

use crate::anchor::clamp_zoom;
use crate::gesture::{Gesture, GestureKind, GestureState, PinchGesture, TapAndHoldGesture};
use crate::hold::{HeldTapState, PointerButton};
use crate::host::ViewportHost;
use crate::observer::{ZoomChanged, ZoomObserver};
use crate::options::{ZoomOptions, ZoomOptionsError};

/// Pinch-zoom and scroll controller for a [`ViewportHost`].
///
/// The controller owns the zoom factor and the pinch zoom bounds. Every zoom
/// change rebuilds the host transform from scratch as a uniform scale anchored
/// at a view point: the viewport center for [`set_zoom`](Self::set_zoom), the
/// pinch center for gestures. Nothing is accumulated, so repeated gestures do
/// not drift.
///
/// Scroll queries are derived from the host's current transform and are not
/// stored here.
#[derive(Clone, Debug)]
pub struct ZoomController<H> {
    host: H,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    transform_writes: bool,
    held_tap_click: bool,
    held_tap_button: PointerButton,
    held_tap: HeldTapState,
}

impl<H: ViewportHost> ZoomController<H> {
    /// Creates a controller with [`ZoomOptions::default`].
    ///
    /// This grabs the pinch gesture on `host` and writes a zoom `1.0`
    /// transform anchored at the viewport center.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::from_options(host, ZoomOptions::default())
    }

    /// Creates a controller from validated `options`.
    ///
    /// Grabs the gestures the options call for and applies
    /// [`ZoomOptions::initial_zoom`] through [`set_zoom`](Self::set_zoom).
    pub fn with_options(host: H, options: ZoomOptions) -> Result<Self, ZoomOptionsError> {
        options.validate()?;
        Ok(Self::from_options(host, options))
    }

    fn from_options(host: H, options: ZoomOptions) -> Self {
        let mut controller = Self {
            host,
            zoom: options.initial_zoom,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            transform_writes: options.transform_writes,
            held_tap_click: options.held_tap_click,
            held_tap_button: options.held_tap_button,
            held_tap: HeldTapState::default(),
        };
        for &kind in controller.grabbed_gestures() {
            controller.host.grab_gesture(kind);
        }
        controller.set_zoom(options.initial_zoom);
        controller
    }

    /// Gesture kinds this controller asks its host to recognize.
    #[must_use]
    pub fn grabbed_gestures(&self) -> &'static [GestureKind] {
        if self.held_tap_click {
            &[GestureKind::Pinch, GestureKind::TapAndHold]
        } else {
            &[GestureKind::Pinch]
        }
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    ///
    /// Changing the host transform directly is fine; the controller's zoom
    /// factor is not updated to match.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller, returning the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor.
    ///
    /// The value is **not** clamped to the pinch bounds: programmatic zoom may
    /// go where a pinch cannot. When transform writes are enabled the host is
    /// rescaled around the viewport center. No [`ZoomChanged`] is emitted.
    pub fn set_zoom(&mut self, zoom: f64) {
        debug!(old = self.zoom, new = zoom, "set zoom");
        self.zoom = zoom;
        if self.transform_writes {
            let center = self.viewport_rect().center();
            self.host.scale_about(zoom, center);
        }
    }

    /// Lower bound for pinch-driven zoom.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Upper bound for pinch-driven zoom.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the lower bound for pinch-driven zoom.
    pub fn set_min_zoom(&mut self, min_zoom: f64) {
        self.min_zoom = min_zoom;
    }

    /// Sets the upper bound for pinch-driven zoom.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        self.max_zoom = max_zoom;
    }

    /// Sets both pinch zoom bounds.
    ///
    /// The current zoom factor is left as is even if it falls outside; the
    /// bounds only apply to the next pinch sample. Bounds are not validated:
    /// with `min > max` pinches settle on `min`.
    pub fn set_zoom_bounds(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    /// Stops all writes to the host transform, for good.
    ///
    /// Zoom state and notifications keep working; use this when something
    /// else applies the transform.
    pub fn disable_transform_writes(&mut self) {
        if self.transform_writes {
            debug!("transform writes disabled");
        }
        self.transform_writes = false;
    }

    /// Returns `false` once [`disable_transform_writes`](Self::disable_transform_writes)
    /// has been called.
    #[must_use]
    pub fn transform_writes_enabled(&self) -> bool {
        self.transform_writes
    }

    /// Content rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.host.view_to_content_rect(self.viewport_rect())
    }

    /// Left edge of the visible region, in content coordinates.
    #[must_use]
    pub fn scroll_value_x(&self) -> f64 {
        self.visible_rect().x0
    }

    /// Top edge of the visible region, in content coordinates.
    #[must_use]
    pub fn scroll_value_y(&self) -> f64 {
        self.visible_rect().y0
    }

    /// Horizontal scroll range: how much wider the content is than the
    /// viewport, or `0` if it is not.
    #[must_use]
    pub fn max_scroll_x(&self) -> f64 {
        (self.host.content_bounds().width() - self.host.viewport_size().width).max(0.0)
    }

    /// Vertical scroll range: how much taller the content is than the
    /// viewport, or `0` if it is not.
    #[must_use]
    pub fn max_scroll_y(&self) -> f64 {
        (self.host.content_bounds().height() - self.host.viewport_size().height).max(0.0)
    }

    /// Scrolls horizontally, keeping the current top edge.
    ///
    /// Centers the host on `viewport_center + (x, top)`. `x` is an offset from
    /// the viewport-center anchor, not an absolute content coordinate; at zoom
    /// `1.0` with the content origin at `(0, 0)` the two coincide.
    pub fn scroll_x_to(&mut self, x: f64) {
        let y = self.visible_rect().y0;
        self.center_with_offset(Vec2::new(x, y));
    }

    /// Scrolls vertically, keeping the current left edge.
    ///
    /// Centers the host on `viewport_center + (left, y)`; see
    /// [`scroll_x_to`](Self::scroll_x_to).
    pub fn scroll_y_to(&mut self, y: f64) {
        let x = self.visible_rect().x0;
        self.center_with_offset(Vec2::new(x, y));
    }

    /// Routes one gesture sample.
    ///
    /// Pinches update the zoom, held taps are re-synthesized as clicks when
    /// enabled, and pans and swipes are only forwarded to `observer`.
    pub fn on_gesture<O>(&mut self, gesture: &mut Gesture, observer: &mut O)
    where
        O: ZoomObserver + ?Sized,
    {
        match gesture {
            Gesture::Swipe(swipe) => {
                trace!(state = ?swipe.state, "swipe");
                observer.swipe_triggered(swipe);
            }
            Gesture::Pan(pan) => {
                trace!(state = ?pan.state, "pan");
                observer.pan_triggered(pan);
            }
            Gesture::Pinch(pinch) => {
                self.on_pinch(pinch, observer);
            }
            Gesture::TapAndHold(hold) => {
                if self.held_tap_click {
                    self.on_tap_and_hold(hold);
                } else {
                    trace!("held tap ignored");
                }
            }
        }
    }

    /// Routes a batch of gestures that arrived in one platform event.
    ///
    /// The batch is reordered to swipe, pan, pinch, hold before routing.
    /// Returns `true` if anything was routed.
    pub fn on_gestures<O>(&mut self, gestures: &mut [Gesture], observer: &mut O) -> bool
    where
        O: ZoomObserver + ?Sized,
    {
        Gesture::sort_for_routing(gestures);
        for gesture in gestures.iter_mut() {
            self.on_gesture(gesture, observer);
        }
        !gestures.is_empty()
    }

    /// Processes one pinch sample and notifies `observer`.
    ///
    /// On `Started` the sample's cumulative scale is rebased on the current
    /// zoom, so the gesture continues from the live zoom level. On every
    /// sample the scale is clamped into the pinch bounds, written back into
    /// `gesture` and adopted as the zoom factor. When transform writes are
    /// enabled the host is rescaled so that the content under the pinch center
    /// stays there.
    pub fn on_pinch<O>(&mut self, gesture: &mut PinchGesture, observer: &mut O) -> ZoomChanged
    where
        O: ZoomObserver + ?Sized,
    {
        let old = self.zoom;
        if gesture.state == GestureState::Started {
            gesture.total_scale_factor = self.zoom;
        }
        gesture.total_scale_factor =
            clamp_zoom(gesture.total_scale_factor, self.min_zoom, self.max_zoom);
        self.zoom = gesture.total_scale_factor;

        if self.transform_writes {
            self.host.scale_about(self.zoom, gesture.center_point);
        }

        let change = ZoomChanged {
            old,
            new: self.zoom,
        };
        debug!(old, new = self.zoom, state = ?gesture.state, "pinch zoom");
        observer.zoom_changed(change);
        change
    }

    /// Processes one held-tap sample.
    ///
    /// The first sample of a gesture with a valid position posts a
    /// press/release pair to the host at the viewport-local tap position.
    /// A global position at the origin is treated as missing. Returns `true`
    /// if a click was posted.
    pub fn on_tap_and_hold(&mut self, gesture: &TapAndHoldGesture) -> bool {
        let position = (gesture.position != Point::ORIGIN)
            .then(|| self.host.global_to_view_point(gesture.position));
        let Some(events) = self
            .held_tap
            .update(gesture.state, position, self.held_tap_button)
        else {
            trace!(state = ?gesture.state, "held tap without click");
            return false;
        };
        debug!(x = events[0].position.x, y = events[0].position.y, "held tap click");
        for event in events {
            self.host.post_pointer_event(event);
        }
        true
    }

    fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.host.viewport_size())
    }

    fn center_with_offset(&mut self, offset: Vec2) {
        let target = self.viewport_rect().center() + offset;
        self.host.center_on(target);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::ZoomController;
    use crate::gesture::{GestureState, PinchGesture};
    use crate::host::ViewportHost;
    use crate::observer::{ZoomChangeLog, ZoomChanged};
    use crate::options::ZoomOptions;
    use crate::scene_view::SceneView;

    fn controller() -> ZoomController<SceneView> {
        ZoomController::new(SceneView::new(
            Size::new(800.0, 600.0),
            Rect::new(0.0, 0.0, 2000.0, 1500.0),
        ))
    }

    fn pinch(state: GestureState, scale: f64) -> PinchGesture {
        PinchGesture::new(state, scale, Point::new(200.0, 150.0))
    }

    #[test]
    fn defaults() {
        let c = controller();
        assert_eq!(c.zoom(), 1.0);
        assert_eq!(c.min_zoom(), 0.1);
        assert_eq!(c.max_zoom(), 4.0);
        assert!(c.transform_writes_enabled());
    }

    #[test]
    fn set_zoom_is_not_clamped() {
        let mut c = controller();
        c.set_zoom(10.0);
        assert_eq!(c.zoom(), 10.0);
        assert_eq!(c.host().transform().as_coeffs()[0], 10.0);
    }

    #[test]
    fn set_zoom_keeps_view_center() {
        let mut c = controller();
        let center = Point::new(400.0, 300.0);
        let before = c.host().view_to_content_point(center);
        c.set_zoom(2.0);
        let after = c.host().view_to_content_point(center);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn started_sample_is_rebased_on_current_zoom() {
        let mut c = controller();
        c.set_zoom(2.0);
        let mut log = ZoomChangeLog::new();

        let mut sample = pinch(GestureState::Started, 1.0);
        let change = c.on_pinch(&mut sample, &mut log);

        assert_eq!(c.zoom(), 2.0);
        assert_eq!(sample.total_scale_factor, 2.0);
        assert_eq!(change, ZoomChanged { old: 2.0, new: 2.0 });
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn pinch_writes_clamped_scale_back() {
        let mut c = controller();
        let mut log = ZoomChangeLog::new();
        let mut sample = pinch(GestureState::Updated, 6.0);
        c.on_pinch(&mut sample, &mut log);
        assert_eq!(sample.total_scale_factor, 4.0);
        assert_eq!(c.zoom(), 4.0);
    }

    #[test]
    fn bounds_are_not_retroactive() {
        let mut c = controller();
        c.set_zoom(3.0);
        c.set_zoom_bounds(0.5, 2.0);
        assert_eq!(c.zoom(), 3.0);

        let mut log = ZoomChangeLog::new();
        c.on_pinch(&mut pinch(GestureState::Updated, 3.0), &mut log);
        assert_eq!(c.zoom(), 2.0);
    }

    #[test]
    fn single_bound_setters() {
        let mut c = controller();
        c.set_min_zoom(0.25);
        c.set_max_zoom(8.0);
        assert_eq!((c.min_zoom(), c.max_zoom()), (0.25, 8.0));
    }

    #[test]
    fn options_apply_initial_zoom() {
        let view = SceneView::new(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        let c = ZoomController::with_options(view, ZoomOptions::default().with_initial_zoom(2.0))
            .unwrap();
        assert_eq!(c.zoom(), 2.0);
        assert_eq!(c.host().transform().as_coeffs()[0], 2.0);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let view = SceneView::new(Size::new(100.0, 100.0), Rect::ZERO);
        let err = ZoomController::with_options(view, ZoomOptions::default().with_zoom_bounds(3.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn disable_is_one_way() {
        let mut c = controller();
        c.disable_transform_writes();
        c.disable_transform_writes();
        assert!(!c.transform_writes_enabled());
    }
}
