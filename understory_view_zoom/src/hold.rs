// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held-tap re-synthesis: turn a held single-finger touch into a click.
//!
//! Touch-only platforms have no secondary mouse button, so a held tap stands in
//! for one. [`HeldTapState`] makes sure each held-tap gesture produces exactly
//! one press/release pair, no matter how many samples the recognizer sends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_view_zoom::{GestureState, HeldTapState, PointerButton, PointerPhase};
//!
//! let mut hold = HeldTapState::default();
//!
//! let at = Some(Point::new(40.0, 30.0));
//! let pair = hold
//!     .update(GestureState::Started, at, PointerButton::Secondary)
//!     .unwrap();
//! assert_eq!(pair[0].phase, PointerPhase::Press);
//! assert_eq!(pair[1].phase, PointerPhase::Release);
//!
//! // Later samples of the same gesture are absorbed.
//! assert!(hold
//!     .update(GestureState::Ended, at, PointerButton::Secondary)
//!     .is_none());
//! ```

use kurbo::Point;

use crate::gesture::GestureState;

/// Mouse button reported by a synthesized pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left button on a right-handed mouse.
    Primary,
    /// Right button on a right-handed mouse; the context-menu button.
    #[default]
    Secondary,
}

/// Press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button went down.
    Press,
    /// Button went up.
    Release,
}

/// Pointer event synthesized for the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyntheticPointerEvent {
    /// Press or release.
    pub phase: PointerPhase,
    /// Position in viewport-local coordinates.
    pub position: Point,
    /// Button that changed state.
    pub button: PointerButton,
}

impl SyntheticPointerEvent {
    /// Returns the press-then-release pair for a click at `position`.
    #[must_use]
    pub fn click(position: Point, button: PointerButton) -> [Self; 2] {
        [
            Self {
                phase: PointerPhase::Press,
                position,
                button,
            },
            Self {
                phase: PointerPhase::Release,
                position,
                button,
            },
        ]
    }
}

/// Tracks whether the current held-tap gesture has already produced a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldTapState {
    delivered: bool,
}

impl HeldTapState {
    /// Feeds one held-tap sample, with `position` already in viewport-local
    /// coordinates, or `None` when the recognizer had no valid position.
    ///
    /// Returns the click to deliver the first time a sample with a valid
    /// position is seen in a gesture. `Started` opens a new gesture even if
    /// the previous one never ended, and `Ended` closes it, so the next one
    /// can click again.
    pub fn update(
        &mut self,
        state: GestureState,
        position: Option<Point>,
        button: PointerButton,
    ) -> Option<[SyntheticPointerEvent; 2]> {
        if state == GestureState::Started {
            self.delivered = false;
        }
        let click = match position {
            Some(position) if !self.delivered => {
                self.delivered = true;
                Some(SyntheticPointerEvent::click(position, button))
            }
            _ => None,
        };
        if state == GestureState::Ended {
            self.delivered = false;
        }
        click
    }

    /// Returns `true` if the gesture in progress has already clicked.
    #[must_use]
    pub fn has_delivered(&self) -> bool {
        self.delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: PointerButton = PointerButton::Secondary;

    #[test]
    fn click_is_press_then_release_at_the_same_point() {
        let p = Point::new(12.0, 34.0);
        let [press, release] = SyntheticPointerEvent::click(p, PointerButton::Primary);
        assert_eq!(press.phase, PointerPhase::Press);
        assert_eq!(release.phase, PointerPhase::Release);
        assert_eq!(press.position, p);
        assert_eq!(release.position, p);
        assert_eq!(press.button, PointerButton::Primary);
    }

    #[test]
    fn one_click_per_gesture() {
        let mut hold = HeldTapState::default();
        let p = Some(Point::new(5.0, 5.0));

        assert!(hold.update(GestureState::Started, p, BUTTON).is_some());
        assert!(hold.has_delivered());
        assert!(hold.update(GestureState::Updated, p, BUTTON).is_none());
        assert!(hold.update(GestureState::Ended, p, BUTTON).is_none());
        assert!(!hold.has_delivered());

        // A new gesture clicks again.
        assert!(hold.update(GestureState::Started, p, BUTTON).is_some());
    }

    #[test]
    fn started_rearms_after_a_gesture_that_never_ended() {
        let mut hold = HeldTapState::default();
        let p = Some(Point::new(5.0, 5.0));

        assert!(hold.update(GestureState::Started, p, BUTTON).is_some());
        // The recognizer dropped the gesture without an `Ended` sample.
        assert!(hold.update(GestureState::Started, p, BUTTON).is_some());
        assert!(hold.update(GestureState::Updated, p, BUTTON).is_none());
        assert!(hold.update(GestureState::Started, p, BUTTON).is_some());
    }

    #[test]
    fn missing_position_is_skipped_until_a_valid_one_arrives() {
        let mut hold = HeldTapState::default();

        assert!(hold.update(GestureState::Started, None, BUTTON).is_none());
        assert!(!hold.has_delivered());

        let pair = hold
            .update(GestureState::Updated, Some(Point::new(1.0, 0.0)), BUTTON)
            .unwrap();
        assert_eq!(pair[0].position, Point::new(1.0, 0.0));
    }

    #[test]
    fn single_sample_gesture_still_clicks_and_resets() {
        let mut hold = HeldTapState::default();
        let p = Some(Point::new(9.0, 9.0));

        assert!(hold.update(GestureState::Ended, p, BUTTON).is_some());
        assert!(!hold.has_delivered());
    }

    #[test]
    fn gesture_without_valid_position_never_clicks() {
        let mut hold = HeldTapState::default();
        for state in [
            GestureState::Started,
            GestureState::Updated,
            GestureState::Ended,
        ] {
            assert!(hold.update(state, None, BUTTON).is_none());
        }
    }
}
