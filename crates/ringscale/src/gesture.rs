//! Turns a pointer drag around the ring into a clamped rotation. Ending a drag commits
//! the rotation, so the next drag continues from where this one stopped.

use crate::geometry::{self, Point};
use crate::range::ScaleRange;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Session {
    #[default]
    Idle,
    /// Started on the ring center, where no angle exists yet.
    Unanchored,
    Anchored {
        start_angle: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    current_angle: f64,
    committed_angle: f64,
    session: Session,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn committed_angle(&self) -> f64 {
        self.committed_angle
    }

    pub fn drag_start_angle(&self) -> Option<f64> {
        match self.session {
            Session::Anchored { start_angle } => Some(start_angle),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session != Session::Idle
    }

    pub fn drag_start(&mut self, pointer: Point, center: Point) {
        self.session = match geometry::polar_angle_deg(center, pointer) {
            Some(start_angle) => Session::Anchored { start_angle },
            None => Session::Unanchored,
        };
        log::debug!("Drag started at {:?} ({:?})", pointer, self.session);
    }

    /// Returns the value now under the indicator, or `None` (rotation untouched) outside
    /// a session or when the pointer has no angle around `center`.
    pub fn drag_move(
        &mut self,
        pointer: Point,
        center: Point,
        range: &ScaleRange,
    ) -> Option<i32> {
        let touch_angle = geometry::polar_angle_deg(center, pointer)?;

        let start_angle = match self.session {
            Session::Idle => return None,
            Session::Unanchored => {
                self.session = Session::Anchored {
                    start_angle: touch_angle,
                };
                return None;
            }
            Session::Anchored { start_angle } => start_angle,
        };

        let proposed = self.committed_angle + (touch_angle - start_angle);
        self.current_angle = range.clamp_angle(proposed);
        log::trace!(
            "Drag to {:.2} deg (proposed {:.2})",
            self.current_angle,
            proposed
        );
        Some(range.value_at(self.current_angle))
    }

    pub fn drag_end(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag ended at {:.2} deg", self.current_angle);
        }
        self.committed_angle = self.current_angle;
        self.session = Session::Idle;
    }

    pub fn drag_cancel(&mut self) {
        self.drag_end();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
