//! Drag session state.
//!
//! The widget holds `Option<DragSession>`: `Some` is the Dragging state,
//! `None` is Idle. At most one session exists per widget, created on
//! pointer-down on the thumb and dropped on pointer-up or cancel. While a
//! session is live it owns the thumb position; scroll-driven recompute is
//! suppressed so the two write paths never fight.

/// An in-progress thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer Y at the moment the drag started.
    pointer_start_y: f64,
    /// Thumb offset at the moment the drag started.
    thumb_start_y: f64,
}

impl DragSession {
    /// Start a session. `thumb_start_y` comes from the host's current thumb
    /// position; callers fall back to 0.0 when it is unreadable.
    pub fn begin(pointer_start_y: f64, thumb_start_y: f64) -> Self {
        Self {
            pointer_start_y,
            thumb_start_y,
        }
    }

    /// Thumb offset for the current pointer position, clamped to the track.
    ///
    /// Dragging past either end pins the thumb at `0` or `thumb_max_y`.
    pub fn target_offset(&self, pointer_y: f64, thumb_max_y: f64) -> f64 {
        let delta = pointer_y - self.pointer_start_y;
        (self.thumb_start_y + delta).clamp(0.0, thumb_max_y.max(0.0))
    }
}
