//! Pointer input types and handler results.
//!
//! Mouse and touch input share one event vocabulary; only the coordinate
//! extraction differs, and the touch constructors do that extraction (first
//! touch point) so the widget's state machine never sees the difference.

/// Which element a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The draggable thumb: starts a drag.
    Thumb,
    /// The track rail: a click-to-seek.
    Track,
}

/// A pointer event, already reduced to the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button press or touch start.
    Down { target: PointerTarget, y: f64 },
    /// Movement while a button or touch is held.
    Move { y: f64 },
    /// Button release or touch end.
    Up,
    /// The host cancelled the interaction (e.g. touch cancel).
    Cancel,
}

impl PointerEvent {
    /// Build a `Down` event from a touch list, using the first touch
    /// point's Y. Returns `None` for an empty list.
    pub fn from_touch_start(target: PointerTarget, touch_ys: &[f64]) -> Option<Self> {
        touch_ys.first().map(|&y| Self::Down { target, y })
    }

    /// Build a `Move` event from a touch list, using the first touch
    /// point's Y. Returns `None` for an empty list.
    pub fn from_touch_move(touch_ys: &[f64]) -> Option<Self> {
        touch_ys.first().map(|&y| Self::Move { y })
    }
}

/// Result of offering an event to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget acted on the event; the host should suppress default
    /// handling (text selection, native scrolling).
    Consumed,
    /// The event was not for this widget.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
