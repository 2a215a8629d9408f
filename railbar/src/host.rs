//! The host adapter boundary.
//!
//! The engine never talks to a concrete UI framework. The host hands the
//! widget a viewport, a thumb, and a track (parent of the thumb) behind this
//! trait; the widget only reads measurements and writes numeric/color style
//! values back. Style application is scoped to this instance's elements —
//! the widget never touches shared global style state.

use crate::color::Color;
use crate::geometry::{ScrollMetrics, TrackRect};

/// How a requested scroll position change should be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately (drag tracking).
    Auto,
    /// Animate to the target (click-to-seek).
    Smooth,
}

/// Inline style values the widget writes onto the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStyle {
    pub height: f64,
    pub offset_y: f64,
    pub color: Color,
    pub hover_color: Color,
    pub active_color: Color,
    /// True while a drag session holds the thumb (hosts typically render
    /// this as reduced opacity).
    pub engaged: bool,
}

/// Inline style values the widget writes onto the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub width: f64,
    pub color: Color,
    pub hover_color: Color,
}

/// Measurement and style operations a host must supply.
///
/// All reads are synchronous; `None` from a measurement means the element
/// is not available right now (detached, mid-layout) and degrades to the
/// hidden state or a zero fallback, never an error.
pub trait HostAdapter {
    /// Current scroll measurements of the viewport.
    fn viewport_metrics(&self) -> Option<ScrollMetrics>;

    /// The track's placement in the pointer event coordinate space.
    fn track_rect(&self) -> Option<TrackRect>;

    /// The thumb's current offset as rendered, parsed from its position
    /// representation. `None` when unparsable or absent.
    fn thumb_offset(&self) -> Option<f64>;

    /// Set the viewport's scroll position.
    fn scroll_to(&mut self, scroll_top: f64, behavior: ScrollBehavior);

    /// Apply size, position and colors to the thumb.
    fn set_thumb_style(&mut self, style: &ThumbStyle);

    /// Apply width and colors to the track.
    fn set_track_style(&mut self, style: &TrackStyle);

    /// Show or hide thumb and track together.
    fn set_track_visible(&mut self, visible: bool);

    /// Whether the host can deliver structural mutation signals. Hosts
    /// without them lean on resize signals and the periodic recheck.
    fn supports_mutation_events(&self) -> bool {
        true
    }
}
