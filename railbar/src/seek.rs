//! Click-to-seek targeting.

use crate::geometry::{ScrollMetrics, TrackRect};

/// Scroll position for a click on the track.
///
/// Centers the thumb on the click, clamps it to the track, and inverts the
/// thumb-position mapping with the same formula drags use. The widget
/// requests a smooth scroll to the result; a track click is a discrete jump
/// and reads better animated, where drag tracking must stay immediate.
pub fn seek_scroll_top(
    click_y: f64,
    track: &TrackRect,
    metrics: &ScrollMetrics,
    thumb_height: f64,
) -> f64 {
    let target_y = (click_y - track.top) - thumb_height / 2.0;
    let clamped = target_y.clamp(0.0, metrics.thumb_max_y(thumb_height));
    metrics.scroll_top_for_offset(thumb_height, clamped)
}
