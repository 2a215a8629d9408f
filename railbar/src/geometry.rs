//! Pure thumb geometry math.
//!
//! Everything here maps scroll measurements to thumb size/position and back.
//! No side effects and no host access; the widget reads [`ScrollMetrics`]
//! fresh from the host before every call, so geometry is always re-derivable
//! and never authoritative state.

/// Minimum grabbable thumb height in pixels.
pub const MIN_THUMB_HEIGHT: f64 = 50.0;

/// Pixels the thumb always leaves free at the end of the track.
pub const EDGE_MARGIN: f64 = 20.0;

/// Overflow below this many pixels is treated as sub-pixel layout noise and
/// does not warrant a scrollbar.
pub const OVERFLOW_TOLERANCE: f64 = 5.0;

/// A snapshot of the viewport's scroll measurements, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll position.
    pub scroll_top: f64,
    /// Total content height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// The maximum reachable scroll position.
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Normalized scroll progress in `[0, 1]`. Zero when there is no
    /// scrollable range.
    pub fn scroll_fraction(&self) -> f64 {
        let range = self.max_scroll_top();
        if range <= 0.0 {
            0.0
        } else {
            (self.scroll_top / range).clamp(0.0, 1.0)
        }
    }

    /// Thumb height for these metrics, or `None` when the content does not
    /// overflow enough to need a scrollbar (the widget hides thumb and
    /// track rather than showing a zero-size thumb).
    ///
    /// The height is proportional to the visible fraction of the content,
    /// floored at [`MIN_THUMB_HEIGHT`] and capped so the thumb never fills
    /// the track past [`EDGE_MARGIN`]. The floor wins if the two bounds
    /// cross on a very short viewport.
    pub fn thumb_height(&self) -> Option<f64> {
        if self.scroll_height <= self.client_height + OVERFLOW_TOLERANCE {
            return None;
        }
        let ratio = self.client_height / self.scroll_height;
        let raw = self.client_height * ratio;
        Some(raw.min(self.client_height - EDGE_MARGIN).max(MIN_THUMB_HEIGHT))
    }

    /// The furthest offset the thumb's top edge can travel.
    pub fn thumb_max_y(&self, thumb_height: f64) -> f64 {
        (self.client_height - thumb_height).max(0.0)
    }

    /// Thumb offset for the current scroll position.
    pub fn thumb_offset(&self, thumb_height: f64) -> f64 {
        self.scroll_fraction() * self.thumb_max_y(thumb_height)
    }

    /// Scroll position for a thumb offset. Exact algebraic inverse of
    /// [`thumb_offset`](Self::thumb_offset), so drag positioning and
    /// scroll-driven positioning stay numerically consistent.
    pub fn scroll_top_for_offset(&self, thumb_height: f64, offset_y: f64) -> f64 {
        let max_y = self.thumb_max_y(thumb_height);
        if max_y <= 0.0 {
            return 0.0;
        }
        let fraction = (offset_y / max_y).clamp(0.0, 1.0);
        fraction * self.max_scroll_top()
    }
}

/// Computed thumb size and position, in pixels.
///
/// `offset_y` is always within `[0, client_height - height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub height: f64,
    pub offset_y: f64,
}

impl ThumbGeometry {
    /// Derive geometry from metrics. `None` means the scrollbar is hidden.
    pub fn compute(metrics: &ScrollMetrics) -> Option<Self> {
        let height = metrics.thumb_height()?;
        Some(Self {
            height,
            offset_y: metrics.thumb_offset(height),
        })
    }
}

/// The track's host-measured placement, for click-to-seek targeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    /// Top edge in the pointer event's coordinate space.
    pub top: f64,
    /// Track height (equals the viewport's client height).
    pub height: f64,
}
