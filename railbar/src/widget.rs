//! Scrollbar widget orchestration.
//!
//! [`ScrollbarWidget`] wires the pure geometry math, the drag session, the
//! seek handler and the content watcher against a [`HostAdapter`]. The host
//! forwards pointer/scroll/mutation/resize signals into the widget and pumps
//! [`tick`](ScrollbarWidget::tick); the widget writes thumb/track styles and
//! scroll positions back through the adapter.
//!
//! Single-threaded and run-to-completion: every entry point completes
//! synchronously, and deferred work exists only as cancelable deadlines
//! ([`next_deadline`](ScrollbarWidget::next_deadline) tells the host when to
//! wake up).

use std::time::{Duration, Instant};

use crate::color::Color;
use crate::config::{ConfigError, WidgetConfig};
use crate::drag::DragSession;
use crate::events::{EventResult, PointerEvent, PointerTarget};
use crate::geometry::ThumbGeometry;
use crate::host::{HostAdapter, ScrollBehavior, ThumbStyle, TrackStyle};
use crate::seek::seek_scroll_top;
use crate::theme::{ColorScheme, RouteThemes};
use crate::watcher::ContentWatcher;

/// Fallback delay before the first geometry pass, for hosts that cannot
/// signal layout readiness explicitly. Hosts that can should call
/// [`ScrollbarWidget::layout_settled`] instead, which disarms this.
pub const MOUNT_SETTLE_DELAY: Duration = Duration::from_millis(150);

/// A themed, draggable overlay scrollbar bound to one viewport/thumb/track
/// triple.
///
/// Owns exactly one drag session and one set of watcher deadlines;
/// [`teardown`](Self::teardown) releases both and turns every entry point
/// into a no-op.
pub struct ScrollbarWidget<H: HostAdapter> {
    host: H,
    config: WidgetConfig,
    themes: RouteThemes,
    scheme: ColorScheme,
    geometry: Option<ThumbGeometry>,
    drag: Option<DragSession>,
    watcher: ContentWatcher,
    mount_deadline: Option<Instant>,
    torn_down: bool,
}

impl<H: HostAdapter> ScrollbarWidget<H> {
    /// Mount the widget: validate the config, resolve the initial theme for
    /// `context`, style the track, and arm the first geometry pass.
    pub fn new(
        host: H,
        config: WidgetConfig,
        themes: RouteThemes,
        context: &str,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheme = themes.resolve(context).clone();
        if !host.supports_mutation_events() {
            log::debug!("host lacks mutation events; relying on resize and periodic recheck");
        }
        let mut widget = Self {
            host,
            config,
            themes,
            scheme,
            geometry: None,
            drag: None,
            watcher: ContentWatcher::new(now),
            mount_deadline: Some(now + MOUNT_SETTLE_DELAY),
            torn_down: false,
        };
        widget.apply_track_style();
        Ok(widget)
    }

    /// Last applied thumb geometry; `None` while the scrollbar is hidden.
    pub fn geometry(&self) -> Option<ThumbGeometry> {
        self.geometry
    }

    /// Whether a drag session is live.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The host can signal that layout has settled instead of waiting out
    /// the mount delay: recomputes immediately.
    pub fn layout_settled(&mut self, _now: Instant) {
        if self.torn_down {
            return;
        }
        self.mount_deadline = None;
        self.recompute();
    }

    /// Offer a pointer (mouse or touch) event to the widget.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> EventResult {
        if self.torn_down {
            return EventResult::Ignored;
        }
        match event {
            PointerEvent::Down {
                target: PointerTarget::Thumb,
                y,
            } => self.begin_drag(y),
            PointerEvent::Down {
                target: PointerTarget::Track,
                y,
            } => self.seek(y),
            PointerEvent::Move { y } => self.drag_to(y),
            PointerEvent::Up | PointerEvent::Cancel => self.end_drag(now),
        }
    }

    /// React to a native scroll event on the viewport: re-derive the thumb
    /// position only. Ignored while a drag session owns the thumb.
    pub fn on_scroll(&mut self, _now: Instant) -> EventResult {
        if self.torn_down || self.drag.is_some() {
            return EventResult::Ignored;
        }
        let Some(geometry) = self.geometry else {
            return EventResult::Ignored;
        };
        let Some(metrics) = self.host.viewport_metrics() else {
            return EventResult::Ignored;
        };
        let offset_y = metrics.thumb_offset(geometry.height);
        if offset_y != geometry.offset_y {
            let updated = ThumbGeometry {
                offset_y,
                ..geometry
            };
            self.geometry = Some(updated);
            self.apply_thumb_style(updated);
        }
        EventResult::Consumed
    }

    /// The host observed a structural mutation in the viewport's subtree.
    pub fn on_content_mutation(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.watcher.note_mutation(now);
    }

    /// The host's window resized.
    pub fn on_resize(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.watcher.note_resize(now);
    }

    /// The navigation context changed: re-resolve the scheme and re-apply
    /// colors. Geometry is left untouched.
    pub fn on_context_change(&mut self, context: &str) {
        if self.torn_down {
            return;
        }
        self.scheme = self.themes.resolve(context).clone();
        self.apply_track_style();
        if let Some(geometry) = self.geometry {
            self.apply_thumb_style(geometry);
        }
    }

    /// Pump due deadlines. While a drag session is live, pending recomputes
    /// stay armed and fire on the first tick after the drag ends.
    pub fn tick(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        if let Some(deadline) = self.mount_deadline
            && now >= deadline
        {
            self.mount_deadline = None;
            self.recompute();
        }
        if self.drag.is_some() {
            return;
        }
        if self.watcher.poll(now) {
            self.recompute();
        }
    }

    /// The earliest instant `tick` has work to do, for host wakeup
    /// scheduling. `None` after teardown.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.torn_down {
            return None;
        }
        match (self.mount_deadline, self.watcher.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Release the drag session and all deadlines. Idempotent; afterwards
    /// no entry point mutates any state.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!("scrollbar widget torn down");
        self.drag = None;
        self.mount_deadline = None;
        self.watcher.cancel();
        self.torn_down = true;
    }

    fn begin_drag(&mut self, pointer_y: f64) -> EventResult {
        let Some(geometry) = self.geometry else {
            return EventResult::Ignored;
        };
        let thumb_start_y = self.host.thumb_offset().unwrap_or_else(|| {
            log::debug!("thumb offset unreadable, starting drag from 0");
            0.0
        });
        self.drag = Some(DragSession::begin(pointer_y, thumb_start_y));
        log::debug!("drag started at pointer y {pointer_y}, thumb y {thumb_start_y}");
        self.apply_thumb_style(geometry);
        EventResult::Consumed
    }

    fn drag_to(&mut self, pointer_y: f64) -> EventResult {
        let Some(session) = self.drag else {
            return EventResult::Ignored;
        };
        let Some(geometry) = self.geometry else {
            return EventResult::Ignored;
        };
        let Some(metrics) = self.host.viewport_metrics() else {
            return EventResult::Ignored;
        };
        let offset_y = session.target_offset(pointer_y, metrics.thumb_max_y(geometry.height));
        let updated = ThumbGeometry {
            offset_y,
            ..geometry
        };
        self.geometry = Some(updated);
        self.apply_thumb_style(updated);
        let scroll_top = metrics.scroll_top_for_offset(geometry.height, offset_y);
        self.host.scroll_to(scroll_top, ScrollBehavior::Auto);
        EventResult::Consumed
    }

    fn end_drag(&mut self, _now: Instant) -> EventResult {
        if self.drag.take().is_none() {
            return EventResult::Ignored;
        }
        log::debug!("drag ended");
        if let Some(geometry) = self.geometry {
            self.apply_thumb_style(geometry);
        }
        EventResult::Consumed
    }

    fn seek(&mut self, click_y: f64) -> EventResult {
        let Some(geometry) = self.geometry else {
            return EventResult::Ignored;
        };
        let Some(metrics) = self.host.viewport_metrics() else {
            return EventResult::Ignored;
        };
        let Some(track) = self.host.track_rect() else {
            return EventResult::Ignored;
        };
        let scroll_top = seek_scroll_top(click_y, &track, &metrics, geometry.height);
        log::debug!("seek to scroll top {scroll_top}");
        self.host.scroll_to(scroll_top, ScrollBehavior::Smooth);
        EventResult::Consumed
    }

    /// Re-derive geometry from fresh measurements and apply hide/show plus
    /// size/position. Idempotent for unchanged metrics.
    fn recompute(&mut self) {
        let Some(metrics) = self.host.viewport_metrics() else {
            self.hide();
            return;
        };
        match ThumbGeometry::compute(&metrics) {
            None => self.hide(),
            Some(geometry) => {
                let was_hidden = self.geometry.is_none();
                if was_hidden {
                    self.host.set_track_visible(true);
                }
                if was_hidden || self.geometry != Some(geometry) {
                    log::debug!(
                        "thumb geometry: height {:.1}, offset {:.1}",
                        geometry.height,
                        geometry.offset_y
                    );
                    self.geometry = Some(geometry);
                    self.apply_thumb_style(geometry);
                }
            }
        }
    }

    fn hide(&mut self) {
        if self.geometry.take().is_some() {
            log::debug!("content fits viewport, hiding scrollbar");
        }
        self.host.set_track_visible(false);
    }

    fn thumb_colors(&self) -> (Color, Color, Color) {
        match self.config.thumb_color {
            // Overrides win everywhere; hover/active are derived so
            // interaction feedback survives the override.
            Some(color) => (color, color.darken(0.08), color.darken(0.16)),
            None => (
                self.scheme.thumb,
                self.scheme.thumb_hover,
                self.scheme.thumb_active,
            ),
        }
    }

    fn apply_thumb_style(&mut self, geometry: ThumbGeometry) {
        let (color, hover_color, active_color) = self.thumb_colors();
        self.host.set_thumb_style(&ThumbStyle {
            height: geometry.height,
            offset_y: geometry.offset_y,
            color,
            hover_color,
            active_color,
            engaged: self.drag.is_some(),
        });
    }

    fn apply_track_style(&mut self) {
        let (color, hover_color) = match self.config.track_color {
            Some(color) => (color, color.darken(0.04)),
            None => (self.scheme.track, self.scheme.track_hover),
        };
        self.host.set_track_style(&TrackStyle {
            width: self.config.track_width,
            color,
            hover_color,
        });
    }
}
