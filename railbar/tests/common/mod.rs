//! In-memory host adapter for widget tests.

use std::cell::RefCell;
use std::rc::Rc;

use railbar::prelude::*;

/// Everything the widget wrote to the host, plus the measurements it reads.
#[derive(Debug)]
pub struct HostState {
    pub metrics: Option<ScrollMetrics>,
    pub track_rect: Option<TrackRect>,
    pub thumb_offset: Option<f64>,
    pub thumb_style: Option<ThumbStyle>,
    pub track_style: Option<TrackStyle>,
    pub track_visible: Option<bool>,
    pub scrolls: Vec<(f64, ScrollBehavior)>,
    pub mutation_events: bool,
}

/// A recording `HostAdapter` backed by shared state, so tests keep a handle
/// after handing the host to the widget.
#[derive(Clone)]
pub struct RecordingHost {
    pub state: Rc<RefCell<HostState>>,
}

impl RecordingHost {
    pub fn new(metrics: ScrollMetrics) -> Self {
        let track_rect = TrackRect {
            top: 0.0,
            height: metrics.client_height,
        };
        Self {
            state: Rc::new(RefCell::new(HostState {
                metrics: Some(metrics),
                track_rect: Some(track_rect),
                thumb_offset: None,
                thumb_style: None,
                track_style: None,
                track_visible: None,
                scrolls: Vec::new(),
                mutation_events: true,
            })),
        }
    }

    pub fn set_metrics(&self, metrics: ScrollMetrics) {
        self.state.borrow_mut().metrics = Some(metrics);
    }

    pub fn last_scroll(&self) -> Option<(f64, ScrollBehavior)> {
        self.state.borrow().scrolls.last().copied()
    }
}

impl HostAdapter for RecordingHost {
    fn viewport_metrics(&self) -> Option<ScrollMetrics> {
        self.state.borrow().metrics
    }

    fn track_rect(&self) -> Option<TrackRect> {
        self.state.borrow().track_rect
    }

    fn thumb_offset(&self) -> Option<f64> {
        self.state.borrow().thumb_offset
    }

    fn scroll_to(&mut self, scroll_top: f64, behavior: ScrollBehavior) {
        let mut state = self.state.borrow_mut();
        state.scrolls.push((scroll_top, behavior));
        // Behave like a real viewport: the requested position lands in the
        // next metrics read, clamped to the scrollable range.
        if let Some(metrics) = &mut state.metrics {
            metrics.scroll_top = scroll_top.clamp(0.0, metrics.max_scroll_top());
        }
    }

    fn set_thumb_style(&mut self, style: &ThumbStyle) {
        let mut state = self.state.borrow_mut();
        state.thumb_style = Some(*style);
        // The rendered position is what a later drag start parses.
        state.thumb_offset = Some(style.offset_y);
    }

    fn set_track_style(&mut self, style: &TrackStyle) {
        self.state.borrow_mut().track_style = Some(*style);
    }

    fn set_track_visible(&mut self, visible: bool) {
        self.state.borrow_mut().track_visible = Some(visible);
    }

    fn supports_mutation_events(&self) -> bool {
        self.state.borrow().mutation_events
    }
}
