//! Drives the scrollbar widget against a simulated host.
//!
//! There is no real DOM here: the host is a few numbers in memory. The
//! script mounts the widget, scrolls, drags the thumb, clicks the track,
//! grows the content and switches navigation context, logging every style
//! write the widget performs.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use railbar::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug)]
struct SimState {
    metrics: ScrollMetrics,
    thumb_offset: Option<f64>,
}

#[derive(Clone)]
struct SimHost {
    state: Rc<RefCell<SimState>>,
}

impl SimHost {
    fn new(metrics: ScrollMetrics) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                metrics,
                thumb_offset: None,
            })),
        }
    }
}

impl HostAdapter for SimHost {
    fn viewport_metrics(&self) -> Option<ScrollMetrics> {
        Some(self.state.borrow().metrics)
    }

    fn track_rect(&self) -> Option<TrackRect> {
        let metrics = self.state.borrow().metrics;
        Some(TrackRect {
            top: 0.0,
            height: metrics.client_height,
        })
    }

    fn thumb_offset(&self) -> Option<f64> {
        self.state.borrow().thumb_offset
    }

    fn scroll_to(&mut self, scroll_top: f64, behavior: ScrollBehavior) {
        let mut state = self.state.borrow_mut();
        let max = state.metrics.max_scroll_top();
        state.metrics.scroll_top = scroll_top.clamp(0.0, max);
        log::info!("viewport scrolled to {scroll_top:.1} ({behavior:?})");
    }

    fn set_thumb_style(&mut self, style: &ThumbStyle) {
        self.state.borrow_mut().thumb_offset = Some(style.offset_y);
        log::info!(
            "thumb: height {:.1}px at y {:.1}px, color {}, engaged {}",
            style.height,
            style.offset_y,
            style.color.to_css(),
            style.engaged
        );
    }

    fn set_track_style(&mut self, style: &TrackStyle) {
        log::info!(
            "track: width {:.1}px, color {}",
            style.width,
            style.color.to_css()
        );
    }

    fn set_track_visible(&mut self, visible: bool) {
        log::info!("track visible: {visible}");
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let host = SimHost::new(ScrollMetrics::new(0.0, 1000.0, 300.0));
    let mut now = Instant::now();
    let mut widget = ScrollbarWidget::new(
        host.clone(),
        WidgetConfig::default(),
        RouteThemes::default(),
        "app/home",
        now,
    )
    .expect("valid config");

    // Host layout is ready right away in a simulation.
    widget.layout_settled(now);

    // Native scroll input.
    host.state.borrow_mut().metrics.scroll_top = 350.0;
    widget.on_scroll(now);

    // Drag the thumb 40px down.
    widget.handle_pointer(
        PointerEvent::Down {
            target: PointerTarget::Thumb,
            y: 100.0,
        },
        now,
    );
    widget.handle_pointer(PointerEvent::Move { y: 120.0 }, now);
    widget.handle_pointer(PointerEvent::Move { y: 140.0 }, now);
    widget.handle_pointer(PointerEvent::Up, now);

    // Click-to-seek back to the top quarter of the track.
    widget.handle_pointer(
        PointerEvent::Down {
            target: PointerTarget::Track,
            y: 75.0,
        },
        now,
    );

    // Content grows; the debounced recompute picks it up.
    host.state.borrow_mut().metrics.scroll_height = 2000.0;
    widget.on_content_mutation(now);
    now += Duration::from_millis(30);
    widget.tick(now);

    // Navigation switches to the reader, which recolors the scrollbar.
    widget.on_context_change("app/reader/chapter-1");

    widget.teardown();
}
