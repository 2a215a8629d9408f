//! railbar - a themed, draggable overlay scrollbar engine.
//!
//! The crate is the geometry/synchronization core of an overlay scrollbar:
//! it sizes and positions a synthetic thumb from scroll measurements, keeps
//! thumb and scroll position mutually consistent through drags, track clicks
//! and programmatic scrolls, and re-derives geometry when content changes.
//! Rendering, templating and navigation stay with the host, reached through
//! the [`host::HostAdapter`] trait, so the engine works against any UI
//! framework that can measure a viewport and write inline styles.
//!
//! Vertical-only by design.

pub mod color;
pub mod config;
pub mod drag;
pub mod events;
pub mod geometry;
pub mod host;
pub mod seek;
pub mod theme;
pub mod watcher;
pub mod widget;

pub use widget::ScrollbarWidget;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::{ConfigError, WidgetConfig};
    pub use crate::events::{EventResult, PointerEvent, PointerTarget};
    pub use crate::geometry::{ScrollMetrics, ThumbGeometry, TrackRect};
    pub use crate::host::{HostAdapter, ScrollBehavior, ThumbStyle, TrackStyle};
    pub use crate::theme::{ColorScheme, RouteThemes};
    pub use crate::widget::ScrollbarWidget;
}
