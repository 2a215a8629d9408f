//! Theme system for railbar.
//!
//! A [`ColorScheme`] names every color the scrollbar applies: the thumb in
//! its rest/hover/active states and the track in its rest/hover states.
//! Schemes are immutable; the widget selects one through [`RouteThemes`]
//! based on an opaque navigation context key supplied by the host.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Named colors for one scrollbar appearance.
///
/// Schemes are selected, never mutated. Construction-time overrides in
/// `WidgetConfig` win over the scheme at every application point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Thumb at rest.
    pub thumb: Color,
    /// Thumb under the pointer.
    pub thumb_hover: Color,
    /// Thumb while pressed or dragged.
    pub thumb_active: Color,
    /// Track at rest.
    pub track: Color,
    /// Track under the pointer.
    pub track_hover: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::green()
    }
}

impl ColorScheme {
    /// The default green scheme.
    pub fn green() -> Self {
        let thumb = Color::hex(0x4CAF50);
        let track = Color::hex(0xE8F5E9);
        Self {
            thumb,
            thumb_hover: thumb.darken(0.08),
            thumb_active: thumb.darken(0.16),
            track,
            track_hover: track.darken(0.04),
        }
    }

    /// The alternate blue scheme.
    pub fn blue() -> Self {
        let thumb = Color::hex(0x42A5F5);
        let track = Color::hex(0xE3F2FD);
        Self {
            thumb,
            thumb_hover: thumb.darken(0.08),
            thumb_active: thumb.darken(0.16),
            track,
            track_hover: track.darken(0.04),
        }
    }
}

/// Maps navigation context keys to color schemes.
///
/// Routes are an ordered list of `(fragment, scheme)` pairs; the first
/// fragment contained in the context key wins. A key matching no route
/// resolves to the default scheme, so an unrecognized context is never an
/// error.
#[derive(Debug, Clone)]
pub struct RouteThemes {
    default_scheme: ColorScheme,
    routes: Vec<(String, ColorScheme)>,
}

impl Default for RouteThemes {
    fn default() -> Self {
        Self::new(ColorScheme::green()).route("reader", ColorScheme::blue())
    }
}

impl RouteThemes {
    /// Create a resolver with only a default scheme.
    pub fn new(default_scheme: ColorScheme) -> Self {
        Self {
            default_scheme,
            routes: Vec::new(),
        }
    }

    /// Add a route mapping: context keys containing `fragment` resolve to
    /// `scheme`. Earlier routes take priority.
    pub fn route(mut self, fragment: impl Into<String>, scheme: ColorScheme) -> Self {
        self.routes.push((fragment.into(), scheme));
        self
    }

    /// Resolve a context key to a scheme.
    pub fn resolve(&self, context: &str) -> &ColorScheme {
        for (fragment, scheme) in &self.routes {
            if context.contains(fragment.as_str()) {
                log::debug!("context '{}' matched route '{}'", context, fragment);
                return scheme;
            }
        }
        log::debug!("context '{}' matched no route, using default scheme", context);
        &self.default_scheme
    }
}
