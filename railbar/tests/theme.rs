use railbar::color::Color;
use railbar::theme::{ColorScheme, RouteThemes};

#[test]
fn test_default_routes_reader_to_blue() {
    let themes = RouteThemes::default();
    assert_eq!(*themes.resolve("app/reader/chapter-3"), ColorScheme::blue());
}

#[test]
fn test_default_falls_back_to_green() {
    let themes = RouteThemes::default();
    assert_eq!(*themes.resolve("app/home"), ColorScheme::green());
    assert_eq!(*themes.resolve(""), ColorScheme::green());
}

#[test]
fn test_unrecognized_context_uses_default() {
    let themes = RouteThemes::new(ColorScheme::blue());
    assert_eq!(*themes.resolve("no/such/route"), ColorScheme::blue());
}

#[test]
fn test_first_matching_route_wins() {
    let themes = RouteThemes::new(ColorScheme::green())
        .route("reader", ColorScheme::blue())
        .route("read", ColorScheme::green());
    assert_eq!(*themes.resolve("reader"), ColorScheme::blue());
}

#[test]
fn test_schemes_are_distinct() {
    assert_ne!(ColorScheme::green(), ColorScheme::blue());
}

#[test]
fn test_hover_and_active_are_darker() {
    let scheme = ColorScheme::green();
    let (l_base, _, _) = scheme.thumb.to_oklch();
    let (l_hover, _, _) = scheme.thumb_hover.to_oklch();
    let (l_active, _, _) = scheme.thumb_active.to_oklch();
    assert!(l_hover < l_base);
    assert!(l_active < l_hover);
}

#[test]
fn test_color_css_output() {
    assert_eq!(Color::hex(0x4CAF50).to_css(), "#4caf50");
    assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
}

#[test]
fn test_color_parse_hex() {
    // Parsing round-trips through f32 sRGB, so allow one unit per channel.
    let parsed = Color::parse("#4caf50").unwrap();
    let expected = Color::rgb(76, 175, 80);
    assert!(parsed.r().abs_diff(expected.r()) <= 1);
    assert!(parsed.g().abs_diff(expected.g()) <= 1);
    assert!(parsed.b().abs_diff(expected.b()) <= 1);
}

#[test]
fn test_color_parse_invalid() {
    assert_eq!(Color::parse("not a color"), None);
}
