use railbar::drag::DragSession;
use railbar::events::{PointerEvent, PointerTarget};
use railbar::geometry::{ScrollMetrics, TrackRect};
use railbar::seek::seek_scroll_top;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_drag_moves_by_pointer_delta() {
    let session = DragSession::begin(100.0, 50.0);
    // +40 pointer delta from a 50px start, inside the track.
    assert!(approx(session.target_offset(140.0, 210.0), 90.0));
}

#[test]
fn test_drag_scenario_maps_to_scroll() {
    // thumb_start 50, delta +40, thumb_max 210 -> offset 90 -> scroll ~300.
    let metrics = ScrollMetrics::new(0.0, 1000.0, 300.0);
    let session = DragSession::begin(100.0, 50.0);
    let offset = session.target_offset(140.0, metrics.thumb_max_y(90.0));
    let scroll_top = metrics.scroll_top_for_offset(90.0, offset);
    assert!(approx(scroll_top, 300.0));
}

#[test]
fn test_drag_clamps_above_track() {
    let session = DragSession::begin(100.0, 50.0);
    assert!(approx(session.target_offset(-5000.0, 210.0), 0.0));
}

#[test]
fn test_drag_clamps_below_track() {
    let session = DragSession::begin(100.0, 50.0);
    assert!(approx(session.target_offset(5000.0, 210.0), 210.0));
}

#[test]
fn test_drag_with_degenerate_track() {
    let session = DragSession::begin(100.0, 0.0);
    assert!(approx(session.target_offset(150.0, 0.0), 0.0));
}

#[test]
fn test_seek_centers_thumb_on_click() {
    let metrics = ScrollMetrics::new(0.0, 1000.0, 300.0);
    let track = TrackRect {
        top: 20.0,
        height: 300.0,
    };
    // Click at 170 in client space = 150 into the track; thumb center
    // lands there, so its top edge sits at 105 -> scroll 350.
    let scroll_top = seek_scroll_top(170.0, &track, &metrics, 90.0);
    assert!(approx(scroll_top, 350.0));
}

#[test]
fn test_seek_clamps_to_track_ends() {
    let metrics = ScrollMetrics::new(0.0, 1000.0, 300.0);
    let track = TrackRect {
        top: 0.0,
        height: 300.0,
    };
    assert!(approx(seek_scroll_top(0.0, &track, &metrics, 90.0), 0.0));
    assert!(approx(seek_scroll_top(300.0, &track, &metrics, 90.0), 700.0));
}

#[test]
fn test_touch_events_use_first_touch_point() {
    let down = PointerEvent::from_touch_start(PointerTarget::Thumb, &[120.0, 480.0]);
    assert_eq!(
        down,
        Some(PointerEvent::Down {
            target: PointerTarget::Thumb,
            y: 120.0
        })
    );
    let moved = PointerEvent::from_touch_move(&[125.5]);
    assert_eq!(moved, Some(PointerEvent::Move { y: 125.5 }));
}

#[test]
fn test_touch_events_empty_list() {
    assert_eq!(PointerEvent::from_touch_start(PointerTarget::Track, &[]), None);
    assert_eq!(PointerEvent::from_touch_move(&[]), None);
}
