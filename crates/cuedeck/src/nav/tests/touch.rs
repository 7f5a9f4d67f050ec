use crate::nav::input::touch::SwipeTracker;
use crate::nav::intent::Intent;

#[test]
fn swipe_left_fires_next_once() {
    let mut tracker = SwipeTracker::new(30.0).unwrap();
    tracker.start(200.0);
    assert_eq!(tracker.movement(185.0), None);
    assert_eq!(tracker.movement(160.0), Some(Intent::Next));
    // Same gesture keeps dragging: no repeat.
    assert_eq!(tracker.movement(100.0), None);
    assert_eq!(tracker.movement(400.0), None);
}

#[test]
fn swipe_right_fires_prev() {
    let mut tracker = SwipeTracker::new(30.0).unwrap();
    tracker.start(100.0);
    assert_eq!(tracker.movement(131.0), Some(Intent::Prev));
}

#[test]
fn delta_is_measured_from_the_gesture_origin() {
    // Many small moves accumulate against the origin, not each other.
    let mut tracker = SwipeTracker::new(30.0).unwrap();
    tracker.start(0.0);
    assert_eq!(tracker.movement(-12.0), None);
    assert_eq!(tracker.movement(-24.0), None);
    assert_eq!(tracker.movement(-31.0), Some(Intent::Next));
}

#[test]
fn new_gesture_rearms_the_tracker() {
    let mut tracker = SwipeTracker::new(30.0).unwrap();
    tracker.start(100.0);
    assert_eq!(tracker.movement(60.0), Some(Intent::Next));
    tracker.end();
    tracker.start(100.0);
    assert_eq!(tracker.movement(60.0), Some(Intent::Next));
}

#[test]
fn movement_without_start_is_ignored() {
    let mut tracker = SwipeTracker::new(30.0).unwrap();
    assert_eq!(tracker.movement(500.0), None);
    tracker.end();
    assert_eq!(tracker.movement(-500.0), None);
}

#[test]
fn invalid_thresholds_are_construction_errors() {
    assert!(SwipeTracker::new(0.0).is_err());
    assert!(SwipeTracker::new(-5.0).is_err());
    assert!(SwipeTracker::new(f32::NAN).is_err());
    assert!(SwipeTracker::new(f32::INFINITY).is_err());
}
