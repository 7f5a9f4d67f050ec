use super::*;
use crate::nav::fragment::encode;

#[test]
fn fragment_with_reveal_step_is_applied() {
    // Slide 2 has three reveal items, so "#2.1" is in range.
    let mut nav = navigator(reveal_deck(&[0, 3]));
    nav.update_from_fragment(Some("#2.1"));
    assert_cursor(&nav, 2, 1);
}

#[test]
fn garbage_fragment_defaults_to_start() {
    let mut nav = navigator(plain_deck(3));
    nav.go_to(2, 0);
    nav.update_from_fragment(Some("#abc"));
    assert_cursor(&nav, 1, 0);
}

#[test]
fn missing_fragment_performs_initial_render() {
    let mut nav = navigator(plain_deck(3));
    assert_eq!(nav.cycles(), 0);
    nav.update_from_fragment(None);
    // Cursor unchanged, but the full cycle ran: this is the load-time render.
    assert_cursor(&nav, 1, 0);
    assert_eq!(nav.cycles(), 1);
    assert_eq!(nav.router().presentation.selected_slides(), vec![1]);
}

#[test]
fn fragment_round_trips_through_the_navigator() {
    let mut nav = navigator(reveal_deck(&[2, 0, 3]));
    for (index, step) in [(1, 2), (2, 0), (3, 3), (3, 1)] {
        nav.update_from_fragment(Some(&encode(index, step)));
        assert_cursor(&nav, index, step);
    }
}

#[test]
fn fragment_without_hash_prefix_is_ignored() {
    // "3.0" is not a fragment; only the canonical "#3.0" moves the cursor.
    let mut nav = navigator(plain_deck(5));
    nav.update_from_fragment(Some("3.0"));
    assert_cursor(&nav, 1, 0);
    nav.update_from_fragment(Some(&encode(3, 0)));
    assert_cursor(&nav, 3, 0);
}

#[test]
fn out_of_range_fragment_is_clamped() {
    let mut nav = navigator(plain_deck(3));
    nav.update_from_fragment(Some("#99.7"));
    assert_cursor(&nav, 3, 0);
}

#[test]
fn committed_transition_writes_canonical_fragment() {
    let mut nav = navigator(reveal_deck(&[0, 2]));
    nav.go_to(2, 1);
    assert_eq!(nav.location().fragment(), Some("#2.1"));
    // A clamped commit writes the clamped value, not the request.
    nav.go_to(99, 99);
    assert_eq!(nav.location().fragment(), Some("#2.2"));
}

#[test]
fn unchanged_fragment_update_does_not_write() {
    let mut nav = navigator(plain_deck(2));
    nav.update_from_fragment(Some("#garbage"));
    assert_eq!(nav.location().fragment(), None);
    assert_eq!(nav.cycles(), 1);
}
