use super::*;
use crate::nav::intent::Intent;
use crate::nav::router::ViewMode;
use crate::nav::state::{Navigator, NavigatorOptions};

#[test]
fn presentation_is_the_initial_mode() {
    let nav = navigator(plain_deck(3));
    assert_eq!(nav.router().get(), ViewMode::Presentation);
    assert_eq!(nav.router().marker(), "mode-presentation");
    assert!(nav.router().presentation.is_visible());
}

#[test]
fn set_overview_runs_the_full_sequence() {
    let mut nav = navigator(plain_deck(3));
    nav.apply(Intent::SetMode(ViewMode::Overview));

    let router = nav.router();
    assert_eq!(router.get(), ViewMode::Overview);
    assert_eq!(router.marker(), "mode-overview");
    assert!(!router.presentation.is_visible());
    let overview = router.overview.as_ref().expect("overview wired");
    assert!(overview.is_built());
    assert!(overview.is_visible());
    let controls = router.controls.as_ref().expect("controls wired");
    assert!(controls.presentation_button_enabled);
    assert!(!controls.overview_button_enabled);
}

#[test]
fn mode_button_disabled_matches_active_mode() {
    let mut nav = navigator(plain_deck(3));
    for mode in [ViewMode::Overview, ViewMode::Presentation, ViewMode::Overview] {
        nav.apply(Intent::SetMode(mode));
        let controls = nav.router().controls.as_ref().unwrap();
        let disabled = [
            !controls.presentation_button_enabled,
            !controls.overview_button_enabled,
        ];
        assert_eq!(disabled.iter().filter(|&&d| d).count(), 1);
        match mode {
            ViewMode::Presentation => assert!(disabled[0]),
            ViewMode::Overview => assert!(disabled[1]),
        }
    }
}

#[test]
fn toggle_mode_flips_between_the_two() {
    let mut nav = navigator(plain_deck(2));
    nav.apply(Intent::ToggleMode);
    assert_eq!(nav.router().get(), ViewMode::Overview);
    nav.apply(Intent::ToggleMode);
    assert_eq!(nav.router().get(), ViewMode::Presentation);
}

#[test]
fn overview_builds_once_and_shows_thereafter() {
    let mut nav = navigator(plain_deck(4));
    nav.apply(Intent::SetMode(ViewMode::Overview));
    assert_eq!(nav.router().overview.as_ref().unwrap().cards().len(), 4);
    nav.apply(Intent::SetMode(ViewMode::Presentation));
    assert!(!nav.router().overview.as_ref().unwrap().is_visible());
    nav.apply(Intent::SetMode(ViewMode::Overview));
    assert!(nav.router().overview.as_ref().unwrap().is_visible());
}

#[test]
fn selection_from_overview_lands_in_presentation() {
    let mut nav = navigator(plain_deck(5));
    nav.apply(Intent::SetMode(ViewMode::Overview));

    let selected = {
        let overview = nav.router_mut().overview.as_mut().unwrap();
        overview.select(4);
        overview.take_selection().expect("selection recorded")
    };
    nav.apply(Intent::Select {
        index: selected as i64,
    });

    assert_eq!(nav.router().get(), ViewMode::Presentation);
    assert_cursor(&nav, 4, 0);
    assert!(nav.router().presentation.is_visible());
}

#[test]
fn go_to_prompt_from_overview_switches_first() {
    use crate::nav::input::controls::ControlsPanel;

    let mut nav = navigator(plain_deck(5));
    nav.apply(Intent::SetMode(ViewMode::Overview));

    let panel = ControlsPanel::new();
    let intent = panel.submit_go_to(" 3 ").expect("numeric input");
    nav.apply(intent);
    assert_eq!(nav.router().get(), ViewMode::Presentation);
    assert_cursor(&nav, 3, 0);
}

#[test]
fn unwired_overview_keeps_current_mode() {
    let options = NavigatorOptions {
        overview: false,
        ..NavigatorOptions::default()
    };
    let mut nav = Navigator::new(plain_deck(3), options);
    nav.apply(Intent::SetMode(ViewMode::Overview));
    assert_eq!(nav.router().get(), ViewMode::Presentation);
    assert!(nav.router().presentation.is_visible());
}

#[test]
fn transitions_in_overview_track_the_current_card() {
    let mut nav = navigator(plain_deck(4));
    nav.apply(Intent::SetMode(ViewMode::Overview));
    nav.apply(Intent::Next);
    assert_eq!(nav.router().overview.as_ref().unwrap().current(), Some(2));
}
