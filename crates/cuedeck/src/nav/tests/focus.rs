use super::*;
use crate::parser;

fn linked_deck() -> crate::parser::Deck {
    parser::parse(
        "# One\n\n[first](https://a.example)\n\n---\n\
         \n# Two\n\n[second](https://b.example) and [dead]()\n\n---\n\
         \n# Three\n\n[third](https://c.example)",
    )
}

#[test]
fn initial_render_focuses_the_first_slide() {
    let mut nav = navigator(linked_deck());
    nav.update_from_fragment(None);
    assert_eq!(nav.focus().reachable_slides(), vec![1]);
}

#[test]
fn every_committed_transition_moves_focus() {
    let mut nav = navigator(linked_deck());
    nav.update_from_fragment(None);
    nav.next();
    assert_eq!(nav.focus().reachable_slides(), vec![2]);
    nav.go_to(3, 0);
    assert_eq!(nav.focus().reachable_slides(), vec![3]);
    nav.prev();
    assert_eq!(nav.focus().reachable_slides(), vec![2]);
}

#[test]
fn disabled_link_never_becomes_reachable() {
    let mut nav = navigator(linked_deck());
    nav.go_to(2, 0);
    let targets = nav.focus().targets(2);
    assert_eq!(targets.len(), 2);
    let dead = targets.iter().find(|t| t.disabled).expect("dead link");
    assert_eq!(dead.tab_index, crate::nav::focus::TAB_UNREACHABLE);
}

#[test]
fn history_replay_restores_focus() {
    let mut nav = navigator(linked_deck());
    nav.go_to(2, 0);
    nav.go_to(3, 0);
    nav.apply(crate::nav::intent::Intent::Back);
    assert_eq!(nav.focus().reachable_slides(), vec![2]);
}
