mod focus;
mod fragment;
mod modes;
mod touch;

use super::state::{Navigator, NavigatorOptions};
use crate::parser::{self, Deck};

/// Build a deck of `n` plain slides with no reveal items.
fn plain_deck(n: usize) -> Deck {
    let slides: Vec<String> = (1..=n).map(|i| format!("# Slide {i}")).collect();
    parser::parse(&slides.join("\n\n---\n\n"))
}

/// Build a deck where slide `i` has `counts[i]` reveal items.
fn reveal_deck(counts: &[usize]) -> Deck {
    let slides: Vec<String> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let mut s = format!("# Slide {}\n", i + 1);
            for item in 1..=count {
                s.push_str(&format!("+ point {item}\n"));
            }
            s
        })
        .collect();
    parser::parse(&slides.join("\n\n---\n\n"))
}

fn navigator(deck: Deck) -> Navigator {
    Navigator::new(deck, NavigatorOptions::default())
}

/// Assert the cursor position as an `(index, step)` pair.
fn assert_cursor(nav: &Navigator, index: usize, step: usize) {
    let cursor = nav.cursor();
    assert_eq!(
        (cursor.index, cursor.step),
        (index, step),
        "expected cursor ({index}, {step}), got ({}, {})",
        cursor.index,
        cursor.step
    );
}
