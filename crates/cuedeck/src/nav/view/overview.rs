use log::debug;

use crate::parser::{Block, Deck};

/// One grid card: a deep clone of the slide's content labeled with its
/// ordinal, so later content swaps in the live deck don't mutate a card
/// that was already built.
#[derive(Debug, Clone)]
pub struct OverviewCard {
    pub ordinal: usize,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Grid-of-clones view. Building and visibility are independent: the
/// router builds on first show, and a rebuild regenerates every card from
/// scratch.
#[derive(Debug, Default)]
pub struct OverviewView {
    cards: Vec<OverviewCard>,
    built: bool,
    visible: bool,
    /// Card highlighted as the current cursor position.
    current: Option<usize>,
    pending_selection: Option<usize>,
}

impl OverviewView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and regenerate all cards from the deck's current content.
    pub fn build(&mut self, deck: &Deck) {
        self.cards.clear();
        for (i, slide) in deck.slides.iter().enumerate() {
            self.cards.push(OverviewCard {
                ordinal: i + 1,
                title: slide.title(),
                blocks: slide.blocks.clone(),
            });
        }
        self.built = true;
        debug!("overview: built {} cards", self.cards.len());
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn cards(&self) -> &[OverviewCard] {
        &self.cards
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_current(&mut self, ordinal: usize) {
        self.current = Some(ordinal);
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The card's "go to" affordance: record the selected ordinal for the
    /// navigation layer and hide the grid.
    pub fn select(&mut self, ordinal: usize) {
        debug!("overview: card {ordinal} selected");
        self.pending_selection = Some(ordinal);
        self.hide();
    }

    pub fn take_selection(&mut self) -> Option<usize> {
        self.pending_selection.take()
    }

    /// Drop built cards so the next show rebuilds against fresh content.
    pub fn invalidate(&mut self) {
        self.cards.clear();
        self.built = false;
    }
}
