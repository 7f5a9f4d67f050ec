use log::{debug, info};

use crate::parser::Deck;

use super::focus::FocusController;
use super::fragment;
use super::intent::Intent;
use super::location::Location;
use super::media::MediaRack;
use super::router::{ViewMode, ViewRouter};
use super::view::chrome::{ControlsView, FullscreenSwitch, ProgressBar, VisibilityRegistry};
use super::view::overview::OverviewView;

/// The authoritative navigation position: 1-based slide index plus the
/// reveal step within that slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub step: usize,
}

/// Which optional collaborators get wired at construction. A disabled
/// feature degrades the matching requests to logged no-ops.
#[derive(Debug, Clone, Copy)]
pub struct NavigatorOptions {
    pub autoplay: bool,
    pub progress: bool,
    pub controls: bool,
    pub overview: bool,
    pub fullscreen: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            progress: true,
            controls: true,
            overview: true,
            fullscreen: true,
        }
    }
}

/// The navigation state machine. Sole writer of the cursor; every movement
/// request from any input source lands here, gets clamped, and — when it
/// commits — fans out one synchronous notification cycle in fixed order:
/// render-slide, render-incremental, render-progress, update-focus.
pub struct Navigator {
    deck: Deck,
    cursor: Cursor,
    router: ViewRouter,
    focus: FocusController,
    media: MediaRack,
    location: Location,
    visibility: VisibilityRegistry,
    fullscreen: Option<FullscreenSwitch>,
    autoplay: bool,
    /// Completed notification cycles, surfaced in the HUD.
    cycles: u64,
}

impl Navigator {
    pub fn new(deck: Deck, options: NavigatorOptions) -> Self {
        let focus = FocusController::from_deck(&deck);
        let media = MediaRack::from_deck(&deck);
        let router = ViewRouter::new(
            deck.len(),
            options.overview.then(OverviewView::new),
            options.controls.then(ControlsView::new),
            options.progress.then(ProgressBar::default),
        );
        Self {
            deck,
            cursor: Cursor { index: 1, step: 0 },
            router,
            focus,
            media,
            location: Location::new(),
            visibility: VisibilityRegistry::new(&["hud", "help"]),
            fullscreen: options.fullscreen.then(|| FullscreenSwitch::new(false)),
            autoplay: options.autoplay,
            cycles: 0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut ViewRouter {
        &mut self.router
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn media(&self) -> &MediaRack {
        &self.media
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn visibility(&self) -> &VisibilityRegistry {
        &self.visibility
    }

    pub fn fullscreen_mut(&mut self) -> Option<&mut FullscreenSwitch> {
        self.fullscreen.as_mut()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Advance one reveal step, or to the next slide once the current one
    /// is fully revealed. No-op at the last reveal of the last slide.
    pub fn next(&mut self) {
        let Cursor { index, step } = self.cursor;
        if step < self.deck.incremental_count(index) {
            self.go_to(index as i64, step as i64 + 1);
        } else if index < self.deck.len() {
            self.go_to(index as i64 + 1, 0);
        } else {
            debug!("nav: next at end, ignoring");
        }
    }

    /// Symmetric inverse of [`Navigator::next`]: steps back within the
    /// slide, else lands on the previous slide fully revealed. No-op at
    /// `(1, 0)`.
    pub fn prev(&mut self) {
        let Cursor { index, step } = self.cursor;
        if step > 0 {
            self.go_to(index as i64, step as i64 - 1);
        } else if index > 1 {
            let count = self.deck.incremental_count(index - 1);
            self.go_to(index as i64 - 1, count as i64);
        } else {
            debug!("nav: prev at start, ignoring");
        }
    }

    pub fn go_start(&mut self) {
        self.go_to(1, 0);
    }

    pub fn go_end(&mut self) {
        let last = self.deck.len();
        self.go_to(last as i64, self.deck.incremental_count(last) as i64);
    }

    /// Clamp the requested position into range and commit it. A request
    /// that clamps to the current cursor returns without side effects.
    pub fn go_to(&mut self, index: i64, step: i64) {
        if self.deck.is_empty() {
            debug!("nav: empty deck, go_to ignored");
            return;
        }
        let target = self.clamp(index, step);
        if target == self.cursor {
            debug!("nav: go_to({index}, {step}) resolves to current cursor, ignoring");
            return;
        }
        self.commit(target);
        self.location
            .set(fragment::encode(target.index, target.step));
        self.notify_all();
    }

    /// Decode a fragment into a position and move there. Unlike `go_to`
    /// this always runs the full notification cycle, because it also
    /// performs the initial render at startup and replays history entries.
    pub fn update_from_fragment(&mut self, raw: Option<&str>) {
        if self.deck.is_empty() {
            debug!("nav: empty deck, fragment update ignored");
            return;
        }
        let (index, step) = fragment::decode(raw);
        let target = self.clamp(index, step);
        if target != self.cursor {
            self.commit(target);
            self.location
                .set(fragment::encode(target.index, target.step));
        }
        self.notify_all();
    }

    /// `0` when the deck has at most one slide.
    pub fn progress(&self) -> f32 {
        let n = self.deck.len();
        if n <= 1 {
            return 0.0;
        }
        (self.cursor.index - 1) as f32 * 100.0 / (n - 1) as f32
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Next => self.next(),
            Intent::Prev => self.prev(),
            Intent::Start => self.go_start(),
            Intent::End => self.go_end(),
            Intent::GoTo { index, step } => self.go_to(index, step),
            Intent::Select { index } => {
                if self.router.get() == ViewMode::Overview {
                    self.router.set(ViewMode::Presentation, &self.deck);
                }
                self.go_to(index, 0);
            }
            Intent::SetMode(mode) => self.router.set(mode, &self.deck),
            Intent::ToggleMode => {
                let next = self.router.get().toggled();
                self.router.set(next, &self.deck);
            }
            Intent::Back => match self.location.back() {
                Some(frag) => self.update_from_fragment(Some(&frag)),
                None => debug!("nav: no history to go back to"),
            },
            Intent::Forward => match self.location.forward() {
                Some(frag) => self.update_from_fragment(Some(&frag)),
                None => debug!("nav: no history to go forward to"),
            },
            Intent::ToggleFullscreen => match &mut self.fullscreen {
                Some(switch) => switch.toggle(),
                None => debug!("nav: fullscreen capability not wired, ignoring"),
            },
            Intent::ToggleVisibility(name) => self.visibility.toggle(name),
        }
    }

    /// Replace the deck after a file change. With an unchanged slide count
    /// the content is swapped in place, preserving collection membership;
    /// otherwise the collection is rebuilt. Either way derived state is
    /// refreshed and the cursor re-clamps through a fragment replay.
    pub fn reload(&mut self, fresh: Deck) {
        if fresh.len() == self.deck.len() {
            info!("nav: reload, {} slides, content swap", fresh.len());
            self.deck.meta = fresh.meta;
            for (slot, slide) in self.deck.slides.iter_mut().zip(fresh.slides) {
                *slot = slide;
            }
        } else {
            info!(
                "nav: reload, slide count {} -> {}, rebuilding collection",
                self.deck.len(),
                fresh.len()
            );
            self.deck = fresh;
        }
        self.focus = FocusController::from_deck(&self.deck);
        self.media = MediaRack::from_deck(&self.deck);
        self.router.reset(&self.deck);
        let current = self.location.fragment().map(str::to_string);
        self.update_from_fragment(current.as_deref());
    }

    fn clamp(&self, index: i64, step: i64) -> Cursor {
        let n = self.deck.len() as i64;
        let index = index.clamp(1, n.max(1)) as usize;
        let count = self.deck.incremental_count(index) as i64;
        let step = step.clamp(0, count) as usize;
        Cursor { index, step }
    }

    fn commit(&mut self, target: Cursor) {
        let old = self.cursor;
        if target.index != old.index {
            self.media.pause(old.index);
        }
        self.cursor = target;
        if target.index != old.index && self.autoplay {
            self.media.play(target.index);
        }
        debug!(
            "nav: cursor ({}, {}) -> ({}, {})",
            old.index, old.step, target.index, target.step
        );
    }

    fn notify_all(&mut self) {
        let Cursor { index, step } = self.cursor;
        let count = self.deck.incremental_count(index);
        let selected = self.router.presentation.selected_slides();
        let old = selected.first().copied().unwrap_or(0);
        self.router.render_slide(index, old);
        self.router.render_incremental(index, step, count);
        let percent = self.progress();
        self.router.render_progress(percent);
        self.focus.update_focus(index);
        self.cycles += 1;
    }
}
