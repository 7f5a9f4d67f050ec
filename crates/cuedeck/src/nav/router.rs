use log::{debug, warn};

use crate::parser::Deck;

use super::view::chrome::{ControlsView, ProgressBar};
use super::view::overview::OverviewView;
use super::view::presentation::PresentationView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Presentation,
    Overview,
}

impl ViewMode {
    pub fn marker(self) -> &'static str {
        match self {
            ViewMode::Presentation => "mode-presentation",
            ViewMode::Overview => "mode-overview",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Presentation => ViewMode::Overview,
            ViewMode::Overview => ViewMode::Presentation,
        }
    }
}

/// Single authority for the active view mode. Mode, renderer visibility and
/// control-button enablement change only through [`ViewRouter::set`], so
/// the three can never diverge.
#[derive(Debug)]
pub struct ViewRouter {
    mode: ViewMode,
    marker: &'static str,
    pub presentation: PresentationView,
    pub overview: Option<OverviewView>,
    pub controls: Option<ControlsView>,
    pub progress: Option<ProgressBar>,
}

impl ViewRouter {
    pub fn new(
        slide_count: usize,
        overview: Option<OverviewView>,
        controls: Option<ControlsView>,
        progress: Option<ProgressBar>,
    ) -> Self {
        let mut presentation = PresentationView::new(slide_count);
        presentation.show();
        Self {
            mode: ViewMode::Presentation,
            marker: ViewMode::Presentation.marker(),
            presentation,
            overview,
            controls,
            progress,
        }
    }

    pub fn get(&self) -> ViewMode {
        self.mode
    }

    pub fn marker(&self) -> &'static str {
        self.marker
    }

    /// Switch modes. Strict sequence: marker, hide outgoing, show incoming
    /// (building the overview on first use), then button enablement.
    pub fn set(&mut self, mode: ViewMode, deck: &Deck) {
        if mode == ViewMode::Overview && self.overview.is_none() {
            warn!("router: overview view not wired, staying in {:?}", self.mode);
            return;
        }

        self.marker = mode.marker();

        match mode {
            ViewMode::Presentation => {
                if let Some(overview) = &mut self.overview {
                    overview.hide();
                }
                self.presentation.show();
            }
            ViewMode::Overview => {
                self.presentation.hide();
                let overview = self.overview.as_mut().expect("checked above");
                if !overview.is_built() {
                    overview.build(deck);
                }
                overview.show();
            }
        }

        if let Some(controls) = &mut self.controls {
            controls.set_active_mode(mode);
        }

        debug!("router: mode -> {:?}", mode);
        self.mode = mode;
    }

    /// Render notifications from the navigator, dispatched to the active
    /// renderer. The overview tracks the cursor as its highlighted card;
    /// progress advances regardless of mode.
    pub fn render_slide(&mut self, new: usize, old: usize) {
        match self.mode {
            ViewMode::Presentation => self.presentation.render_slide(new, old),
            ViewMode::Overview => {
                if let Some(overview) = &mut self.overview {
                    overview.set_current(new);
                }
            }
        }
    }

    pub fn render_incremental(&mut self, index: usize, step: usize, count: usize) {
        if self.mode == ViewMode::Presentation {
            self.presentation.render_incremental(index, step, count);
        }
    }

    pub fn render_progress(&mut self, percent: f32) {
        if let Some(progress) = &mut self.progress {
            progress.set(percent);
        }
    }

    /// Resize views for a rebuilt collection.
    pub fn reset(&mut self, deck: &Deck) {
        self.presentation.reset(deck.len());
        if let Some(overview) = &mut self.overview {
            let was_built = overview.is_built();
            overview.invalidate();
            if was_built {
                overview.build(deck);
            }
        }
    }
}
