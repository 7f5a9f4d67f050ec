use log::debug;

/// Marker state of the linear view: which slide carries the "selected"
/// marker, which reveal item is active, and whether the controls row is
/// hidden. Pure output sink; the navigator drives it and the shell paints
/// from it.
#[derive(Debug)]
pub struct PresentationView {
    selected: Vec<bool>,
    /// Active reveal item per slide, as a 1-based step. `None` means every
    /// item marker on that slide is cleared.
    active_item: Vec<Option<usize>>,
    group_active: Vec<bool>,
    visible: bool,
    controls_hidden: bool,
}

impl PresentationView {
    pub fn new(slide_count: usize) -> Self {
        Self {
            selected: vec![false; slide_count],
            active_item: vec![None; slide_count],
            group_active: vec![false; slide_count],
            visible: false,
            controls_hidden: false,
        }
    }

    /// Move the "selected" marker from the outgoing slide to the incoming
    /// one. Indices are 1-based; an out-of-range old index (first render)
    /// clears nothing.
    pub fn render_slide(&mut self, new: usize, old: usize) {
        if let Some(slot) = old.checked_sub(1).and_then(|i| self.selected.get_mut(i)) {
            *slot = false;
        }
        if let Some(slot) = new.checked_sub(1).and_then(|i| self.selected.get_mut(i)) {
            *slot = true;
        }
    }

    /// Clear every reveal marker on the target slide, then mark the
    /// `step`-th item active when `step` is positive and within `count`.
    pub fn render_incremental(&mut self, index: usize, step: usize, count: usize) {
        let Some(i) = index.checked_sub(1).filter(|&i| i < self.active_item.len()) else {
            debug!("presentation: incremental render for missing slide {index}");
            return;
        };
        self.active_item[i] = None;
        self.group_active[i] = false;
        if step > 0 && step <= count {
            self.active_item[i] = Some(step);
            self.group_active[i] = true;
        }
    }

    pub fn render_controls(&mut self, visible: bool) {
        self.controls_hidden = !visible;
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

    pub fn is_selected(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.selected.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// 1-based ordinals of slides carrying the "selected" marker.
    pub fn selected_slides(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn active_item(&self, index: usize) -> Option<usize> {
        index
            .checked_sub(1)
            .and_then(|i| self.active_item.get(i))
            .copied()
            .flatten()
    }

    pub fn group_active(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.group_active.get(i))
            .copied()
            .unwrap_or(false)
    }

    pub fn controls_hidden(&self) -> bool {
        self.controls_hidden
    }

    /// Resize for a rebuilt collection, dropping all markers.
    pub fn reset(&mut self, slide_count: usize) {
        self.selected = vec![false; slide_count];
        self.active_item = vec![None; slide_count];
        self.group_active = vec![false; slide_count];
    }
}
