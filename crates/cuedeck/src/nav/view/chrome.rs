use log::{debug, warn};

use super::super::router::ViewMode;

/// Progress bar state, as a width percentage.
#[derive(Debug, Default)]
pub struct ProgressBar {
    percent: f32,
}

impl ProgressBar {
    pub fn set(&mut self, percent: f32) {
        self.percent = percent;
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

/// Enablement state of the control buttons. The button for the active
/// mode is always the disabled one.
#[derive(Debug)]
pub struct ControlsView {
    pub presentation_button_enabled: bool,
    pub overview_button_enabled: bool,
}

impl ControlsView {
    pub fn new() -> Self {
        Self {
            presentation_button_enabled: false,
            overview_button_enabled: true,
        }
    }

    pub fn set_active_mode(&mut self, mode: ViewMode) {
        self.presentation_button_enabled = mode != ViewMode::Presentation;
        self.overview_button_enabled = mode != ViewMode::Overview;
    }
}

impl Default for ControlsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Named show/hide registry for auxiliary panels (HUD, help overlay).
/// Requests against an unregistered name are logged and dropped.
#[derive(Debug, Default)]
pub struct VisibilityRegistry {
    panels: Vec<(String, bool)>,
}

impl VisibilityRegistry {
    pub fn new(names: &[&str]) -> Self {
        Self {
            panels: names.iter().map(|n| (n.to_string(), false)).collect(),
        }
    }

    pub fn show(&mut self, name: &str) {
        self.set(name, true);
    }

    pub fn hide(&mut self, name: &str) {
        self.set(name, false);
    }

    pub fn toggle(&mut self, name: &str) {
        match self.panels.iter_mut().find(|(n, _)| n == name) {
            Some((_, visible)) => {
                *visible = !*visible;
                debug!("visibility: {name} -> {visible}");
            }
            None => warn!("visibility: unknown panel {name:?}, toggle ignored"),
        }
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.panels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .unwrap_or(false)
    }

    fn set(&mut self, name: &str, visible: bool) {
        match self.panels.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = visible,
            None => warn!("visibility: unknown panel {name:?}, request ignored"),
        }
    }
}

/// Fullscreen capability. State flips immediately; the actual window
/// change is carried out by whoever drains the pending requests.
#[derive(Debug, Default)]
pub struct FullscreenSwitch {
    active: bool,
    requests: Vec<bool>,
}

impl FullscreenSwitch {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            requests: Vec::new(),
        }
    }

    pub fn enter(&mut self) {
        if !self.active {
            self.active = true;
            self.requests.push(true);
        }
    }

    pub fn exit(&mut self) {
        if self.active {
            self.active = false;
            self.requests.push(false);
        }
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.exit();
        } else {
            self.enter();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn take_requests(&mut self) -> Vec<bool> {
        std::mem::take(&mut self.requests)
    }
}
