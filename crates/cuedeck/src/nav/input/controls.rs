use log::debug;

use super::super::intent::Intent;
use super::super::router::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Prev,
    Next,
    Start,
    End,
    GoTo,
    ModePresentation,
    ModeOverview,
    Fullscreen,
}

/// Translates control-button presses into intents. The go-to button has no
/// immediate intent: it opens a prompt, and the typed answer comes back
/// through [`ControlsPanel::submit_go_to`]. A selection always enters as a
/// `Select`, which leaves the overview first so the landing slide is
/// visible in the linear view.
#[derive(Debug, Default)]
pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn press(&self, button: ControlButton) -> Option<Intent> {
        match button {
            ControlButton::Prev => Some(Intent::Prev),
            ControlButton::Next => Some(Intent::Next),
            ControlButton::Start => Some(Intent::Start),
            ControlButton::End => Some(Intent::End),
            ControlButton::GoTo => None,
            ControlButton::ModePresentation => Some(Intent::SetMode(ViewMode::Presentation)),
            ControlButton::ModeOverview => Some(Intent::SetMode(ViewMode::Overview)),
            ControlButton::Fullscreen => Some(Intent::ToggleFullscreen),
        }
    }

    /// Parse the go-to prompt's answer. A non-numeric answer is dropped;
    /// out-of-range numbers are left to the navigator's clamping.
    pub fn submit_go_to(&self, input: &str) -> Option<Intent> {
        match input.trim().parse::<i64>() {
            Ok(index) => Some(Intent::Select { index }),
            Err(_) => {
                debug!("controls: go-to input {input:?} is not a number, dropped");
                None
            }
        }
    }
}
