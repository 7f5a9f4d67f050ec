use log::debug;

use super::super::intent::Intent;

/// Keys the presentation layer can deliver. Anything not listed here never
/// reaches the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Home,
    End,
    Enter,
    Space,
    N,
    P,
    G,
    F,
    H,
    K,
}

/// What the focused element under the event looks like. Mirrors the
/// judgment a browser adapter would make about the event target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetProfile {
    /// Native form control (button, input, select, text edit).
    pub form_control: bool,
    /// Anchor with an actual destination.
    pub anchor_with_target: bool,
    /// Media element exposing native controls.
    pub media_controls: bool,
    /// Explicitly assigned tab index, when present.
    pub tab_index: Option<i32>,
}

impl TargetProfile {
    pub fn is_interactive(&self) -> bool {
        self.form_control
            || self.anchor_with_target
            || self.media_controls
            || self.tab_index.is_some_and(|t| t >= 0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    pub alt: bool,
    pub target: TargetProfile,
}

/// Translates key events into intents under a strict allow-list.
///
/// Two rules run before any binding, in priority order: Enter and Space
/// are never intercepted, so native activation always wins; and when the
/// event target is interactive, every slide binding is suppressed for
/// that event.
#[derive(Debug, Default)]
pub struct KeyboardAdapter;

impl KeyboardAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, event: &KeyEvent) -> Option<Intent> {
        if matches!(event.key, Key::Enter | Key::Space) {
            return None;
        }
        if event.target.is_interactive() {
            debug!("keyboard: interactive target, {:?} suppressed", event.key);
            return None;
        }

        match (event.key, event.alt) {
            (Key::ArrowLeft, true) => Some(Intent::Back),
            (Key::ArrowRight, true) => Some(Intent::Forward),
            (Key::ArrowRight | Key::N, false) => Some(Intent::Next),
            (Key::ArrowLeft | Key::P, false) => Some(Intent::Prev),
            (Key::Home, _) => Some(Intent::Start),
            (Key::End, _) => Some(Intent::End),
            (Key::G, _) => Some(Intent::ToggleMode),
            (Key::F, _) => Some(Intent::ToggleFullscreen),
            (Key::H, _) => Some(Intent::ToggleVisibility("hud")),
            (Key::K, _) => Some(Intent::ToggleVisibility("help")),
            _ => None,
        }
    }
}
