use super::router::ViewMode;

/// A navigation request produced by an input adapter. Adapters publish
/// these; the engine consumes them. Nothing else mutates navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Prev,
    Start,
    End,
    GoTo { index: i64, step: i64 },
    /// Jump from the overview cards or the go-to prompt. Leaves Overview
    /// through the router before moving, so the landing slide is visible in
    /// the linear view.
    Select { index: i64 },
    SetMode(ViewMode),
    ToggleMode,
    Back,
    Forward,
    ToggleFullscreen,
    ToggleVisibility(&'static str),
}
