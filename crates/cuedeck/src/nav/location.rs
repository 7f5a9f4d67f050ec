/// In-app stand-in for the browser location bar: the current fragment plus
/// back/forward history for the session.
///
/// Setting a fragment equal to the current one is a no-op. Replaying a
/// history entry re-commits the same canonical fragment, and the no-op rule
/// is what keeps that replay from disturbing the forward stack.
#[derive(Debug, Default)]
pub struct Location {
    current: Option<String>,
    back: Vec<String>,
    forward: Vec<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record a committed fragment, pushing the previous one into history
    /// and clearing the forward stack.
    pub fn set(&mut self, fragment: String) {
        if self.current.as_deref() == Some(fragment.as_str()) {
            return;
        }
        if let Some(prev) = self.current.take() {
            self.back.push(prev);
        }
        self.current = Some(fragment);
        self.forward.clear();
    }

    /// Step back, returning the fragment to replay.
    pub fn back(&mut self) -> Option<String> {
        let target = self.back.pop()?;
        if let Some(current) = self.current.take() {
            self.forward.push(current);
        }
        self.current = Some(target.clone());
        Some(target)
    }

    /// Step forward, returning the fragment to replay.
    pub fn forward(&mut self) -> Option<String> {
        let target = self.forward.pop()?;
        if let Some(current) = self.current.take() {
            self.back.push(current);
        }
        self.current = Some(target.clone());
        Some(target)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pushes_previous_into_history() {
        let mut loc = Location::new();
        loc.set("#1.0".to_string());
        loc.set("#2.0".to_string());
        assert_eq!(loc.fragment(), Some("#2.0"));
        assert!(loc.can_go_back());
    }

    #[test]
    fn duplicate_set_is_ignored() {
        let mut loc = Location::new();
        loc.set("#1.0".to_string());
        loc.set("#1.0".to_string());
        assert!(!loc.can_go_back());
    }

    #[test]
    fn back_and_forward_walk_the_stacks() {
        let mut loc = Location::new();
        loc.set("#1.0".to_string());
        loc.set("#2.0".to_string());
        loc.set("#3.0".to_string());

        assert_eq!(loc.back().as_deref(), Some("#2.0"));
        assert_eq!(loc.back().as_deref(), Some("#1.0"));
        assert_eq!(loc.back(), None);

        assert_eq!(loc.forward().as_deref(), Some("#2.0"));
        assert_eq!(loc.forward().as_deref(), Some("#3.0"));
        assert_eq!(loc.forward(), None);
    }

    #[test]
    fn replaying_the_current_fragment_keeps_forward_stack() {
        let mut loc = Location::new();
        loc.set("#1.0".to_string());
        loc.set("#2.0".to_string());
        loc.back();
        // Re-committing the fragment we just landed on must not wipe forward
        loc.set("#1.0".to_string());
        assert!(loc.can_go_forward());
    }

    #[test]
    fn new_set_after_back_clears_forward() {
        let mut loc = Location::new();
        loc.set("#1.0".to_string());
        loc.set("#2.0".to_string());
        loc.back();
        loc.set("#5.0".to_string());
        assert!(!loc.can_go_forward());
        assert_eq!(loc.fragment(), Some("#5.0"));
    }
}
