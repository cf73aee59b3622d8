/// Page-wide readiness driven by the hero frame loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingState {
    is_ready: bool,
    load_progress: u8,
    load_error: bool,
}

impl LoadingState {
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn load_progress(&self) -> u8 {
        self.load_progress
    }

    pub fn load_error(&self) -> bool {
        self.load_error
    }

    /// Progress never moves backwards and is capped at 100.
    pub fn set_progress(&mut self, percent: u8) {
        self.load_progress = self.load_progress.max(percent.min(100));
    }

    pub fn mark_ready(&mut self) {
        self.is_ready = true;
    }

    /// Errors still unblock the page.
    pub fn fail(&mut self) {
        self.load_error = true;
        self.is_ready = true;
    }

    pub fn label(&self) -> &'static str {
        if self.load_error {
            "Ready!"
        } else {
            "Loading..."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic() {
        let mut state = LoadingState::default();
        state.set_progress(40);
        state.set_progress(25);
        assert_eq!(state.load_progress(), 40);
        state.set_progress(250);
        assert_eq!(state.load_progress(), 100);
    }

    #[test]
    fn test_fail_forces_ready() {
        let mut state = LoadingState::default();
        assert!(!state.is_ready());
        assert_eq!(state.label(), "Loading...");
        state.fail();
        assert!(state.is_ready());
        assert!(state.load_error());
        assert_eq!(state.label(), "Ready!");
    }

    #[test]
    fn test_mark_ready_keeps_error_clear() {
        let mut state = LoadingState::default();
        state.mark_ready();
        assert!(state.is_ready());
        assert!(!state.load_error());
    }
}
