//! Demo page local state

use super::content::Demo;

/// Which demo card is active, if any
///
/// Lives only as long as the Demo page is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    active: Option<String>,
}

impl DemoState {
    /// Start with no active demo
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the active demo
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `id` is the active demo
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Activate `id`, or deactivate it if it is already active
    pub fn toggle(&mut self, id: &str) {
        if self.is_active(id) {
            self.active = None;
        } else {
            self.active = Some(id.to_string());
        }
    }

    /// The active demo among `demos`
    pub fn active_demo<'a>(&self, demos: &'a [Demo]) -> Option<&'a Demo> {
        demos.iter().find(|demo| self.is_active(&demo.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_and_clears() {
        let mut state = DemoState::new();
        assert_eq!(state.active(), None);

        state.toggle("iris");
        assert!(state.is_active("iris"));

        state.toggle("head");
        assert_eq!(state.active(), Some("head"));

        state.toggle("head");
        assert_eq!(state.active(), None);
    }
}
