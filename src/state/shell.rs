//! Top-level view selection.
//!
//! Owns no persisted state; each feature page loads its own data on mount.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Feature view shown in the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Named-value editor.
    #[default]
    Editor,
    /// Currency generator and its history.
    Generator,
}

impl ActiveView {
    /// Navigation order.
    pub const ALL: [Self; 2] = [Self::Editor, Self::Generator];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Editor => "Value Editor",
            Self::Generator => "Currency Generator",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active_view: ActiveView,
}

impl ShellState {
    #[must_use]
    pub fn new(initial: ActiveView) -> Self {
        Self { active_view: initial }
    }

    /// Switch the visible view. Returns `false` when `view` is already active.
    pub fn select_view(&mut self, view: ActiveView) -> bool {
        if self.active_view == view {
            return false;
        }
        log::debug!("switching view {:?} -> {view:?}", self.active_view);
        self.active_view = view;
        true
    }

    #[must_use]
    pub fn is_active(&self, view: ActiveView) -> bool {
        self.active_view == view
    }
}
