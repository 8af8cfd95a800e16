//! Local UI chrome state (theme, open overlays).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `transactions`) so rendering controls can evolve independently of backend
//! data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which dashboard overlay, if any, is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    AddTransaction,
    Chat,
}

/// UI state for theme and overlays. Provided once by `App` as an `RwSignal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub overlay: Overlay,
}

impl UiState {
    /// Open `overlay`, or close it when it is already the open one.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay { Overlay::None } else { overlay };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlay == overlay
    }
}
