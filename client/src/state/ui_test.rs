use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_nothing_open() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.overlay, Overlay::None);
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn toggle_overlay_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_overlay(Overlay::Chat);
    assert!(state.is_open(Overlay::Chat));
    state.toggle_overlay(Overlay::Chat);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn opening_one_overlay_replaces_another() {
    let mut state = UiState::default();
    state.toggle_overlay(Overlay::AddTransaction);
    state.toggle_overlay(Overlay::Chat);
    assert!(state.is_open(Overlay::Chat));
    assert!(!state.is_open(Overlay::AddTransaction));
    state.close_overlay();
    assert_eq!(state.overlay, Overlay::None);
}
