use super::*;
use crate::state::memory_storage::MemoryStorage;

#[test]
fn stored_choice_round_trips_through_storage() {
    let storage = MemoryStorage::default();
    assert_eq!(stored_preference(&storage), None);

    save_preference(&storage, true);
    assert_eq!(stored_preference(&storage), Some(true));
    save_preference(&storage, false);
    assert_eq!(stored_preference(&storage), Some(false));
    assert_eq!(storage.keys(), vec![THEME_KEY.to_owned()]);
}

#[test]
fn unknown_stored_value_is_no_choice() {
    let storage = MemoryStorage::with(&[(THEME_KEY, "sepia")]);
    assert_eq!(stored_preference(&storage), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_flips_without_a_browser() {
    assert!(toggle(false));
    assert!(!toggle(true));
    assert!(!read_preference());
}
