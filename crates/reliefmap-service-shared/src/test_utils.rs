//! Test utilities for handler testing.
//!
//! Every call returns a freshly seeded state, so tests that write to the
//! collections never observe each other.

use reliefmap_lib::RecordId;

use crate::state::AppState;

/// Fresh state holding the reference resources and alerts.
pub fn test_state() -> AppState {
    AppState::seeded()
}

/// Fresh state with every collection empty.
pub fn empty_test_state() -> AppState {
    AppState::empty()
}

/// Known records in the seeded state.
pub mod fixture_resources {
    use super::RecordId;

    /// Shelter in New Delhi, capacity 500.
    pub const DELHI_SHELTER: RecordId = 1;
    pub const DELHI_LAT: f64 = 28.6139;
    pub const DELHI_LNG: f64 = 77.2090;

    /// Food distribution centre in Mumbai.
    pub const MUMBAI_FLOOD_RELIEF: RecordId = 2;
    pub const MUMBAI_LAT: f64 = 19.0760;
    pub const MUMBAI_LNG: f64 = 72.8777;

    pub const CHENNAI_MEDICAL_HUB: RecordId = 3;
    pub const BANGALORE_RESPONSE_CENTER: RecordId = 4;
    pub const KOLKATA_KITCHEN: RecordId = 5;

    pub const SEEDED_COUNT: usize = 5;
    pub const SEEDED_TOTAL_CAPACITY: u64 = 3000;
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_contains_fixture_resources() {
        let state = test_state();
        let store = state.resources().read().await;
        assert_eq!(store.len(), fixture_resources::SEEDED_COUNT);
        let mumbai = store.get(fixture_resources::MUMBAI_FLOOD_RELIEF).unwrap();
        assert_eq!(mumbai.lat, fixture_resources::MUMBAI_LAT);
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
