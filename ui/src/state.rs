use payloads::responses;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Locations (managed by use_locations, invalidated on save) ===
    pub locations: FetchState<Vec<responses::Location>>,
}

impl State {
    pub fn has_locations_loaded(&self) -> bool {
        self.locations.is_fetched()
    }

    pub fn get_locations(&self) -> Option<&Vec<responses::Location>> {
        self.locations.as_ref()
    }

    pub fn set_locations(&mut self, locations: Vec<responses::Location>) {
        self.locations = FetchState::Fetched(locations);
    }

    /// Forget the cached list so the next visit to the list refetches.
    pub fn clear_locations(&mut self) {
        self.locations = FetchState::NotFetched;
    }
}
