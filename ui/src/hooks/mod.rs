mod use_fetch;
mod use_location_form;
mod use_locations;
mod use_push_route;

pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_location_form::use_location_form;
pub use use_locations::use_locations;
pub use use_push_route::use_push_route;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
