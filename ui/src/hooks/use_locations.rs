use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// All locations, cached in global state until a save invalidates them.
#[hook]
pub fn use_locations() -> FetchHookReturn<Vec<responses::Location>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.get_locations().cloned(),
        move || !should_fetch_state.has_locations_loaded(),
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let locations = api_client
                    .list_locations()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_locations(locations.clone());
                });
                Ok(locations)
            }
        },
    )
}
