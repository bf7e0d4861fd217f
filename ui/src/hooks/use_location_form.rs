use location_form::LocationFormController;
use payloads::{APIClient, LocationId, responses};
use yew::prelude::*;

use crate::get_api_client;

/// Owns a [`LocationFormController`] for the lifetime of the component.
///
/// Every state change in the controller re-renders the component. The
/// record (in edit mode) and the regions start loading once mounted, and
/// the controller is disposed on unmount or when `location_id` changes, so
/// late responses never reach a torn-down form.
#[hook]
pub fn use_location_form(
    location_id: Option<LocationId>,
    on_saved: Callback<responses::Location>,
) -> LocationFormController<APIClient> {
    let trigger = use_force_update();

    let controller = use_memo(location_id, move |location_id| {
        LocationFormController::new(get_api_client(), *location_id)
            .on_change(move || trigger.force_update())
            .on_saved(move |location: &responses::Location| {
                on_saved.emit(location.clone())
            })
    });

    {
        let controller = (*controller).clone();
        use_effect_with(location_id, move |_| {
            let loader = controller.clone();
            yew::platform::spawn_local(async move {
                loader.initialize().await;
            });
            move || controller.dispose()
        });
    }

    (*controller).clone()
}
