use payloads::{LocationId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State, components::LocationForm, contexts::toast::use_toast,
    hooks::use_push_route,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `None` for the create page.
    #[prop_or_default]
    pub location_id: Option<LocationId>,
}

#[function_component]
pub fn LocationEditorPage(props: &Props) -> Html {
    let toast = use_toast();
    let push_route = use_push_route();
    let (_state, dispatch) = use_store::<State>();

    let on_saved = Callback::from(move |location: responses::Location| {
        toast.success(format!("Saved {}", location.details.site_name));
        dispatch.reduce_mut(|state| state.clear_locations());
        push_route.emit(Route::Locations);
    });

    let title = if props.location_id.is_some() {
        "Edit Location"
    } else {
        "Create Location"
    };

    html! {
        <div class="max-w-2xl mx-auto py-8 px-4">
            <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-8">
                    {title}
                </h1>
                // keyed so switching records remounts with a fresh form
                <LocationForm
                    key={props.location_id.map(|id| id.to_string()).unwrap_or_default()}
                    location_id={props.location_id}
                    on_saved={on_saved}
                />
            </div>
        </div>
    }
}
