use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_locations};

#[function_component]
pub fn LocationsPage() -> Html {
    let locations_hook = use_locations();

    let on_refresh = {
        let refetch = locations_hook.refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Locations"}
                </h1>
                <div class="flex gap-3">
                    <button
                        onclick={on_refresh}
                        disabled={locations_hook.is_loading}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-800 transition-colors disabled:opacity-50"
                    >
                        {"Refresh"}
                    </button>
                    <Link<Route>
                        to={Route::CreateLocation}
                        classes="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"New Location"}
                    </Link<Route>>
                </div>
            </div>

            {locations_hook.render("locations", |locations, _is_loading| {
                if locations.is_empty() {
                    html! {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No locations yet."}
                        </p>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {locations.iter().map(location_card).collect::<Html>()}
                        </div>
                    }
                }
            })}
        </div>
    }
}

fn location_card(location: &responses::Location) -> Html {
    let details = &location.details;
    let coordinates = match (details.latitude, details.longitude) {
        (Some(latitude), Some(longitude)) => {
            format!("{latitude}, {longitude}")
        }
        _ => "No coordinates".to_string(),
    };

    html! {
        <div key={location.location_id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
            <div>
                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {&details.site_name}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&details.location}
                </p>
            </div>
            <div class="text-sm text-neutral-600 dark:text-neutral-400 space-y-1">
                <p>{&details.time_zone}</p>
                <p>{coordinates}</p>
            </div>
            <Link<Route>
                to={Route::EditLocation { id: location.location_id.0 }}
                classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
            >
                {"Edit"}
            </Link<Route>>
        </div>
    }
}
