use location_form::{Field, Phase, time_zone_suggestions};
use payloads::{LocationId, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{components::MessageBanner, hooks::use_location_form};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
     rounded-md shadow-sm bg-white dark:bg-neutral-700 \
     text-neutral-900 dark:text-neutral-100 \
     focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500 \
     dark:focus:ring-neutral-400 dark:focus:border-neutral-400 \
     disabled:opacity-50";

#[derive(Properties, PartialEq)]
pub struct LocationFormProps {
    /// `None` creates a new location.
    #[prop_or_default]
    pub location_id: Option<LocationId>,
    pub on_saved: Callback<responses::Location>,
}

#[function_component]
pub fn LocationForm(props: &LocationFormProps) -> Html {
    let controller =
        use_location_form(props.location_id, props.on_saved.clone());
    let time_zones = use_memo((), |_| time_zone_suggestions());
    let state = controller.state();

    let on_input = |field: Field| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                controller.set_field(field, input.value());
            }
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            yew::platform::spawn_local(async move {
                controller.submit().await;
            });
        })
    };

    let is_loading = state.phase == Phase::Loading;
    let fields_disabled = is_loading || state.is_busy();
    let submit_disabled = !state.can_submit();
    let submit_label = match (state.is_busy(), controller.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Save Changes",
        (false, false) => "Create Location",
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            if let Some(message) = &state.message {
                <MessageBanner message={message.clone()} />
            }

            if is_loading {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Loading location..."}
                </p>
            }

            <div>
                <label for="site-name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {"Site Name *"}
                </label>
                <input
                    type="text"
                    id="site-name"
                    name="siteName"
                    required={true}
                    value={state.draft.raw(Field::SiteName).to_string()}
                    oninput={on_input(Field::SiteName)}
                    disabled={fields_disabled}
                    class={INPUT_CLASS}
                    placeholder="Enter site name"
                />
            </div>

            <div>
                <label for="location" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {"Location *"}
                </label>
                <input
                    type="text"
                    id="location"
                    name="location"
                    required={true}
                    value={state.draft.raw(Field::Location).to_string()}
                    oninput={on_input(Field::Location)}
                    disabled={fields_disabled}
                    class={INPUT_CLASS}
                    placeholder="Enter location name"
                />
            </div>

            <div>
                <label for="time-zone" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {"Time Zone *"}
                </label>
                <input
                    type="text"
                    id="time-zone"
                    name="timeZone"
                    list="time-zone-options"
                    required={true}
                    value={state.draft.raw(Field::TimeZone).to_string()}
                    oninput={on_input(Field::TimeZone)}
                    disabled={fields_disabled}
                    class={INPUT_CLASS}
                    placeholder="e.g. Europe/London"
                />
                <datalist id="time-zone-options">
                    {for time_zones.iter().map(|name| html! {
                        <option value={name.clone()} />
                    })}
                </datalist>
            </div>

            <div>
                <label for="region-id" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {"Region"}
                </label>
                <input
                    type="number"
                    id="region-id"
                    name="regionId"
                    list="region-options"
                    step="1"
                    value={state.draft.raw(Field::RegionId).to_string()}
                    oninput={on_input(Field::RegionId)}
                    disabled={fields_disabled}
                    class={INPUT_CLASS}
                    placeholder="Region id"
                />
                <datalist id="region-options">
                    {for state.regions.iter().map(region_option)}
                </datalist>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label for="latitude" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Latitude"}
                    </label>
                    <input
                        type="number"
                        id="latitude"
                        name="latitude"
                        step="any"
                        value={state.draft.raw(Field::Latitude).to_string()}
                        oninput={on_input(Field::Latitude)}
                        disabled={fields_disabled}
                        class={INPUT_CLASS}
                    />
                </div>
                <div>
                    <label for="longitude" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Longitude"}
                    </label>
                    <input
                        type="number"
                        id="longitude"
                        name="longitude"
                        step="any"
                        value={state.draft.raw(Field::Longitude).to_string()}
                        oninput={on_input(Field::Longitude)}
                        disabled={fields_disabled}
                        class={INPUT_CLASS}
                    />
                </div>
            </div>

            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled={submit_disabled}
                    class="px-4 py-2 bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:hover:bg-neutral-200 \
                           text-white dark:text-neutral-900 font-medium \
                           rounded-md transition-colors \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {submit_label}
                </button>
            </div>
        </form>
    }
}

fn region_option(region: &responses::Region) -> Html {
    html! {
        <option
            key={region.region_id.to_string()}
            value={region.region_id.to_string()}
            label={region.name.clone()}
        />
    }
}
