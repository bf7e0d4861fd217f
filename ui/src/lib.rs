use payloads::{APIClient, LocationId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod state;

pub use state::State;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{LocationEditorPage, LocationsPage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <ToastContainer />
                    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/locations")]
    Locations,
    #[at("/admin/locations/new")]
    CreateLocation,
    #[at("/admin/locations/:id/edit")]
    EditLocation { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Locations} /> },
        Route::Locations => html! { <LocationsPage /> },
        Route::CreateLocation => html! { <LocationEditorPage /> },
        Route::EditLocation { id } => html! {
            <LocationEditorPage location_id={Some(LocationId(id))} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
