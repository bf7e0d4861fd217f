use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: call `render_fn` with the data and whether a refetch is
    ///   in progress
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading),
        }
    }
}

/// Generic fetch hook with global state caching support.
///
/// Takes three closures:
///
/// 1. `get_cached`: Retrieves cached data from global state
/// 2. `should_fetch`: Determines if a fetch is needed
/// 3. `fetch_and_cache`: Performs the API call and updates global state
///
/// Fetches on mount (and when `deps` change) if `should_fetch` returns
/// true.
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                if let Err(e) = fetch_and_cache().await {
                    tracing::warn!("Fetch failed: {e}");
                    error.set(Some(e));
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount if should_fetch returns true
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps, move |_| {
            if should_fetch() && !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // Loading also covers the first render, before the effect has run
    let effective_is_loading =
        *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading: effective_is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
