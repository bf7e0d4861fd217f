use std::cell::RefCell;
use std::rc::Rc;

use payloads::{LocationId, responses};

use crate::{
    api::LocationsApi,
    draft::{Draft, Field},
    lifecycle::Lifecycle,
    message::Message,
};

/// Where the form is in its lifecycle.
///
/// `Empty -> Loading (edit mode only) -> Ready -> Submitting ->
/// Redirected`, falling back from `Submitting` to `Ready` when a save
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loading,
    Ready,
    Submitting,
    Redirected,
}

/// Everything the form renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: Draft,
    pub regions: Vec<responses::Region>,
    pub message: Option<Message>,
    pub phase: Phase,
}

impl FormState {
    /// A save request is outstanding; the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Empty | Phase::Ready)
    }
}

/// Result of a call to [`LocationFormController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Saved(responses::Location),
    /// The API rejected the save; the message holds the reason.
    Failed,
    /// Another save was in flight, or the record was still loading.
    Ignored,
    /// The controller was disposed before the response arrived.
    Abandoned,
}

type ChangeListener = Rc<dyn Fn()>;
type SavedListener = Rc<dyn Fn(&responses::Location)>;

/// Owns the draft of a location and keeps it in sync with the API.
///
/// Clones share the same state, so the controller can be moved into event
/// callbacks. State is never borrowed across an `.await`.
#[derive(Clone)]
pub struct LocationFormController<A> {
    api: A,
    location_id: Option<LocationId>,
    state: Rc<RefCell<FormState>>,
    lifecycle: Lifecycle,
    on_change: ChangeListener,
    on_saved: SavedListener,
}

impl<A: LocationsApi> LocationFormController<A> {
    /// Create mode when `location_id` is `None`, edit mode otherwise.
    ///
    /// An edit form starts out `Loading`: it cannot submit until the
    /// record has been fetched.
    pub fn new(api: A, location_id: Option<LocationId>) -> Self {
        let phase = match location_id {
            Some(_) => Phase::Loading,
            None => Phase::Empty,
        };
        Self {
            api,
            location_id,
            state: Rc::new(RefCell::new(FormState {
                phase,
                ..FormState::default()
            })),
            lifecycle: Lifecycle::new(),
            on_change: Rc::new(|| {}),
            on_saved: Rc::new(|_| {}),
        }
    }

    /// Called after every state change, e.g. to schedule a re-render.
    pub fn on_change(mut self, listener: impl Fn() + 'static) -> Self {
        self.on_change = Rc::new(listener);
        self
    }

    /// Called once a create or update succeeds. Navigation away from the
    /// form belongs here.
    pub fn on_saved(
        mut self,
        listener: impl Fn(&responses::Location) + 'static,
    ) -> Self {
        self.on_saved = Rc::new(listener);
        self
    }

    pub fn location_id(&self) -> Option<LocationId> {
        self.location_id
    }

    pub fn is_editing(&self) -> bool {
        self.location_id.is_some()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut FormState)) {
        f(&mut self.state.borrow_mut());
        (self.on_change)();
    }

    /// Stop applying results. Requests already in flight still complete,
    /// but their responses are dropped.
    pub fn dispose(&self) {
        self.lifecycle.cancel();
    }

    pub fn set_field(&self, field: Field, raw: impl Into<String>) {
        if !self.lifecycle.is_live() {
            return;
        }
        self.update(|state| state.draft.set(field, raw));
    }

    /// Load the record being edited, if any, alongside the region list.
    /// The two loads fail independently.
    pub async fn initialize(&self) {
        match self.location_id {
            Some(location_id) => {
                self.update(|state| state.phase = Phase::Loading);
                futures::join!(
                    self.load_location(location_id),
                    self.load_regions()
                );
            }
            None => {
                self.update(|state| state.phase = Phase::Ready);
                self.load_regions().await;
            }
        }
    }

    async fn load_location(&self, location_id: LocationId) {
        tracing::debug!("Loading location {location_id}");
        let result = self.api.get_location(location_id).await;

        if !self.lifecycle.is_live() {
            tracing::debug!("Form gone, dropping location {location_id}");
            return;
        }

        match result {
            Ok(location) => self.update(|state| {
                state.draft = Draft::from_details(&location.details);
                state.phase = Phase::Ready;
            }),
            Err(e) => {
                tracing::warn!("Failed to load location {location_id}: {e}");
                self.update(|state| {
                    state.message = Some(Message::danger(e.to_string()));
                    state.phase = Phase::Ready;
                });
            }
        }
    }

    /// Replace the selectable regions with the current list from the API.
    pub async fn load_regions(&self) {
        let result = self.api.get_regions().await;

        if !self.lifecycle.is_live() {
            tracing::debug!("Form gone, dropping regions");
            return;
        }

        match result {
            Ok(regions) => {
                tracing::debug!("Loaded {} regions", regions.len());
                self.update(|state| state.regions = regions);
            }
            Err(e) => {
                tracing::warn!("Failed to load regions: {e}");
                self.update(|state| {
                    state.message = Some(Message::danger(e.to_string()))
                });
            }
        }
    }

    /// Create or update the location from the current draft.
    ///
    /// At most one save is in flight at a time. On failure the draft is
    /// kept so the user can fix it and resubmit.
    pub async fn submit(&self) -> Submission {
        if !self.lifecycle.is_live() {
            return Submission::Ignored;
        }

        let details = {
            let mut state = self.state.borrow_mut();
            if !state.can_submit() {
                tracing::debug!("Ignoring submit while {:?}", state.phase);
                return Submission::Ignored;
            }
            state.phase = Phase::Submitting;
            state.message = None;
            state.draft.to_details()
        };
        (self.on_change)();

        let result = match self.location_id {
            Some(location_id) => {
                self.api.update_location(location_id, &details).await
            }
            None => self.api.create_location(&details).await,
        };

        if !self.lifecycle.is_live() {
            tracing::debug!("Form gone, dropping save response");
            return Submission::Abandoned;
        }

        match result {
            Ok(location) => {
                tracing::info!("Saved location {}", location.location_id);
                self.update(|state| state.phase = Phase::Redirected);
                (self.on_saved)(&location);
                Submission::Saved(location)
            }
            Err(e) => {
                tracing::warn!("Failed to save location: {e}");
                self.update(|state| {
                    state.message = Some(Message::danger(e.to_string()));
                    state.phase = Phase::Ready;
                });
                Submission::Failed
            }
        }
    }
}
