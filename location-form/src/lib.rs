//! Form state and API synchronization for creating and editing locations.
//!
//! The [`LocationFormController`] owns a [`Draft`] of the location being
//! authored along with the selectable regions and the current [`Message`].
//! It is rendering-agnostic: the ui crate wires field edits and the submit
//! button to it and re-renders whenever it reports a change.

pub mod api;
pub mod controller;
pub mod draft;
pub mod input;
pub mod lifecycle;
pub mod message;

pub use api::LocationsApi;
pub use controller::{FormState, LocationFormController, Phase, Submission};
pub use draft::{Draft, Field, time_zone_suggestions};
pub use input::NumericInput;
pub use lifecycle::Lifecycle;
pub use message::{Message, Severity};
