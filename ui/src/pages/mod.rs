pub mod location_editor;
pub mod locations;
pub mod not_found;

pub use location_editor::LocationEditorPage;
pub use locations::LocationsPage;
pub use not_found::NotFoundPage;
