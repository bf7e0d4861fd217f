pub mod location_form;
pub mod message_banner;
pub mod toast;

pub use location_form::LocationForm;
pub use message_banner::MessageBanner;
pub use toast::ToastContainer;
