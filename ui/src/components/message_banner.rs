use location_form::{Message, Severity};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub message: Message,
}

/// Inline notice above the form, colored by severity.
#[function_component]
pub fn MessageBanner(props: &MessageBannerProps) -> Html {
    let palette = match props.message.severity {
        Severity::Info => (
            "bg-neutral-50 dark:bg-neutral-800 border-neutral-200 dark:border-neutral-700",
            "text-neutral-700 dark:text-neutral-300",
        ),
        Severity::Success => (
            "bg-green-50 dark:bg-green-900/20 border-green-200 dark:border-green-800",
            "text-green-700 dark:text-green-400",
        ),
        Severity::Danger => (
            "bg-red-50 dark:bg-red-900/20 border-red-200 dark:border-red-800",
            "text-red-700 dark:text-red-400",
        ),
    };
    let (container, text) = palette;

    html! {
        <div
            role="alert"
            data-severity={props.message.severity.to_string()}
            class={format!("p-4 rounded-md border {container}")}
        >
            <p class={format!("text-sm {text}")}>{&props.message.text}</p>
        </div>
    }
}
