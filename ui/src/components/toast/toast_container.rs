use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    if context.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for context.toasts.values().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
