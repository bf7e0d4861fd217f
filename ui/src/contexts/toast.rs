use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays up before it dismisses itself.
const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            kind,
        }
    }
}

/// Toasts keyed by insertion order, so they display oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: BTreeMap<u64, Toast>,
    next_seq: u64,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_seq = self.next_seq;

        match action {
            ToastAction::Add(toast) => {
                toasts.insert(next_seq, toast);
                next_seq += 1;
            }
            ToastAction::Remove(id) => {
                toasts.retain(|_, toast| toast.id != id);
            }
        }

        Rc::new(ToastState { toasts, next_seq })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastKind::Success));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}
