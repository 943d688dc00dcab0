use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::store::{StoreAction, StoreHandle, ToastAction};

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

/// A transient notification keyed by the operation that emitted it. The key
/// lets a loading toast resolve in place when the operation lands, however
/// long that takes and whether or not the originating view is still mounted.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub op: String,
    pub kind: ToastKind,
    pub message: String,
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let store = use_context::<StoreHandle>().expect("ToastHost rendered outside the store context");
    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |id: u64| {
            store.dispatch(StoreAction::Toast(ToastAction::Dismissed(id)));
        })
    };

    html! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-2">
            { for store.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |(id, kind): &(u64, ToastKind)| {
                let id = *id;
                // Loading toasts persist until the operation resolves them.
                let timer = if *kind == ToastKind::Loading {
                    None
                } else {
                    Some(Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id)))
                };
                move || drop(timer)
            },
            (props.toast.id, props.toast.kind.clone()),
        );
    }

    let tone = match props.toast.kind {
        ToastKind::Loading => "bg-slate-700 text-white",
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
    };
    let on_click_dismiss = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={format!("flex items-center gap-3 px-4 py-3 rounded-xl shadow-lg text-sm font-medium {}", tone)}>
            {
                if props.toast.kind == ToastKind::Loading {
                    html! { <span class="w-3 h-3 rounded-full border-2 border-white/40 border-t-white animate-spin"></span> }
                } else {
                    html! {}
                }
            }
            <span>{ props.toast.message.clone() }</span>
            {
                if props.toast.kind != ToastKind::Loading {
                    html! {
                        <button class="ml-2 text-white/70 hover:text-white font-bold" onclick={on_click_dismiss}>{"✕"}</button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
