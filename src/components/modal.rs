use yew::prelude::*;

use super::{dismissal, Dismissal};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    /// While true every dismissal path (backdrop, Escape, close button) is
    /// suppressed so an in-flight mutation cannot be abandoned half-committed.
    #[prop_or_default]
    pub busy: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop = use_node_ref();

    {
        // Focus moves to the backdrop on mount so Escape is heard without a
        // preceding click.
        let backdrop = backdrop.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(el) = backdrop.cast::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
                || ()
            },
            (),
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let busy = props.busy;
        Callback::from(move |_: MouseEvent| {
            if dismissal(busy) == Dismissal::CloseAndResync {
                on_close.emit(());
            }
        })
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let on_close = props.on_close.clone();
        let busy = props.busy;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" && dismissal(busy) == Dismissal::CloseAndResync {
                on_close.emit(());
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div ref={backdrop} class="fixed inset-0 z-40 bg-black/40 flex items-center justify-center p-4" onclick={on_backdrop} onkeydown={on_keydown} tabindex="-1">
            <div class="bg-white rounded-2xl shadow-lg w-full max-w-lg overflow-hidden" onclick={stop_propagation}>
                <div class="px-6 py-4 border-b border-border flex items-center justify-between">
                    <h3 class="text-lg font-bold text-foreground">{ props.title.clone() }</h3>
                    <button class="text-muted-foreground hover:text-foreground text-sm font-bold" onclick={on_close_button} disabled={props.busy}>{"✕"}</button>
                </div>
                <div class="p-6">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
