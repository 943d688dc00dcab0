use yew::prelude::*;

use crate::api;
use crate::components::{page_shell, table_status_row, Modal};
use crate::format::format_percent;
use crate::models::AssignmentBatch;
use crate::store::{run_fetch, StoreAction, StoreHandle};

#[function_component(BatchesPage)]
pub fn batches_page() -> Html {
    let store =
        use_context::<StoreHandle>().expect("BatchesPage rendered outside the store context");
    let selected = use_state(|| None::<AssignmentBatch>);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                run_fetch(&store, StoreAction::Batches, api::fetch_batches());
                || ()
            },
            (),
        );
    }

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let slice = &store.batches;

    html! {
        <>
        { page_shell(
            "Assignment Batches",
            html! {},
            html! {
                <>
                    {
                        if let Some(message) = slice.status.error() {
                            html! {
                                <div class="p-3 rounded-lg bg-red-50 border border-red-200 text-red-700 text-sm">
                                    { message }
                                </div>
                            }
                        } else { html! {} }
                    }
                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Date"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Assigned"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Completed"}</th>
                                        <th class="px-8 py-4 font-bold">{"Completion"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Non-compliant"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {
                                        if slice.status.is_loading() && slice.items.is_empty() {
                                            table_status_row("5", html! { {"Loading..."} })
                                        } else if slice.items.is_empty() {
                                            table_status_row("5", html! { {"No batches yet."} })
                                        } else {
                                            html! {
                                                <>
                                                { for slice.items.iter().map(|batch| {
                                                    let open_detail = {
                                                        let selected = selected.clone();
                                                        let batch = batch.clone();
                                                        Callback::from(move |_: MouseEvent| selected.set(Some(batch.clone())))
                                                    };
                                                    let width = (batch.completion_rate.clamp(0.0, 1.0) * 100.0) as i32;
                                                    html! {
                                                        <tr key={batch.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-8 py-4 text-foreground font-semibold">{ batch.date.clone() }</td>
                                                            <td class="px-8 py-4 text-right text-muted-foreground">{ batch.assigned }</td>
                                                            <td class="px-8 py-4 text-right text-muted-foreground">{ batch.completed }</td>
                                                            <td class="px-8 py-4">
                                                                <div class="flex items-center gap-3">
                                                                    <div class="h-2 w-32 bg-secondary rounded-full overflow-hidden">
                                                                        <div class="h-full bg-primary" style={format!("width: {}%", width)}></div>
                                                                    </div>
                                                                    <span class="text-xs text-muted-foreground">{ format_percent(batch.completion_rate) }</span>
                                                                </div>
                                                            </td>
                                                            <td class="px-8 py-4 text-right">
                                                                {
                                                                    if batch.non_compliant.is_empty() {
                                                                        html! { <span class="text-xs text-muted-foreground">{"None"}</span> }
                                                                    } else {
                                                                        html! {
                                                                            <button onclick={open_detail} class="text-xs font-bold text-red-600 hover:underline">
                                                                                { format!("{} member(s)", batch.non_compliant.len()) }
                                                                            </button>
                                                                        }
                                                                    }
                                                                }
                                                            </td>
                                                        </tr>
                                                    }
                                                }) }
                                                </>
                                            }
                                        }
                                    }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
        {
            if let Some(batch) = &*selected {
                html! {
                    <Modal title={format!("Non-compliant on {}", batch.date)} on_close={close_modal.clone()}>
                        <p class="text-sm text-muted-foreground mb-4">
                            {"Computed by the server for this batch; read-only here."}
                        </p>
                        <div class="max-h-64 overflow-y-auto divide-y divide-border">
                            { for batch.non_compliant.iter().map(|entry| html! {
                                <div key={entry.email.clone()} class="flex items-center justify-between py-2 text-sm">
                                    <span class="text-foreground">{ entry.email.clone() }</span>
                                    <span class="text-muted-foreground">{ format!("{} missed", entry.missed) }</span>
                                </div>
                            }) }
                        </div>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}
