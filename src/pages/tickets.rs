use yew::prelude::*;

use crate::api;
use crate::components::{dismissal, page_shell, table_status_row, Dismissal, Modal};
use crate::models::{validate_reply, SupportTicket, TicketStatus};
use crate::store::{run_fetch, run_mutation, StoreAction, StoreHandle};

#[function_component(TicketsPage)]
pub fn tickets_page() -> Html {
    let store =
        use_context::<StoreHandle>().expect("TicketsPage rendered outside the store context");
    let filter = use_state(|| Some(TicketStatus::Open));
    let selected = use_state(|| None::<SupportTicket>);
    let reply = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let working = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |filter: &Option<TicketStatus>| {
                run_fetch(&store, StoreAction::Tickets, api::fetch_tickets(*filter));
                || ()
            },
            *filter,
        );
    }

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(TicketStatus::from_query(&select.value()));
        })
    };

    let close_modal = {
        let store = store.clone();
        let selected = selected.clone();
        let reply = reply.clone();
        let form_error = form_error.clone();
        let working = working.clone();
        let filter = filter.clone();
        Callback::from(move |_: ()| {
            if dismissal(*working) == Dismissal::CloseAndResync {
                selected.set(None);
                reply.set(String::new());
                form_error.set(None);
                // A reply or close that failed ambiguously may still have
                // landed, so every close path resyncs the list.
                run_fetch(&store, StoreAction::Tickets, api::fetch_tickets(*filter));
            }
        })
    };

    let on_send_reply = {
        let store = store.clone();
        let selected = selected.clone();
        let reply = reply.clone();
        let form_error = form_error.clone();
        let working = working.clone();
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            if *working {
                return;
            }
            let Some(ticket) = (*selected).clone() else { return };
            // Validation failures never reach the network.
            if let Err(message) = validate_reply(&reply) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            working.set(true);
            let after = {
                let store = store.clone();
                let selected = selected.clone();
                let reply = reply.clone();
                let working = working.clone();
                let filter = *filter;
                Callback::from(move |ok: bool| {
                    working.set(false);
                    if ok {
                        selected.set(None);
                        reply.set(String::new());
                        run_fetch(&store, StoreAction::Tickets, api::fetch_tickets(filter));
                    }
                })
            };
            run_mutation(
                &store,
                format!("ticket-reply:{}", ticket.id),
                format!("Sending reply to {}...", ticket.user_email),
                format!("Reply sent to {}.", ticket.user_email),
                api::reply_to_ticket(ticket.id.clone(), reply.trim().to_string()),
                after,
            );
        })
    };

    let on_close_ticket = {
        let store = store.clone();
        let selected = selected.clone();
        let reply = reply.clone();
        let working = working.clone();
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            if *working {
                return;
            }
            let Some(ticket) = (*selected).clone() else { return };
            working.set(true);
            let after = {
                let store = store.clone();
                let selected = selected.clone();
                let reply = reply.clone();
                let working = working.clone();
                let filter = *filter;
                Callback::from(move |ok: bool| {
                    working.set(false);
                    if ok {
                        selected.set(None);
                        reply.set(String::new());
                        run_fetch(&store, StoreAction::Tickets, api::fetch_tickets(filter));
                    }
                })
            };
            run_mutation(
                &store,
                format!("ticket-close:{}", ticket.id),
                format!("Closing ticket \"{}\"...", ticket.subject),
                format!("Ticket \"{}\" closed.", ticket.subject),
                api::close_ticket(ticket.id.clone()),
                after,
            );
        })
    };

    let slice = &store.tickets;

    html! {
        <>
        { page_shell(
            "Support Tickets",
            html! {
                <select onchange={on_filter_change} class="bg-white border border-border rounded-xl px-3 py-2 text-sm text-foreground">
                    <option value="open" selected={*filter == Some(TicketStatus::Open)}>{"Open"}</option>
                    <option value="answered" selected={*filter == Some(TicketStatus::Answered)}>{"Answered"}</option>
                    <option value="closed" selected={*filter == Some(TicketStatus::Closed)}>{"Closed"}</option>
                    <option value="all" selected={filter.is_none()}>{"All"}</option>
                </select>
            },
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
                                        <th class="px-8 py-4 font-bold">{"Subject"}</th>
                                        <th class="px-8 py-4 font-bold">{"Member"}</th>
                                        <th class="px-8 py-4 font-bold">{"Status"}</th>
                                        <th class="px-8 py-4 font-bold">{"Opened"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Replies"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {
                                        if slice.status.is_loading() && slice.items.is_empty() {
                                            table_status_row("5", html! { {"Loading..."} })
                                        } else if slice.items.is_empty() {
                                            table_status_row("5", html! { {"No tickets in this view."} })
                                        } else {
                                            html! {
                                                <>
                                                { for slice.items.iter().map(|ticket| {
                                                    let open_thread = {
                                                        let selected = selected.clone();
                                                        let ticket = ticket.clone();
                                                        Callback::from(move |_: MouseEvent| selected.set(Some(ticket.clone())))
                                                    };
                                                    html! {
                                                        <tr key={ticket.id.clone()} onclick={open_thread} class="text-sm hover:bg-muted/30 transition-colors cursor-pointer">
                                                            <td class="px-8 py-4 text-foreground font-semibold">{ ticket.subject.clone() }</td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ ticket.user_email.clone() }</td>
                                                            <td class="px-8 py-4">
                                                                <span class={ticket.status.badge_class()}>{ ticket.status.label() }</span>
                                                            </td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ ticket.opened_at.clone() }</td>
                                                            <td class="px-8 py-4 text-right text-muted-foreground">{ ticket.replies.len() }</td>
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
            if let Some(ticket) = &*selected {
                html! {
                    <Modal title={ticket.subject.clone()} busy={*working} on_close={close_modal.clone()}>
                        <div class="space-y-4">
                            <div class="flex items-center justify-between text-sm">
                                <span class="text-muted-foreground">{ ticket.user_email.clone() }</span>
                                <span class={ticket.status.badge_class()}>{ ticket.status.label() }</span>
                            </div>
                            <div class="max-h-64 overflow-y-auto space-y-3 pr-1">
                                { for ticket.replies.iter().enumerate().map(|(idx, entry)| html! {
                                    <div key={idx} class={if entry.staff { "bg-[#eef4f9] rounded-lg p-3" } else { "bg-slate-50 rounded-lg p-3" }}>
                                        <div class="flex items-center justify-between mb-1">
                                            <span class="text-xs font-bold text-foreground">{ entry.author.clone() }</span>
                                            <span class="text-[10px] text-muted-foreground">{ entry.sent_at.clone() }</span>
                                        </div>
                                        <p class="text-sm text-foreground whitespace-pre-wrap">{ entry.body.clone() }</p>
                                    </div>
                                }) }
                            </div>
                            {
                                if ticket.status != TicketStatus::Closed {
                                    html! {
                                        <>
                                            <textarea
                                                value={(*reply).clone()}
                                                oninput={{
                                                    let reply = reply.clone();
                                                    Callback::from(move |e: InputEvent| {
                                                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                                        reply.set(input.value());
                                                    })
                                                }}
                                                class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-foreground border-none"
                                                rows="3"
                                                placeholder="Write a reply..."
                                            />
                                            {
                                                if let Some(message) = &*form_error {
                                                    html! { <p class="text-sm text-red-500">{ message.clone() }</p> }
                                                } else { html! {} }
                                            }
                                            <div class="flex gap-3">
                                                <button onclick={on_send_reply.clone()} disabled={*working} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-sm font-bold hover:opacity-90">
                                                    { if *working { "Sending..." } else { "Send reply" } }
                                                </button>
                                                <button onclick={on_close_ticket.clone()} disabled={*working} class="flex-1 bg-secondary text-secondary-foreground py-2 rounded-[10px] text-sm font-bold">
                                                    {"Close ticket"}
                                                </button>
                                            </div>
                                        </>
                                    }
                                } else {
                                    html! { <p class="text-sm text-muted-foreground">{"This ticket is closed."}</p> }
                                }
                            }
                        </div>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}
