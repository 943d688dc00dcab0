use std::collections::HashSet;

use yew::prelude::*;

use crate::api::{self, UserQuery};
use crate::components::{dismissal, page_shell, table_status_row, Dismissal, Modal};
use crate::debounce::{use_debounced_value, SEARCH_DEBOUNCE_MS};
use crate::format::format_amount;
use crate::icons;
use crate::models::{AdminUser, ChannelLinkStatus, VerificationStatus};
use crate::store::{run_fetch, run_mutation, StoreAction, StoreHandle};

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let store = use_context::<StoreHandle>().expect("UsersPage rendered outside the store context");
    let search = use_state(String::new);
    let filter = use_state(|| None::<VerificationStatus>);
    let debounced = use_debounced_value((*search).clone(), SEARCH_DEBOUNCE_MS);
    let inflight = use_state(HashSet::<String>::new);
    let reset_target = use_state(|| None::<AdminUser>);
    let resetting = use_state(|| false);

    let current_query = UserQuery {
        search: debounced,
        verification: *filter,
    };

    {
        let store = store.clone();
        use_effect_with_deps(
            move |query: &UserQuery| {
                run_fetch(&store, StoreAction::Users, api::fetch_users(query.clone()));
                || ()
            },
            current_query.clone(),
        );
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(VerificationStatus::from_query(&select.value()));
        })
    };

    let close_reset = {
        let store = store.clone();
        let reset_target = reset_target.clone();
        let resetting = resetting.clone();
        let query = current_query.clone();
        Callback::from(move |_: ()| {
            if dismissal(*resetting) == Dismissal::CloseAndResync {
                reset_target.set(None);
                // A failed reset may still have committed server-side, so
                // every close path resyncs the list.
                run_fetch(&store, StoreAction::Users, api::fetch_users(query.clone()));
            }
        })
    };

    let on_confirm_reset = {
        let store = store.clone();
        let reset_target = reset_target.clone();
        let resetting = resetting.clone();
        let query = current_query.clone();
        Callback::from(move |_: MouseEvent| {
            if *resetting {
                return;
            }
            let Some(user) = (*reset_target).clone() else { return };
            resetting.set(true);
            let after = {
                let store = store.clone();
                let reset_target = reset_target.clone();
                let resetting = resetting.clone();
                let query = query.clone();
                Callback::from(move |ok: bool| {
                    resetting.set(false);
                    if ok {
                        reset_target.set(None);
                        run_fetch(&store, StoreAction::Users, api::fetch_users(query.clone()));
                    }
                })
            };
            run_mutation(
                &store,
                format!("reset-password:{}", user.id),
                format!("Sending a password reset to {}...", user.email),
                format!("Password reset sent to {}.", user.email),
                api::reset_password(user.id.clone()),
                after,
            );
        })
    };

    let slice = &store.users;

    html! {
        <>
        { page_shell(
            "Members",
            html! {
                <div class="flex items-center gap-3">
                    <div class="flex items-center gap-2 bg-white border border-border rounded-xl px-3 py-2">
                        { icons::icon_search() }
                        <input
                            placeholder="Search name or email"
                            value={(*search).clone()}
                            oninput={on_search_input}
                            class="bg-transparent outline-none text-sm text-foreground w-48"
                        />
                    </div>
                    <select onchange={on_filter_change} class="bg-white border border-border rounded-xl px-3 py-2 text-sm text-foreground">
                        <option value="all" selected={filter.is_none()}>{"All statuses"}</option>
                        <option value="unverified" selected={*filter == Some(VerificationStatus::Unverified)}>{"Unverified"}</option>
                        <option value="submitted" selected={*filter == Some(VerificationStatus::Submitted)}>{"Awaiting review"}</option>
                        <option value="verified" selected={*filter == Some(VerificationStatus::Verified)}>{"Verified"}</option>
                    </select>
                </div>
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
                                        <th class="px-8 py-4 font-bold">{"Member"}</th>
                                        <th class="px-8 py-4 font-bold">{"Verification"}</th>
                                        <th class="px-8 py-4 font-bold">{"Channel"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Earnings"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {
                                        if slice.status.is_loading() && slice.items.is_empty() {
                                            table_status_row("5", html! { {"Loading..."} })
                                        } else if slice.items.is_empty() {
                                            table_status_row("5", html! { {"No members match this filter."} })
                                        } else {
                                            html! {
                                                <>
                                                { for slice.items.iter().map(|user| {
                                                    let row_busy = inflight.contains(&user.id);
                                                    let approve_verification = row_action(
                                                        &store, &inflight, &current_query, user,
                                                        RowAction::Verification,
                                                    );
                                                    let approve_channel = row_action(
                                                        &store, &inflight, &current_query, user,
                                                        RowAction::ChannelLink,
                                                    );
                                                    let open_reset = {
                                                        let reset_target = reset_target.clone();
                                                        let user = user.clone();
                                                        Callback::from(move |_: MouseEvent| reset_target.set(Some(user.clone())))
                                                    };
                                                    html! {
                                                        <tr key={user.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-8 py-4">
                                                                <p class="text-foreground font-semibold">{ user.name.clone() }</p>
                                                                <p class="text-muted-foreground text-xs">{ user.email.clone() }</p>
                                                            </td>
                                                            <td class="px-8 py-4">
                                                                <span class={user.verification.badge_class()}>{ user.verification.label() }</span>
                                                                {
                                                                    if user.verification == VerificationStatus::Submitted {
                                                                        html! {
                                                                            <button onclick={approve_verification} disabled={row_busy} class="ml-2 text-xs font-bold text-primary hover:underline">
                                                                                { if row_busy { "Working..." } else { "Approve" } }
                                                                            </button>
                                                                        }
                                                                    } else { html! {} }
                                                                }
                                                            </td>
                                                            <td class="px-8 py-4">
                                                                <span class={user.channel_link.badge_class()}>{ user.channel_link.label() }</span>
                                                                {
                                                                    if user.channel_link == ChannelLinkStatus::Submitted {
                                                                        html! {
                                                                            <button onclick={approve_channel} disabled={row_busy} class="ml-2 text-xs font-bold text-primary hover:underline">
                                                                                { if row_busy { "Working..." } else { "Approve" } }
                                                                            </button>
                                                                        }
                                                                    } else { html! {} }
                                                                }
                                                            </td>
                                                            <td class="px-8 py-4 text-right">
                                                                <p class="font-semibold text-foreground">{ format_amount(user.earnings.total) }</p>
                                                                <p class="text-xs text-muted-foreground">{ format!("{} this month", format_amount(user.earnings.this_month)) }</p>
                                                            </td>
                                                            <td class="px-8 py-4 text-right">
                                                                <button onclick={open_reset} class="bg-secondary text-secondary-foreground px-3 py-1.5 rounded-lg text-xs font-bold hover:opacity-90">
                                                                    {"Reset password"}
                                                                </button>
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
            if let Some(user) = &*reset_target {
                html! {
                    <Modal title={format!("Reset password for {}", user.email)} busy={*resetting} on_close={close_reset.clone()}>
                        <p class="text-sm text-muted-foreground">
                            {"The member will receive a reset link by email and their current password stops working. This cannot be undone from here."}
                        </p>
                        <div class="flex gap-3 mt-6">
                            <button onclick={on_confirm_reset.clone()} disabled={*resetting} class="flex-1 bg-red-600 text-white py-2 rounded-[10px] text-sm font-bold hover:opacity-90">
                                { if *resetting { "Resetting..." } else { "Reset password" } }
                            </button>
                            <button onclick={{
                                let close_reset = close_reset.clone();
                                Callback::from(move |_: MouseEvent| close_reset.emit(()))
                            }} disabled={*resetting} class="flex-1 bg-secondary text-secondary-foreground py-2 rounded-[10px] text-sm font-bold">
                                {"Cancel"}
                            </button>
                        </div>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Verification,
    ChannelLink,
}

fn row_action(
    store: &StoreHandle,
    inflight: &UseStateHandle<HashSet<String>>,
    query: &UserQuery,
    user: &AdminUser,
    action: RowAction,
) -> Callback<MouseEvent> {
    let store = store.clone();
    let inflight = inflight.clone();
    let query = query.clone();
    let user = user.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*inflight).clone();
        if !next.insert(user.id.clone()) {
            return;
        }
        inflight.set(next);
        let after = {
            let store = store.clone();
            let inflight = inflight.clone();
            let query = query.clone();
            let id = user.id.clone();
            Callback::from(move |ok: bool| {
                let mut next = (*inflight).clone();
                next.remove(&id);
                inflight.set(next);
                if ok {
                    run_fetch(&store, StoreAction::Users, api::fetch_users(query.clone()));
                }
            })
        };
        match action {
            RowAction::Verification => run_mutation(
                &store,
                format!("verify:{}", user.id),
                format!("Approving verification for {}...", user.email),
                format!("{} is now verified.", user.email),
                api::approve_verification(user.id.clone()),
                after,
            ),
            RowAction::ChannelLink => run_mutation(
                &store,
                format!("channel-link:{}", user.id),
                format!("Approving channel link for {}...", user.email),
                format!("Channel link approved for {}.", user.email),
                api::approve_channel_link(user.id.clone()),
                after,
            ),
        }
    })
}
