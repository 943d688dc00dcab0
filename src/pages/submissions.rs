use yew::prelude::*;

use crate::api;
use crate::components::{dismissal, page_shell, table_status_row, Dismissal, Modal};
use crate::format::format_amount;
use crate::models::{ManualIncomeSubmission, ReviewDecision, SubmissionStatus};
use crate::store::{run_fetch, run_mutation, StoreAction, StoreHandle};

#[function_component(SubmissionsPage)]
pub fn submissions_page() -> Html {
    let store =
        use_context::<StoreHandle>().expect("SubmissionsPage rendered outside the store context");
    // Review queues default to the pending view.
    let filter = use_state(|| Some(SubmissionStatus::Pending));
    let selected = use_state(|| None::<ManualIncomeSubmission>);
    let note = use_state(String::new);
    let reviewing = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |filter: &Option<SubmissionStatus>| {
                run_fetch(
                    &store,
                    StoreAction::Submissions,
                    api::fetch_submissions(*filter),
                );
                || ()
            },
            *filter,
        );
    }

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(SubmissionStatus::from_query(&select.value()));
        })
    };

    let close_modal = {
        let store = store.clone();
        let selected = selected.clone();
        let note = note.clone();
        let reviewing = reviewing.clone();
        let filter = filter.clone();
        Callback::from(move |_: ()| {
            if dismissal(*reviewing) == Dismissal::CloseAndResync {
                selected.set(None);
                note.set(String::new());
                // A review that failed ambiguously may still have landed, so
                // every close path resyncs the list.
                run_fetch(
                    &store,
                    StoreAction::Submissions,
                    api::fetch_submissions(*filter),
                );
            }
        })
    };

    let review = {
        let store = store.clone();
        let selected = selected.clone();
        let note = note.clone();
        let reviewing = reviewing.clone();
        let filter = filter.clone();
        Callback::from(move |decision: ReviewDecision| {
            if *reviewing {
                return;
            }
            let Some(submission) = (*selected).clone() else { return };
            reviewing.set(true);
            let trimmed = note.trim().to_string();
            let review_note = if trimmed.is_empty() { None } else { Some(trimmed) };
            let after = {
                let store = store.clone();
                let selected = selected.clone();
                let note = note.clone();
                let reviewing = reviewing.clone();
                let filter = *filter;
                Callback::from(move |ok: bool| {
                    reviewing.set(false);
                    if ok {
                        selected.set(None);
                        note.set(String::new());
                        // The list is advisory; re-fetch so the reviewed item
                        // leaves the pending view on the server's authority.
                        run_fetch(&store, StoreAction::Submissions, api::fetch_submissions(filter));
                    }
                })
            };
            run_mutation(
                &store,
                format!("review:{}", submission.id),
                format!("Reviewing submission from {}...", submission.user_email),
                format!(
                    "Submission from {} {}.",
                    submission.user_email,
                    decision.past_tense()
                ),
                api::review_submission(submission.id.clone(), decision, review_note),
                after,
            );
        })
    };

    let slice = &store.submissions;

    html! {
        <>
        { page_shell(
            "Income Submissions",
            html! {
                <select onchange={on_filter_change} class="bg-white border border-border rounded-xl px-3 py-2 text-sm text-foreground">
                    <option value="pending" selected={*filter == Some(SubmissionStatus::Pending)}>{"Pending"}</option>
                    <option value="approved" selected={*filter == Some(SubmissionStatus::Approved)}>{"Approved"}</option>
                    <option value="declined" selected={*filter == Some(SubmissionStatus::Declined)}>{"Declined"}</option>
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
                                        <th class="px-8 py-4 font-bold">{"Member"}</th>
                                        <th class="px-8 py-4 font-bold">{"Month"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Claimed"}</th>
                                        <th class="px-8 py-4 font-bold">{"Status"}</th>
                                        <th class="px-8 py-4 font-bold">{"Submitted"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Review"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {
                                        if slice.status.is_loading() && slice.items.is_empty() {
                                            table_status_row("6", html! { {"Loading..."} })
                                        } else if slice.items.is_empty() {
                                            table_status_row("6", html! { {"No submissions in this view."} })
                                        } else {
                                            html! {
                                                <>
                                                { for slice.items.iter().map(|submission| {
                                                    let open_review = {
                                                        let selected = selected.clone();
                                                        let submission = submission.clone();
                                                        Callback::from(move |_: MouseEvent| selected.set(Some(submission.clone())))
                                                    };
                                                    html! {
                                                        <tr key={submission.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-8 py-4 text-foreground">{ submission.user_email.clone() }</td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ submission.month.clone() }</td>
                                                            <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_amount(submission.amount) }</td>
                                                            <td class="px-8 py-4">
                                                                <span class={submission.status.badge_class()}>{ submission.status.label() }</span>
                                                            </td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ submission.submitted_at.clone() }</td>
                                                            <td class="px-8 py-4 text-right">
                                                                {
                                                                    if submission.status == SubmissionStatus::Pending {
                                                                        html! {
                                                                            <button onclick={open_review} class="bg-primary text-primary-foreground px-3 py-1.5 rounded-lg text-xs font-bold hover:opacity-90">
                                                                                {"Review"}
                                                                            </button>
                                                                        }
                                                                    } else {
                                                                        html! { <span class="text-xs text-muted-foreground">{"Reviewed"}</span> }
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
            if let Some(submission) = &*selected {
                let approve = {
                    let review = review.clone();
                    Callback::from(move |_: MouseEvent| review.emit(ReviewDecision::Approve))
                };
                let decline = {
                    let review = review.clone();
                    Callback::from(move |_: MouseEvent| review.emit(ReviewDecision::Decline))
                };
                html! {
                    <Modal title={format!("Review {}", submission.month)} busy={*reviewing} on_close={close_modal.clone()}>
                        <div class="space-y-4">
                            <div class="flex items-center justify-between text-sm">
                                <span class="text-muted-foreground">{ submission.user_email.clone() }</span>
                                <span class="font-bold text-foreground">{ format_amount(submission.amount) }</span>
                            </div>
                            <img src={submission.proof_url.clone()} alt="Income proof" class="w-full rounded-lg border border-border" />
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Review note (optional)"}</label>
                                <textarea
                                    value={(*note).clone()}
                                    oninput={{
                                        let note = note.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                            note.set(input.value());
                                        })
                                    }}
                                    class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-foreground border-none"
                                    rows="2"
                                    placeholder="Visible to the member"
                                />
                            </div>
                            <div class="flex gap-3">
                                <button onclick={approve} disabled={*reviewing} class="flex-1 bg-green-600 text-white py-2 rounded-[10px] text-sm font-bold hover:opacity-90">
                                    { if *reviewing { "Working..." } else { "Approve" } }
                                </button>
                                <button onclick={decline} disabled={*reviewing} class="flex-1 bg-red-600 text-white py-2 rounded-[10px] text-sm font-bold hover:opacity-90">
                                    { if *reviewing { "Working..." } else { "Decline" } }
                                </button>
                            </div>
                        </div>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}
