use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::page_shell;
use crate::icons::icon_download;
use crate::models::ReportKind;
use crate::notify::ToastKind;
use crate::store::{StoreAction, StoreHandle, ToastAction};

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let store =
        use_context::<StoreHandle>().expect("ReportsPage rendered outside the store context");
    let exporting = use_state(|| None::<ReportKind>);
    let last_export = use_state(|| None::<(ReportKind, String)>);

    let cards = ReportKind::ALL.iter().map(|kind| {
        let kind = *kind;
        let busy = *exporting == Some(kind);
        let on_export = {
            let store = store.clone();
            let exporting = exporting.clone();
            let last_export = last_export.clone();
            Callback::from(move |_: MouseEvent| {
                if exporting.is_some() {
                    return;
                }
                exporting.set(Some(kind));
                let op = format!("export:{}", kind.as_path());
                store.dispatch(StoreAction::Toast(ToastAction::Loading {
                    op: op.clone(),
                    message: format!("Exporting {}...", kind.label()),
                }));
                let store = store.clone();
                let exporting = exporting.clone();
                let last_export = last_export.clone();
                spawn_local(async move {
                    match api::export_report(kind).await {
                        Ok(export) => {
                            store.dispatch(StoreAction::Toast(ToastAction::Resolved {
                                op,
                                kind: ToastKind::Success,
                                message: format!("{} report ready.", kind.label()),
                            }));
                            last_export.set(Some((kind, export.file_url)));
                        }
                        Err(err) => {
                            store.dispatch(StoreAction::Toast(ToastAction::Resolved {
                                op,
                                kind: ToastKind::Error,
                                message: err.to_string(),
                            }));
                        }
                    }
                    // Clear on both arms so the button re-arms after a failure.
                    exporting.set(None);
                });
            })
        };

        let download = match &*last_export {
            Some((k, url)) if *k == kind => html! {
                <a
                    href={url.clone()}
                    target="_blank"
                    class="inline-flex items-center gap-1.5 text-xs font-bold text-primary hover:underline"
                >
                    { icon_download() }
                    {"Download"}
                </a>
            },
            _ => html! {},
        };

        html! {
            <div key={kind.as_path()} class="bg-card rounded-[10px] shadow-sm border border-border p-6 flex flex-col gap-4">
                <div>
                    <h3 class="text-sm font-bold text-foreground mb-1">{ kind.label() }</h3>
                    <p class="text-xs text-muted-foreground">{ kind.description() }</p>
                </div>
                <div class="mt-auto flex items-center justify-between">
                    <button
                        onclick={on_export}
                        disabled={exporting.is_some()}
                        class="px-5 py-2 bg-primary text-primary-foreground rounded-lg text-xs font-bold hover:opacity-90 transition-opacity disabled:opacity-50"
                    >
                        { if busy { "Exporting..." } else { "Export CSV" } }
                    </button>
                    { download }
                </div>
            </div>
        }
    });

    page_shell(
        "Reports",
        html! {},
        html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for cards }
            </div>
        },
    )
}
