use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::{dismissal, page_shell, table_status_row, Dismissal, Modal};
use crate::models::{validate_faq, validate_titled_link, AiVideo, FaqItem, TutorialItem};
use crate::store::{run_fetch, run_mutation, StoreAction, StoreHandle};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContentTab {
    Videos,
    Tutorials,
    Faqs,
}

impl ContentTab {
    const ALL: [ContentTab; 3] = [ContentTab::Videos, ContentTab::Tutorials, ContentTab::Faqs];

    fn label(&self) -> &'static str {
        match self {
            ContentTab::Videos => "AI Videos",
            ContentTab::Tutorials => "Tutorials",
            ContentTab::Faqs => "FAQs",
        }
    }
}

#[function_component(ContentPage)]
pub fn content_page() -> Html {
    let tab = use_state_eq(|| ContentTab::Videos);

    let tabs = html! {
        <div class="flex gap-1 bg-secondary rounded-lg p-1">
            { for ContentTab::ALL.iter().map(|t| {
                let t = *t;
                let tab = tab.clone();
                let active = *tab == t;
                let class = if active {
                    "px-4 py-1.5 rounded-md text-xs font-bold bg-card text-foreground shadow-sm"
                } else {
                    "px-4 py-1.5 rounded-md text-xs font-bold text-muted-foreground hover:text-foreground transition-colors"
                };
                html! {
                    <button key={t.label()} {class} onclick={Callback::from(move |_| tab.set(t))}>
                        { t.label() }
                    </button>
                }
            }) }
        </div>
    };

    page_shell(
        "Content",
        tabs,
        match *tab {
            ContentTab::Videos => html! { <VideosTab /> },
            ContentTab::Tutorials => html! { <TutorialsTab /> },
            ContentTab::Faqs => html! { <FaqsTab /> },
        },
    )
}

/// Shared two-field editor card for the link catalogs. The FAQ tab has its
/// own editor because its fields and validation differ.
fn link_editor(
    heading: &'static str,
    title: &UseStateHandle<String>,
    url: &UseStateHandle<String>,
    form_error: &Option<String>,
    editing: bool,
    saving: bool,
    on_save: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            title.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_url = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            url.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border p-6 space-y-4">
            <h3 class="text-sm font-bold text-foreground">
                { if editing { format!("Edit {heading}") } else { format!("Add {heading}") } }
            </h3>
            {
                if let Some(message) = form_error {
                    html! { <p class="text-xs text-red-600 font-semibold">{ message.clone() }</p> }
                } else { html! {} }
            }
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground mb-1.5">{"Title"}</label>
                    <input
                        type="text"
                        value={(**title).clone()}
                        oninput={on_title}
                        class="w-full px-3.5 py-2.5 bg-background border border-input rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-ring"
                    />
                </div>
                <div>
                    <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground mb-1.5">{"Link"}</label>
                    <input
                        type="text"
                        value={(**url).clone()}
                        oninput={on_url}
                        placeholder="https://"
                        class="w-full px-3.5 py-2.5 bg-background border border-input rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-ring"
                    />
                </div>
            </div>
            <div class="flex gap-2">
                <button
                    onclick={on_save}
                    disabled={saving}
                    class="px-5 py-2 bg-primary text-primary-foreground rounded-lg text-xs font-bold hover:opacity-90 transition-opacity disabled:opacity-50"
                >
                    { if editing { "Save changes" } else { "Add" } }
                </button>
                {
                    if editing {
                        html! {
                            <button
                                onclick={on_cancel}
                                disabled={saving}
                                class="px-5 py-2 bg-secondary text-secondary-foreground rounded-lg text-xs font-bold hover:bg-secondary/80 transition-colors disabled:opacity-50"
                            >
                                {"Cancel"}
                            </button>
                        }
                    } else { html! {} }
                }
            </div>
        </div>
    }
}

#[function_component(VideosTab)]
fn videos_tab() -> Html {
    let store =
        use_context::<StoreHandle>().expect("VideosTab rendered outside the store context");
    let form_title = use_state(String::new);
    let form_url = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let editing = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let delete_target = use_state(|| None::<AiVideo>);
    let deleting = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                run_fetch(&store, StoreAction::Videos, api::fetch_videos());
                || ()
            },
            (),
        );
    }

    let reset_form = {
        let form_title = form_title.clone();
        let form_url = form_url.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form_title.set(String::new());
            form_url.set(String::new());
            form_error.set(None);
            editing.set(None);
        })
    };

    let on_save = {
        let store = store.clone();
        let form_title = form_title.clone();
        let form_url = form_url.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(message) = validate_titled_link(&form_title, &form_url) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            saving.set(true);
            let video = AiVideo {
                id: (*editing).clone(),
                title: form_title.trim().to_string(),
                url: form_url.trim().to_string(),
            };
            let request: std::pin::Pin<Box<dyn std::future::Future<Output = _>>> =
                match (*editing).clone() {
                    Some(id) => Box::pin(async move {
                        api::update_video(id, video).await.map(|_| ())
                    }),
                    None => Box::pin(async move { api::create_video(video).await.map(|_| ()) }),
                };
            let (op, loading, success) = if editing.is_some() {
                ("video:update", "Saving video...", "Video updated.")
            } else {
                ("video:create", "Adding video...", "Video added.")
            };
            let after = {
                let store = store.clone();
                let saving = saving.clone();
                let reset_form = reset_form.clone();
                Callback::from(move |ok: bool| {
                    saving.set(false);
                    if ok {
                        reset_form.emit(());
                        run_fetch(&store, StoreAction::Videos, api::fetch_videos());
                    }
                })
            };
            run_mutation(
                &store,
                op.to_string(),
                loading.to_string(),
                success.to_string(),
                request,
                after,
            );
        })
    };

    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let on_confirm_delete = {
        let store = store.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = (*delete_target).clone() else { return };
            let Some(id) = video.id else { return };
            deleting.set(true);
            let after = {
                let store = store.clone();
                let delete_target = delete_target.clone();
                let deleting = deleting.clone();
                Callback::from(move |ok: bool| {
                    deleting.set(false);
                    if ok {
                        delete_target.set(None);
                        run_fetch(&store, StoreAction::Videos, api::fetch_videos());
                    }
                })
            };
            run_mutation(
                &store,
                format!("video:delete:{id}"),
                "Deleting video...".to_string(),
                "Video deleted.".to_string(),
                api::delete_video(id.clone()),
                after,
            );
        })
    };

    let slice = &store.videos;

    html! {
        <>
        <div class="space-y-6">
            { link_editor(
                "video",
                &form_title,
                &form_url,
                &form_error,
                editing.is_some(),
                *saving,
                on_save,
                on_cancel,
            ) }
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
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Title"}</th>
                            <th class="px-8 py-4 font-bold">{"Link"}</th>
                            <th class="px-8 py-4 font-bold text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {
                            if slice.status.is_loading() && slice.items.is_empty() {
                                table_status_row("3", html! { {"Loading..."} })
                            } else if slice.items.is_empty() {
                                table_status_row("3", html! { {"No videos yet."} })
                            } else {
                                html! {
                                    <>
                                    { for slice.items.iter().map(|video| {
                                        let on_edit = {
                                            let form_title = form_title.clone();
                                            let form_url = form_url.clone();
                                            let form_error = form_error.clone();
                                            let editing = editing.clone();
                                            let video = video.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                form_title.set(video.title.clone());
                                                form_url.set(video.url.clone());
                                                form_error.set(None);
                                                editing.set(video.id.clone());
                                            })
                                        };
                                        let on_delete = {
                                            let delete_target = delete_target.clone();
                                            let video = video.clone();
                                            Callback::from(move |_: MouseEvent| delete_target.set(Some(video.clone())))
                                        };
                                        html! {
                                            <tr key={video.id.clone().unwrap_or_default()} class="text-sm hover:bg-muted/30 transition-colors">
                                                <td class="px-8 py-4 text-foreground font-semibold">{ video.title.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <a href={video.url.clone()} target="_blank" class="text-primary hover:underline text-xs">
                                                        { video.url.clone() }
                                                    </a>
                                                </td>
                                                <td class="px-8 py-4 text-right space-x-3">
                                                    <button onclick={on_edit} class="text-xs font-bold text-primary hover:underline">{"Edit"}</button>
                                                    <button onclick={on_delete} class="text-xs font-bold text-red-600 hover:underline">{"Delete"}</button>
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
        {
            if let Some(video) = &*delete_target {
                let close = {
                    let store = store.clone();
                    let delete_target = delete_target.clone();
                    let deleting = deleting.clone();
                    Callback::from(move |_: ()| {
                        if dismissal(*deleting) == Dismissal::CloseAndResync {
                            delete_target.set(None);
                            run_fetch(&store, StoreAction::Videos, api::fetch_videos());
                        }
                    })
                };
                html! {
                    <Modal title="Delete video" busy={*deleting} on_close={close}>
                        <p class="text-sm text-muted-foreground mb-6">
                            { format!("Remove \"{}\" from the catalog? Members will no longer see it.", video.title) }
                        </p>
                        <button
                            onclick={on_confirm_delete}
                            disabled={*deleting}
                            class="w-full py-2.5 bg-red-600 text-white rounded-lg text-xs font-bold hover:bg-red-700 transition-colors disabled:opacity-50"
                        >
                            { if *deleting { "Deleting..." } else { "Delete" } }
                        </button>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}

#[function_component(TutorialsTab)]
fn tutorials_tab() -> Html {
    let store =
        use_context::<StoreHandle>().expect("TutorialsTab rendered outside the store context");
    let form_title = use_state(String::new);
    let form_url = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let editing = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let delete_target = use_state(|| None::<TutorialItem>);
    let deleting = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                run_fetch(&store, StoreAction::Tutorials, api::fetch_tutorials());
                || ()
            },
            (),
        );
    }

    let reset_form = {
        let form_title = form_title.clone();
        let form_url = form_url.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form_title.set(String::new());
            form_url.set(String::new());
            form_error.set(None);
            editing.set(None);
        })
    };

    let on_save = {
        let store = store.clone();
        let form_title = form_title.clone();
        let form_url = form_url.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(message) = validate_titled_link(&form_title, &form_url) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            saving.set(true);
            let item = TutorialItem {
                id: (*editing).clone(),
                title: form_title.trim().to_string(),
                url: form_url.trim().to_string(),
            };
            let request: std::pin::Pin<Box<dyn std::future::Future<Output = _>>> =
                match (*editing).clone() {
                    Some(id) => Box::pin(async move {
                        api::update_tutorial(id, item).await.map(|_| ())
                    }),
                    None => Box::pin(async move { api::create_tutorial(item).await.map(|_| ()) }),
                };
            let (op, loading, success) = if editing.is_some() {
                ("tutorial:update", "Saving tutorial...", "Tutorial updated.")
            } else {
                ("tutorial:create", "Adding tutorial...", "Tutorial added.")
            };
            let after = {
                let store = store.clone();
                let saving = saving.clone();
                let reset_form = reset_form.clone();
                Callback::from(move |ok: bool| {
                    saving.set(false);
                    if ok {
                        reset_form.emit(());
                        run_fetch(&store, StoreAction::Tutorials, api::fetch_tutorials());
                    }
                })
            };
            run_mutation(
                &store,
                op.to_string(),
                loading.to_string(),
                success.to_string(),
                request,
                after,
            );
        })
    };

    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let on_confirm_delete = {
        let store = store.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(item) = (*delete_target).clone() else { return };
            let Some(id) = item.id else { return };
            deleting.set(true);
            let after = {
                let store = store.clone();
                let delete_target = delete_target.clone();
                let deleting = deleting.clone();
                Callback::from(move |ok: bool| {
                    deleting.set(false);
                    if ok {
                        delete_target.set(None);
                        run_fetch(&store, StoreAction::Tutorials, api::fetch_tutorials());
                    }
                })
            };
            run_mutation(
                &store,
                format!("tutorial:delete:{id}"),
                "Deleting tutorial...".to_string(),
                "Tutorial deleted.".to_string(),
                api::delete_tutorial(id.clone()),
                after,
            );
        })
    };

    let slice = &store.tutorials;

    html! {
        <>
        <div class="space-y-6">
            { link_editor(
                "tutorial",
                &form_title,
                &form_url,
                &form_error,
                editing.is_some(),
                *saving,
                on_save,
                on_cancel,
            ) }
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
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Title"}</th>
                            <th class="px-8 py-4 font-bold">{"Link"}</th>
                            <th class="px-8 py-4 font-bold text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {
                            if slice.status.is_loading() && slice.items.is_empty() {
                                table_status_row("3", html! { {"Loading..."} })
                            } else if slice.items.is_empty() {
                                table_status_row("3", html! { {"No tutorials yet."} })
                            } else {
                                html! {
                                    <>
                                    { for slice.items.iter().map(|item| {
                                        let on_edit = {
                                            let form_title = form_title.clone();
                                            let form_url = form_url.clone();
                                            let form_error = form_error.clone();
                                            let editing = editing.clone();
                                            let item = item.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                form_title.set(item.title.clone());
                                                form_url.set(item.url.clone());
                                                form_error.set(None);
                                                editing.set(item.id.clone());
                                            })
                                        };
                                        let on_delete = {
                                            let delete_target = delete_target.clone();
                                            let item = item.clone();
                                            Callback::from(move |_: MouseEvent| delete_target.set(Some(item.clone())))
                                        };
                                        html! {
                                            <tr key={item.id.clone().unwrap_or_default()} class="text-sm hover:bg-muted/30 transition-colors">
                                                <td class="px-8 py-4 text-foreground font-semibold">{ item.title.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <a href={item.url.clone()} target="_blank" class="text-primary hover:underline text-xs">
                                                        { item.url.clone() }
                                                    </a>
                                                </td>
                                                <td class="px-8 py-4 text-right space-x-3">
                                                    <button onclick={on_edit} class="text-xs font-bold text-primary hover:underline">{"Edit"}</button>
                                                    <button onclick={on_delete} class="text-xs font-bold text-red-600 hover:underline">{"Delete"}</button>
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
        {
            if let Some(item) = &*delete_target {
                let close = {
                    let store = store.clone();
                    let delete_target = delete_target.clone();
                    let deleting = deleting.clone();
                    Callback::from(move |_: ()| {
                        if dismissal(*deleting) == Dismissal::CloseAndResync {
                            delete_target.set(None);
                            run_fetch(&store, StoreAction::Tutorials, api::fetch_tutorials());
                        }
                    })
                };
                html! {
                    <Modal title="Delete tutorial" busy={*deleting} on_close={close}>
                        <p class="text-sm text-muted-foreground mb-6">
                            { format!("Remove \"{}\" from the catalog? Members will no longer see it.", item.title) }
                        </p>
                        <button
                            onclick={on_confirm_delete}
                            disabled={*deleting}
                            class="w-full py-2.5 bg-red-600 text-white rounded-lg text-xs font-bold hover:bg-red-700 transition-colors disabled:opacity-50"
                        >
                            { if *deleting { "Deleting..." } else { "Delete" } }
                        </button>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}

#[function_component(FaqsTab)]
fn faqs_tab() -> Html {
    let store = use_context::<StoreHandle>().expect("FaqsTab rendered outside the store context");
    let form_question = use_state(String::new);
    let form_answer = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let editing = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let delete_target = use_state(|| None::<FaqItem>);
    let deleting = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                run_fetch(&store, StoreAction::Faqs, api::fetch_faqs());
                || ()
            },
            (),
        );
    }

    let reset_form = {
        let form_question = form_question.clone();
        let form_answer = form_answer.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form_question.set(String::new());
            form_answer.set(String::new());
            form_error.set(None);
            editing.set(None);
        })
    };

    let on_save = {
        let store = store.clone();
        let form_question = form_question.clone();
        let form_answer = form_answer.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(message) = validate_faq(&form_question, &form_answer) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            saving.set(true);
            let item = FaqItem {
                id: (*editing).clone(),
                question: form_question.trim().to_string(),
                answer: form_answer.trim().to_string(),
            };
            let request: std::pin::Pin<Box<dyn std::future::Future<Output = _>>> =
                match (*editing).clone() {
                    Some(id) => Box::pin(async move { api::update_faq(id, item).await.map(|_| ()) }),
                    None => Box::pin(async move { api::create_faq(item).await.map(|_| ()) }),
                };
            let (op, loading, success) = if editing.is_some() {
                ("faq:update", "Saving FAQ...", "FAQ updated.")
            } else {
                ("faq:create", "Adding FAQ...", "FAQ added.")
            };
            let after = {
                let store = store.clone();
                let saving = saving.clone();
                let reset_form = reset_form.clone();
                Callback::from(move |ok: bool| {
                    saving.set(false);
                    if ok {
                        reset_form.emit(());
                        run_fetch(&store, StoreAction::Faqs, api::fetch_faqs());
                    }
                })
            };
            run_mutation(
                &store,
                op.to_string(),
                loading.to_string(),
                success.to_string(),
                request,
                after,
            );
        })
    };

    let on_question = {
        let form_question = form_question.clone();
        Callback::from(move |e: InputEvent| {
            form_question.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_answer = {
        let form_answer = form_answer.clone();
        Callback::from(move |e: InputEvent| {
            form_answer.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let on_confirm_delete = {
        let store = store.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(item) = (*delete_target).clone() else { return };
            let Some(id) = item.id else { return };
            deleting.set(true);
            let after = {
                let store = store.clone();
                let delete_target = delete_target.clone();
                let deleting = deleting.clone();
                Callback::from(move |ok: bool| {
                    deleting.set(false);
                    if ok {
                        delete_target.set(None);
                        run_fetch(&store, StoreAction::Faqs, api::fetch_faqs());
                    }
                })
            };
            run_mutation(
                &store,
                format!("faq:delete:{id}"),
                "Deleting FAQ...".to_string(),
                "FAQ deleted.".to_string(),
                api::delete_faq(id.clone()),
                after,
            );
        })
    };

    let slice = &store.faqs;

    html! {
        <>
        <div class="space-y-6">
            <div class="bg-card rounded-[10px] shadow-sm border border-border p-6 space-y-4">
                <h3 class="text-sm font-bold text-foreground">
                    { if editing.is_some() { "Edit FAQ" } else { "Add FAQ" } }
                </h3>
                {
                    if let Some(message) = &*form_error {
                        html! { <p class="text-xs text-red-600 font-semibold">{ message.clone() }</p> }
                    } else { html! {} }
                }
                <div>
                    <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground mb-1.5">{"Question"}</label>
                    <input
                        type="text"
                        value={(*form_question).clone()}
                        oninput={on_question}
                        class="w-full px-3.5 py-2.5 bg-background border border-input rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-ring"
                    />
                </div>
                <div>
                    <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground mb-1.5">{"Answer"}</label>
                    <textarea
                        rows="3"
                        value={(*form_answer).clone()}
                        oninput={on_answer}
                        class="w-full px-3.5 py-2.5 bg-background border border-input rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-ring resize-none"
                    />
                </div>
                <div class="flex gap-2">
                    <button
                        onclick={on_save}
                        disabled={*saving}
                        class="px-5 py-2 bg-primary text-primary-foreground rounded-lg text-xs font-bold hover:opacity-90 transition-opacity disabled:opacity-50"
                    >
                        { if editing.is_some() { "Save changes" } else { "Add" } }
                    </button>
                    {
                        if editing.is_some() {
                            html! {
                                <button
                                    onclick={on_cancel}
                                    disabled={*saving}
                                    class="px-5 py-2 bg-secondary text-secondary-foreground rounded-lg text-xs font-bold hover:bg-secondary/80 transition-colors disabled:opacity-50"
                                >
                                    {"Cancel"}
                                </button>
                            }
                        } else { html! {} }
                    }
                </div>
            </div>
            {
                if let Some(message) = slice.status.error() {
                    html! {
                        <div class="p-3 rounded-lg bg-red-50 border border-red-200 text-red-700 text-sm">
                            { message }
                        </div>
                    }
                } else { html! {} }
            }
            <div class="space-y-3">
                {
                    if slice.status.is_loading() && slice.items.is_empty() {
                        html! { <p class="text-sm text-muted-foreground py-8 text-center">{"Loading..."}</p> }
                    } else if slice.items.is_empty() {
                        html! { <p class="text-sm text-muted-foreground py-8 text-center">{"No FAQs yet."}</p> }
                    } else {
                        html! {
                            <>
                            { for slice.items.iter().map(|item| {
                                let on_edit = {
                                    let form_question = form_question.clone();
                                    let form_answer = form_answer.clone();
                                    let form_error = form_error.clone();
                                    let editing = editing.clone();
                                    let item = item.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        form_question.set(item.question.clone());
                                        form_answer.set(item.answer.clone());
                                        form_error.set(None);
                                        editing.set(item.id.clone());
                                    })
                                };
                                let on_delete = {
                                    let delete_target = delete_target.clone();
                                    let item = item.clone();
                                    Callback::from(move |_: MouseEvent| delete_target.set(Some(item.clone())))
                                };
                                html! {
                                    <div key={item.id.clone().unwrap_or_default()} class="bg-card rounded-[10px] shadow-sm border border-border p-5">
                                        <div class="flex items-start justify-between gap-4">
                                            <div>
                                                <p class="text-sm font-bold text-foreground mb-1">{ item.question.clone() }</p>
                                                <p class="text-sm text-muted-foreground whitespace-pre-wrap">{ item.answer.clone() }</p>
                                            </div>
                                            <div class="flex gap-3 shrink-0">
                                                <button onclick={on_edit} class="text-xs font-bold text-primary hover:underline">{"Edit"}</button>
                                                <button onclick={on_delete} class="text-xs font-bold text-red-600 hover:underline">{"Delete"}</button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                            </>
                        }
                    }
                }
            </div>
        </div>
        {
            if let Some(item) = &*delete_target {
                let close = {
                    let store = store.clone();
                    let delete_target = delete_target.clone();
                    let deleting = deleting.clone();
                    Callback::from(move |_: ()| {
                        if dismissal(*deleting) == Dismissal::CloseAndResync {
                            delete_target.set(None);
                            run_fetch(&store, StoreAction::Faqs, api::fetch_faqs());
                        }
                    })
                };
                html! {
                    <Modal title="Delete FAQ" busy={*deleting} on_close={close}>
                        <p class="text-sm text-muted-foreground mb-6">
                            { format!("Remove \"{}\"? Members will no longer see it.", item.question) }
                        </p>
                        <button
                            onclick={on_confirm_delete}
                            disabled={*deleting}
                            class="w-full py-2.5 bg-red-600 text-white rounded-lg text-xs font-bold hover:bg-red-700 transition-colors disabled:opacity-50"
                        >
                            { if *deleting { "Deleting..." } else { "Delete" } }
                        </button>
                    </Modal>
                }
            } else { html! {} }
        }
        </>
    }
}
