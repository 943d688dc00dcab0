use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

mod api;
mod components;
mod debounce;
mod format;
mod icons;
mod models;
mod notify;
mod pages;
mod store;

use icons::{
    icon_badge_check, icon_bar_chart, icon_download, icon_layout_grid, icon_log_out,
    icon_message_circle, icon_users,
};
use notify::ToastHost;
use pages::{BatchesPage, ContentPage, ReportsPage, SubmissionsPage, TicketsPage, UsersPage};
use store::{AdminStore, StoreHandle};

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Users,
    Submissions,
    Tickets,
    Batches,
    Content,
    Reports,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Users",
            page: Page::Users,
            icon: icon_users,
        },
        NavItem {
            label: "Income Submissions",
            page: Page::Submissions,
            icon: icon_badge_check,
        },
        NavItem {
            label: "Support Tickets",
            page: Page::Tickets,
            icon: icon_message_circle,
        },
        NavItem {
            label: "Assignment Batches",
            page: Page::Batches,
            icon: icon_bar_chart,
        },
        NavItem {
            label: "Content",
            page: Page::Content,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Reports",
            page: Page::Reports,
            icon: icon_download,
        },
    ];

    let on_logout = Callback::from(move |_| {
        spawn_local(async move {
            // Best effort; the session cookie may already be gone.
            let _ = api::logout().await;
            api::clear_token();
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
    });

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white text-xl font-black">
                    {"T"}
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"TeamRise"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex-1"></div>
            <span class="text-xs font-bold uppercase tracking-widest text-[#173E63]">
                {"Admin Console"}
            </span>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    active_page: Page,
    on_select: Callback<Page>,
}

/// Authenticated chrome. The store lives here so logging out drops every
/// cached slice along with the component tree.
#[function_component(AdminShell)]
fn admin_shell(props: &ShellProps) -> Html {
    let store = use_reducer(AdminStore::default);

    let content = match props.active_page {
        Page::Users => html! { <UsersPage /> },
        Page::Submissions => html! { <SubmissionsPage /> },
        Page::Tickets => html! { <TicketsPage /> },
        Page::Batches => html! { <BatchesPage /> },
        Page::Content => html! { <ContentPage /> },
        Page::Reports => html! { <ReportsPage /> },
    };

    html! {
        <ContextProvider<StoreHandle> context={store}>
            <div class="flex h-screen bg-background">
                <div class="hidden md:flex">
                    <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
                </div>

                <div class="flex-1 flex flex-col overflow-hidden">
                    <Header />
                    <main class="flex-1 overflow-y-auto">
                        { content }
                    </main>
                </div>
            </div>
            <ToastHost />
        </ContextProvider<StoreHandle>>
    }
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Users);
    let auth_status = use_state(|| AuthStatus::Checking);
    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    {
        let auth_status = auth_status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::refresh_session().await {
                        Ok(token) => {
                            api::store_token(&token);
                            auth_status.set(AuthStatus::Authenticated);
                        }
                        Err(_) => {
                            // Fallback to existing access token (keeps the admin logged in on refresh)
                            if api::has_session() {
                                auth_status.set(AuthStatus::Authenticated);
                            } else {
                                auth_status.set(AuthStatus::Unauthenticated);
                            }
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    if *auth_status == AuthStatus::Checking {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Checking session..."}
            </div>
        };
    }

    if *auth_status == AuthStatus::Unauthenticated {
        return html! { <LoginScreen on_authenticated={Callback::from(move |_| auth_status.set(AuthStatus::Authenticated))} /> };
    }

    html! { <AdminShell active_page={*active_page} on_select={on_select} /> }
}

#[derive(Properties, PartialEq)]
struct LoginScreenProps {
    on_authenticated: Callback<()>,
}

#[function_component(LoginScreen)]
fn login_screen(props: &LoginScreenProps) -> Html {
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let on_authenticated = on_authenticated.clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            if password_val.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let error_async = error.clone();
            let loading_async = loading.clone();
            spawn_local(async move {
                match api::login(email_val, password_val).await {
                    Ok(token) => {
                        api::store_token(&token);
                        on_authenticated.emit(());
                    }
                    Err(err) => {
                        error_async.set(Some(err.to_string()));
                    }
                }
                loading_async.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Welcome back"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        {"Sign in to the admin console."}
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
