//! Auth Page Component
//!
//! Sign in or create an account. Field-level rejections render under the
//! field; anything else becomes a toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{ClientError, RegisterRequest};

use crate::commands;
use crate::context::AppContext;
use crate::route::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (username, set_username) = signal(String::new());
    let (display_name, set_display_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<ClientError>);
    let (busy, set_busy) = signal(false);

    let field_error = move |name: &'static str| {
        move || {
            error.with(|e| {
                e.as_ref()
                    .filter(|e| e.field() == Some(name))
                    .map(|e| e.user_message())
            })
        }
    };

    let switch_mode = move |_| {
        set_error.set(None);
        set_mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::Register,
                AuthMode::Register => AuthMode::SignIn,
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = mode.get_untracked();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let name = match display_name.get_untracked().trim() {
            "" => user.trim().to_string(),
            n => n.to_string(),
        };

        if current == AuthMode::Register {
            let request = RegisterRequest {
                username: user.clone(),
                display_name: name.clone(),
                password: pass.clone(),
            };
            if let Err(e) = request.validate() {
                set_error.set(Some(e));
                return;
            }
        }
        set_error.set(None);
        set_busy.set(true);

        spawn_local(async move {
            let result = match current {
                AuthMode::SignIn => commands::login(&user, &pass).await,
                AuthMode::Register => commands::register(&user, &name, &pass).await,
            };
            match result {
                Ok(session) => {
                    let greeting = format!("Welcome, {}!", session.display_name);
                    *store.session().write() = Some(session);
                    set_password.set(String::new());
                    ctx.info(greeting);
                    ctx.navigate(Page::default());
                }
                Err(e) if e.field().is_some() => set_error.set(Some(e)),
                Err(e) => ctx.report(&e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>{move || match mode.get() {
                    AuthMode::SignIn => "Sign in",
                    AuthMode::Register => "Create an account",
                }}</h1>

                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("username")}</span>
                </label>

                <Show when=move || mode.get() == AuthMode::Register>
                    <label>
                        "Display name"
                        <input
                            type="text"
                            placeholder="Defaults to your username"
                            prop:value=move || display_name.get()
                            on:input=move |ev| set_display_name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete=move || match mode.get() {
                            AuthMode::SignIn => "current-password",
                            AuthMode::Register => "new-password",
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("password")}</span>
                </label>

                <button type="submit" class="primary-btn" disabled=move || busy.get()>
                    {move || match (mode.get(), busy.get()) {
                        (_, true) => "Please wait...",
                        (AuthMode::SignIn, false) => "Sign in",
                        (AuthMode::Register, false) => "Create account",
                    }}
                </button>

                <p class="auth-switch">
                    {move || match mode.get() {
                        AuthMode::SignIn => "New to NoviList? ",
                        AuthMode::Register => "Already have an account? ",
                    }}
                    <button type="button" class="link-btn" on:click=switch_mode>
                        {move || match mode.get() {
                            AuthMode::SignIn => "Create an account",
                            AuthMode::Register => "Sign in",
                        }}
                    </button>
                </p>
            </form>
        </section>
    }
}
