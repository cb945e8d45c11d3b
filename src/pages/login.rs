//! Sign-in form.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::components::ui::{Card, TextField};
use crate::components::LoaderButton;
use crate::services::auth;
use crate::store::use_app_store;
use crate::types::AppError;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let sign_in = Callback::new(move |_: ()| {
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            store.set_toast("Email and Password is required to login.");
            return;
        }
        if store.is_loading("login") {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            let _guard = store.ui.start_scoped("login", Some("Signing you in..."));
            match auth::login(&email, &password).await {
                Ok(Some(user)) => {
                    store.auth.set_user(user);
                    store.set_toast("Welcome back!");
                    if store.auth.can_manage() {
                        navigate("/admin/dashboard", NavigateOptions::default());
                    } else {
                        navigate("/", NavigateOptions::default());
                    }
                }
                Ok(None) => store.set_toast("Login failed"),
                // Surface the backend's own message when it sent one.
                Err(AppError::Server(_, detail)) if !detail.is_empty() => {
                    store.set_toast(&detail);
                }
                Err(err) => {
                    log::error!("❌ Login failed: {err}");
                    store.set_toast("Login failed");
                }
            }
        });
    });

    view! {
        <section class="page auth-page">
            <Card title="Sign in" class="auth-card">
                <TextField
                    value=email
                    set_value=set_email
                    label="Email"
                    placeholder="you@example.com"
                    input_type="email"
                />
                <TextField
                    value=password
                    set_value=set_password
                    label="Password"
                    input_type="password"
                />
                <LoaderButton
                    loading_key="login"
                    label="Sign in"
                    loading_label="Signing in..."
                    on_press=sign_in
                    class="btn-block"
                />
                <p class="auth-switch">
                    "No account yet? "
                    <A href="/signup">"Create one"</A>
                </p>
            </Card>
        </section>
    }
}
