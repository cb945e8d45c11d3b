//! Account creation form.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::components::ui::{Card, TextField};
use crate::components::LoaderButton;
use crate::services::auth::{self, AccountType};
use crate::store::use_app_store;
use crate::types::AppError;

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (account_type, set_account_type) = create_signal(AccountType::Buyer);
    let (shop_name, set_shop_name) = create_signal(String::new());

    let register = Callback::new(move |_: ()| {
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            store.set_toast("Email and Password is required to signup.");
            return;
        }
        if store.is_loading("signup") {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            let _guard = store
                .ui
                .start_scoped("signup", Some("Creating your account..."));
            let first = first_name.get_untracked();
            let last = last_name.get_untracked();
            let kind = account_type.get_untracked();
            let shop = shop_name.get_untracked().trim().to_string();
            let shop_ref = (!shop.is_empty()).then_some(shop.as_str());
            let outcome = auth::signup(
                &email_value,
                &password_value,
                first.trim(),
                last.trim(),
                kind,
                shop_ref,
            )
            .await;
            match outcome {
                Ok(Some(user)) => {
                    store.auth.set_user(user);
                    store.set_toast("Account created");
                    if store.auth.can_manage() {
                        navigate("/admin/dashboard", NavigateOptions::default());
                    } else {
                        navigate("/", NavigateOptions::default());
                    }
                }
                Ok(None) => store.set_toast("Signup failed"),
                Err(AppError::Server(_, detail)) if !detail.is_empty() => {
                    store.set_toast(&detail);
                }
                Err(err) => {
                    log::error!("❌ Signup failed: {err}");
                    store.set_toast("Signup failed");
                }
            }
        });
    });

    view! {
        <section class="page auth-page">
            <Card title="Create account" class="auth-card">
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
                <div class="field-row">
                    <TextField value=first_name set_value=set_first_name label="First name"/>
                    <TextField value=last_name set_value=set_last_name label="Last name"/>
                </div>
                <div class="field">
                    <span class="field-label">"Account type"</span>
                    <div class="radio-row">
                        <label class="radio">
                            <input
                                type="radio"
                                name="account-type"
                                prop:checked=move || account_type.get() == AccountType::Buyer
                                on:change=move |_| set_account_type.set(AccountType::Buyer)
                            />
                            " Buyer"
                        </label>
                        <label class="radio">
                            <input
                                type="radio"
                                name="account-type"
                                prop:checked=move || account_type.get() == AccountType::Seller
                                on:change=move |_| set_account_type.set(AccountType::Seller)
                            />
                            " Seller"
                        </label>
                    </div>
                </div>
                <Show
                    when=move || account_type.get() == AccountType::Seller
                    fallback=|| view! { }
                >
                    <TextField
                        value=shop_name
                        set_value=set_shop_name
                        label="Shop name"
                        placeholder="Shown on your product listings"
                    />
                </Show>
                <LoaderButton
                    loading_key="signup"
                    label="Create account"
                    loading_label="Creating account..."
                    on_press=register
                    class="btn-block"
                />
                <p class="auth-switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </Card>
        </section>
    }
}
