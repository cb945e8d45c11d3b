//! Top navigation bar: logo, category menu, search, account menu, cart.

use leptos::*;
use leptos_router::{use_navigate, A};
use url::form_urlencoded;

use crate::components::ui::use_disclosure;
use crate::config::APP_NAME;
use crate::services::{auth, categories};
use crate::store::use_app_store;
use crate::types::Category;

fn query_string(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let (search_term, set_search_term) = create_signal(String::new());
    let (shop_categories, set_shop_categories) = create_signal(Vec::<Category>::new());
    let categories_menu = use_disclosure();
    let account_menu = use_disclosure();

    // Fill the category menu once at startup. Only categories that
    // actually contain products are worth navigating to; a fetch failure
    // just leaves the menu empty.
    spawn_local(async move {
        match categories::list().await {
            Ok(all) => {
                set_shop_categories.set(all.into_iter().filter(|c| c.count.products > 0).collect());
            }
            Err(err) => log::error!("❌ Failed to load categories: {err}"),
        }
    });

    // Handlers that live inside the dropdowns are `Callback`s: the menu
    // bodies re-render on open, and `Callback` is `Copy`.
    let nav_search = navigate.clone();
    let on_search = move |_| {
        let term = search_term.get_untracked();
        nav_search(
            &format!("/search?{}", query_string("query", &term)),
            Default::default(),
        );
    };

    let nav_category = navigate.clone();
    let pick_category = Callback::new(move |id: String| {
        categories_menu.close();
        nav_category(
            &format!("/search?{}", query_string("category", &id)),
            Default::default(),
        );
    });

    let nav_dashboard = navigate.clone();
    let go_dashboard = Callback::new(move |_: ()| {
        account_menu.close();
        nav_dashboard("/admin/dashboard", Default::default());
    });

    let nav_orders = navigate.clone();
    let go_orders = Callback::new(move |_: ()| {
        account_menu.close();
        nav_orders("/orders", Default::default());
    });

    let nav_upgrade = navigate.clone();
    let on_upgrade = Callback::new(move |_: ()| {
        account_menu.close();
        let display_name = web_sys::window()
            .and_then(|w| w.prompt_with_message("Enter your seller display name").ok())
            .flatten()
            .filter(|name| !name.trim().is_empty());
        let nav = nav_upgrade.clone();
        spawn_local(async move {
            match auth::upgrade_to_seller(display_name.as_deref()).await {
                Ok(Some(user)) => {
                    store.auth.set_user(user);
                    store.set_toast("Upgraded to seller");
                    nav("/admin/dashboard", Default::default());
                }
                Ok(None) => store.set_toast("Upgrade failed"),
                Err(err) => {
                    log::error!("❌ Seller upgrade failed: {err}");
                    store.set_toast("Upgrade failed");
                }
            }
        });
    });

    let nav_logout = navigate.clone();
    let on_logout = Callback::new(move |_: ()| {
        account_menu.close();
        auth::logout();
        store.auth.clear_user();
        store.orders.clear();
        store.set_toast("Signed out");
        nav_logout("/", Default::default());
    });

    let nav_cart = navigate;

    let greeting = move || {
        store
            .auth
            .user()
            .map(|u| u.username.split('@').next().unwrap_or("").to_string())
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <A href="/" class="nav-logo">{APP_NAME}</A>

            <div class="nav-menu">
                <button class="nav-trigger" on:click=move |_| categories_menu.toggle()>
                    <span class="nav-trigger-hint">"Select"</span>
                    <span class="nav-trigger-label">"Category ▾"</span>
                </button>
                <Show when=move || categories_menu.is_open.get() fallback=|| view! { }>
                    <div class="menu-panel">
                        <For
                            each=move || shop_categories.get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                let id = category.id.clone();
                                view! {
                                    <button
                                        class="menu-item"
                                        on:click=move |_| pick_category.call(id.clone())
                                    >
                                        {category.name.clone()}
                                    </button>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <div class="nav-search">
                <input
                    type="text"
                    class="nav-search-input"
                    placeholder="Search products"
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <button class="nav-search-btn" on:click=on_search>"Search"</button>
            </div>

            <Show
                when=move || store.auth.is_signed_in()
                fallback=|| view! { <A href="/login" class="nav-login">"Login"</A> }
            >
                <div class="nav-menu">
                    <button class="nav-trigger" on:click=move |_| account_menu.toggle()>
                        <span class="nav-trigger-hint">
                            {move || format!("Hello, {}", greeting())}
                        </span>
                        <span class="nav-trigger-label">"Account & Orders ▾"</span>
                    </button>
                    <Show when=move || account_menu.is_open.get() fallback=|| view! { }>
                        <div class="menu-panel menu-panel-right">
                            <Show when=move || store.auth.can_manage() fallback=|| view! { }>
                                <button class="menu-item" on:click=move |_| go_dashboard.call(())>
                                    "Dashboard"
                                </button>
                            </Show>
                            <Show when=move || !store.auth.can_manage() fallback=|| view! { }>
                                <button class="menu-item" on:click=move |_| on_upgrade.call(())>
                                    "Upgrade to Seller"
                                </button>
                            </Show>
                            <button class="menu-item" on:click=move |_| go_orders.call(())>
                                "My Orders"
                            </button>
                            <button
                                class="menu-item menu-item-danger"
                                on:click=move |_| on_logout.call(())
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>

            <button class="nav-cart" on:click=move |_| nav_cart("/cart", Default::default())>
                <span class="nav-cart-icon">"🛒"</span>
                <span class="nav-cart-badge">{move || store.cart.count()}</span>
            </button>
        </nav>
    }
}
