//! Shopmart - Storefront Rust/Leptos Application
//!
//! A WebAssembly client for the Shopmart e-commerce backend: public
//! storefront, cart and checkout, plus a management console for sellers
//! and admins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (search, categories, account menu, cart)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routed page                                                 │
//! │  ├── Home / Search / Product / Cart / Orders                │
//! │  ├── Login / Signup                                         │
//! │  └── /admin: Sidebar + Dashboard / Categories / Products    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastHost + LoadingOverlay (fixed overlays)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time constants (backend URL, timings, limits)
//! - [`types`] - Wire types shared across pages (Product, Order, etc.)
//! - [`store`] - Reactive app state (loading registry, toasts, auth, cart)
//! - [`services`] - Backend communication over gloo-net
//! - [`components`] - UI building blocks (Navbar, Button, Modal, etc.)
//! - [`pages`] - One component per route

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod store;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Catalog
    Category, CategoryCount, CategoryRef, Product,
    // Social
    Comment,
    // Checkout
    Order, OrderStatus,
    // Accounts
    UserInfo,
    // Errors
    AppError, AppResult,
};

// Store
pub use store::{run_action, use_app_store, AppStore, LoadingGuard};

// Components
pub use components::*;

// Pages
pub use pages::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛒 Shopmart - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One store for the whole tree; every page reaches it through
    // `use_app_store()`.
    let store = AppStore::new();
    store.provide();

    // Restore a stored session before the first interaction.
    spawn_local(async move {
        match services::auth::me().await {
            Ok(Some(user)) => store.auth.set_user(user),
            Ok(None) => {}
            Err(err) => log::warn!("⚠️ Session restore failed: {err}"),
        }
    });

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <Navbar/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/product/:id" view=ProductPage/>
                    <Route path="/cart" view=CartPage/>
                    <Route path="/orders" view=OrdersPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/admin" view=admin::AdminLayout>
                        <Route path="" view=admin::AdminDashboardPage/>
                        <Route path="dashboard" view=admin::AdminDashboardPage/>
                        <Route path="categories" view=admin::AdminCategoriesPage/>
                        <Route path="categories/new" view=admin::CategoryFormPage/>
                        <Route path="categories/:id/edit" view=admin::CategoryFormPage/>
                        <Route path="products" view=admin::AdminProductsPage/>
                        <Route path="products/new" view=admin::ProductFormPage/>
                        <Route path="products/:id/edit" view=admin::ProductFormPage/>
                    </Route>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
            <LoadingOverlay/>
        </Router>
    }
}
