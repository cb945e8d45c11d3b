//! Application state, sliced Redux-style.
//!
//! [`AppStore`] bundles one signal-backed slice per concern. The whole
//! struct is `Copy` (every slice is just signal handles), so components
//! grab it once with [`use_app_store`] and move it into as many closures
//! as they like.
//!
//! Nothing here is global: `AppStore::new()` builds a fresh, fully
//! independent store, which is what the unit tests do. The running app
//! creates exactly one and shares it through the reactive context tree
//! via [`AppStore::provide`].

use leptos::{expect_context, provide_context};

mod actions;
mod auth;
mod cart;
mod orders;
mod toasts;
mod ui;

pub use actions::run_action;
pub use auth::AuthSlice;
pub use cart::{CartItem, CartSlice};
pub use orders::OrdersSlice;
pub use toasts::ToastsSlice;
pub use ui::{LoadingAction, LoadingGuard, UiSlice};

#[derive(Clone, Copy)]
pub struct AppStore {
    pub ui: UiSlice,
    pub toasts: ToastsSlice,
    pub auth: AuthSlice,
    pub cart: CartSlice,
    pub orders: OrdersSlice,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            ui: UiSlice::new(),
            toasts: ToastsSlice::new(),
            auth: AuthSlice::new(),
            cart: CartSlice::new(),
            orders: OrdersSlice::new(),
        }
    }

    /// Put this store into the reactive context for the subtree below.
    pub fn provide(self) {
        provide_context(self);
    }

    // ====== Flat accessors for the most-used operations ======
    //
    // The async UI surface is what nearly every component touches, so it
    // is re-exported at the store level; the other slices are reached
    // through their fields.

    pub fn start_loading(&self, key: &str, message: Option<&str>) {
        self.ui.start_loading(key, message);
    }

    pub fn stop_loading(&self, key: &str) {
        self.ui.stop_loading(key);
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.ui.is_loading(key)
    }

    pub fn any_loading(&self) -> bool {
        self.ui.any_loading()
    }

    pub fn latest_message(&self) -> Option<String> {
        self.ui.latest_message()
    }

    pub fn set_toast(&self, message: &str) {
        self.toasts.set_toast(message);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the store provided by an ancestor. Panics outside the app tree.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn stores_are_independent_instances() {
        let runtime = create_runtime();
        let a = AppStore::new();
        let b = AppStore::new();

        a.start_loading("save", Some("Saving..."));
        a.set_toast("hello");

        assert!(a.is_loading("save"));
        assert!(!b.is_loading("save"));
        assert!(!b.any_loading());
        assert_eq!(b.toasts.current(), None);

        runtime.dispose();
    }

    #[test]
    fn flat_accessors_delegate_to_the_slices() {
        let runtime = create_runtime();
        let store = AppStore::new();

        store.start_loading("fetch", Some("Loading products..."));
        assert!(store.any_loading());
        assert_eq!(store.latest_message(), Some("Loading products...".to_string()));

        store.stop_loading("fetch");
        assert!(!store.any_loading());

        store.set_toast("Done");
        assert_eq!(store.toasts.current(), Some("Done".to_string()));

        runtime.dispose();
    }
}
