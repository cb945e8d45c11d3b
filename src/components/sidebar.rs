//! Management area sidebar.

use leptos::*;
use leptos_router::A;

use crate::store::use_app_store;

/// Links available in the management area. Category management is
/// limited to admins and sellers; everything here assumes the layout
/// already established that the user may manage the shop.
#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="sidebar">
            <div class="sidebar-section">
                <A href="/admin/dashboard" class="sidebar-link">"Dashboard"</A>
            </div>
            <Show when=move || store.auth.can_manage() fallback=|| view! { }>
                <div class="sidebar-section">
                    <div class="sidebar-heading">"Category"</div>
                    <A href="/admin/categories" class="sidebar-link">"All Categories"</A>
                    <A href="/admin/categories/new" class="sidebar-link">"Add Category"</A>
                </div>
                <div class="sidebar-section">
                    <div class="sidebar-heading">"Products"</div>
                    <A href="/admin/products" class="sidebar-link">"All Products"</A>
                    <A href="/admin/products/new" class="sidebar-link">"Add Product"</A>
                </div>
            </Show>
        </aside>
    }
}
