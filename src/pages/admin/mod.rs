//! Management area nested under `/admin`.
//!
//! # Pages
//! - [`AdminLayout`]: sidebar frame and access check
//! - [`AdminDashboardPage`]: store-wide numbers and shortcuts
//! - [`AdminCategoriesPage`] / [`CategoryFormPage`]: category CRUD
//! - [`AdminProductsPage`] / [`ProductFormPage`]: product CRUD

mod categories;
mod category_form;
mod dashboard;
mod product_form;
mod products;

pub use categories::*;
pub use category_form::*;
pub use dashboard::*;
pub use product_form::*;
pub use products::*;

use leptos::*;
use leptos_router::{Outlet, A};

use crate::components::Sidebar;
use crate::store::use_app_store;

/// Frame for every management route.
///
/// No hard redirect here: while a stored session restores, the user
/// briefly has no roles, so unauthorized visitors get a sign-in prompt
/// instead of being bounced to `/login`.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="admin-layout">
            <Sidebar/>
            <section class="admin-content">
                <Show
                    when=move || store.auth.can_manage()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p class="empty-note">
                                    "This area is for sellers and admins. Sign in with a matching account to continue."
                                </p>
                                <A href="/login" class="btn btn-solid btn-md">"Sign in"</A>
                            </div>
                        }
                    }
                >
                    <Outlet/>
                </Show>
            </section>
        </div>
    }
}
