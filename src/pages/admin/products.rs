//! Product listing for the management area.
//!
//! Admins see the whole catalog; sellers only the products listed under
//! their own account.

use leptos::*;
use leptos_router::A;

use crate::components::ui::{
    use_disclosure, Button, ButtonSize, ButtonVariant, Modal, ModalBody, ModalFooter,
    ModalHeader, Pagination, TextField,
};
use crate::config::ROWS_PER_PAGE;
use crate::services::{
    products::{self, ProductFilter},
    sellers,
};
use crate::store::{run_action, use_app_store};
use crate::types::Product;

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let store = use_app_store();
    let (rows, set_rows) = create_signal(Vec::<Product>::new());
    let (filter, set_filter) = create_signal(String::new());
    let (page, set_page) = create_signal(1usize);
    let confirm = use_disclosure();
    let (target, set_target) = create_signal(None::<Product>);

    // Tracks the auth slice: the right scope is only known once the
    // session has restored.
    create_effect(move |_| {
        let Some(user) = store.auth.user() else {
            return;
        };
        let all = user.is_admin.unwrap_or(false);
        let username = user.username.clone();
        spawn_local(async move {
            let request = async move {
                if all {
                    products::list(&ProductFilter::default()).await
                } else {
                    sellers::products_by_email(&username).await
                }
            };
            let fetched = run_action(
                store,
                "fetchProducts",
                "Loading products...",
                request,
                None,
                Some("Could not load products."),
            )
            .await;
            if let Some(list) = fetched {
                set_rows.set(list);
            }
        });
    });

    let filtered = create_memo(move |_| {
        let needle = filter.get().trim().to_lowercase();
        rows.get()
            .into_iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });
    let total_pages = create_memo(move |_| filtered.get().len().div_ceil(ROWS_PER_PAGE).max(1));
    let page_rows = create_memo(move |_| {
        let current = page.get().clamp(1, total_pages.get());
        filtered
            .get()
            .into_iter()
            .skip((current - 1) * ROWS_PER_PAGE)
            .take(ROWS_PER_PAGE)
            .collect::<Vec<_>>()
    });

    let ask_delete = move |product: Product| {
        set_target.set(Some(product));
        confirm.open();
    };

    let cancel = Callback::new(move |_: ()| confirm.close());

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(product) = target.get_untracked() else {
            return;
        };
        confirm.close();
        spawn_local(async move {
            let deleted = run_action(
                store,
                "deleteProduct",
                "Deleting product...",
                products::delete(&product.id),
                Some("Product deleted"),
                Some("Failed to delete product"),
            )
            .await;
            if deleted.is_some() {
                set_rows.update(|list| list.retain(|p| p.id != product.id));
            }
        });
    });

    view! {
        <div class="admin-page">
            <div class="page-toolbar">
                <h2 class="page-title">"Products"</h2>
                <div class="toolbar-actions">
                    <TextField value=filter set_value=set_filter placeholder="Filter by title"/>
                    <A href="/admin/products/new" class="btn btn-solid btn-md">
                        "Add Product"
                    </A>
                </div>
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! { <p class="empty-note">"No products found."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Price"</th>
                            <th>"List price"</th>
                            <th class="cell-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page_rows.get()
                            key=|p| p.id.clone()
                            children=move |product| {
                                let edit_href = format!("/admin/products/{}/edit", product.id);
                                let row = product.clone();
                                view! {
                                    <tr>
                                        <td>{product.title.clone()}</td>
                                        <td class="price">
                                            {format!("${:.2}", product.discount_price)}
                                        </td>
                                        <td>{format!("${:.2}", product.sale_price)}</td>
                                        <td class="cell-right cell-actions">
                                            <A href=edit_href class="btn btn-ghost btn-sm">
                                                "Edit"
                                            </A>
                                            <Button
                                                size=ButtonSize::Sm
                                                variant=ButtonVariant::Danger
                                                on_press=move |_| ask_delete(row.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Pagination page=page set_page=set_page total=Signal::from(total_pages)/>

            <Modal open=confirm.is_open on_close=cancel>
                <ModalHeader>"Delete product"</ModalHeader>
                <ModalBody>
                    <p>
                        {move || {
                            target
                                .get()
                                .map(|p| format!("Delete \"{}\"? This cannot be undone.", p.title))
                                .unwrap_or_default()
                        }}
                    </p>
                </ModalBody>
                <ModalFooter>
                    <Button variant=ButtonVariant::Ghost on_press=cancel>"Cancel"</Button>
                    <Button variant=ButtonVariant::Danger on_press=confirm_delete>
                        "Delete"
                    </Button>
                </ModalFooter>
            </Modal>
        </div>
    }
}
