//! Category listing with filter, paging, and guarded delete.

use leptos::*;
use leptos_router::A;

use crate::components::ui::{
    use_disclosure, Button, ButtonSize, ButtonVariant, Modal, ModalBody, ModalFooter,
    ModalHeader, Pagination, TextField,
};
use crate::config::ROWS_PER_PAGE;
use crate::services::categories;
use crate::store::{run_action, use_app_store};
use crate::types::Category;

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let store = use_app_store();
    let (rows, set_rows) = create_signal(Vec::<Category>::new());
    let (filter, set_filter) = create_signal(String::new());
    let (page, set_page) = create_signal(1usize);
    let confirm = use_disclosure();
    let (target, set_target) = create_signal(None::<Category>);

    create_effect(move |_| {
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchCategories",
                "Loading categories...",
                categories::list(),
                None,
                Some("Could not load categories."),
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
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });
    let total_pages = create_memo(move |_| filtered.get().len().div_ceil(ROWS_PER_PAGE).max(1));
    let page_rows = create_memo(move |_| {
        // Clamp rather than reset so narrowing the filter never points
        // past the last page.
        let current = page.get().clamp(1, total_pages.get());
        filtered
            .get()
            .into_iter()
            .skip((current - 1) * ROWS_PER_PAGE)
            .take(ROWS_PER_PAGE)
            .collect::<Vec<_>>()
    });

    // A category that still has products cannot be removed; the modal
    // only ever opens for empty ones.
    let ask_delete = move |category: Category| {
        if category.count.products > 0 {
            store.set_toast("Cannot delete category with products.");
            return;
        }
        set_target.set(Some(category));
        confirm.open();
    };

    let cancel = Callback::new(move |_: ()| confirm.close());

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(category) = target.get_untracked() else {
            return;
        };
        confirm.close();
        spawn_local(async move {
            let deleted = run_action(
                store,
                "deleteCategory",
                "Deleting category...",
                categories::delete(&category.id),
                Some("Category deleted successfully."),
                Some("Unable to delete category."),
            )
            .await;
            if deleted.is_some() {
                set_rows.update(|list| list.retain(|c| c.id != category.id));
            }
        });
    });

    view! {
        <div class="admin-page">
            <div class="page-toolbar">
                <h2 class="page-title">"Categories"</h2>
                <div class="toolbar-actions">
                    <TextField value=filter set_value=set_filter placeholder="Filter by name"/>
                    <A href="/admin/categories/new" class="btn btn-solid btn-md">
                        "Add Category"
                    </A>
                </div>
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! { <p class="empty-note">"No categories found."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Products"</th>
                            <th class="cell-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page_rows.get()
                            key=|c| c.id.clone()
                            children=move |category| {
                                let edit_href =
                                    format!("/admin/categories/{}/edit", category.id);
                                let row = category.clone();
                                view! {
                                    <tr>
                                        <td>{category.name.clone()}</td>
                                        <td>{category.count.products}</td>
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
                <ModalHeader>"Delete category"</ModalHeader>
                <ModalBody>
                    <p>
                        {move || {
                            target
                                .get()
                                .map(|c| format!("Delete \"{}\"? This cannot be undone.", c.name))
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
