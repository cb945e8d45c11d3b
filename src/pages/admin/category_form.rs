//! Create / edit form for a category.
//!
//! Mounted at both `/admin/categories/new` and
//! `/admin/categories/:id/edit`; the presence of the `id` param decides
//! the mode.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions};

use crate::components::ui::{Card, TextField};
use crate::components::LoaderButton;
use crate::services::categories;
use crate::store::{run_action, use_app_store};

#[component]
pub fn CategoryFormPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let params = use_params_map();
    let category_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let editing = category_id.get_untracked().is_some();
    let (name, set_name) = create_signal(String::new());

    // Prefill when editing.
    create_effect(move |_| {
        let Some(id) = category_id.get() else {
            return;
        };
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchCategory",
                "Loading category...",
                categories::get(&id),
                None,
                Some("Could not load the category."),
            )
            .await;
            if let Some(category) = fetched {
                set_name.set(category.name);
            }
        });
    });

    let save = Callback::new(move |_: ()| {
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            store.set_toast("Category name is required");
            return;
        }
        let id = category_id.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let saved = match &id {
                Some(id) => {
                    run_action(
                        store,
                        "editCategory",
                        "Saving category...",
                        categories::update(id, &trimmed),
                        Some("Category updated"),
                        Some("Failed to update category"),
                    )
                    .await
                }
                None => {
                    run_action(
                        store,
                        "addCategory",
                        "Saving category...",
                        categories::create(&trimmed),
                        Some("Category created"),
                        Some("Failed to create category"),
                    )
                    .await
                }
            };
            if saved.is_some() {
                navigate("/admin/categories", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="admin-page">
            <Card
                title=if editing { "Edit Category" } else { "Add Category" }
                class="form-card"
            >
                <TextField
                    value=name
                    set_value=set_name
                    label="Name"
                    placeholder="e.g. Electronics"
                />
                <LoaderButton
                    loading_key=if editing { "editCategory" } else { "addCategory" }
                    label="Save"
                    loading_label="Saving..."
                    on_press=save
                />
            </Card>
        </div>
    }
}
