//! Create / edit form for a product.
//!
//! Mounted at `/admin/products/new` and `/admin/products/:id/edit`.
//! Description paragraphs, colors, variants and image URLs are free-form
//! string lists edited through [`ListEditor`].

use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions};

use crate::components::ui::{Button, ButtonVariant, Card, TextField};
use crate::components::LoaderButton;
use crate::services::{
    categories,
    products::{self, ProductInput},
};
use crate::store::{run_action, use_app_store};
use crate::types::{Category, CategoryRef};

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let params = use_params_map();
    let product_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let editing = product_id.get_untracked().is_some();

    let (title, set_title) = create_signal(String::new());
    let (discount_price, set_discount_price) = create_signal(String::new());
    let (sale_price, set_sale_price) = create_signal(String::new());
    let (category_id, set_category_id) = create_signal(String::new());
    let (description, set_description) = create_signal(Vec::<String>::new());
    let (colors, set_colors) = create_signal(Vec::<String>::new());
    let (variants, set_variants) = create_signal(Vec::<String>::new());
    let (images, set_images) = create_signal(Vec::<String>::new());
    let (category_options, set_category_options) = create_signal(Vec::<Category>::new());

    // The select needs the category list either way; failure only costs
    // the dropdown, so no overlay for this one.
    create_effect(move |_| {
        spawn_local(async move {
            match categories::list().await {
                Ok(list) => set_category_options.set(list),
                Err(err) => log::error!("❌ Failed to load categories: {err}"),
            }
        });
    });

    // Prefill when editing.
    create_effect(move |_| {
        let Some(id) = product_id.get() else {
            return;
        };
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchProduct",
                "Loading product...",
                products::get(&id),
                None,
                Some("Could not load the product."),
            )
            .await;
            if let Some(product) = fetched {
                set_title.set(product.title);
                set_discount_price.set(product.discount_price.to_string());
                set_sale_price.set(product.sale_price.to_string());
                set_category_id.set(product.category.id);
                set_description.set(product.description);
                set_colors.set(product.colors);
                set_variants.set(product.variants);
                set_images.set(product.images);
            }
        });
    });

    let save = Callback::new(move |_: ()| {
        let name = title.get_untracked().trim().to_string();
        let category = category_id.get_untracked();
        if name.is_empty() || category.is_empty() {
            store.set_toast("Name & Category required");
            return;
        }
        let input = ProductInput {
            title: name,
            discount_price: discount_price.get_untracked().trim().parse().unwrap_or(0.0),
            sale_price: sale_price.get_untracked().trim().parse().unwrap_or(0.0),
            description: description.get_untracked(),
            colors: colors.get_untracked(),
            images: images.get_untracked(),
            variants: variants.get_untracked(),
            category: CategoryRef { id: category },
        };
        let id = product_id.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let saved = match &id {
                Some(id) => {
                    run_action(
                        store,
                        "editProduct",
                        "Saving product...",
                        products::update(id, &input),
                        Some("Product updated"),
                        Some("Failed to update product"),
                    )
                    .await
                }
                None => {
                    run_action(
                        store,
                        "addProduct",
                        "Saving product...",
                        products::create(&input),
                        Some("Product created"),
                        Some("Create product failed"),
                    )
                    .await
                }
            };
            if saved.is_some() {
                navigate("/admin/products", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="admin-page">
            <Card
                title=if editing { "Edit Product" } else { "Add Product" }
                class="form-card"
            >
                <TextField
                    value=title
                    set_value=set_title
                    label="Title"
                    placeholder="e.g. Galaxy S24"
                />
                <div class="field-row">
                    <TextField
                        value=discount_price
                        set_value=set_discount_price
                        label="Price"
                        placeholder="799"
                    />
                    <TextField
                        value=sale_price
                        set_value=set_sale_price
                        label="List price"
                        placeholder="899"
                    />
                </div>
                <div class="field">
                    <label class="field-label">"Category"</label>
                    <select
                        class="field-input"
                        prop:value=move || category_id.get()
                        on:change=move |ev| set_category_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        <For
                            each=move || category_options.get()
                            key=|c| c.id.clone()
                            children=move |c| {
                                let this_id = c.id.clone();
                                view! {
                                    <option
                                        value=c.id.clone()
                                        selected=move || category_id.get() == this_id
                                    >
                                        {c.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <ListEditor
                    label="Description"
                    placeholder="Add a paragraph"
                    items=description
                    set_items=set_description
                />
                <ListEditor
                    label="Colors"
                    placeholder="e.g. black"
                    items=colors
                    set_items=set_colors
                />
                <ListEditor
                    label="Variants"
                    placeholder="e.g. 256 GB"
                    items=variants
                    set_items=set_variants
                />
                <ListEditor
                    label="Images"
                    placeholder="https://..."
                    items=images
                    set_items=set_images
                />

                <LoaderButton
                    loading_key=if editing { "editProduct" } else { "addProduct" }
                    label="Save"
                    loading_label="Saving..."
                    on_press=save
                />
            </Card>
        </div>
    }
}

/// One input, an add button, and removable chips for the values so far.
#[component]
fn ListEditor(
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    items: ReadSignal<Vec<String>>,
    set_items: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(String::new());

    let add = move |_| {
        let value = draft.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        // Values double as row keys, so drop duplicates.
        set_items.update(|list| {
            if !list.contains(&value) {
                list.push(value);
            }
        });
        set_draft.set(String::new());
    };

    view! {
        <div class="field">
            <span class="field-label">{label}</span>
            <div class="list-editor-row">
                <input
                    class="field-input"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Ghost on_press=add>"Add"</Button>
            </div>
            <div class="chip-row">
                <For
                    each=move || items.get()
                    key=|item| item.clone()
                    children=move |item| {
                        let remove_value = item.clone();
                        view! {
                            <span class="chip">
                                {item.clone()}
                                <button
                                    class="chip-remove"
                                    on:click=move |_| {
                                        set_items
                                            .update(|list| list.retain(|v| v != &remove_value))
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}
