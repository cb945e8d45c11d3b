//! Product detail: gallery, options, add to cart, and comments.

use leptos::*;
use leptos_router::use_params_map;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, Chip, TextField};
use crate::services::{comments, products};
use crate::store::{run_action, use_app_store};
use crate::types::{format_timestamp, Comment, Product};

#[component]
pub fn ProductPage() -> impl IntoView {
    let store = use_app_store();
    let params = use_params_map();
    let product_id = create_memo(move |_| {
        params.with(|p| p.get("id").cloned()).unwrap_or_default()
    });
    let (product, set_product) = create_signal(None::<Product>);

    create_effect(move |_| {
        let id = product_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchProduct",
                "Loading product...",
                products::get(&id),
                None,
                Some("Could not load this product."),
            )
            .await;
            if let Some(found) = fetched {
                set_product.set(Some(found));
            }
        });
    });

    view! {
        <section class="page product-page">
            {move || product.get().map(|found| view! { <ProductDetail product=found/> })}
            <Reviews product_id=Signal::from(product_id)/>
        </section>
    }
}

/// The detail card proper. Re-created whenever a different product
/// loads, which also resets the selected gallery image.
#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let store = use_app_store();
    let images: Vec<String> = product.images.iter().filter(|i| !i.is_empty()).cloned().collect();
    let (selected, set_selected) = create_signal(images.first().cloned());
    let title = product.title.clone();
    let main_alt = product.title.clone();
    let discount_price = product.discount_price;
    let sale_price = product.sale_price;
    let description = product.description.clone();
    let colors = product.colors.clone();
    let variants = product.variants.clone();

    let add_to_cart = move |_| {
        store.cart.add(product.clone());
        store.set_toast("Added to cart");
    };

    view! {
        <div class="product-detail">
            <div class="gallery">
                <ul class="gallery-thumbs">
                    <For
                        each=move || images.clone()
                        key=|src| src.clone()
                        children=move |src| {
                            let active_src = src.clone();
                            let pick = src.clone();
                            view! {
                                <li>
                                    <button
                                        class="thumb"
                                        class:active=move || {
                                            selected.get().as_deref() == Some(active_src.as_str())
                                        }
                                        on:click=move |_| set_selected.set(Some(pick.clone()))
                                    >
                                        <img src=src alt="thumbnail"/>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <div class="gallery-main">
                    {move || match selected.get() {
                        Some(src) => {
                            view! { <img class="gallery-img" src=src alt=main_alt.clone()/> }
                                .into_view()
                        }
                        None => {
                            view! { <div class="gallery-img product-img-empty">"No image"</div> }
                                .into_view()
                        }
                    }}
                </div>
            </div>

            <div class="product-facts">
                <h2 class="page-title">{title}</h2>
                <div class="product-prices">
                    <span class="price price-lg">{format!("${discount_price:.2}")}</span>
                    <Show when=move || { sale_price > discount_price } fallback=|| view! { }>
                        <span class="price-struck">{format!("${sale_price:.2}")}</span>
                    </Show>
                </div>

                {(!description.is_empty()).then(|| view! {
                    <div class="product-description">
                        {description
                            .iter()
                            .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                            .collect_view()}
                    </div>
                })}

                {(!colors.is_empty()).then(|| view! {
                    <div class="option-row">
                        <span class="option-label">"Colors:"</span>
                        {colors
                            .iter()
                            .map(|color| {
                                let color = color.clone();
                                view! { <Chip>{color}</Chip> }
                            })
                            .collect_view()}
                    </div>
                })}

                {(!variants.is_empty()).then(|| view! {
                    <div class="option-row">
                        <span class="option-label">"Variants:"</span>
                        {variants
                            .iter()
                            .map(|variant| {
                                let variant = variant.clone();
                                view! { <Chip>{variant}</Chip> }
                            })
                            .collect_view()}
                    </div>
                })}

                <Button size=ButtonSize::Lg on_press=add_to_cart>"Add to Cart"</Button>
            </div>
        </div>
    }
}

/// Comment list and composer under the product.
///
/// Posting uses a local busy flag rather than the shared loading
/// registry: only this button should spin, not the page overlay.
#[component]
fn Reviews(#[prop(into)] product_id: Signal<String>) -> impl IntoView {
    let store = use_app_store();
    let (comment_rows, set_comment_rows) = create_signal(Vec::<Comment>::new());
    let (draft, set_draft) = create_signal(String::new());
    let (posting, set_posting) = create_signal(false);

    let refresh = move |id: String| {
        spawn_local(async move {
            match comments::list_for_product(&id).await {
                Ok(rows) => set_comment_rows.set(rows),
                Err(err) => log::error!("❌ Failed to load comments: {err}"),
            }
        });
    };

    create_effect(move |_| {
        let id = product_id.get();
        if !id.is_empty() {
            refresh(id);
        }
    });

    let on_post = move |_| {
        if store.auth.user().is_none() {
            store.set_toast("Please login to comment.");
            return;
        }
        let content = draft.get_untracked().trim().to_string();
        if content.is_empty() || posting.get_untracked() {
            return;
        }
        let id = product_id.get_untracked();
        set_posting.set(true);
        spawn_local(async move {
            match comments::add(&id, &content).await {
                Ok(_) => {
                    set_draft.set(String::new());
                    refresh(id);
                }
                Err(err) => {
                    log::error!("❌ Failed to post comment: {err}");
                    store.set_toast("Could not post your comment.");
                }
            }
            set_posting.set(false);
        });
    };

    let on_delete = move |comment_id: String| {
        let id = product_id.get_untracked();
        spawn_local(async move {
            match comments::delete(&comment_id).await {
                Ok(()) => refresh(id),
                Err(err) => {
                    log::error!("❌ Failed to delete comment: {err}");
                    store.set_toast("Failed to delete comment");
                }
            }
        });
    };

    view! {
        <Card title="Comments">
            <div class="comment-composer">
                <TextField value=draft set_value=set_draft placeholder="Write a comment"/>
                <Button loading=posting on_press=on_post>"Post"</Button>
            </div>
            <div class="comment-list">
                <For
                    each=move || comment_rows.get()
                    key=|comment| comment.id.clone()
                    children=move |comment| {
                        let author = comment
                            .user_display_name
                            .clone()
                            .or_else(|| comment.username.clone());
                        let owner_id = comment.user_id.clone();
                        let can_delete = move || {
                            store.auth.user().is_some_and(|u| {
                                u.is_admin.unwrap_or(false) || u.id == owner_id
                            })
                        };
                        let comment_id = comment.id.clone();
                        view! {
                            <div class="comment">
                                <div class="comment-meta">
                                    {author.map(|name| view! { <span class="comment-author">{name}</span> })}
                                    <span class="comment-date">
                                        {format_timestamp(&comment.created_at)}
                                    </span>
                                </div>
                                <div class="comment-body">{comment.content.clone()}</div>
                                <Show when=can_delete fallback=|| view! { }>
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=ButtonVariant::Danger
                                        on_press={
                                            let comment_id = comment_id.clone();
                                            move |_| on_delete(comment_id.clone())
                                        }
                                    >
                                        "Delete"
                                    </Button>
                                </Show>
                            </div>
                        }
                    }
                />
                <Show when=move || comment_rows.get().is_empty() fallback=|| view! { }>
                    <p class="empty-note">"No comments yet."</p>
                </Show>
            </div>
        </Card>
    }
}
