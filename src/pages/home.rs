//! Storefront landing page: category chips and the full product grid.

use leptos::*;
use leptos_router::A;
use url::form_urlencoded;

use crate::components::ProductCard;
use crate::services::categories;
use crate::services::products::{self, ProductFilter};
use crate::store::{run_action, use_app_store};
use crate::types::{Category, Product};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let (items, set_items) = create_signal(Vec::<Product>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (chips, set_chips) = create_signal(Vec::<Category>::new());

    spawn_local(async move {
        let fetched = run_action(
            store,
            "fetchProducts",
            "Loading products...",
            products::list(&ProductFilter::default()),
            None,
            Some("Could not load products."),
        )
        .await;
        if let Some(products) = fetched {
            set_items.set(products);
        }
        set_loaded.set(true);
    });

    // Chips are decoration, not critical path: no overlay, no toast.
    spawn_local(async move {
        match categories::list().await {
            Ok(all) => set_chips.set(all),
            Err(err) => log::error!("❌ Failed to load categories: {err}"),
        }
    });

    view! {
        <section class="page home-page">
            <div class="chip-row">
                <For
                    each=move || chips.get()
                    key=|category| category.id.clone()
                    children=|category| {
                        let href = format!(
                            "/search?{}",
                            form_urlencoded::Serializer::new(String::new())
                                .append_pair("category", &category.id)
                                .finish()
                        );
                        view! { <A href=href class="chip chip-link">{category.name.clone()}</A> }
                    }
                />
            </div>

            <div class="product-grid">
                <For
                    each=move || items.get()
                    key=|product| product.id.clone()
                    children=|product| view! { <ProductCard product=product/> }
                />
            </div>

            <Show when=move || loaded.get() && items.get().is_empty() fallback=|| view! { }>
                <p class="empty-note">"No products in the shop yet."</p>
            </Show>
        </section>
    }
}
