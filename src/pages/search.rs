//! Search results, driven by the `query` / `category` URL parameters.

use leptos::*;
use leptos_router::use_query_map;

use crate::components::ProductCard;
use crate::services::products::{self, ProductFilter};
use crate::store::{run_action, use_app_store};
use crate::types::Product;

#[component]
pub fn SearchPage() -> impl IntoView {
    let store = use_app_store();
    let query_map = use_query_map();
    let (results, set_results) = create_signal(Vec::<Product>::new());
    let (searched, set_searched) = create_signal(false);

    // Refetch whenever the URL parameters change; the in-flight check in
    // run_action drops refetches that arrive while one is running.
    create_effect(move |_| {
        let filter = query_map.with(|q| ProductFilter {
            title_contains: q.get("query").cloned().filter(|s| !s.is_empty()),
            category_id: q.get("category").cloned().filter(|s| !s.is_empty()),
        });
        spawn_local(async move {
            let fetched = run_action(
                store,
                "searchProducts",
                "Searching products...",
                products::list(&filter),
                None,
                Some("Search failed."),
            )
            .await;
            if let Some(products) = fetched {
                set_results.set(products);
            }
            set_searched.set(true);
        });
    });

    let heading = move || {
        query_map.with(|q| match q.get("query") {
            Some(term) if !term.is_empty() => format!("Results for \"{term}\""),
            _ => "All products".to_string(),
        })
    };

    view! {
        <section class="page search-page">
            <h2 class="page-title">{heading}</h2>
            <div class="product-grid">
                <For
                    each=move || results.get()
                    key=|product| product.id.clone()
                    children=|product| view! { <ProductCard product=product/> }
                />
            </div>
            <Show when=move || searched.get() && results.get().is_empty() fallback=|| view! { }>
                <p class="empty-note">"Nothing matched your search."</p>
            </Show>
        </section>
    }
}
