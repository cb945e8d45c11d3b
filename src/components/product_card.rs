//! Product tile used by the home and search grids.

use leptos::*;
use leptos_router::A;

use crate::components::ui::Button;
use crate::store::use_app_store;
use crate::types::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_app_store();
    let title = product.title.clone();
    let image_alt = product.title.clone();
    let image = product.images.first().cloned();
    let discount_price = product.discount_price;
    let sale_price = product.sale_price;
    let detail_href = format!("/product/{}", product.id);

    let add_to_cart = move |_| {
        store.cart.add(product.clone());
        store.set_toast("Added to cart");
    };

    view! {
        <div class="product-card">
            <A href=detail_href class="product-media">
                {match image {
                    Some(src) => view! { <img class="product-img" src=src alt=image_alt.clone()/> }.into_view(),
                    None => view! { <div class="product-img product-img-empty">"No image"</div> }.into_view(),
                }}
            </A>
            <div class="product-info">
                <h3 class="product-title">{title}</h3>
                <div class="product-prices">
                    <span class="price">{format!("${discount_price:.2}")}</span>
                    <Show when=move || { sale_price > discount_price } fallback=|| view! { }>
                        <span class="price-struck">{format!("${sale_price:.2}")}</span>
                    </Show>
                </div>
                <Button on_press=add_to_cart>"Add to Cart"</Button>
            </div>
        </div>
    }
}
