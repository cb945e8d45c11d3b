//! Shopping cart: line items, quantity controls, checkout.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card};
use crate::components::LoaderButton;
use crate::services::orders;
use crate::store::{run_action, use_app_store};

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    // `Callback` is `Copy`, so the handler can live inside the
    // re-renderable non-empty branch below.
    let on_checkout = Callback::new(move |_: ()| {
        if store.auth.user().is_none() {
            store.set_toast("Please login to checkout.");
            navigate("/login", NavigateOptions::default());
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            let lines: Vec<(String, u32)> = store
                .cart
                .items()
                .into_iter()
                .map(|item| (item.product.id, item.quantity))
                .collect();
            let total = store.cart.subtotal();
            let refs: Vec<(&str, u32)> =
                lines.iter().map(|(id, qty)| (id.as_str(), *qty)).collect();
            let placed = run_action(
                store,
                "placeOrder",
                "Placing your order...",
                orders::place_order(&refs, total),
                Some("Order placed successfully!"),
                Some("Could not place your order."),
            )
            .await;
            if placed.is_some() {
                store.cart.clear();
                navigate("/orders", NavigateOptions::default());
            }
        });
    });

    view! {
        <section class="page cart-page">
            <h2 class="page-title">"Your Cart"</h2>
            <Show
                when=move || !store.cart.items().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p class="empty-note">"Your cart is empty."</p>
                            <A href="/" class="btn btn-solid btn-md">"Browse products"</A>
                        </div>
                    }
                }
            >
                <div class="cart-layout">
                    <div class="cart-lines">
                        <For
                            each=move || store.cart.items()
                            // Quantity is part of the key so a line re-renders
                            // when its count changes.
                            key=|item| format!("{}x{}", item.product.id, item.quantity)
                            children=move |item| {
                                let id_dec = item.product.id.clone();
                                let id_inc = item.product.id.clone();
                                let id_rm = item.product.id.clone();
                                let qty = item.quantity;
                                let unit = item.product.discount_price;
                                let line_total = unit * f64::from(qty);
                                let href = format!("/product/{}", item.product.id);
                                let image = item.product.images.first().cloned();
                                view! {
                                    <div class="cart-line">
                                        {image.map(|src| view! {
                                            <img class="cart-thumb" src=src alt=""/>
                                        })}
                                        <A href=href class="cart-line-title">
                                            {item.product.title.clone()}
                                        </A>
                                        <span class="price">{format!("${unit:.2}")}</span>
                                        <div class="qty-controls">
                                            <button
                                                class="qty-btn"
                                                on:click=move |_| {
                                                    store
                                                        .cart
                                                        .set_quantity(&id_dec, qty.saturating_sub(1))
                                                }
                                            >
                                                "−"
                                            </button>
                                            <span class="qty">{qty}</span>
                                            <button
                                                class="qty-btn"
                                                on:click=move |_| {
                                                    store.cart.set_quantity(&id_inc, qty + 1)
                                                }
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        <span class="price cart-line-total">
                                            {format!("${line_total:.2}")}
                                        </span>
                                        <Button
                                            size=ButtonSize::Sm
                                            variant=ButtonVariant::Ghost
                                            on_press=move |_| store.cart.remove(&id_rm)
                                        >
                                            "Remove"
                                        </Button>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <Card title="Order Summary" class="cart-summary">
                        <div class="summary-row">
                            <span>"Items"</span>
                            <span>{move || store.cart.count()}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Subtotal"</span>
                            <span class="price">
                                {move || format!("${:.2}", store.cart.subtotal())}
                            </span>
                        </div>
                        <div class="summary-row summary-muted">
                            <span>"Payment"</span>
                            <span>"Cash on delivery"</span>
                        </div>
                        <LoaderButton
                            loading_key="placeOrder"
                            label="Checkout"
                            loading_label="Placing order..."
                            on_press=on_checkout
                            class="btn-block"
                        />
                    </Card>
                </div>
            </Show>
        </section>
    }
}
