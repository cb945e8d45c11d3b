//! Order history for the signed-in account.

use leptos::*;
use leptos_router::A;

use crate::components::ui::Chip;
use crate::services::orders;
use crate::store::{run_action, use_app_store};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = use_app_store();
    let (loaded, set_loaded) = create_signal(false);

    // Tracks the auth slice so the list also loads when a stored
    // session finishes restoring after first paint.
    create_effect(move |_| {
        let Some(user) = store.auth.user() else {
            return;
        };
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchOrders",
                "Loading your orders...",
                orders::list_for_user(&user.id),
                None,
                Some("Could not load your orders."),
            )
            .await;
            if let Some(rows) = fetched {
                store.orders.set_orders(rows);
            }
            set_loaded.set(true);
        });
    });

    view! {
        <section class="page orders-page">
            <h2 class="page-title">"My Orders"</h2>
            <Show
                when=move || store.auth.is_signed_in()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p class="empty-note">"Sign in to see your orders."</p>
                            <A href="/login" class="btn btn-solid btn-md">"Sign in"</A>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !store.orders.orders().is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || loaded.get() fallback=|| view! { }>
                                <div class="empty-state">
                                    <p class="empty-note">"No orders yet."</p>
                                    <A href="/" class="btn btn-solid btn-md">
                                        "Browse products"
                                    </A>
                                </div>
                            </Show>
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Items"</th>
                                <th>"Payment mode"</th>
                                <th>"Payment"</th>
                                <th class="cell-right">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.orders.orders()
                                key=|order| order.id.clone()
                                children=move |order| {
                                    let mode = order
                                        .status
                                        .as_ref()
                                        .and_then(|s| s.payment_mode.clone())
                                        .unwrap_or_else(|| "—".to_string());
                                    let paid = order.payment_status.unwrap_or(false);
                                    view! {
                                        <tr>
                                            <td class="cell-mono">{order.id.clone()}</td>
                                            <td>{order.products.len()}</td>
                                            <td>{mode}</td>
                                            <td>
                                                {if paid {
                                                    view! { <Chip class="chip-success">"Paid"</Chip> }
                                                        .into_view()
                                                } else {
                                                    view! { <Chip class="chip-muted">"Pending"</Chip> }
                                                        .into_view()
                                                }}
                                            </td>
                                            <td class="cell-right price">
                                                {format!("${:.2}", order.price)}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
