//! Store-wide numbers, quick actions, and recent activity.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::components::ui::{Button, ButtonVariant, Card};
use crate::services::dashboard::{self, DashboardData};
use crate::store::{run_action, use_app_store};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let (data, set_data) = create_signal(DashboardData::default());

    create_effect(move |_| {
        spawn_local(async move {
            let fetched = run_action(
                store,
                "fetchDashboard",
                "Loading dashboard...",
                dashboard::fetch(),
                None,
                Some("Could not load the dashboard."),
            )
            .await;
            if let Some(snapshot) = fetched {
                set_data.set(snapshot);
            }
        });
    });

    let nav_add_category = navigate.clone();
    let nav_all_categories = navigate.clone();
    let nav_add_product = navigate.clone();
    let nav_all_products = navigate;

    view! {
        <div class="admin-page dashboard-page">
            <h2 class="page-title">"Dashboard"</h2>

            <div class="stat-grid">
                <Card class="stat-card">
                    <span class="stat-value">{move || data.get().stats.categories}</span>
                    <span class="stat-label">"Categories"</span>
                </Card>
                <Card class="stat-card">
                    <span class="stat-value">{move || data.get().stats.products}</span>
                    <span class="stat-label">"Products"</span>
                </Card>
                <Card class="stat-card">
                    <span class="stat-value">{move || data.get().stats.orders}</span>
                    <span class="stat-label">"Orders"</span>
                </Card>
                <Card class="stat-card">
                    <span class="stat-value">
                        {move || format!("${:.2}", data.get().stats.revenue)}
                    </span>
                    <span class="stat-label">"Revenue"</span>
                </Card>
            </div>

            <Card title="Quick Actions">
                <div class="action-row">
                    <Button on_press=move |_| {
                        nav_add_category("/admin/categories/new", NavigateOptions::default())
                    }>"Add Category"</Button>
                    <Button variant=ButtonVariant::Ghost on_press=move |_| {
                        nav_all_categories("/admin/categories", NavigateOptions::default())
                    }>"All Categories"</Button>
                    <Button on_press=move |_| {
                        nav_add_product("/admin/products/new", NavigateOptions::default())
                    }>"Add Product"</Button>
                    <Button variant=ButtonVariant::Ghost on_press=move |_| {
                        nav_all_products("/admin/products", NavigateOptions::default())
                    }>"All Products"</Button>
                </div>
            </Card>

            <div class="dashboard-columns">
                <Card title="Recent Orders">
                    <Show
                        when=move || !data.get().recent_orders.is_empty()
                        fallback=|| view! { <p class="empty-note">"No orders yet."</p> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th class="cell-right">"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || data.get().recent_orders
                                    key=|order| order.id.clone()
                                    children=|order| {
                                        view! {
                                            <tr>
                                                <td class="cell-mono">{order.id.clone()}</td>
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
                </Card>

                <Card title="Top Categories">
                    <Show
                        when=move || !data.get().top_categories.is_empty()
                        fallback=|| view! { <p class="empty-note">"No sales recorded yet."</p> }
                    >
                        <ul class="rank-list">
                            <For
                                each=move || data.get().top_categories
                                key=|entry| entry.id.clone()
                                children=|entry| {
                                    view! {
                                        <li class="rank-row">
                                            <span>{entry.name.clone()}</span>
                                            <span class="price">
                                                {format!("${:.2}", entry.revenue)}
                                            </span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Card>
            </div>
        </div>
    }
}
