//! Management dashboard data.
//!
//! The backend has no aggregation endpoint, so the dashboard pulls the
//! raw collections and summarizes them here. [`aggregate`] is pure; the
//! async part is just three fetches.

use std::collections::HashMap;

use super::{categories, orders, products};
use crate::config::{RECENT_ORDERS_LIMIT, TOP_CATEGORIES_LIMIT};
use crate::types::{AppResult, Category, Order, Product};

/// Headline counters shown across the top of the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub categories: usize,
    pub products: usize,
    pub orders: usize,
    pub revenue: f64,
}

/// A category ranked by the revenue of its sold products.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopCategory {
    pub id: String,
    pub name: String,
    pub revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    /// Newest orders first, capped at [`RECENT_ORDERS_LIMIT`].
    pub recent_orders: Vec<Order>,
    /// Highest-revenue categories first, capped at [`TOP_CATEGORIES_LIMIT`].
    pub top_categories: Vec<TopCategory>,
}

/// Summarize the shop. Orders arrive in insertion order, so "recent"
/// means the tail of the list. Category revenue counts each ordered
/// product once at its discounted price; products whose category no
/// longer exists are left out of the ranking.
pub fn aggregate(categories: &[Category], products: &[Product], orders: &[Order]) -> DashboardData {
    let stats = DashboardStats {
        categories: categories.len(),
        products: products.len(),
        orders: orders.len(),
        revenue: orders.iter().map(|o| o.price).sum(),
    };

    let recent_orders: Vec<Order> = orders
        .iter()
        .rev()
        .take(RECENT_ORDERS_LIMIT)
        .cloned()
        .collect();

    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let mut revenue_by_category: HashMap<&str, f64> = HashMap::new();
    for order in orders {
        for product in &order.products {
            *revenue_by_category
                .entry(product.category.id.as_str())
                .or_default() += product.discount_price;
        }
    }

    let mut top_categories: Vec<TopCategory> = revenue_by_category
        .into_iter()
        .filter_map(|(id, revenue)| {
            names.get(id).map(|name| TopCategory {
                id: id.to_string(),
                name: (*name).to_string(),
                revenue,
            })
        })
        .collect();
    top_categories.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then(a.name.cmp(&b.name)));
    top_categories.truncate(TOP_CATEGORIES_LIMIT);

    DashboardData {
        stats,
        recent_orders,
        top_categories,
    }
}

/// Fetch everything the dashboard needs in one call.
pub async fn fetch() -> AppResult<DashboardData> {
    let categories = categories::list().await?;
    let products = products::list(&products::ProductFilter::default()).await?;
    let orders = orders::list_all().await?;
    Ok(aggregate(&categories, &products, &orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryRef;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
            updated_at: None,
            count: Default::default(),
        }
    }

    fn product(id: &str, category_id: &str, discount_price: f64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {id}"),
            discount_price,
            sale_price: discount_price + 10.0,
            description: Vec::new(),
            colors: Vec::new(),
            images: Vec::new(),
            variants: Vec::new(),
            category: CategoryRef {
                id: category_id.to_string(),
            },
        }
    }

    fn order(id: &str, price: f64, products: Vec<Product>) -> Order {
        Order {
            id: id.to_string(),
            price,
            status: None,
            payment_status: None,
            products,
        }
    }

    #[test]
    fn counts_and_revenue_add_up() {
        let categories = vec![category("c1", "Phones"), category("c2", "TVs")];
        let products = vec![product("p1", "c1", 100.0), product("p2", "c2", 50.0)];
        let orders = vec![
            order("o1", 100.0, vec![product("p1", "c1", 100.0)]),
            order("o2", 150.0, vec![
                product("p1", "c1", 100.0),
                product("p2", "c2", 50.0),
            ]),
        ];

        let data = aggregate(&categories, &products, &orders);
        assert_eq!(data.stats.categories, 2);
        assert_eq!(data.stats.products, 2);
        assert_eq!(data.stats.orders, 2);
        assert!((data.stats.revenue - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recent_orders_are_newest_first_and_capped() {
        let orders: Vec<Order> = (0..8)
            .map(|i| order(&format!("o{i}"), 10.0, Vec::new()))
            .collect();

        let data = aggregate(&[], &[], &orders);
        assert_eq!(data.recent_orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(data.recent_orders[0].id, "o7");
        assert_eq!(data.recent_orders[1].id, "o6");
    }

    #[test]
    fn top_categories_rank_by_revenue() {
        let categories = vec![category("c1", "Phones"), category("c2", "TVs")];
        let orders = vec![
            order("o1", 0.0, vec![product("p1", "c1", 100.0)]),
            order("o2", 0.0, vec![
                product("p2", "c2", 300.0),
                product("p1", "c1", 100.0),
            ]),
        ];

        let data = aggregate(&categories, &[], &orders);
        assert_eq!(data.top_categories.len(), 2);
        assert_eq!(data.top_categories[0].name, "TVs");
        assert!((data.top_categories[0].revenue - 300.0).abs() < f64::EPSILON);
        assert_eq!(data.top_categories[1].name, "Phones");
    }

    #[test]
    fn unknown_categories_are_left_out() {
        let categories = vec![category("c1", "Phones")];
        let orders = vec![order("o1", 0.0, vec![
            product("p1", "c1", 100.0),
            product("p2", "ghost", 999.0),
        ])];

        let data = aggregate(&categories, &[], &orders);
        assert_eq!(data.top_categories.len(), 1);
        assert_eq!(data.top_categories[0].id, "c1");
    }

    #[test]
    fn an_empty_shop_aggregates_to_zeroes() {
        let data = aggregate(&[], &[], &[]);
        assert_eq!(data.stats, DashboardStats::default());
        assert!(data.recent_orders.is_empty());
        assert!(data.top_categories.is_empty());
    }
}
