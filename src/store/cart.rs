//! Shopping cart state, kept purely client-side until checkout.

use leptos::{create_rw_signal, RwSignal, SignalUpdate, SignalWith};

use crate::types::Product;

#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Clone, Copy)]
pub struct CartSlice {
    items: RwSignal<Vec<CartItem>>,
}

impl CartSlice {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    /// Add one unit of `product`; an item already in the cart gets its
    /// quantity bumped instead of a duplicate line.
    pub fn add(&self, product: Product) {
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.product.id == product.id) {
                item.quantity += 1;
            } else {
                items.push(CartItem {
                    product,
                    quantity: 1,
                });
            }
        });
    }

    pub fn remove(&self, product_id: &str) {
        self.items.update(|items| {
            items.retain(|i| i.product.id != product_id);
        });
    }

    /// Set an item's quantity directly; zero removes the line.
    pub fn set_quantity(&self, product_id: &str, quantity: u32) {
        self.items.update(|items| {
            if quantity == 0 {
                items.retain(|i| i.product.id != product_id);
            } else if let Some(item) = items.iter_mut().find(|i| i.product.id == product_id) {
                item.quantity = quantity;
            }
        });
    }

    pub fn clear(&self) {
        self.items.update(Vec::clear);
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.with(Vec::clone)
    }

    /// Total number of units across all lines; shown on the navbar badge.
    pub fn count(&self) -> u32 {
        self.items.with(|items| items.iter().map(|i| i.quantity).sum())
    }

    /// Order total, priced at the discounted unit price.
    pub fn subtotal(&self) -> f64 {
        self.items.with(|items| {
            items
                .iter()
                .map(|i| i.product.discount_price * f64::from(i.quantity))
                .sum()
        })
    }
}

impl Default for CartSlice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryRef, Product};
    use leptos::create_runtime;

    fn product(id: &str, discount_price: f64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {id}"),
            sale_price: discount_price + 10.0,
            discount_price,
            description: Vec::new(),
            colors: Vec::new(),
            images: Vec::new(),
            variants: Vec::new(),
            category: CategoryRef {
                id: "c1".to_string(),
            },
        }
    }

    #[test]
    fn adding_the_same_product_increments_quantity() {
        let runtime = create_runtime();
        let cart = CartSlice::new();

        cart.add(product("p1", 20.0));
        cart.add(product("p1", 20.0));
        cart.add(product("p2", 5.0));

        let items = cart.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart.count(), 3);

        runtime.dispose();
    }

    #[test]
    fn subtotal_uses_discounted_prices() {
        let runtime = create_runtime();
        let cart = CartSlice::new();

        cart.add(product("p1", 20.0));
        cart.add(product("p1", 20.0));
        cart.add(product("p2", 5.5));
        assert!((cart.subtotal() - 45.5).abs() < f64::EPSILON);

        runtime.dispose();
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let runtime = create_runtime();
        let cart = CartSlice::new();

        cart.add(product("p1", 20.0));
        cart.set_quantity("p1", 4);
        assert_eq!(cart.count(), 4);

        cart.set_quantity("p1", 0);
        assert!(cart.items().is_empty());

        runtime.dispose();
    }

    #[test]
    fn remove_and_clear() {
        let runtime = create_runtime();
        let cart = CartSlice::new();

        cart.add(product("p1", 20.0));
        cart.add(product("p2", 5.0));
        cart.remove("p1");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, "p2");

        cart.clear();
        assert_eq!(cart.count(), 0);

        runtime.dispose();
    }
}
