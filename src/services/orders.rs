//! Checkout and order history under `/api/orders`.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::api;
use crate::config::PAYMENT_MODE;
use crate::types::{AppResult, Order};

#[derive(Serialize)]
struct OrderItemPayload<'a> {
    id: &'a str,
    quantity: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderStatusPayload<'a> {
    payment_mode: &'a str,
}

#[derive(Serialize)]
struct OrderPayload<'a> {
    items: Vec<OrderItemPayload<'a>>,
    status: OrderStatusPayload<'a>,
    price: f64,
}

/// Checkout acknowledgement. `client_secret` is only populated for card
/// payments; cash on delivery leaves it empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutAck {
    #[serde(default)]
    pub client_secret: String,
}

/// Place an order for `(product id, quantity)` pairs at the given total.
///
/// The buyer is taken from the bearer token; the backend re-prices the
/// order server-side and rejects it when stock has run out.
pub async fn place_order(items: &[(&str, u32)], price: f64) -> AppResult<CheckoutAck> {
    let payload = OrderPayload {
        items: items
            .iter()
            .map(|(id, quantity)| OrderItemPayload {
                id,
                quantity: *quantity,
            })
            .collect(),
        status: OrderStatusPayload {
            payment_mode: PAYMENT_MODE,
        },
        price,
    };
    api::post_json("/api/orders", &payload).await
}

/// Every order in the shop. Feeds the management dashboard.
pub async fn list_all() -> AppResult<Vec<Order>> {
    api::get_json("/api/orders").await
}

/// Orders placed by one user.
pub async fn list_for_user(user_id: &str) -> AppResult<Vec<Order>> {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("where[user][id]", user_id)
        .finish();
    api::get_json(&format!("/api/orders?{query}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_payload_serializes_the_preferred_shape() {
        let payload = OrderPayload {
            items: vec![
                OrderItemPayload {
                    id: "p1",
                    quantity: 2,
                },
                OrderItemPayload {
                    id: "p2",
                    quantity: 1,
                },
            ],
            status: OrderStatusPayload {
                payment_mode: "cash-on-delivery",
            },
            price: 45.5,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"items\":[{\"id\":\"p1\",\"quantity\":2}"));
        assert!(json.contains("\"status\":{\"paymentMode\":\"cash-on-delivery\"}"));
        assert!(json.contains("\"price\":45.5"));
    }

    #[test]
    fn checkout_ack_defaults_to_an_empty_secret() {
        let ack: CheckoutAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.client_secret, "");

        let ack: CheckoutAck = serde_json::from_str(r#"{"client_secret": "pi_123"}"#).unwrap();
        assert_eq!(ack.client_secret, "pi_123");
    }
}
