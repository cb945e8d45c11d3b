//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **User Types** - Signed-in account info
//! - **Catalog Types** - Categories and products
//! - **Comment Types** - Product comments
//! - **Order Types** - Placed orders
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// User Types
// =============================================================================

/// The signed-in user, as returned by `/api/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Account id
    pub id: String,
    /// Login name (an email in practice)
    pub username: String,
    /// Admin flag; the server omits it for regular accounts
    #[serde(default)]
    pub is_admin: Option<bool>,
    /// Optional given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Optional family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Role names, e.g. `"seller"`
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Whether the account carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A product category.
///
/// The API sometimes returns categories without the `_count` relation;
/// the product count then defaults to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category id
    pub id: String,
    /// Display name
    pub name: String,
    /// Creation timestamp (ISO 8601), if the endpoint includes it
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp (ISO 8601), if the endpoint includes it
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Relation counts
    #[serde(rename = "_count", default)]
    pub count: CategoryCount,
}

/// Relation counts attached to a [`Category`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Number of products filed under the category
    #[serde(default)]
    pub products: usize,
}

/// Reference to a category by id, used inside product payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category id
    pub id: String,
}

/// A product in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: String,
    /// Display title
    pub title: String,
    /// Price actually charged
    pub discount_price: f64,
    /// List price, shown struck through when higher
    pub sale_price: f64,
    /// Description paragraphs
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: Vec<String>,
    /// Available colors
    #[serde(default, deserialize_with = "null_to_default")]
    pub colors: Vec<String>,
    /// Image URLs
    #[serde(default, deserialize_with = "null_to_default")]
    pub images: Vec<String>,
    /// Variant labels (e.g. storage sizes)
    #[serde(default, deserialize_with = "null_to_default")]
    pub variants: Vec<String>,
    /// Owning category
    pub category: CategoryRef,
}

// =============================================================================
// Comment Types
// =============================================================================

/// A comment left on a product page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Product the comment belongs to
    pub product_id: String,
    /// Author's account id
    pub user_id: String,
    /// Author's login name, when the endpoint joins it in
    #[serde(default)]
    pub username: Option<String>,
    /// Author's display name, when the endpoint joins it in
    #[serde(default)]
    pub user_display_name: Option<String>,
    /// Comment body
    pub content: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

// =============================================================================
// Order Types
// =============================================================================

/// A placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    pub id: String,
    /// Total charged
    pub price: f64,
    /// Payment mode chosen at checkout
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Whether payment has been captured
    #[serde(default)]
    pub payment_status: Option<bool>,
    /// Ordered products
    #[serde(default, deserialize_with = "null_to_default")]
    pub products: Vec<Product>,
}

/// Order status payload, `{ "paymentMode": ... }` on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    /// `"stripe"` or `"cash-on-delivery"`
    #[serde(default)]
    pub payment_mode: Option<String>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Deserialize an explicit JSON `null` into the type's default value.
///
/// Several backend fields are nullable JSON columns; the client treats
/// `null` and `[]` the same way.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format an ISO 8601 timestamp for display.
///
/// The backend emits naive datetimes like `2024-05-01T12:30:45.123456`;
/// anything unparseable is shown as-is.
pub fn format_timestamp(iso: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Transport failure before a response arrived.
    Network(String),
    /// Non-2xx response: status code and the server's detail message.
    Server(u16, String),
    /// Response arrived but could not be decoded.
    Decode(String),
    /// Client-side validation failed before any request was made.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server(status, msg) => write!(f, "Server error ({}): {}", status, msg),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tolerates_missing_count() {
        let json = r#"{"id": "c1", "name": "Phones"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Phones");
        assert_eq!(category.count.products, 0);
        assert!(category.created_at.is_none());
    }

    #[test]
    fn category_reads_count_relation() {
        let json = r#"{
            "id": "c1",
            "name": "Phones",
            "createdAt": "2024-05-01T10:00:00",
            "updatedAt": "2024-05-02T10:00:00",
            "_count": {"products": 3}
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.count.products, 3);
        assert_eq!(category.created_at.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn product_tolerates_null_collections() {
        let json = r#"{
            "id": "p1",
            "title": "Galaxy S24",
            "discountPrice": 799.0,
            "salePrice": 899.0,
            "description": null,
            "colors": ["black"],
            "images": null,
            "variants": null,
            "category": {"id": "c1"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "Galaxy S24");
        assert!(product.description.is_empty());
        assert_eq!(product.colors, vec!["black".to_string()]);
        assert_eq!(product.category.id, "c1");
    }

    #[test]
    fn user_info_defaults_optional_fields() {
        let json = r#"{"id": "u1", "username": "demo@shopmart.dev"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.roles.is_empty());
        assert!(user.is_admin.is_none());
        assert!(!user.has_role("seller"));
    }

    #[test]
    fn user_info_reads_roles() {
        let json = r#"{
            "id": "u1",
            "username": "amy@shopmart.dev",
            "isAdmin": false,
            "firstName": "Amy",
            "lastName": "Pond",
            "roles": ["seller"]
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.has_role("seller"));
        assert_eq!(user.first_name.as_deref(), Some("Amy"));
    }

    #[test]
    fn order_deserializes_with_products() {
        let json = r#"{
            "id": "o1",
            "price": 1598.0,
            "status": {"paymentMode": "cash-on-delivery"},
            "paymentStatus": false,
            "products": [{
                "id": "p1",
                "title": "Galaxy S24",
                "discountPrice": 799.0,
                "salePrice": 899.0,
                "description": [],
                "colors": [],
                "images": [],
                "variants": [],
                "category": {"id": "c1"}
            }]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.products.len(), 1);
        assert_eq!(
            order.status.unwrap().payment_mode.as_deref(),
            Some("cash-on-delivery")
        );
    }

    #[test]
    fn timestamps_format_for_display() {
        assert_eq!(
            format_timestamp("2024-05-01T12:30:45.123456"),
            "2024-05-01 12:30"
        );
        // Unparseable input passes through untouched
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
