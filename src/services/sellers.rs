//! Seller-scoped views of the catalog.

use url::form_urlencoded;

use super::api;
use crate::types::{AppResult, Product};

/// Products listed by the seller whose login is `email`.
///
/// Sellers manage only their own products; admins use the unfiltered
/// catalog instead.
pub async fn products_by_email(email: &str) -> AppResult<Vec<Product>> {
    let encoded: String = form_urlencoded::byte_serialize(email.as_bytes()).collect();
    api::get_json(&format!("/api/sellers/{encoded}/products")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_path_segments_are_percent_encoded() {
        let encoded: String = form_urlencoded::byte_serialize("amy+shop@example.com".as_bytes()).collect();
        assert_eq!(encoded, "amy%2Bshop%40example.com");
    }
}
