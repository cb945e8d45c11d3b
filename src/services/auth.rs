//! Account endpoints: login, signup, session restore, seller upgrade.
//!
//! The backend hands out a JWT in the login/signup response; it is kept
//! in localStorage and attached to later requests by the helpers in
//! [`api`](super::api). `me()` is the single source of truth for "who is
//! signed in": every call that changes the token re-fetches it.

use serde::{Deserialize, Serialize};

use super::api;
use crate::types::{AppResult, UserInfo};

/// What kind of account a signup creates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountType {
    Buyer,
    Seller,
}

impl AccountType {
    fn as_str(self) -> &'static str {
        match self {
            AccountType::Buyer => "buyer",
            AccountType::Seller => "seller",
        }
    }
}

/// Token response from `/api/login`, `/api/signup` and
/// `/api/upgrade-to-seller`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    #[serde(default)]
    pub access_token: Option<String>,
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupPayload<'a> {
    username: &'a str,
    password: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    account_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seller_display_name: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpgradePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
}

fn store_grant(grant: &TokenGrant) {
    if let Some(token) = &grant.access_token {
        api::set_stored_jwt(token);
    }
}

/// The signed-in user, or `Ok(None)` when no token is stored.
pub async fn me() -> AppResult<Option<UserInfo>> {
    if !api::has_stored_jwt() {
        return Ok(None);
    }
    let user = api::get_json::<UserInfo>("/api/me").await?;
    Ok(Some(user))
}

/// Exchange credentials for a token, then fetch the full profile.
pub async fn login(username: &str, password: &str) -> AppResult<Option<UserInfo>> {
    let grant: TokenGrant = api::post_json("/api/login", &Credentials { username, password }).await?;
    store_grant(&grant);
    me().await
}

/// Create an account and sign it in. Sellers may pick a display name
/// under which their products are listed.
pub async fn signup(
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    account_type: AccountType,
    seller_display_name: Option<&str>,
) -> AppResult<Option<UserInfo>> {
    let payload = SignupPayload {
        username,
        password,
        first_name,
        last_name,
        account_type: account_type.as_str(),
        seller_display_name: match account_type {
            AccountType::Seller => seller_display_name,
            AccountType::Buyer => None,
        },
    };
    let grant: TokenGrant = api::post_json("/api/signup", &payload).await?;
    store_grant(&grant);
    me().await
}

/// Grant the signed-in account the seller role and refresh the token.
pub async fn upgrade_to_seller(display_name: Option<&str>) -> AppResult<Option<UserInfo>> {
    let grant: TokenGrant =
        api::post_json("/api/upgrade-to-seller", &UpgradePayload { display_name }).await?;
    store_grant(&grant);
    me().await
}

/// Forget the stored token. Purely client-side.
pub fn logout() {
    api::clear_stored_jwt();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_grant_deserializes() {
        let json = r#"{
            "accessToken": "eyJhbGciOi...",
            "id": "u1",
            "username": "amy@shopmart.dev",
            "roles": ["buyer", "seller"]
        }"#;
        let grant: TokenGrant = serde_json::from_str(json).unwrap();
        assert_eq!(grant.access_token.as_deref(), Some("eyJhbGciOi..."));
        assert_eq!(grant.roles, vec!["buyer", "seller"]);
    }

    #[test]
    fn token_grant_tolerates_a_missing_token() {
        let json = r#"{"id": "u1", "username": "amy@shopmart.dev"}"#;
        let grant: TokenGrant = serde_json::from_str(json).unwrap();
        assert!(grant.access_token.is_none());
        assert!(grant.roles.is_empty());
    }

    #[test]
    fn signup_payload_mentions_seller_name_only_for_sellers() {
        let seller = SignupPayload {
            username: "amy@shopmart.dev",
            password: "hunter2",
            first_name: "Amy",
            last_name: "Pond",
            account_type: AccountType::Seller.as_str(),
            seller_display_name: Some("Amy's Electronics"),
        };
        let json = serde_json::to_string(&seller).unwrap();
        assert!(json.contains("\"sellerDisplayName\":\"Amy's Electronics\""));
        assert!(json.contains("\"accountType\":\"seller\""));

        let buyer = SignupPayload {
            username: "rory@shopmart.dev",
            password: "hunter2",
            first_name: "Rory",
            last_name: "Williams",
            account_type: AccountType::Buyer.as_str(),
            seller_display_name: None,
        };
        let json = serde_json::to_string(&buyer).unwrap();
        assert!(!json.contains("sellerDisplayName"));
    }
}
