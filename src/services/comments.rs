//! Product comments.

use serde::Serialize;
use serde_json::Value;

use super::api;
use crate::types::{AppResult, Comment};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentPayload<'a> {
    product_id: &'a str,
    content: &'a str,
}

/// Comments for one product.
///
/// Prefers the public endpoint under `/api/products`; older deployments
/// only expose the comments router, so that is tried second.
pub async fn list_for_product(product_id: &str) -> AppResult<Vec<Comment>> {
    match api::get_json(&format!("/api/products/{product_id}/comments")).await {
        Ok(comments) => Ok(comments),
        Err(_) => api::get_json(&format!("/api/comments/product/{product_id}")).await,
    }
}

/// Post a comment as the signed-in user.
pub async fn add(product_id: &str, content: &str) -> AppResult<Comment> {
    api::post_json(
        "/api/comments",
        &CommentPayload {
            product_id,
            content,
        },
    )
    .await
}

/// Delete one's own comment (admins may delete any).
pub async fn delete(comment_id: &str) -> AppResult<()> {
    let _ack: Value = api::delete_json(&format!("/api/comments/{comment_id}")).await?;
    Ok(())
}
