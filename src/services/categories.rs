//! CRUD for product categories under `/api/categories`.

use serde::Serialize;
use serde_json::Value;

use super::api;
use crate::types::{AppResult, Category};

#[derive(Serialize)]
struct CategoryPayload<'a> {
    name: &'a str,
}

pub async fn list() -> AppResult<Vec<Category>> {
    api::get_json("/api/categories").await
}

pub async fn get(id: &str) -> AppResult<Category> {
    api::get_json(&format!("/api/categories/{id}")).await
}

pub async fn create(name: &str) -> AppResult<Category> {
    api::post_json("/api/categories", &CategoryPayload { name }).await
}

pub async fn update(id: &str, name: &str) -> AppResult<Category> {
    api::patch_json(&format!("/api/categories/{id}"), &CategoryPayload { name }).await
}

/// Delete a category. Callers check the product count first; deleting a
/// category that still has products would orphan them.
pub async fn delete(id: &str) -> AppResult<()> {
    let _ack: Value = api::delete_json(&format!("/api/categories/{id}")).await?;
    Ok(())
}
