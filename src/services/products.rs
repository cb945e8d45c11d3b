//! Catalog endpoints under `/api/products`.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use super::api;
use crate::types::{AppResult, CategoryRef, Product};

/// Server-side filters for the product list.
///
/// The backend takes qs-style nested keys (`where[title][contains]`,
/// `where[category][id]`); an empty filter fetches everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub title_contains: Option<String>,
    pub category_id: Option<String>,
}

impl ProductFilter {
    pub fn titled(query: &str) -> Self {
        Self {
            title_contains: Some(query.to_string()),
            ..Self::default()
        }
    }

    pub fn in_category(category_id: &str) -> Self {
        Self {
            category_id: Some(category_id.to_string()),
            ..Self::default()
        }
    }

    fn to_query(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        if let Some(title) = &self.title_contains {
            pairs.append_pair("where[title][contains]", title);
            any = true;
        }
        if let Some(id) = &self.category_id {
            pairs.append_pair("where[category][id]", id);
            any = true;
        }
        if any {
            format!("?{}", pairs.finish())
        } else {
            String::new()
        }
    }
}

/// Fields a seller fills in when creating or editing a product.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub title: String,
    pub discount_price: f64,
    pub sale_price: f64,
    pub description: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub variants: Vec<String>,
    pub category: CategoryRef,
}

pub async fn list(filter: &ProductFilter) -> AppResult<Vec<Product>> {
    api::get_json(&format!("/api/products{}", filter.to_query())).await
}

pub async fn get(id: &str) -> AppResult<Product> {
    api::get_json(&format!("/api/products/{id}")).await
}

pub async fn create(input: &ProductInput) -> AppResult<Product> {
    api::post_json("/api/products", input).await
}

pub async fn update(id: &str, input: &ProductInput) -> AppResult<Product> {
    api::patch_json(&format!("/api/products/{id}"), input).await
}

pub async fn delete(id: &str) -> AppResult<()> {
    let _ack: Value = api::delete_json(&format!("/api/products/{id}")).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_no_query() {
        assert_eq!(ProductFilter::default().to_query(), "");
    }

    #[test]
    fn title_filter_encodes_the_nested_key() {
        assert_eq!(
            ProductFilter::titled("smart tv").to_query(),
            "?where%5Btitle%5D%5Bcontains%5D=smart+tv"
        );
    }

    #[test]
    fn combined_filters_join_with_ampersand() {
        let filter = ProductFilter {
            title_contains: Some("tv".to_string()),
            category_id: Some("c1".to_string()),
        };
        assert_eq!(
            filter.to_query(),
            "?where%5Btitle%5D%5Bcontains%5D=tv&where%5Bcategory%5D%5Bid%5D=c1"
        );
    }

    #[test]
    fn product_input_serializes_camel_case() {
        let input = ProductInput {
            title: "Galaxy S24".to_string(),
            discount_price: 799.0,
            sale_price: 899.0,
            description: vec!["Flagship phone".to_string()],
            colors: vec!["black".to_string()],
            images: Vec::new(),
            variants: Vec::new(),
            category: CategoryRef {
                id: "c1".to_string(),
            },
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"discountPrice\":799.0"));
        assert!(json.contains("\"salePrice\":899.0"));
        assert!(json.contains("\"category\":{\"id\":\"c1\"}"));
    }
}
