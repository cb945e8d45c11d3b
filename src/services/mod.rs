//! Backend API services.
//!
//! Every module maps onto one family of endpoints of the shop backend:
//!
//! # Services
//!
//! - [`api`] - Base URL, token storage, shared JSON request helpers
//! - [`auth`] - Login, signup, session restore, seller upgrade
//! - [`categories`] - Category CRUD
//! - [`products`] - Catalog CRUD and filtered listing
//! - [`comments`] - Product comments
//! - [`orders`] - Checkout and order history
//! - [`sellers`] - Seller-scoped catalog views
//! - [`dashboard`] - Client-side aggregation for the management dashboard
//!
//! All calls return [`AppResult`](crate::types::AppResult); callers wrap
//! them with [`run_action`](crate::store::run_action) or a scoped loading
//! guard so the UI reflects the request's lifetime.

pub mod api;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod sellers;
