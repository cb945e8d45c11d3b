//! Application configuration.
//!
//! Centralized configuration for the Shopmart frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The Shopmart API server. May be given without a scheme or with a
/// trailing slash; [`crate::services::api`] normalizes it before use.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Application name.
///
/// Displayed in the navbar and the page title.
pub const APP_NAME: &str = "Shopmart";

/// `localStorage` key holding the access token.
pub const JWT_STORAGE_KEY: &str = "accessToken";

/// How long a toast stays on screen before the host clears it.
pub const TOAST_DURATION_MS: u32 = 3_500;

/// Caption the loading overlay falls back to when no in-flight
/// operation carries a message of its own.
pub const DEFAULT_LOADING_CAPTION: &str = "Processing...";

/// Rows per page in the admin tables.
pub const ROWS_PER_PAGE: usize = 5;

/// How many orders the dashboard lists under "Recent orders".
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// How many categories the dashboard ranks by revenue.
pub const TOP_CATEGORIES_LIMIT: usize = 5;

/// Payment mode sent on checkout.
///
/// Card payments go through the payment provider and are out of scope
/// for this client; orders are placed as cash-on-delivery.
pub const PAYMENT_MODE: &str = "cash-on-delivery";
