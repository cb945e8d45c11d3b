//! UI Components for the Shopmart frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Navbar`] - Logo, category menu, search, account menu, cart badge
//! - [`Footer`] - Page footer
//! - [`Sidebar`] - Management area navigation
//!
//! # Async Feedback Components
//! - [`LoadingOverlay`] - Full-screen overlay while anything is in flight
//! - [`ToastHost`] - Single-slot toast with auto-expiry
//! - [`LoaderButton`] - Button mirroring one loading key
//!
//! # Building Blocks
//! - [`ProductCard`] - Product tile for the storefront grids
//! - [`ui`] - Buttons, fields, modals, cards, chips, pagination

pub mod ui;

mod footer;
mod loader_button;
mod navbar;
mod overlay;
mod product_card;
mod sidebar;
mod toast;

pub use footer::*;
pub use loader_button::*;
pub use navbar::*;
pub use overlay::*;
pub use product_card::*;
pub use sidebar::*;
pub use toast::*;
