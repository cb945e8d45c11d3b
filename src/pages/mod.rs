//! Routed pages.
//!
//! # Pages
//! - [`HomePage`]: storefront landing grid
//! - [`SearchPage`]: query-driven product search
//! - [`ProductPage`]: single product with gallery and comments
//! - [`CartPage`]: cart lines and checkout
//! - [`OrdersPage`]: order history
//! - [`LoginPage`] / [`SignupPage`]: account forms
//! - [`admin`]: management area nested under `/admin`

mod cart;
mod home;
mod login;
mod orders;
mod product;
mod search;
mod signup;

pub mod admin;

pub use cart::*;
pub use home::*;
pub use login::*;
pub use orders::*;
pub use product::*;
pub use search::*;
pub use signup::*;
