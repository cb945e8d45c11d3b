//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "Copyright © 2025 " {APP_NAME} " • Built with "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <a href="/" class="footer-link">"Home"</a>
                <a href="/search" class="footer-link">"All Products"</a>
                <a href="/cart" class="footer-link">"Cart"</a>
            </div>
        </footer>
    }
}
