//! Full-screen busy overlay.
//!
//! Shown whenever anything at all is in flight. Purely visual: the
//! wrapper is pointer-transparent (see `styles.css`), so the page stays
//! clickable and individual buttons disable themselves instead.

use leptos::*;

use crate::config::DEFAULT_LOADING_CAPTION;
use crate::store::use_app_store;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.any_loading() fallback=|| view! { }>
            <div class="overlay">
                <div class="overlay-panel">
                    <span class="spinner spinner-lg"></span>
                    <p class="overlay-caption">
                        {move || {
                            store
                                .latest_message()
                                .unwrap_or_else(|| DEFAULT_LOADING_CAPTION.to_string())
                        }}
                    </p>
                </div>
            </div>
        </Show>
    }
}
