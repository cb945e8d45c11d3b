//! Renders the single application toast and expires it.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DURATION_MS;
use crate::store::use_app_store;

/// Shows the current toast bottom-center and clears it after
/// [`TOAST_DURATION_MS`]. Clicking dismisses it early.
///
/// Each new toast arms a fresh timer; the epoch handed to
/// `clear_toast_if` keeps a timer armed for a replaced toast from
/// cutting its successor short.
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    create_effect(move |_| {
        if store.toasts.current().is_some() {
            let epoch = store.toasts.epoch();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                store.toasts.clear_toast_if(epoch);
            });
        }
    });

    view! {
        <Show when=move || store.toasts.current().is_some() fallback=|| view! { }>
            <div class="toast" role="status" on:click=move |_| store.toasts.clear_toast()>
                {move || store.toasts.current().unwrap_or_default()}
            </div>
        </Show>
    }
}
