//! Button bound to a named loading key.

use leptos::*;

use crate::store::use_app_store;

/// A button that mirrors the state of one loading key.
///
/// While the key is in flight the button disables itself, shows a
/// spinner and swaps its label, so the control that started an action
/// visibly owns it. The press handler is expected to run the action
/// under the same key (usually through
/// [`run_action`](crate::store::run_action)).
#[component]
pub fn LoaderButton(
    #[prop(into)] loading_key: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] loading_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_press: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let store = use_app_store();
    let key = store_value(loading_key);
    let busy = move || key.with_value(|k| store.is_loading(k));
    let classes = format!("btn btn-solid btn-md {class}").trim_end().to_string();

    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get() || busy()
            on:click=move |_| {
                if !disabled.get_untracked() && !busy() {
                    on_press.call(());
                }
            }
        >
            <Show when=busy fallback=|| view! { }>
                <span class="spinner"></span>
            </Show>
            <span>
                {move || {
                    if busy() {
                        loading_label.clone().unwrap_or_else(|| label.clone())
                    } else {
                        label.clone()
                    }
                }}
            </span>
        </button>
    }
}
