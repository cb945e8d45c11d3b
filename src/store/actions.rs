//! One-call bracket for async user actions.
//!
//! `run_action` is the standard way pages run a backend call: it refuses
//! to double-run a key, keeps the key registered for exactly the lifetime
//! of the future, and posts the right toast on the way out. Pages that
//! need custom error handling (e.g. showing the server's own message)
//! drop down to [`UiSlice::start_scoped`](super::UiSlice::start_scoped)
//! instead.

use std::future::Future;

use super::AppStore;
use crate::types::AppResult;

/// Run `fut` as the named action `key`, showing `message` while it runs.
///
/// Returns `None` without touching the registry when `key` is already in
/// flight, so wiring this straight to a button cannot double-submit. On
/// success the optional `success_toast` is shown and the value returned;
/// on error the failure is logged, the optional `failure_toast` shown,
/// and `None` returned. The key is released on every path.
pub async fn run_action<T, Fut>(
    store: AppStore,
    key: &str,
    message: &str,
    fut: Fut,
    success_toast: Option<&str>,
    failure_toast: Option<&str>,
) -> Option<T>
where
    Fut: Future<Output = AppResult<T>>,
{
    if store.is_loading(key) {
        return None;
    }
    let _guard = store.ui.start_scoped(key, Some(message));
    match fut.await {
        Ok(value) => {
            if let Some(text) = success_toast {
                store.set_toast(text);
            }
            Some(value)
        }
        Err(err) => {
            log::error!("❌ Action '{key}' failed: {err}");
            if let Some(text) = failure_toast {
                store.set_toast(text);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;
    use futures::executor::block_on;
    use leptos::create_runtime;

    #[test]
    fn success_releases_key_and_posts_toast() {
        let runtime = create_runtime();
        let store = AppStore::new();

        let result = block_on(run_action(
            store,
            "save",
            "Saving...",
            async { Ok::<_, AppError>(7) },
            Some("Saved!"),
            None,
        ));

        assert_eq!(result, Some(7));
        assert!(!store.is_loading("save"));
        assert_eq!(store.toasts.current(), Some("Saved!".to_string()));

        runtime.dispose();
    }

    #[test]
    fn failure_releases_key_and_posts_failure_toast() {
        let runtime = create_runtime();
        let store = AppStore::new();

        let result = block_on(run_action(
            store,
            "save",
            "Saving...",
            async { Err::<i32, _>(AppError::Network("offline".to_string())) },
            Some("Saved!"),
            Some("Could not save."),
        ));

        assert_eq!(result, None);
        assert!(!store.is_loading("save"));
        assert_eq!(store.toasts.current(), Some("Could not save.".to_string()));

        runtime.dispose();
    }

    #[test]
    fn failure_without_toast_is_silent() {
        let runtime = create_runtime();
        let store = AppStore::new();

        let result = block_on(run_action(
            store,
            "fetch",
            "Loading...",
            async { Err::<i32, _>(AppError::Network("offline".to_string())) },
            None,
            None,
        ));

        assert_eq!(result, None);
        assert_eq!(store.toasts.current(), None);

        runtime.dispose();
    }

    #[test]
    fn an_in_flight_key_is_not_restarted() {
        let runtime = create_runtime();
        let store = AppStore::new();

        store.start_loading("save", Some("first run"));
        let result = block_on(run_action(
            store,
            "save",
            "second run",
            async { Ok::<_, AppError>(7) },
            Some("Saved!"),
            None,
        ));

        // The second submit is dropped and the first run's entry survives
        assert_eq!(result, None);
        assert!(store.is_loading("save"));
        assert_eq!(store.latest_message(), Some("first run".to_string()));
        assert_eq!(store.toasts.current(), None);

        runtime.dispose();
    }
}
