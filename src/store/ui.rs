//! Async UI state: the registry of named in-flight operations.
//!
//! Every long-running user action (a login, a category delete, a product
//! fetch) registers itself here under a caller-chosen string key while it
//! runs. Presentation code subscribes reactively: the full-screen overlay
//! watches [`UiSlice::any_loading`] and [`UiSlice::latest_message`], and
//! per-action buttons watch [`UiSlice::is_loading`] for their own key.
//!
//! Keys are free-form and caller-coordinated; two concurrent logical
//! operations must use distinct keys. The registry itself never rejects a
//! start: starting a key that is already active simply refreshes its
//! timestamp and message. Callers that must not double-run an action guard
//! themselves with an [`UiSlice::is_loading`] check first (the
//! [`run_action`](crate::store::run_action) helper does exactly that).
//!
//! The one real failure mode is a key that is started and never stopped:
//! its button stays disabled and the overlay never goes away. Prefer
//! [`UiSlice::start_scoped`], which returns a [`LoadingGuard`] that stops
//! the key when dropped, over manual `start_loading`/`stop_loading` pairs.

use chrono::Utc;
use leptos::{create_rw_signal, RwSignal, SignalUpdate, SignalUpdateUntracked, SignalWith, SignalWithUntracked};
use std::collections::HashMap;

/// One in-flight operation: when it started and what to show for it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingAction {
    /// Wall-clock start time, epoch milliseconds.
    pub started_at: i64,
    /// Start order. Millisecond timestamps can collide; the sequence
    /// number makes "most recent start" unambiguous.
    pub seq: u64,
    /// Caption shown by the overlay while this operation is the most
    /// recently started one. `None` means "no caption".
    pub message: Option<String>,
}

/// Reactive registry of in-flight operations.
///
/// A thin wrapper around a single `RwSignal` holding the key -> action
/// map, so the whole slice is `Copy` and can be captured freely by view
/// closures. All reads go through `with`, which subscribes the calling
/// reactive scope to registry changes.
#[derive(Clone, Copy)]
pub struct UiSlice {
    actions: RwSignal<HashMap<String, LoadingAction>>,
    next_seq: RwSignal<u64>,
}

impl UiSlice {
    /// Create an empty registry. Must be called inside a reactive runtime.
    pub fn new() -> Self {
        Self {
            actions: create_rw_signal(HashMap::new()),
            next_seq: create_rw_signal(0),
        }
    }

    /// Mark `key` as in flight, with an optional overlay caption.
    ///
    /// Inserts or replaces the entry: a second start under the same key
    /// refreshes the timestamp and message rather than erroring. That
    /// makes the call safe to repeat, but callers guarding a
    /// logically-once action should still check [`Self::is_loading`]
    /// first.
    pub fn start_loading(&self, key: &str, message: Option<&str>) {
        let seq = self.next_seq.with_untracked(|n| *n);
        self.next_seq.update_untracked(|n| *n += 1);
        let action = LoadingAction {
            started_at: Utc::now().timestamp_millis(),
            seq,
            message: message.map(str::to_owned),
        };
        self.actions.update(|actions| {
            actions.insert(key.to_owned(), action);
        });
    }

    /// Mark `key` as finished. Stopping an absent key is a silent no-op.
    pub fn stop_loading(&self, key: &str) {
        // Don't wake subscribers when nothing changes.
        if !self.actions.with_untracked(|actions| actions.contains_key(key)) {
            return;
        }
        self.actions.update(|actions| {
            actions.remove(key);
        });
    }

    /// Start `key` and return a guard that stops it when dropped.
    ///
    /// This is the preferred bracket: the key is released on every exit
    /// path of the calling scope, early returns and `?` included.
    pub fn start_scoped(&self, key: &str, message: Option<&str>) -> LoadingGuard {
        self.start_loading(key, message);
        LoadingGuard {
            ui: *self,
            key: key.to_owned(),
        }
    }

    /// Whether `key` is currently in flight.
    pub fn is_loading(&self, key: &str) -> bool {
        self.actions.with(|actions| actions.contains_key(key))
    }

    /// Whether anything at all is in flight. Drives the blocking overlay.
    pub fn any_loading(&self) -> bool {
        self.actions.with(|actions| !actions.is_empty())
    }

    /// Caption of the most recently started operation, if any.
    ///
    /// "Most recent" is decided by `(started_at, seq)`, so when two starts
    /// land in the same millisecond the later call wins. Returns `None`
    /// when the registry is empty or the winning entry has no message;
    /// rendering layers substitute a default caption.
    pub fn latest_message(&self) -> Option<String> {
        self.actions.with(|actions| {
            actions
                .values()
                .max_by_key(|action| (action.started_at, action.seq))
                .and_then(|action| action.message.clone())
        })
    }
}

impl Default for UiSlice {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle for one in-flight operation.
///
/// Returned by [`UiSlice::start_scoped`]; dropping it removes the entry.
/// Holding the guard across an `.await` keeps the spinner visible for the
/// whole asynchronous gap.
#[must_use = "the operation is marked finished as soon as this guard is dropped"]
pub struct LoadingGuard {
    ui: UiSlice,
    key: String,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.ui.stop_loading(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn start_then_stop_toggles_is_loading() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("save", Some("Saving..."));
        assert!(ui.is_loading("save"));

        ui.stop_loading("save");
        assert!(!ui.is_loading("save"));

        runtime.dispose();
    }

    #[test]
    fn stopping_an_absent_key_is_a_no_op() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("save", None);
        // Never started, never panics, changes nothing
        ui.stop_loading("delete");
        assert!(ui.is_loading("save"));
        assert!(!ui.is_loading("delete"));
        assert!(ui.any_loading());

        runtime.dispose();
    }

    #[test]
    fn restarting_a_key_refreshes_the_entry() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("save", Some("A"));
        ui.start_loading("save", Some("B"));

        assert!(ui.is_loading("save"));
        assert_eq!(ui.latest_message(), Some("B".to_string()));
        // Exactly one entry remains: a single stop clears the key
        ui.stop_loading("save");
        assert!(!ui.any_loading());

        runtime.dispose();
    }

    #[test]
    fn any_loading_tracks_registry_size() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        assert!(!ui.any_loading());
        ui.start_loading("a", None);
        ui.start_loading("b", None);
        assert!(ui.any_loading());
        ui.stop_loading("a");
        assert!(ui.any_loading());
        ui.stop_loading("b");
        assert!(!ui.any_loading());

        runtime.dispose();
    }

    #[test]
    fn latest_message_follows_the_most_recent_start() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("a", Some("first"));
        ui.start_loading("b", Some("second"));
        assert_eq!(ui.latest_message(), Some("second".to_string()));

        // Same-millisecond starts are ordered by start sequence, so the
        // later call still wins deterministically.
        ui.start_loading("c", Some("third"));
        assert_eq!(ui.latest_message(), Some("third".to_string()));

        runtime.dispose();
    }

    #[test]
    fn latest_message_is_none_when_idle_or_uncaptioned() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        assert_eq!(ui.latest_message(), None);
        ui.start_loading("quiet", None);
        // The most recent entry has no caption; the overlay falls back
        assert_eq!(ui.latest_message(), None);

        runtime.dispose();
    }

    #[test]
    fn scenario_single_save_operation() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("save", Some("Saving..."));
        assert!(ui.is_loading("save"));
        assert!(ui.any_loading());
        assert_eq!(ui.latest_message(), Some("Saving...".to_string()));

        ui.stop_loading("save");
        assert!(!ui.is_loading("save"));
        assert!(!ui.any_loading());
        assert_eq!(ui.latest_message(), None);

        runtime.dispose();
    }

    #[test]
    fn scenario_two_concurrent_operations() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        ui.start_loading("save", Some("Saving..."));
        ui.start_loading("delete", Some("Deleting..."));
        assert!(ui.any_loading());
        assert_eq!(ui.latest_message(), Some("Deleting...".to_string()));

        ui.stop_loading("delete");
        assert!(ui.is_loading("save"));
        assert!(ui.any_loading());
        assert_eq!(ui.latest_message(), Some("Saving...".to_string()));

        runtime.dispose();
    }

    #[test]
    fn guard_releases_on_drop() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        {
            let _guard = ui.start_scoped("save", Some("Saving..."));
            assert!(ui.is_loading("save"));
        }
        assert!(!ui.is_loading("save"));

        runtime.dispose();
    }

    #[test]
    fn guard_releases_on_early_return() {
        fn submit(ui: UiSlice, valid: bool) -> Result<(), String> {
            let _guard = ui.start_scoped("submit", None);
            if !valid {
                return Err("rejected".to_string());
            }
            Ok(())
        }

        let runtime = create_runtime();
        let ui = UiSlice::new();

        assert!(submit(ui, false).is_err());
        assert!(!ui.is_loading("submit"));

        assert!(submit(ui, true).is_ok());
        assert!(!ui.is_loading("submit"));

        runtime.dispose();
    }

    #[test]
    fn guard_and_manual_stop_do_not_conflict() {
        let runtime = create_runtime();
        let ui = UiSlice::new();

        let guard = ui.start_scoped("save", None);
        // Someone stops the key by hand before the guard goes away
        ui.stop_loading("save");
        assert!(!ui.is_loading("save"));
        // The guard's drop then hits an absent key, which is fine
        drop(guard);
        assert!(!ui.any_loading());

        runtime.dispose();
    }
}
