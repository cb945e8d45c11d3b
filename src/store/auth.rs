//! Signed-in user state.

use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet, SignalWith};

use crate::types::UserInfo;

#[derive(Clone, Copy)]
pub struct AuthSlice {
    user: RwSignal<Option<UserInfo>>,
}

impl AuthSlice {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
        }
    }

    pub fn set_user(&self, user: UserInfo) {
        self.user.set(Some(user));
    }

    pub fn clear_user(&self) {
        self.user.set(None);
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|u| u.as_ref().is_some_and(|u| u.is_admin.unwrap_or(false)))
    }

    pub fn is_seller(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(|u| u.has_role("seller")))
    }

    /// Whether the user may see the management area at all.
    pub fn can_manage(&self) -> bool {
        self.is_admin() || self.is_seller()
    }
}

impl Default for AuthSlice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn user(is_admin: Option<bool>, roles: &[&str]) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            username: "marguerite@example.com".to_string(),
            is_admin,
            first_name: None,
            last_name: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn sign_in_and_out() {
        let runtime = create_runtime();
        let auth = AuthSlice::new();

        assert!(!auth.is_signed_in());
        auth.set_user(user(None, &[]));
        assert!(auth.is_signed_in());
        assert!(!auth.can_manage());

        auth.clear_user();
        assert!(!auth.is_signed_in());

        runtime.dispose();
    }

    #[test]
    fn role_checks() {
        let runtime = create_runtime();
        let auth = AuthSlice::new();

        auth.set_user(user(Some(true), &[]));
        assert!(auth.is_admin());
        assert!(!auth.is_seller());
        assert!(auth.can_manage());

        auth.set_user(user(Some(false), &["seller"]));
        assert!(!auth.is_admin());
        assert!(auth.is_seller());
        assert!(auth.can_manage());

        runtime.dispose();
    }
}
