//! Authentication Context
//!
//! The storefront only needs to know *whether* someone is signed in and
//! their email; credential verification belongs to the surrounding
//! platform. The signed-in user is kept in a context signal and mirrored
//! to localStorage so the login round-trip survives the page reload.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "storefront.user";

/// The signed-in shopper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

/// App-wide auth state, provided at the root of the component tree.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
}

impl AuthContext {
    fn load() -> Self {
        Self {
            user: RwSignal::new(stored_user()),
        }
    }

    /// Snapshot of the current user, `None` when unauthenticated.
    pub fn current_user(&self) -> Option<User> {
        self.user.get_untracked()
    }

    /// Reactive view of the current user, for header rendering.
    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    pub fn sign_in(&self, user: User) {
        persist_user(Some(&user));
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        persist_user(None);
        self.user.set(None);
    }
}

pub fn provide_auth() {
    provide_context(AuthContext::load());
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Login route carrying the current page as a return target,
/// e.g. `/login?redirect=%2Fproducts%2Froast-club`.
pub fn login_href(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("/login?redirect={encoded}")
}

fn stored_user() -> Option<User> {
    let storage = local_storage()?;
    let Ok(Some(json)) = storage.get_item(STORAGE_KEY) else {
        return None;
    };
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding unreadable stored user: {err}");
            None
        }
    }
}

fn persist_user(user: Option<&User>) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; sign-in will not survive a reload");
        return;
    };
    let stored = match user {
        Some(user) => serde_json::to_string(user)
            .ok()
            .and_then(|json| storage.set_item(STORAGE_KEY, &json).ok()),
        None => storage.remove_item(STORAGE_KEY).ok(),
    };
    if stored.is_none() {
        log::warn!("failed to update stored user");
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_href_encodes_target() {
        assert_eq!(
            login_href("/products/roast-club"),
            "/login?redirect=%2Fproducts%2Froast-club"
        );
    }
}
