//! Auth Session Store
//!
//! Holds the current user/role, derived from the cookie-backed session via
//! the "who am I" endpoint. Login/logout are cache-invalidating mutations;
//! everything a view needs is a pure projection of the session cache slot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::{self, ApiResult};
use crate::cache::{keys, to_slot_value, QueryCache, SlotState};
use crate::models::{validate_login, AuthUser, Capability, Role};

/// Resolved session phase
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Nothing known yet (no read issued)
    Unknown,
    /// Session read in flight
    Loading,
    Authenticated(AuthUser),
    Anonymous,
}

/// Pure projection from the session cache slot to a phase. Read failures fail
/// open to signed-out; they never surface as errors to the view layer.
pub fn phase_from_slot(state: &SlotState) -> SessionPhase {
    match &state.data {
        Some(Value::Null) => SessionPhase::Anonymous,
        Some(value) => match serde_json::from_value::<AuthUser>(value.clone()) {
            Ok(user) => SessionPhase::Authenticated(user),
            Err(_) => SessionPhase::Anonymous,
        },
        None if state.in_flight => SessionPhase::Loading,
        None if state.error.is_some() => SessionPhase::Anonymous,
        None => SessionPhase::Unknown,
    }
}

/// The session loader: 401 resolves to "no user", any other failure degrades
/// to signed-out with a console diagnostic.
async fn load_session() -> ApiResult<Value> {
    match api::current_user().await {
        Ok(user) => to_slot_value(Ok(user)),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[SESSION] session read failed, treating as signed out: {}", err).into(),
            );
            Ok(Value::Null)
        }
    }
}

/// App-wide session store handle
#[derive(Clone, Copy)]
pub struct SessionStore {
    cache: QueryCache,
    phase: Memo<SessionPhase>,
    /// Server-provided message from the last failed login
    pub login_error: RwSignal<Option<String>>,
    /// True while a login submission is outstanding
    pub login_pending: RwSignal<bool>,
}

impl SessionStore {
    /// Issues the initial session read as soon as the store is observed.
    pub fn new(cache: QueryCache) -> Self {
        let slot = cache.watch(&keys::session());

        Effect::new(move |_| {
            if slot.with(|state| state.needs_fetch()) {
                cache.ensure(&keys::session(), load_session);
            }
        });

        let phase = Memo::new(move |_| slot.with(phase_from_slot));

        SessionStore {
            cache,
            phase,
            login_error: RwSignal::new(None),
            login_pending: RwSignal::new(false),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn user(&self) -> Option<AuthUser> {
        match self.phase.get() {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Role {
        self.user().map(|user| user.role).unwrap_or(Role::Guest)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.role().can(capability)
    }

    /// Submit credentials. On success the session key is invalidated and the
    /// store refetches; on failure the server's message lands in
    /// `login_error` and the cached session is left untouched.
    pub fn login(&self, username: String, password: String) {
        if let Err(message) = validate_login(&username, &password) {
            self.login_error.set(Some(message));
            return;
        }
        if self.login_pending.get_untracked() {
            return;
        }
        self.login_pending.set(true);
        let store = *self;
        spawn_local(async move {
            match api::login(&username, &password).await {
                Ok(()) => {
                    store.login_error.set(None);
                    store.cache.invalidate(&keys::session());
                }
                Err(err) => {
                    store.login_error.set(Some(err.message()));
                }
            }
            store.login_pending.set(false);
        });
    }

    /// Two-phase sign-out: (1) synchronous overwrite of the cached session to
    /// "no user" so every observer reacts immediately, (2) the logout write
    /// plus a reconciling refetch, which may change nothing if phase 1
    /// already matches server truth.
    pub fn logout(&self) {
        self.cache.write(&keys::session(), Value::Null);
        let cache = self.cache;
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                web_sys::console::warn_1(&format!("[SESSION] logout write failed: {}", err).into());
            }
            cache.invalidate(&keys::session());
        });
    }
}

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Freshness;
    use serde_json::json;

    fn slot_with(data: Option<Value>, in_flight: bool, error: Option<&str>) -> SlotState {
        SlotState {
            freshness: if data.is_some() { Freshness::Fresh } else { Freshness::Empty },
            data,
            error: error.map(|e| e.to_string()),
            in_flight,
        }
    }

    #[test]
    fn test_unobserved_slot_is_unknown() {
        assert_eq!(phase_from_slot(&slot_with(None, false, None)), SessionPhase::Unknown);
    }

    #[test]
    fn test_in_flight_read_is_loading() {
        assert_eq!(phase_from_slot(&slot_with(None, true, None)), SessionPhase::Loading);
    }

    #[test]
    fn test_null_session_is_anonymous() {
        // The loader maps 401 to a null user, so this is the 401 path
        assert_eq!(phase_from_slot(&slot_with(Some(Value::Null), false, None)), SessionPhase::Anonymous);
    }

    #[test]
    fn test_user_payload_is_authenticated() {
        let slot = slot_with(Some(json!({"id": 1, "username": "ana", "role": "admin"})), false, None);
        match phase_from_slot(&slot) {
            SessionPhase::Authenticated(user) => {
                assert_eq!(user.username, "ana");
                assert_eq!(user.role, Role::Admin);
            }
            other => panic!("expected Authenticated, got {:?}", other),
        }
    }

    #[test]
    fn test_read_failure_fails_open_to_anonymous() {
        assert_eq!(
            phase_from_slot(&slot_with(None, false, Some("HTTP 500: boom"))),
            SessionPhase::Anonymous
        );
    }

    #[test]
    fn test_malformed_session_payload_is_anonymous() {
        let slot = slot_with(Some(json!({"unexpected": true})), false, None);
        assert_eq!(phase_from_slot(&slot), SessionPhase::Anonymous);
    }

    #[test]
    fn test_background_refresh_keeps_user_visible() {
        // Stale user data with a refetch in flight still renders as signed in
        let mut slot = slot_with(Some(json!({"id": 1, "username": "ana", "role": "creator"})), false, None);
        slot.invalidate();
        slot.begin();
        assert!(matches!(phase_from_slot(&slot), SessionPhase::Authenticated(_)));
    }
}
