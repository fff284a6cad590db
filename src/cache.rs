//! Query Cache
//!
//! Client-side cache keyed by logical resource path. Reads are served
//! stale-while-revalidate; concurrent observers of one key trigger at most
//! one fetch; entries never expire on their own and are only marked stale by
//! the mutations that affect them.
//!
//! The cache is an explicitly constructed handle, created once in `App` and
//! provided via context - consumers never reach for ambient global state.

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiError, ApiResult};

/// Stable cache key: resource path plus optional discriminator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(path: &str) -> Self {
        QueryKey(path.to_string())
    }

    /// Key with an extra discriminator (e.g. a view mode sharing one path)
    pub fn discriminated(path: &str, discriminator: &str) -> Self {
        QueryKey(format!("{}#{}", path, discriminator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Freshness of a cached value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Never loaded
    Empty,
    /// Loaded and not invalidated since
    Fresh,
    /// Invalidated; old value still renders while a refetch runs
    Stale,
}

/// Pure per-key state. Every transition the cache makes is decided here,
/// with the network and reactivity kept out.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotState {
    pub freshness: Freshness,
    pub data: Option<Value>,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl SlotState {
    pub fn new() -> Self {
        SlotState { freshness: Freshness::Empty, data: None, error: None, in_flight: false }
    }

    /// True if an observation of this slot must start the loader now.
    /// A parked error does not refetch until an explicit invalidation, so a
    /// failing endpoint cannot loop observation -> fetch -> error -> observation.
    pub fn needs_fetch(&self) -> bool {
        !self.in_flight && self.error.is_none() && self.freshness != Freshness::Fresh
    }

    /// Loader started
    pub fn begin(&mut self) {
        self.in_flight = true;
    }

    /// Loader finished. Failures keep whatever data was already cached.
    pub fn finish(&mut self, result: Result<Value, String>) {
        self.in_flight = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.freshness = Freshness::Fresh;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Mark stale; the next observation refetches in the background
    pub fn invalidate(&mut self) {
        self.error = None;
        if self.freshness == Freshness::Fresh {
            self.freshness = Freshness::Stale;
        }
    }

    /// Direct overwrite, bypassing the network (logout's optimistic write)
    pub fn write(&mut self, value: Value) {
        self.data = Some(value);
        self.freshness = Freshness::Fresh;
        self.error = None;
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide query cache handle
#[derive(Clone, Copy)]
pub struct QueryCache {
    slots: StoredValue<HashMap<QueryKey, RwSignal<SlotState>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache { slots: StoredValue::new(HashMap::new()) }
    }

    fn slot(&self, key: &QueryKey) -> RwSignal<SlotState> {
        if let Some(existing) = self.slots.with_value(|slots| slots.get(key).copied()) {
            return existing;
        }
        let created = RwSignal::new(SlotState::new());
        self.slots.update_value(|slots| {
            slots.entry(key.clone()).or_insert(created);
        });
        self.slots
            .with_value(|slots| slots.get(key).copied())
            .unwrap_or(created)
    }

    /// Reactive view of one key's state
    pub fn watch(&self, key: &QueryKey) -> RwSignal<SlotState> {
        self.slot(key)
    }

    /// Read-through: start the loader only if the slot needs it. Returns
    /// whether a fetch was started, so N concurrent observers cost one call.
    pub fn ensure<F, Fut>(&self, key: &QueryKey, loader: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<Value>> + 'static,
    {
        let slot = self.slot(key);
        let started = slot
            .try_update(|state| {
                if state.needs_fetch() {
                    state.begin();
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if started {
            let fut = loader();
            spawn_local(async move {
                let result = fut.await.map_err(|err| err.message());
                slot.update(|state| state.finish(result));
            });
        }
        started
    }

    /// Mark one key stale; observers refetch on their next observation
    pub fn invalidate(&self, key: &QueryKey) {
        self.slot(key).update(|state| state.invalidate());
    }

    /// Synchronous overwrite without a round trip
    pub fn write(&self, key: &QueryKey, value: Value) {
        self.slot(key).update(|state| state.write(value));
    }

    /// Drop every entry (application teardown / tests)
    pub fn reset(&self) {
        self.slots.update_value(|slots| slots.clear());
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapt a typed API result into a slot value
pub fn to_slot_value<T: Serialize>(result: ApiResult<T>) -> ApiResult<Value> {
    result.and_then(|value| serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string())))
}

/// Typed, reactive view of one cached query
pub struct QueryHandle<T: Send + Sync + 'static> {
    /// Last good value, fresh or stale
    pub data: Memo<Option<T>>,
    /// Parked fetch error, if any
    pub error: Memo<Option<String>>,
    /// True only on the initial load, not on background refetches
    pub loading: Memo<bool>,
}

// Memos are arena handles, so the handle is Copy whatever `T` is
impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

/// Observe `key`, loading it through `loader` whenever the slot is not fresh.
pub fn use_query<T, F, Fut>(cache: QueryCache, key: QueryKey, loader: F) -> QueryHandle<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = ApiResult<Value>> + 'static,
{
    let slot = cache.watch(&key);

    {
        let key = key.clone();
        let loader = loader.clone();
        Effect::new(move |_| {
            if slot.with(|state| state.needs_fetch()) {
                cache.ensure(&key, loader.clone());
            }
        });
    }

    let data = Memo::new(move |_| {
        slot.with(|state| state.data.clone())
            .and_then(|value| serde_json::from_value::<T>(value).ok())
    });
    let error = Memo::new(move |_| slot.with(|state| state.error.clone()));
    let loading = Memo::new(move |_| slot.with(|state| state.in_flight && state.data.is_none()));

    QueryHandle { data, error, loading }
}

/// Read keys, in one place so mutations can enumerate what they invalidate
pub mod keys {
    use super::QueryKey;
    use crate::api::encode_segment;

    pub fn session() -> QueryKey {
        QueryKey::new("/api/auth/me")
    }

    pub fn items_all() -> QueryKey {
        QueryKey::new("/api/items")
    }

    pub fn items_by_category(slug: &str) -> QueryKey {
        QueryKey::new(&format!("/api/items/category/{}", encode_segment(slug)))
    }

    pub fn items_by_author(name: &str) -> QueryKey {
        QueryKey::new(&format!("/api/items/author/{}", encode_segment(name)))
    }

    pub fn categories() -> QueryKey {
        QueryKey::new("/api/categories")
    }

    pub fn category_options() -> QueryKey {
        QueryKey::new("/api/category-options")
    }

    pub fn authors() -> QueryKey {
        QueryKey::new("/api/authors")
    }

    pub fn site_settings() -> QueryKey {
        QueryKey::new("/api/site-settings")
    }

    pub fn share(code: &str) -> QueryKey {
        QueryKey::new(&format!("/api/share/{}", encode_segment(code)))
    }

    pub fn tezos_nfts() -> QueryKey {
        QueryKey::new("/api/nfts/tezos")
    }

    pub fn creator_items() -> QueryKey {
        QueryKey::new("/api/creator/items")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_slot_wants_fetch_once() {
        let mut slot = SlotState::new();
        assert!(slot.needs_fetch());

        // First observer starts the loader; later observers see it in flight
        slot.begin();
        assert!(!slot.needs_fetch());
        assert!(!slot.needs_fetch());
    }

    #[test]
    fn test_finish_makes_slot_fresh() {
        let mut slot = SlotState::new();
        slot.begin();
        slot.finish(Ok(json!([1, 2, 3])));

        assert_eq!(slot.freshness, Freshness::Fresh);
        assert_eq!(slot.data, Some(json!([1, 2, 3])));
        assert!(!slot.needs_fetch());
    }

    #[test]
    fn test_invalidate_triggers_exactly_one_refetch() {
        let mut slot = SlotState::new();
        slot.begin();
        slot.finish(Ok(json!("v1")));

        slot.invalidate();
        assert_eq!(slot.freshness, Freshness::Stale);
        // Old value keeps rendering while the refetch runs
        assert_eq!(slot.data, Some(json!("v1")));

        // N observers, one fetch
        assert!(slot.needs_fetch());
        slot.begin();
        assert!(!slot.needs_fetch());

        slot.finish(Ok(json!("v2")));
        assert_eq!(slot.freshness, Freshness::Fresh);
        assert_eq!(slot.data, Some(json!("v2")));
    }

    #[test]
    fn test_failed_fetch_keeps_stale_data_and_parks_error() {
        let mut slot = SlotState::new();
        slot.begin();
        slot.finish(Ok(json!("v1")));
        slot.invalidate();
        slot.begin();
        slot.finish(Err("HTTP 500: boom".to_string()));

        assert_eq!(slot.data, Some(json!("v1")));
        assert_eq!(slot.error.as_deref(), Some("HTTP 500: boom"));
        // No retry loop: the error parks the slot until an explicit invalidation
        assert!(!slot.needs_fetch());

        slot.invalidate();
        assert!(slot.error.is_none());
        assert!(slot.needs_fetch());
    }

    #[test]
    fn test_direct_write_is_immediately_fresh() {
        let mut slot = SlotState::new();
        slot.begin();
        slot.finish(Ok(json!({"username": "ana"})));

        // Logout-style overwrite lands before any round trip completes
        slot.write(Value::Null);
        assert_eq!(slot.data, Some(Value::Null));
        assert_eq!(slot.freshness, Freshness::Fresh);
        assert!(!slot.needs_fetch());

        // The reconciling refetch is explicit
        slot.invalidate();
        assert!(slot.needs_fetch());
    }

    #[test]
    fn test_invalidate_on_empty_slot_is_harmless() {
        let mut slot = SlotState::new();
        slot.invalidate();
        assert_eq!(slot.freshness, Freshness::Empty);
        assert!(slot.needs_fetch());
    }

    #[test]
    fn test_query_keys_are_stable_and_distinct() {
        assert_eq!(keys::items_all(), keys::items_all());
        assert_ne!(keys::items_all(), keys::items_by_category("prints"));
        assert_ne!(keys::items_by_category("prints"), keys::items_by_author("prints"));
        assert_eq!(keys::items_by_category("mixed media").as_str(), "/api/items/category/mixed%20media");
    }

    #[test]
    fn test_discriminated_keys_differ_from_plain() {
        let plain = QueryKey::new("/api/items");
        let arranged = QueryKey::discriminated("/api/items", "arranging");
        assert_ne!(plain, arranged);
    }
}
