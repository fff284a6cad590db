//! Item Reordering Controller
//!
//! Owns the gallery list's arranging state. Views only dispatch intents
//! (start, move, cancel, save) and render the controller's snapshot; while
//! arranging is active the displayed list is the local draft, not server
//! truth, and nothing touches the network until save.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::reinsert;

use crate::api;
use crate::cache::{QueryCache, QueryKey};
use crate::models::{OrderUpdate, PortfolioItem};

/// Pure arranging state: the working order plus the snapshot taken when
/// arranging began, kept for cancel-without-commit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    items: Vec<PortfolioItem>,
    snapshot: Vec<PortfolioItem>,
}

impl OrderDraft {
    pub fn start(items: Vec<PortfolioItem>) -> Self {
        OrderDraft { snapshot: items.clone(), items }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// The exact list captured at start time
    pub fn into_snapshot(self) -> Vec<PortfolioItem> {
        self.snapshot
    }

    /// Move the entry `id` to insertion slot `slot`. Unknown ids are ignored.
    pub fn move_to_slot(&mut self, id: u32, slot: usize) {
        if let Some(from) = self.items.iter().position(|item| item.id == id) {
            reinsert(&mut self.items, from, slot);
        }
    }

    /// Batch write payload: display order is the zero-based index of the
    /// current local order, a contiguous 0..N-1 sequence by construction.
    pub fn payload(&self) -> Vec<OrderUpdate> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| OrderUpdate { id: item.id, display_order: index as i32 })
            .collect()
    }
}

/// Reordering controller for one gallery list
#[derive(Clone, Copy)]
pub struct ReorderController {
    cache: QueryCache,
    /// Server truth as last synchronized (authoritative while not arranging)
    server_items: RwSignal<Vec<PortfolioItem>>,
    draft: RwSignal<Option<OrderDraft>>,
    /// Read keys the committed order invalidates
    source_keys: StoredValue<Vec<QueryKey>>,
    /// The list the view renders
    pub items: Memo<Vec<PortfolioItem>>,
    pub arranging: Memo<bool>,
    /// True while the batch write is outstanding
    pub saving: RwSignal<bool>,
    pub save_error: RwSignal<Option<String>>,
}

impl ReorderController {
    pub fn new(cache: QueryCache, source_keys: Vec<QueryKey>) -> Self {
        let server_items = RwSignal::new(Vec::new());
        let draft = RwSignal::new(None::<OrderDraft>);

        let items = Memo::new(move |_| {
            draft.with(|d| d.as_ref().map(|d| d.items().to_vec()))
                .unwrap_or_else(|| server_items.get())
        });
        let arranging = Memo::new(move |_| draft.with(|d| d.is_some()));

        ReorderController {
            cache,
            server_items,
            draft,
            source_keys: StoredValue::new(source_keys),
            items,
            arranging,
            saving: RwSignal::new(false),
            save_error: RwSignal::new(None),
        }
    }

    /// Adopt a changed server list, but only while not arranging, and only
    /// when it actually differs (shallow structural comparison).
    pub fn sync_from_server(&self, incoming: Vec<PortfolioItem>) {
        if self.draft.with_untracked(|d| d.is_some()) {
            return;
        }
        if self.server_items.with_untracked(|current| *current != incoming) {
            self.server_items.set(incoming);
        }
    }

    pub fn start_arranging(&self) {
        if self.draft.with_untracked(|d| d.is_some()) {
            return;
        }
        self.save_error.set(None);
        self.draft.set(Some(OrderDraft::start(self.server_items.get_untracked())));
    }

    /// Reorder the local draft; no network call
    pub fn move_to_slot(&self, id: u32, slot: usize) {
        self.draft.update(|d| {
            if let Some(draft) = d.as_mut() {
                draft.move_to_slot(id, slot);
            }
        });
    }

    /// Discard local reordering and return to viewing
    pub fn cancel(&self) {
        if let Some(draft) = self.draft.try_update(|d| d.take()).flatten() {
            self.server_items.set(draft.into_snapshot());
        }
        self.save_error.set(None);
    }

    /// Commit the local order as one batch write. On success the source keys
    /// are invalidated and the controller returns to viewing; on failure it
    /// stays in arranging with the local order intact - retry is the user's.
    pub fn save(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let Some(payload) = self.draft.with_untracked(|d| d.as_ref().map(|d| d.payload())) else {
            return;
        };
        self.saving.set(true);
        let ctrl = *self;
        spawn_local(async move {
            match api::update_order(&payload).await {
                Ok(()) => {
                    // Adopt the committed order locally, then let the
                    // invalidated reads reconcile with server truth.
                    if let Some(draft) = ctrl.draft.try_update(|d| d.take()).flatten() {
                        let committed = draft.items().to_vec();
                        ctrl.server_items.set(committed);
                    }
                    for key in ctrl.source_keys.get_value() {
                        ctrl.cache.invalidate(&key);
                    }
                    ctrl.save_error.set(None);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[REORDER] save failed: {}", err).into());
                    ctrl.save_error.set(Some(err.message()));
                }
            }
            ctrl.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, title: &str, display_order: i32) -> PortfolioItem {
        PortfolioItem {
            id,
            title: title.to_string(),
            description: String::new(),
            image_url: format!("https://img.example/{}.png", id),
            category: "paintings".to_string(),
            author: "ana".to_string(),
            tags: Vec::new(),
            marketplace_links: Vec::new(),
            display_order,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn ids(items: &[PortfolioItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_payload_is_contiguous_from_zero() {
        // Server orders are sparse and shuffled; the payload is still 0..N-1
        let draft = OrderDraft::start(vec![item(5, "e", 40), item(2, "b", 7), item(9, "i", 12)]);
        let payload = draft.payload();
        assert_eq!(
            payload,
            vec![
                OrderUpdate { id: 5, display_order: 0 },
                OrderUpdate { id: 2, display_order: 1 },
                OrderUpdate { id: 9, display_order: 2 },
            ]
        );
    }

    #[test]
    fn test_reorder_scenario_a_b_c_to_c_a_b() {
        let a = item(1, "A", 0);
        let b = item(2, "B", 1);
        let c = item(3, "C", 2);
        let mut draft = OrderDraft::start(vec![a, b, c]);

        // Drag C to the front
        draft.move_to_slot(3, 0);
        assert_eq!(ids(draft.items()), vec![3, 1, 2]);

        let payload = draft.payload();
        assert_eq!(
            payload,
            vec![
                OrderUpdate { id: 3, display_order: 0 },
                OrderUpdate { id: 1, display_order: 1 },
                OrderUpdate { id: 2, display_order: 2 },
            ]
        );
    }

    #[test]
    fn test_cancel_restores_snapshot_after_many_moves() {
        let original = vec![item(1, "A", 0), item(2, "B", 1), item(3, "C", 2), item(4, "D", 3)];
        let mut draft = OrderDraft::start(original.clone());

        draft.move_to_slot(4, 0);
        draft.move_to_slot(1, 4);
        draft.move_to_slot(2, 1);
        assert_ne!(ids(draft.items()), ids(&original));

        assert_eq!(draft.into_snapshot(), original);
    }

    #[test]
    fn test_move_unknown_id_is_ignored() {
        let mut draft = OrderDraft::start(vec![item(1, "A", 0), item(2, "B", 1)]);
        draft.move_to_slot(99, 0);
        assert_eq!(ids(draft.items()), vec![1, 2]);
    }

    #[test]
    fn test_move_to_own_slot_keeps_order() {
        let mut draft = OrderDraft::start(vec![item(1, "A", 0), item(2, "B", 1), item(3, "C", 2)]);
        draft.move_to_slot(2, 1);
        assert_eq!(ids(draft.items()), vec![1, 2, 3]);
        draft.move_to_slot(2, 2);
        assert_eq!(ids(draft.items()), vec![1, 2, 3]);
    }
}
