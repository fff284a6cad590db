//! Leptos Sortable Utilities
//!
//! Mouse-event drag-to-reorder for flat lists.
//! Uses movement threshold to distinguish click from drag; drop targets are
//! insertion slots between list entries rather than the entries themselves.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sortable state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Insertion slot currently hovered (0..=len)
    pub hover_slot_read: ReadSignal<Option<usize>>,
    pub hover_slot_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending entry id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_slot_read, hover_slot_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        hover_slot_read,
        hover_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_id_write.set(None);
    sort.hover_slot_write.set(None);
    sort.pending_id_write.set(None);
    sort.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sort.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for sortable entries
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, entry_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, button or link
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
            }
            // Record pending drag with position
            sort.pending_id_write.set(Some(entry_id));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_id_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for insertion slots
pub fn make_on_slot_mouseenter(sort: SortSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id_read.get_untracked().is_some() {
            sort.hover_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id_read.get_untracked().is_some() {
            sort.hover_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(u32, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = sort.dragging_id_read.get_untracked();
        let hover_slot = sort.hover_slot_read.get_untracked();

        // Clear pending state first
        sort.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(slot)) = (dragging_id, hover_slot) {
            end_drag(&sort);
            on_drop(dragged, slot);
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}

/// Move the entry at `from` so it lands at insertion slot `slot` (0..=len).
/// Slots are counted over the list before removal, so a slot past the source
/// index shifts down by one after the entry is taken out.
pub fn reinsert<T>(list: &mut Vec<T>, from: usize, slot: usize) {
    if from >= list.len() {
        return;
    }
    let entry = list.remove(from);
    let mut target = slot;
    if target > from {
        target -= 1;
    }
    let target = target.min(list.len());
    list.insert(target, entry);
}

#[cfg(test)]
mod tests {
    use super::reinsert;

    #[test]
    fn test_reinsert_moves_forward() {
        let mut list = vec!["a", "b", "c", "d"];
        // Drop "a" into the slot after "c" (slot 3 of the original list)
        reinsert(&mut list, 0, 3);
        assert_eq!(list, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reinsert_moves_backward() {
        let mut list = vec!["a", "b", "c", "d"];
        reinsert(&mut list, 2, 0);
        assert_eq!(list, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_reinsert_to_end() {
        let mut list = vec!["a", "b", "c"];
        reinsert(&mut list, 0, 3);
        assert_eq!(list, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reinsert_adjacent_slot_is_noop() {
        let mut list = vec!["a", "b", "c"];
        // Slots 1 and 2 bracket "b"; both leave the order unchanged
        reinsert(&mut list, 1, 1);
        assert_eq!(list, vec!["a", "b", "c"]);
        reinsert(&mut list, 1, 2);
        assert_eq!(list, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reinsert_out_of_range_source() {
        let mut list = vec!["a"];
        reinsert(&mut list, 5, 0);
        assert_eq!(list, vec!["a"]);
    }

    #[test]
    fn test_reinsert_clamps_slot() {
        let mut list = vec!["a", "b"];
        reinsert(&mut list, 0, 99);
        assert_eq!(list, vec!["b", "a"]);
    }
}
