//! The column board: sole owner of Available/Selected membership and order.
//!
//! Items are created once from the export-available column list and are only
//! ever reclassified between the two lists, never destroyed. Every mutation
//! goes through the board, which is what keeps the partition invariant
//! (each item in exactly one list) out of reach of the UI layer.

use super::{ColumnItem, ListSide};

/// Ordered Available/Selected lists over a fixed item table.
///
/// The `revision` counter is the change notification: it is bumped once per
/// completed mutation (a `move_all` counts as one mutation, not one per
/// item), and downstream consumers rebuild when they see a revision they
/// have not processed yet.
#[derive(Debug, Clone)]
pub struct ColumnBoard {
    /// Indexed by `source_index`; order never changes after construction.
    items: Vec<ColumnItem>,
    available: Vec<usize>,
    selected: Vec<usize>,
    revision: u64,
}

impl ColumnBoard {
    /// Build a board from the export-available column list. Every item
    /// starts in the Available list, in source order.
    pub fn new(columns: &[String]) -> Self {
        let items = columns
            .iter()
            .enumerate()
            .map(|(source_index, label)| ColumnItem {
                label: label.clone(),
                source_index,
                side: ListSide::Available,
            })
            .collect();

        Self {
            items,
            available: (0..columns.len()).collect(),
            selected: Vec::new(),
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ColumnItem] {
        &self.items
    }

    pub fn item(&self, source_index: usize) -> Option<&ColumnItem> {
        self.items.get(source_index)
    }

    /// Current order of one list, as `source_index` references.
    pub fn order(&self, side: ListSide) -> &[usize] {
        match side {
            ListSide::Available => &self.available,
            ListSide::Selected => &self.selected,
        }
    }

    pub fn available(&self) -> &[usize] {
        &self.available
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Canonical submitted value of an item, resolved via its stable
    /// position in the export-available sequence.
    pub fn resolve(&self, source_index: usize) -> &str {
        self.items
            .get(source_index)
            .map(|item| item.label.as_str())
            .unwrap_or("")
    }

    fn order_mut(&mut self, side: ListSide) -> &mut Vec<usize> {
        match side {
            ListSide::Available => &mut self.available,
            ListSide::Selected => &mut self.selected,
        }
    }

    /// Detach from the current list and append to the target, without
    /// bumping the revision. All membership changes funnel through here.
    fn transfer(&mut self, source_index: usize, target: ListSide) {
        let Some(item) = self.items.get(source_index) else {
            return;
        };
        let current = item.side;
        self.order_mut(current).retain(|&ix| ix != source_index);
        self.order_mut(target).push(source_index);
        self.items[source_index].side = target;
    }

    /// Move one item to the other list, appending at the end.
    ///
    /// The caller only ever routes an item owned by the opposite list;
    /// double-click, keyboard, and drag moves all arrive here.
    pub fn move_item(&mut self, source_index: usize, target: ListSide) {
        debug_assert!(
            self.items
                .get(source_index)
                .is_some_and(|item| item.side != target),
            "move_item target must be the other list"
        );
        self.transfer(source_index, target);
        self.revision += 1;
    }

    /// Move every item of the source list into the target, preserving the
    /// source order. Iterates a snapshot so removals cannot skip or
    /// duplicate items, and notifies once for the whole batch. A second
    /// call in a row finds an empty source and is a no-op.
    pub fn move_all(&mut self, target: ListSide) {
        let snapshot: Vec<usize> = self.order(target.other()).to_vec();
        if snapshot.is_empty() {
            return;
        }
        for source_index in snapshot {
            self.transfer(source_index, target);
        }
        self.revision += 1;
    }

    /// Replace one list's order with a permutation of its current items.
    /// Membership is unchanged. Only a Selected reorder notifies: the
    /// Available order is never serialized.
    pub fn reorder(&mut self, side: ListSide, new_order: Vec<usize>) {
        debug_assert!(
            is_permutation(&new_order, self.order(side)),
            "reorder requires a permutation of the current list"
        );
        *self.order_mut(side) = new_order;
        if side == ListSide::Selected {
            self.revision += 1;
        }
    }

    /// Shift the item at position `from` to position `to` within one list.
    /// Keyboard raise/lower and in-pane drags are expressed through this,
    /// which in turn goes through the `reorder` contract.
    pub fn shift(&mut self, side: ListSide, from: usize, to: usize) {
        let order = self.order(side);
        if from == to || from >= order.len() || to >= order.len() {
            return;
        }
        let mut new_order = order.to_vec();
        let source_index = new_order.remove(from);
        new_order.insert(to, source_index);
        self.reorder(side, new_order);
    }
}

fn is_permutation(a: &[usize], b: &[usize]) -> bool {
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}
