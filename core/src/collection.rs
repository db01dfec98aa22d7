//! In-memory store of todo items.
//!
//! # Design
//! `TodoList` owns a map from `ItemId` to `TodoItem` and nothing else. It has
//! no interior mutability; callers that share it across tasks wrap it in a
//! lock and hold the guard for the whole operation. Listing order is the
//! map's iteration order and carries no meaning.

use std::collections::{HashMap, HashSet};

use crate::error::CollectionError;
use crate::item::{make_items, ItemId, ItemPatch, TodoItem, SEED_TEXTS};

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: HashMap<ItemId, TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding the three bootstrap items.
    pub fn seeded() -> Self {
        let mut list = Self::new();
        list.items
            .extend(make_items(SEED_TEXTS).into_iter().map(|item| (item.id, item)));
        list
    }

    pub fn with_items(items: Vec<TodoItem>) -> Result<Self, CollectionError> {
        let mut list = Self::new();
        list.add_items(items)?;
        Ok(list)
    }

    /// Insert every item and return their ids in input order.
    ///
    /// The batch is rejected as a whole if any id is already stored or
    /// repeats within the batch.
    pub fn add_items(&mut self, items: Vec<TodoItem>) -> Result<Vec<ItemId>, CollectionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if self.items.contains_key(&item.id) || !seen.insert(item.id) {
                return Err(CollectionError::DuplicateId(item.id));
            }
        }

        let ids = items.iter().map(|item| item.id).collect();
        self.items
            .extend(items.into_iter().map(|item| (item.id, item)));
        Ok(ids)
    }

    /// Merge `patch` into the stored item. `None` if the id is unknown.
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> Option<TodoItem> {
        let item = self.items.get_mut(id)?;
        patch.apply(item);
        Some(item.clone())
    }

    pub fn change_state(&mut self, id: &ItemId, done: bool) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.done = done;
                true
            }
            None => false,
        }
    }

    /// Remove each id that is present; unknown ids are skipped.
    pub fn remove_items(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        ids.iter()
            .filter(|id| self.items.remove(*id).is_some())
            .copied()
            .collect()
    }

    pub fn list(&self) -> Vec<TodoItem> {
        self.items.values().cloned().collect()
    }

    pub fn cleared_items(&self) -> Vec<TodoItem> {
        self.items.values().filter(|item| item.done).cloned().collect()
    }

    pub fn get(&self, id: &ItemId) -> Option<&TodoItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
