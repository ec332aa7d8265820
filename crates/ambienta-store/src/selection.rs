//! Selection state.
//!
//! The in-memory map is authoritative for a session. Every mutation mirrors
//! the whole map to the durable store; when that write fails the failure is
//! logged and swallowed, the session keeps working and the next successful
//! write catches the store up.

use ambienta_model::{Selection, SelectionMap, Variant};

use crate::backend::StateStore;
use crate::keys;

/// Category-to-selection map with write-through persistence.
#[derive(Debug, Default)]
pub struct SelectionStore {
    selections: SelectionMap,
}

impl SelectionStore {
    /// Restore selections from the durable store. A missing record is the
    /// normal first-run state; an unreadable or corrupt one is logged and
    /// treated the same way.
    pub fn load(store: &dyn StateStore) -> Self {
        let selections = match store.get(keys::SELECTIONS) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!("stored selections are corrupt, starting empty: {err}");
                    SelectionMap::new()
                }
            },
            Ok(None) => SelectionMap::new(),
            Err(err) => {
                tracing::warn!("could not read stored selections, starting empty: {err}");
                SelectionMap::new()
            }
        };
        Self { selections }
    }

    /// Record a pick for a category, replacing any previous pick for the
    /// same category. Map semantics: re-selecting is idempotent per key.
    pub fn select(
        &mut self,
        store: &mut dyn StateStore,
        category_key: &str,
        variant: &Variant,
        image_index: u32,
    ) {
        self.selections.insert(
            category_key.to_string(),
            Selection {
                variant: variant.clone(),
                image_index,
            },
        );
        self.persist(store);
    }

    /// Drop every selection and delete the persisted record.
    pub fn reset(&mut self, store: &mut dyn StateStore) {
        self.selections.clear();
        if let Err(err) = store.delete(keys::SELECTIONS) {
            tracing::warn!("could not delete stored selections: {err}");
        }
    }

    pub fn current(&self, category_key: &str) -> Option<&Selection> {
        self.selections.get(category_key)
    }

    pub fn all(&self) -> &SelectionMap {
        &self.selections
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Category keys in stable (sorted) order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.selections.keys().cloned().collect()
    }

    fn persist(&self, store: &mut dyn StateStore) {
        let raw = match serde_json::to_string(&self.selections) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("could not serialize selections, state not persisted: {err}");
                return;
            }
        };
        if let Err(err) = store.set(keys::SELECTIONS, &raw) {
            tracing::warn!("could not persist selections, continuing in memory: {err}");
        }
    }
}
