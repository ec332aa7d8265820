use crate::catalog::Variant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recorded pick for one room category.
///
/// The chosen variant is stored whole, so costs and reports can be produced
/// from the selection state alone even if the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub variant: Variant,
    /// Which numbered preview image was showing when the pick was made.
    /// Image files are numbered from 1 (`sala1.jpg` is the first).
    #[serde(default = "default_image_index")]
    pub image_index: u32,
}

fn default_image_index() -> u32 {
    1
}

/// Category key -> selection. At most one entry per category; a `BTreeMap`
/// keeps iteration order stable across runs and serializations.
pub type SelectionMap = BTreeMap<String, Selection>;

/// Persisted export-gate flag. Absent state deserializes to locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentState {
    pub unlocked: bool,
}
