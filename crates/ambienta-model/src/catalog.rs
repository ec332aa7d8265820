use serde::{Deserialize, Serialize};

/// One material consumed by a variant, priced per square meter of floor area.
///
/// Quantities in the catalog are densities: `qty_per_sqm` units of the
/// material go into each square meter, at `cost_per_sqm` currency units per
/// square meter covered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub name: String,
    /// Unit the scaled quantity is expressed in (e.g. "m2", "l", "pza").
    pub unit: String,
    pub cost_per_sqm: f64,
    pub qty_per_sqm: f64,
}

/// A concrete furnishing option for a room category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub title: String,
    /// Reference floor area the material densities scale against.
    /// Catalog data guarantees this is positive; it is not re-checked at use.
    pub area_sqm: f64,
    /// Display-resource reference for this variant's preview imagery.
    pub image_ref: String,
    /// May be empty; an option with no itemized materials simply costs nothing.
    pub materials: Vec<MaterialLine>,
}

/// A room category offering a non-empty list of variants to pick from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCategory {
    /// Unique key, also the directory name under the image base
    /// (`<base>/<key>/<key><index>.<ext>`).
    pub key: String,
    pub name: String,
    pub variants: Vec<Variant>,
}

impl RoomCategory {
    /// Look up a variant of this category by id.
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }
}
