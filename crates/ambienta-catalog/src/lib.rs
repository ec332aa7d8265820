//! Room/variant catalog.
//!
//! The catalog is the read-only menu the rest of the system works from: a
//! list of room categories, each offering furnishing variants with priced
//! material lines. It is loaded once and never mutated.

mod embedded;
pub mod error;

pub use error::CatalogError;

use ambienta_model::{RoomCategory, Variant};
use std::collections::BTreeSet;

/// Validated, immutable room menu. Category order follows the source data.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<RoomCategory>,
}

impl Catalog {
    /// Load the menu embedded in the binary. Failure here means a broken
    /// build artifact, not bad user input.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(embedded::CATALOG_JSON)
    }

    /// Parse and validate a caller-supplied menu, for deployments that
    /// override the builtin one.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<RoomCategory> = serde_json::from_str(json)?;
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> &[RoomCategory] {
        &self.categories
    }

    pub fn find_category(&self, key: &str) -> Option<&RoomCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Like [`find_category`](Self::find_category), but a missing key is an
    /// error. Callers use this when the key came from configuration or a
    /// stored selection rather than free-form input.
    pub fn require_category(&self, key: &str) -> Result<&RoomCategory, CatalogError> {
        self.find_category(key)
            .ok_or_else(|| CatalogError::UnknownCategory {
                key: key.to_string(),
            })
    }

    pub fn find_variant(&self, category_key: &str, variant_id: &str) -> Option<&Variant> {
        self.find_category(category_key)
            .and_then(|category| category.variant(variant_id))
    }
}

fn validate(categories: &[RoomCategory]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for category in categories {
        if !seen.insert(category.key.as_str()) {
            return Err(CatalogError::invalid(format!(
                "duplicate category key: {}",
                category.key
            )));
        }
        if category.variants.is_empty() {
            return Err(CatalogError::invalid(format!(
                "category {} has no variants",
                category.key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog parses");
        assert_eq!(catalog.categories().len(), 6);
        for category in catalog.categories() {
            assert!(
                !category.variants.is_empty(),
                "category {} must offer variants",
                category.key
            );
            for variant in &category.variants {
                assert!(variant.area_sqm > 0.0, "variant {} area", variant.id);
            }
        }
    }

    #[test]
    fn category_lookup_by_key() {
        let catalog = Catalog::builtin().expect("builtin catalog parses");
        assert!(catalog.find_category("sala").is_some());
        assert!(catalog.find_category("garage").is_none());
        let err = catalog.require_category("garage").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { key } if key == "garage"));
    }

    #[test]
    fn variant_lookup() {
        let catalog = Catalog::builtin().expect("builtin catalog parses");
        let variant = catalog
            .find_variant("sala", "sala-nordica")
            .expect("known variant");
        assert_eq!(variant.area_sqm, 12.0);
        assert_eq!(variant.materials.len(), 3);
        assert!(catalog.find_variant("sala", "sala-imaginaria").is_none());
    }

    #[test]
    fn duplicate_category_keys_rejected() {
        let json = r#"[
            {"key": "sala", "name": "Sala", "variants": [
                {"id": "a", "title": "A", "area_sqm": 1.0, "image_ref": "sala1", "materials": []}
            ]},
            {"key": "sala", "name": "Sala bis", "variants": [
                {"id": "b", "title": "B", "area_sqm": 1.0, "image_ref": "sala2", "materials": []}
            ]}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }));
    }

    #[test]
    fn empty_variant_list_rejected() {
        let json = r#"[{"key": "sala", "name": "Sala", "variants": []}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
