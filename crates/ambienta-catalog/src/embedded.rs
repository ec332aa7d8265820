//! Embedded catalog data.
//!
//! The builtin room menu is embedded at compile time with `include_str!()`,
//! so the binary carries its own catalog and needs no data directory at
//! runtime. Deployments can swap the menu through `Catalog::from_json`.

/// Builtin room/variant menu, six categories with three variants each.
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");
