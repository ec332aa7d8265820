//! Estimate assembly.
//!
//! Joins the current selections against the catalog metadata and prices
//! every pick, producing the [`Estimate`] that the renderers consume. The
//! timestamp is injected by the caller so rendering stays deterministic.

use chrono::{DateTime, Utc};

use ambienta_cost::{compute_cost, grand_total};
use ambienta_model::{CostBreakdown, RoomCategory, Selection, SelectionMap};

/// Inputs for building a printable estimate.
#[derive(Debug, Clone, Copy)]
pub struct EstimateInput<'a> {
    /// Catalog categories, in menu order. Supplies display names and
    /// ordering for the document sections.
    pub categories: &'a [RoomCategory],
    pub selections: &'a SelectionMap,
    pub generated_at: DateTime<Utc>,
}

/// One priced room in the estimate.
#[derive(Debug, Clone)]
pub struct EstimateSection {
    pub category_key: String,
    pub category_name: String,
    pub variant_title: String,
    pub breakdown: CostBreakdown,
}

/// A fully priced estimate, ready to render.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<EstimateSection>,
    pub grand_total: f64,
}

impl Estimate {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Price every selection and order the sections by catalog menu order.
///
/// Selections whose category is no longer on the menu are kept rather than
/// dropped; they trail the known sections under their raw key. Costs are
/// recomputed from the stored variant on every call, never cached.
pub fn build_estimate(input: &EstimateInput) -> Estimate {
    let mut sections = Vec::with_capacity(input.selections.len());

    for category in input.categories {
        if let Some(selection) = input.selections.get(&category.key) {
            sections.push(section_for(&category.key, &category.name, selection));
        }
    }
    for (key, selection) in input.selections {
        if !input.categories.iter().any(|category| &category.key == key) {
            sections.push(section_for(key, key, selection));
        }
    }

    let grand_total = grand_total(sections.iter().map(|section| &section.breakdown));
    Estimate {
        generated_at: input.generated_at,
        sections,
        grand_total,
    }
}

fn section_for(key: &str, name: &str, selection: &Selection) -> EstimateSection {
    EstimateSection {
        category_key: key.to_string(),
        category_name: name.to_string(),
        variant_title: selection.variant.title.clone(),
        breakdown: compute_cost(&selection.variant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambienta_model::{MaterialLine, Variant};
    use chrono::TimeZone;

    fn variant(id: &str, title: &str, area: f64, cost: f64) -> Variant {
        Variant {
            id: id.to_string(),
            title: title.to_string(),
            area_sqm: area,
            image_ref: id.to_string(),
            materials: vec![MaterialLine {
                name: "Piso laminado".to_string(),
                unit: "m2".to_string(),
                cost_per_sqm: cost,
                qty_per_sqm: 1.0,
            }],
        }
    }

    fn category(key: &str, name: &str) -> RoomCategory {
        RoomCategory {
            key: key.to_string(),
            name: name.to_string(),
            variants: vec![variant(&format!("{key}-base"), "Base", 10.0, 50.0)],
        }
    }

    fn select(map: &mut SelectionMap, key: &str, variant: Variant) {
        map.insert(
            key.to_string(),
            Selection {
                variant,
                image_index: 1,
            },
        );
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn sections_follow_menu_order_not_map_order() {
        let categories = vec![category("sala", "Sala"), category("comedor", "Comedor")];
        let mut selections = SelectionMap::new();
        // BTreeMap iteration would put comedor first; the menu says sala first.
        select(&mut selections, "comedor", variant("c-1", "Comedor Uno", 10.0, 100.0));
        select(&mut selections, "sala", variant("s-1", "Sala Uno", 12.0, 80.0));

        let estimate = build_estimate(&EstimateInput {
            categories: &categories,
            selections: &selections,
            generated_at: timestamp(),
        });

        let keys: Vec<&str> = estimate
            .sections
            .iter()
            .map(|section| section.category_key.as_str())
            .collect();
        assert_eq!(keys, vec!["sala", "comedor"]);
        assert_eq!(estimate.sections[0].category_name, "Sala");
        assert_eq!(estimate.sections[0].variant_title, "Sala Uno");
    }

    #[test]
    fn grand_total_sums_section_breakdowns() {
        let categories = vec![category("sala", "Sala"), category("comedor", "Comedor")];
        let mut selections = SelectionMap::new();
        select(&mut selections, "sala", variant("s-1", "Sala Uno", 12.0, 80.0));
        select(&mut selections, "comedor", variant("c-1", "Comedor Uno", 10.0, 100.0));

        let estimate = build_estimate(&EstimateInput {
            categories: &categories,
            selections: &selections,
            generated_at: timestamp(),
        });

        assert_eq!(estimate.sections[0].breakdown.total, 12.0 * 80.0);
        assert_eq!(estimate.sections[1].breakdown.total, 10.0 * 100.0);
        assert_eq!(estimate.grand_total, 12.0 * 80.0 + 10.0 * 100.0);
    }

    #[test]
    fn unknown_category_keys_trail_the_menu() {
        let categories = vec![category("sala", "Sala")];
        let mut selections = SelectionMap::new();
        select(&mut selections, "sala", variant("s-1", "Sala Uno", 12.0, 80.0));
        select(&mut selections, "terraza", variant("t-1", "Terraza Uno", 6.0, 40.0));

        let estimate = build_estimate(&EstimateInput {
            categories: &categories,
            selections: &selections,
            generated_at: timestamp(),
        });

        assert_eq!(estimate.sections.len(), 2);
        assert_eq!(estimate.sections[1].category_key, "terraza");
        // No display name to borrow from the menu, the key stands in.
        assert_eq!(estimate.sections[1].category_name, "terraza");
    }

    #[test]
    fn empty_selection_builds_an_empty_estimate() {
        let categories = vec![category("sala", "Sala")];
        let selections = SelectionMap::new();

        let estimate = build_estimate(&EstimateInput {
            categories: &categories,
            selections: &selections,
            generated_at: timestamp(),
        });

        assert!(estimate.is_empty());
        assert_eq!(estimate.grand_total, 0.0);
    }
}
