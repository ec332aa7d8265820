//! Material cost computation.
//!
//! Costs are a pure function of a variant: each material line scales by the
//! variant's reference area (`qty = qty_per_sqm * area`, `total =
//! cost_per_sqm * qty`) and the breakdown total is the sum of line totals.
//! All arithmetic stays in full `f64` precision; [`format_amount`] is the
//! single place amounts get rounded, when rendered for people.

use ambienta_model::{CostBreakdown, CostItem, Variant};

/// Itemize the material cost of one variant at its reference area.
///
/// A variant with no materials yields an empty breakdown with total `0.0`;
/// that is a valid catalog entry, not an error.
pub fn compute_cost(variant: &Variant) -> CostBreakdown {
    let area = variant.area_sqm;
    let items: Vec<CostItem> = variant
        .materials
        .iter()
        .map(|material| {
            let qty = material.qty_per_sqm * area;
            let total = material.cost_per_sqm * qty;
            CostItem {
                name: material.name.clone(),
                unit: material.unit.clone(),
                qty,
                unit_cost: material.cost_per_sqm,
                total,
            }
        })
        .collect();
    let total = items.iter().map(|item| item.total).sum();
    CostBreakdown {
        area_sqm: area,
        items,
        total,
    }
}

/// Sum of breakdown totals across categories.
pub fn grand_total<'a>(breakdowns: impl IntoIterator<Item = &'a CostBreakdown>) -> f64 {
    breakdowns
        .into_iter()
        .map(|breakdown| breakdown.total)
        .sum()
}

/// Render an amount with two decimals and thousands separators, e.g.
/// `1219.2` becomes `"1,219.20"`. The only rounding point in the pipeline.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (offset, digit) in int_part.chars().enumerate() {
        if offset > 0 && (int_part.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{frac_part}")
}
