use serde::{Deserialize, Serialize};

/// One priced material row of a breakdown.
///
/// `qty` and `total` are derived values: `qty = qty_per_sqm * area_sqm` and
/// `total = cost_per_sqm * qty`. They are carried explicitly so renderers
/// never redo the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub name: String,
    pub unit: String,
    pub qty: f64,
    pub unit_cost: f64,
    pub total: f64,
}

/// Itemized material cost for one variant at its reference area.
///
/// `total` is always the sum of the item totals. No rounding happens here;
/// amounts stay full-precision until formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub area_sqm: f64,
    pub items: Vec<CostItem>,
    pub total: f64,
}
