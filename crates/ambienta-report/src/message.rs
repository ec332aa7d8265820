//! Plain-text estimate summary for messaging hand-off.

use ambienta_cost::format_amount;

use crate::estimate::Estimate;

/// One line per room plus the grand total, ready to drop into a chat
/// message. Deliberately plain text: the receiving side is a phone
/// messenger, not a renderer.
pub fn handoff_message(estimate: &Estimate) -> String {
    let mut lines = Vec::with_capacity(estimate.sections.len() + 2);
    lines.push("Cotización Ambienta".to_string());
    for section in &estimate.sections {
        lines.push(format!(
            "{}: {} - {} m2 - ${}",
            section.category_name,
            section.variant_title,
            section.breakdown.area_sqm,
            format_amount(section.breakdown.total),
        ));
    }
    lines.push(format!("Total: ${}", format_amount(estimate.grand_total)));
    lines.join("\n")
}
