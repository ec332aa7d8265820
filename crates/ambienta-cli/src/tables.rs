use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ambienta_catalog::Catalog;
use ambienta_cost::{compute_cost, format_amount};
use ambienta_report::Estimate;

/// Room menu: every category with its variants and per-variant totals.
pub fn print_catalog(catalog: &Catalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Variant"),
        header_cell("Description"),
        header_cell("Area m2"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for category in catalog.categories() {
        for (index, variant) in category.variants.iter().enumerate() {
            let breakdown = compute_cost(variant);
            table.add_row(vec![
                category_cell(&category.key, index == 0),
                Cell::new(&variant.id),
                Cell::new(&variant.title),
                Cell::new(variant.area_sqm),
                money_cell(breakdown.total),
            ]);
        }
    }
    println!("{table}");
    println!("pick one with `ambienta select <category> <variant>`");
}

/// One row per selected room plus a grand-total row.
pub fn print_estimate_summary(estimate: &Estimate) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Room"),
        header_cell("Variant"),
        header_cell("Area m2"),
        header_cell("Subtotal"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for section in &estimate.sections {
        table.add_row(vec![
            Cell::new(&section.category_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&section.variant_title),
            Cell::new(section.breakdown.area_sqm),
            money_cell(section.breakdown.total),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All rooms")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        money_cell(estimate.grand_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Itemized material table per selected room.
pub fn print_estimate_details(estimate: &Estimate) {
    for section in &estimate.sections {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Material"),
            header_cell("Unit"),
            header_cell("Qty"),
            header_cell("Unit cost"),
            header_cell("Amount"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Right);
        for item in &section.breakdown.items {
            table.add_row(vec![
                Cell::new(&item.name),
                Cell::new(&item.unit),
                Cell::new(format!("{:.2}", item.qty)),
                money_cell(item.unit_cost),
                money_cell(item.total),
            ]);
        }
        table.add_row(vec![
            Cell::new("Subtotal")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            money_cell(section.breakdown.total).add_attribute(Attribute::Bold),
        ]);
        println!();
        println!("{}: {}", section.category_name, section.variant_title);
        println!("{table}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(110);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(key: &str, first_variant: bool) -> Cell {
    if first_variant {
        Cell::new(key).fg(Color::Blue).add_attribute(Attribute::Bold)
    } else {
        dim_cell(key)
    }
}

fn money_cell(amount: f64) -> Cell {
    Cell::new(format!("${}", format_amount(amount)))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
