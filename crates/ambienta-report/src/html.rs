//! Printable XHTML estimate document.
//!
//! Produces a single self-contained document: one heading and itemized cost
//! table per selected room, then the grand total. Styling is embedded so the
//! file prints as-is with no external assets.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use ambienta_cost::format_amount;

use crate::error::ReportError;
use crate::estimate::{Estimate, EstimateSection};

/// XHTML namespace.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

const DOCUMENT_TITLE: &str = "Cotización Ambienta";

const STYLE: &str = "
    body { font-family: Arial, sans-serif; color: #1f2430; margin: 2rem; }
    h1 { font-size: 1.6rem; margin-bottom: 0.2rem; }
    h2 { font-size: 1.2rem; margin-bottom: 0.2rem; }
    p.meta { color: #6b7280; margin-top: 0; }
    p.pick { margin-top: 0; }
    table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
    th, td { border: 1px solid #d1d5db; padding: 0.35rem 0.6rem; text-align: left; }
    td.num { text-align: right; }
    tr.subtotal td { font-weight: bold; }
    p.grand-total { font-size: 1.2rem; font-weight: bold; }
    @media print { body { margin: 0; } }
  ";

/// Render the estimate to an XHTML string.
///
/// An empty estimate is refused before any assembly work happens.
pub fn render_html(estimate: &Estimate) -> Result<String, ReportError> {
    if estimate.is_empty() {
        return Err(ReportError::EmptySelection);
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns", XHTML_NS));
    html.push_attribute(("lang", "es"));
    writer.write_event(Event::Start(html))?;

    writer.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    writer.write_event(Event::Empty(meta))?;
    write_text_element(&mut writer, "title", DOCUMENT_TITLE)?;
    write_text_element(&mut writer, "style", STYLE)?;
    writer.write_event(Event::End(BytesEnd::new("head")))?;

    writer.write_event(Event::Start(BytesStart::new("body")))?;
    write_text_element(&mut writer, "h1", DOCUMENT_TITLE)?;
    let generated = format!("Generado el {}", estimate.generated_at.format("%Y-%m-%d %H:%M UTC"));
    write_classed_text(&mut writer, "p", "meta", &generated)?;

    for section in &estimate.sections {
        write_section(&mut writer, section)?;
    }

    let total_line = format!("Total general: ${}", format_amount(estimate.grand_total));
    write_classed_text(&mut writer, "p", "grand-total", &total_line)?;

    writer.write_event(Event::End(BytesEnd::new("body")))?;
    writer.write_event(Event::End(BytesEnd::new("html")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_section<W: std::io::Write>(
    writer: &mut Writer<W>,
    section: &EstimateSection,
) -> Result<(), ReportError> {
    write_text_element(writer, "h2", &section.category_name)?;
    let pick = format!("{}, {} m2", section.variant_title, section.breakdown.area_sqm);
    write_classed_text(writer, "p", "pick", &pick)?;

    writer.write_event(Event::Start(BytesStart::new("table")))?;

    writer.write_event(Event::Start(BytesStart::new("thead")))?;
    writer.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in ["Material", "Unidad", "Cantidad", "Precio unitario", "Importe"] {
        write_text_element(writer, "th", header)?;
    }
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    writer.write_event(Event::End(BytesEnd::new("thead")))?;

    writer.write_event(Event::Start(BytesStart::new("tbody")))?;
    for item in &section.breakdown.items {
        writer.write_event(Event::Start(BytesStart::new("tr")))?;
        write_text_element(writer, "td", &item.name)?;
        write_text_element(writer, "td", &item.unit)?;
        write_classed_text(writer, "td", "num", &format!("{:.2}", item.qty))?;
        write_classed_text(writer, "td", "num", &format!("${}", format_amount(item.unit_cost)))?;
        write_classed_text(writer, "td", "num", &format!("${}", format_amount(item.total)))?;
        writer.write_event(Event::End(BytesEnd::new("tr")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tbody")))?;

    writer.write_event(Event::Start(BytesStart::new("tfoot")))?;
    let mut row = BytesStart::new("tr");
    row.push_attribute(("class", "subtotal"));
    writer.write_event(Event::Start(row))?;
    let mut label = BytesStart::new("td");
    label.push_attribute(("colspan", "4"));
    writer.write_event(Event::Start(label))?;
    writer.write_event(Event::Text(BytesText::new("Subtotal")))?;
    writer.write_event(Event::End(BytesEnd::new("td")))?;
    write_classed_text(
        writer,
        "td",
        "num",
        &format!("${}", format_amount(section.breakdown.total)),
    )?;
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    writer.write_event(Event::End(BytesEnd::new("tfoot")))?;

    writer.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

/// Write a simple text element.
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), ReportError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a text element carrying a `class` attribute.
fn write_classed_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    class: &str,
    text: &str,
) -> Result<(), ReportError> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("class", class));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
