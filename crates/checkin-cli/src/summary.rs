use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use checkin_model::NameTable;
use checkin_standards::{
    Destinations, FlightTimes, WifiBundles, flight_times_for, wifi_bundles_for,
};
use checkin_validate::Form;

/// Render the form as a Field/Value/Status table, one row per field in
/// prompt order.
pub fn render_form_table(form: &Form) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in form.rows() {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(row.value.clone().unwrap_or_else(|| "-".to_string())),
            status_cell(row.valid),
        ]);
    }
    table.to_string()
}

/// Render the catalogs: one table per offer list, plus the per-destination
/// offer matrix.
pub fn render_catalog() -> String {
    let mut sections = vec![
        name_table("Destinations", Destinations::entries()),
        name_table("Flight time ranges", FlightTimes::entries()),
        name_table("WIFI bundles", WifiBundles::entries()),
    ];

    let mut offers = Table::new();
    offers.set_header(vec![
        header_cell("Destination"),
        header_cell("Flight time ranges offered"),
        header_cell("WIFI bundles offered"),
    ]);
    apply_table_style(&mut offers);
    for (code, name) in Destinations::entries() {
        offers.add_row(vec![
            Cell::new(name),
            Cell::new(names_for::<FlightTimes>(flight_times_for(*code))),
            Cell::new(names_for::<WifiBundles>(wifi_bundles_for(*code))),
        ]);
    }
    sections.push(format!("Offers by destination:\n{offers}"));
    sections.join("\n\n")
}

fn name_table(title: &str, entries: &[(u32, &str)]) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Name")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (code, name) in entries {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    format!("{title}:\n{table}")
}

fn names_for<T: NameTable>(codes: &[u32]) -> String {
    codes
        .iter()
        .filter_map(|code| T::name(*code))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
