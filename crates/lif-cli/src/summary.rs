use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::InspectResult;

pub fn print_written(kind: &str, path: &Path) {
    println!("{kind}: {}", path.display());
}

pub fn print_inspect(result: &InspectResult) {
    println!("Project: {}", display_or_dash(&result.project));
    println!("Creator: {}", display_or_dash(&result.creator));
    if let Some(at) = &result.exported_at {
        println!("Exported: {at}");
    }
    println!("{}", inspect_table(result));
}

/// Build the per-layout table.
pub fn inspect_table(result: &InspectResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Layout"),
        header_cell("Name"),
        header_cell("Level"),
        header_cell("Nodes"),
        header_cell("Stations"),
        header_cell("Edges"),
        header_cell("Incomplete"),
        header_cell("Background"),
    ]);
    apply_table_style(&mut table);
    for index in 3..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);

    let mut totals = [0usize; 4];
    for layout in &result.layouts {
        totals[0] += layout.nodes;
        totals[1] += layout.stations;
        totals[2] += layout.edges;
        totals[3] += layout.incomplete;
        table.add_row(vec![
            Cell::new(&layout.layout_id).fg(Color::Cyan),
            Cell::new(&layout.name),
            Cell::new(&layout.level_id),
            Cell::new(layout.nodes),
            Cell::new(layout.stations),
            Cell::new(layout.edges),
            count_cell(layout.incomplete, Color::Yellow),
            flag_cell(layout.has_background),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} layouts", result.layouts.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        Cell::new(totals[1]).add_attribute(Attribute::Bold),
        Cell::new(totals[2]).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(present: bool) -> Cell {
    if present {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
