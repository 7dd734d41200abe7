//! Terminal rendering of charts and documents.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dental_chart::{
    DetailedChart, Labels, OrderDocument, SLOTS_PER_ROW, SlotState, format_display_group,
};

pub fn document_json(document: &OrderDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

/// Upper jaw row over lower jaw row, labelled by position number.
pub fn chart_grid(slots: &[SlotState]) -> Table {
    let mut table = Table::new();
    apply_chart_table_style(&mut table);
    let (upper, lower): (Vec<&SlotState>, Vec<&SlotState>) =
        slots.iter().partition(|state| state.slot.is_upper());
    for row in [upper, lower] {
        if !row.is_empty() {
            table.add_row(row.into_iter().map(slot_cell).collect::<Vec<_>>());
        }
    }
    for index in 0..SLOTS_PER_ROW {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }
    table
}

/// Selected teeth with the display groups that cover them.
pub fn chart_details(chart: &DetailedChart, labels: &Labels) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tooth"), header_cell("Work")]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for slot in chart.slots.iter().filter(|slot| slot.selected) {
        let groups = chart.groups_for(slot);
        let work = if groups.is_empty() {
            "-".to_string()
        } else {
            groups
                .iter()
                .map(|group| format_display_group(group, labels))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![
            Cell::new(slot.slot.tooth())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(work),
        ]);
    }
    table
}

pub fn print_chart(chart: &DetailedChart, compact: bool, labels: &Labels) {
    let states: Vec<SlotState> = chart
        .slots
        .iter()
        .map(|slot| SlotState {
            slot: slot.slot,
            selected: slot.selected,
        })
        .collect();
    println!("{}", chart_grid(&states));
    if compact {
        return;
    }
    println!("Selected teeth: {}", chart.selected_count);
    if chart.selected_count > 0 {
        println!("{}", chart_details(chart, labels));
    }
}

fn apply_chart_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Disabled);
}

fn slot_cell(state: &SlotState) -> Cell {
    if state.selected {
        Cell::new(state.slot.position)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(state.slot.position).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
