//! Table header rendering with per-column sort buttons.

use egui::{Response, RichText, Ui};
use egui_extras::TableRow;
use roster_business::SortBy;

/// Renders the header row. First/last/country cells are clickable and pick
/// the sort key, with the active key highlighted; returns the clicked key,
/// if any.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, active: SortBy) -> Option<SortBy> {
    let mut clicked = None;

    header.col(|ui| {
        ui.centered_and_justified(|ui| {
            ui.strong("#");
        });
    });
    header.col(|ui| {
        if sort_header_cell(ui, "First name", active == SortBy::Name).clicked() {
            clicked = Some(SortBy::Name);
        }
    });
    header.col(|ui| {
        if sort_header_cell(ui, "Last name", active == SortBy::Last).clicked() {
            clicked = Some(SortBy::Last);
        }
    });
    header.col(|ui| {
        if sort_header_cell(ui, "Country", active == SortBy::Country).clicked() {
            clicked = Some(SortBy::Country);
        }
    });
    header.col(|ui| {
        ui.centered_and_justified(|ui| {
            ui.strong("Actions");
        });
    });

    clicked
}

#[inline]
fn sort_header_cell(ui: &mut Ui, label: &str, active: bool) -> Response {
    ui.centered_and_justified(|ui| {
        ui.selectable_label(active, RichText::new(label).strong())
    })
    .inner
}
