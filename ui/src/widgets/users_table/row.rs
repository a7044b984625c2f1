//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::UserRecord;

use super::cells::{render_delete_button, render_index_cell, render_text_cell};

/// Renders a single user row. Returns the uuid to delete when the row's
/// delete button was clicked.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    index: usize,
    user: &UserRecord,
) -> Option<String> {
    let mut delete = None;

    row.col(|ui| {
        render_index_cell(ui, index);
    });
    row.col(|ui| {
        render_text_cell(ui, user.first_name());
    });
    row.col(|ui| {
        render_text_cell(ui, user.last_name());
    });
    row.col(|ui| {
        render_text_cell(ui, user.country());
    });
    row.col(|ui| {
        if render_delete_button(ui) {
            delete = Some(user.uuid().to_string());
        }
    });

    delete
}
