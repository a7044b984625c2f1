//! The users table, split into focused components:
//! - `columns`: column definitions and widths
//! - `header`: header rendering with sort-key buttons
//! - `row`: row rendering with the delete action
//! - `cells`: cell rendering helpers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::{UsersState, ViewParams, VisibleUsersCompute};
use roster_states::StateCtx;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT};

/// Render the visible users. Intents raised inside the table (sort clicks,
/// row deletes) are collected during the pass and applied afterwards, so
/// the ctx is not mutated while the cached list is borrowed.
pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    if state_ctx.state::<UsersState>().is_empty() {
        return;
    }
    let visible = match state_ctx.cached::<VisibleUsersCompute>() {
        Some(compute) => compute.users.clone(),
        None => return,
    };
    let params = state_ctx.state::<ViewParams>();
    let show_colors = params.show_colors;
    let active_sort = params.sorting;

    let mut sort_request = None;
    let mut delete_request = None;

    let mut builder = TableBuilder::new(ui).striped(show_colors);
    for column in columns::table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header_row| {
            sort_request = header::render_table_header(&mut header_row, active_sort);
        })
        .body(|mut body| {
            for (index, user) in visible.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut table_row| {
                    if let Some(uuid) = row::render_user_row(&mut table_row, index, user) {
                        delete_request = Some(uuid);
                    }
                });
            }
        });

    if let Some(sorting) = sort_request {
        state_ctx.update::<ViewParams>(|params| params.set_sorting(sorting));
    }
    if let Some(uuid) = delete_request {
        state_ctx.state_mut::<UsersState>().delete_user(&uuid);
    }
}
