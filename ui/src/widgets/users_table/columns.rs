//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const INDEX_WIDTH: f32 = 40.0;
pub const ACTIONS_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in order:
/// - Index (fixed, with border indicator)
/// - First name (flexible)
/// - Last name (flexible)
/// - Country (flexible)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(INDEX_WIDTH),
        Column::remainder().at_least(80.0),
        Column::remainder().at_least(80.0),
        Column::remainder().at_least(100.0),
        Column::exact(ACTIONS_WIDTH),
    ]
}
