//! Cell rendering helpers for the users table.

use egui::{RichText, Ui};

/// Renders the row index with a left border indicator.
#[inline]
pub fn render_index_cell(ui: &mut Ui, index: usize) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        egui::Stroke::new(2.0, border_color),
    );

    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format!("{}", index + 1)).monospace());
    });
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the delete button; true when clicked.
#[inline]
pub fn render_delete_button(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| ui.button("Delete")).inner.clicked()
}
