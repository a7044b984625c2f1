use egui::Ui;
use roster_business::{SortBy, UsersState, ViewParams};
use roster_states::StateCtx;

/// Top-bar controls: row coloring, country sort toggle, reset, country
/// filter. Each control reads the current `ViewParams` and writes back
/// through the ctx so dependent computes get marked dirty.
pub fn toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let params = state_ctx.state::<ViewParams>().clone();

    let color_label = if params.show_colors {
        "Plain rows"
    } else {
        "Color rows"
    };
    if ui.button(color_label).clicked() {
        state_ctx.update::<ViewParams>(ViewParams::toggle_colors);
    }

    let sort_label = if params.sorting == SortBy::Country {
        "Unsort by country"
    } else {
        "Sort by country"
    };
    if ui.button(sort_label).clicked() {
        state_ctx.update::<ViewParams>(ViewParams::toggle_sort_by_country);
    }

    if ui.button("Reset users").clicked() {
        state_ctx.state_mut::<UsersState>().reset();
    }

    let mut filter = params.filter_country;
    let response = ui.add(
        egui::TextEdit::singleline(&mut filter)
            .hint_text("Filter by country")
            .desired_width(160.0),
    );
    if response.changed() {
        state_ctx.update::<ViewParams>(|params| params.set_filter_country(filter));
    }
}
