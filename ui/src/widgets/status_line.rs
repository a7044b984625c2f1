use egui::{Color32, Ui};
use roster_business::{FetchUsersCommand, FetchUsersCompute, UsersState, ViewParams};
use roster_states::StateCtx;

/// Fetch status below the table: spinner while loading, a generic error
/// label on failure (details stay in the log), an empty-store hint, and the
/// load-more button when settled.
pub fn status_line(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let (loading, errored) = match state_ctx.cached::<FetchUsersCompute>() {
        Some(cache) => (cache.is_loading(), cache.error_message().is_some()),
        None => (false, false),
    };

    if loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
        return;
    }

    if errored {
        ui.colored_label(Color32::RED, "There was an error");
        return;
    }

    if state_ctx.state::<UsersState>().is_empty() {
        ui.label("No users");
    }

    if ui.button("Load more results").clicked() {
        state_ctx.update::<ViewParams>(ViewParams::advance_page);
        state_ctx.enqueue_command::<FetchUsersCommand>();
    }

    if let Some(fetched_at) = state_ctx.state::<UsersState>().last_fetch() {
        ui.small(format!(
            "Last updated {}",
            fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
}
