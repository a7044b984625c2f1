use roster_business::{FetchUsersCommand, FetchUsersCompute, FetchUsersResult, UsersState};
use roster_states::Time;

use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
    fetched_initial: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetched_initial: false,
        }
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Move a finished fetch out of the cache and into the record store.
    ///
    /// Runs on the UI thread between syncs, so the batch lands in
    /// `UsersState` exactly once and the cache goes back to `Idle`.
    fn apply_fetch_result(&mut self) {
        let batch = match self.state.ctx.cached::<FetchUsersCompute>() {
            Some(cache) => match &cache.result {
                FetchUsersResult::Loaded(users) => Some(users.clone()),
                _ => None,
            },
            None => None,
        };

        let Some(batch) = batch else {
            return;
        };

        let now = *self.state.ctx.state::<Time>().as_ref();
        self.state
            .ctx
            .state_mut::<UsersState>()
            .append_batch(batch, now);
        self.state
            .ctx
            .update::<FetchUsersCompute>(|cache| cache.result = FetchUsersResult::Idle);

        // Make the appended batch visible in the same frame.
        self.state.ctx.sync_computes();
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.update::<Time>(Time::set_now);

        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.apply_fetch_result();

        if !self.fetched_initial {
            self.fetched_initial = true;
            self.state.ctx.enqueue_command::<FetchUsersCommand>();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::toolbar(&mut self.state.ctx, ui);
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Roster");
            ui.separator();

            widgets::users_table(&mut self.state.ctx, ui);
            widgets::status_line(&mut self.state.ctx, ui);
        });

        let loading = self
            .state
            .ctx
            .cached::<FetchUsersCompute>()
            .is_some_and(FetchUsersCompute::is_loading);
        if loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Run background jobs
        self.state.ctx.run_computed();
    }
}
