use roster_business::{
    BusinessConfig, FetchUsersCommand, FetchUsersCompute, UsersState, ViewParams,
    VisibleUsersCompute,
};
use roster_states::{StateCtx, Time};

/// The main application state: a `StateCtx` with every domain state,
/// compute and command registered.
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State wired against a test server instead of the public API.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(UsersState::default());
        ctx.add_state(ViewParams::default());

        ctx.record_compute(FetchUsersCompute::default());
        ctx.record_compute(VisibleUsersCompute::default());

        ctx.record_command(FetchUsersCommand);

        Self { ctx }
    }
}
