//! User fetch: compute-shaped cache + manual-only command.
//!
//! - [`FetchUsersCompute`] stores the latest fetch status/result. It has no
//!   dependencies and a no-op `compute()`; only the command updates it.
//! - [`FetchUsersCommand`] performs the network IO. Dispatching it again
//!   cancels the in-flight run and outdates its updater, so out-of-order
//!   responses cannot clobber a newer page.
//!
//! The UI reads the cache via `ctx.cached::<FetchUsersCompute>()`, moves a
//! `Loaded` batch into `UsersState` on the next frame, and then clears the
//! cache back to `Idle`.

use std::any::{Any, TypeId};

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, LatestOnlyUpdater, Updater,
    assign_impl,
};
use tokio_util::sync::CancellationToken;

use crate::api;
use crate::config::BusinessConfig;
use crate::records::UserRecord;
use crate::view_params::ViewParams;

/// Status/result of the last fetch.
#[derive(Debug, Clone, Default)]
pub enum FetchUsersResult {
    /// No request in flight and no unconsumed result.
    #[default]
    Idle,

    /// A fetch is currently in flight.
    Loading,

    /// The last fetch succeeded with this batch, not yet moved into the
    /// record store.
    Loaded(Vec<UserRecord>),

    /// The last fetch failed; the message goes to the log, the UI shows a
    /// generic label.
    Error(String),
}

/// Compute-shaped cache for the fetch status.
#[derive(Debug, Clone, Default)]
pub struct FetchUsersCompute {
    pub result: FetchUsersResult,
}

impl FetchUsersCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, FetchUsersResult::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            FetchUsersResult::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl Compute for FetchUsersCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn deps(&self) -> ComputeDeps {
        // Cache updated by a command; no derived dependencies.
        const STATE_IDS: [TypeId; 0] = [];
        const COMPUTE_IDS: [TypeId; 0] = [];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op. Network IO must not run inside a compute;
        // dispatch `FetchUsersCommand` to update this cache.
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that fetches the page named by `ViewParams`.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let page = snap.state::<ViewParams>().current_page;

        Box::pin(async move {
            updater.set(FetchUsersCompute {
                result: FetchUsersResult::Loading,
            });

            let fetch = api::fetch_users(
                &config.api_base_url,
                config.results_per_page,
                config.seed.as_deref(),
                page,
            );

            tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("FetchUsersCommand: page {page} superseded");
                }
                result = fetch => match result {
                    Ok(users) => {
                        updater.set(FetchUsersCompute {
                            result: FetchUsersResult::Loaded(users),
                        });
                    }
                    Err(err) => {
                        log::error!("FetchUsersCommand: page {page} failed: {err}");
                        updater.set(FetchUsersCompute {
                            result: FetchUsersResult::Error(err.to_string()),
                        });
                    }
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_accessors_follow_result() {
        let idle = FetchUsersCompute::default();
        assert!(!idle.is_loading());
        assert!(idle.error_message().is_none());

        let loading = FetchUsersCompute {
            result: FetchUsersResult::Loading,
        };
        assert!(loading.is_loading());

        let failed = FetchUsersCompute {
            result: FetchUsersResult::Error("boom".to_string()),
        };
        assert_eq!(failed.error_message(), Some("boom"));
    }
}
