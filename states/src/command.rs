use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// Boxed future returned by a command; `Send` so it can run off-thread on
/// native targets (on wasm everything stays on the JS thread anyway).
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only async side effect.
///
/// Commands are registered once via `StateCtx::record_command` and then
/// dispatched explicitly (`dispatch` / `enqueue_command`). They never run
/// implicitly. The snapshot is taken at dispatch time; the updater refuses
/// results once a newer dispatch of the same command type exists, and the
/// token is cancelled by that newer dispatch.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
