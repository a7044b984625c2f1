use crate::command::CommandFuture;

/// Spawns command futures.
///
/// On native targets this reuses the ambient Tokio runtime when one exists
/// (the `#[tokio::test]` case) and otherwise owns a small background
/// runtime. On wasm everything runs on the single JS thread via
/// `wasm_bindgen_futures`.
pub(crate) struct CommandRuntime {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
    // Kept alive for the lifetime of the ctx; only present when no ambient
    // runtime was found at construction time.
    #[cfg(not(target_arch = "wasm32"))]
    _owned: Option<tokio::runtime::Runtime>,
}

#[cfg(not(target_arch = "wasm32"))]
impl CommandRuntime {
    pub(crate) fn new() -> Self {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Self {
                handle,
                _owned: None,
            },
            Err(_) => {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .worker_threads(2)
                    .build()
                    .expect("failed to build command runtime");
                Self {
                    handle: runtime.handle().clone(),
                    _owned: Some(runtime),
                }
            }
        }
    }

    pub(crate) fn spawn(&self, fut: CommandFuture) {
        self.handle.spawn(fut);
    }
}

#[cfg(target_arch = "wasm32")]
impl CommandRuntime {
    pub(crate) fn new() -> Self {
        Self {}
    }

    pub(crate) fn spawn(&self, fut: CommandFuture) {
        wasm_bindgen_futures::spawn_local(fut);
    }
}
