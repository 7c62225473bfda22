use std::sync::Arc;

use crate::config::Config;
use crate::llm::InferenceGateway;
use crate::store::SharedNoteStore;

/// Shared handles passed to every request handler.
///
/// Built once at startup and cloned per request; read-only afterwards.
/// Either gateway may be absent when its configuration is incomplete —
/// handlers answer accordingly instead of failing to start.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Option<SharedNoteStore>,
    pub inference: Option<InferenceGateway>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Option<SharedNoteStore>,
        inference: Option<InferenceGateway>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            inference,
        }
    }
}
