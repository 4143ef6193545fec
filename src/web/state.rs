use std::sync::Arc;

use crate::config::Config;
use crate::tools::Toolchain;
use crate::vfs::{IgnoreRules, RootTable};

use super::observability::Metrics;

/// Everything a request handler can reach. Built once before the listener
/// starts; all fields are immutable afterwards, so clones are cheap and
/// concurrent reads need no locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub roots: Arc<RootTable>,
    pub ignores: Arc<IgnoreRules>,
    pub tools: Toolchain,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: Config,
        roots: RootTable,
        ignores: IgnoreRules,
        tools: Toolchain,
    ) -> Self {
        Self {
            config: Arc::new(config),
            roots: Arc::new(roots),
            ignores: Arc::new(ignores),
            tools,
            metrics: Arc::new(Metrics::new()),
        }
    }
}
