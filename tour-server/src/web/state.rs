//! Application state for the web layer.

use std::sync::Arc;

use crate::crossings::CrossingTable;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything here is immutable after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Bundled crossing table
    pub crossings: Arc<CrossingTable>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(crossings: CrossingTable, config: PlannerConfig) -> Self {
        Self {
            crossings: Arc::new(crossings),
            config: Arc::new(config),
        }
    }
}
