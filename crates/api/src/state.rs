use std::sync::Arc;

use tradepost_core::category::CategoryTree;
use tradepost_db::flow::ListingFlow;
use tradepost_db::KeyValueStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// The listing wizard; owns the cancellation state of delayed steps.
    pub flow: Arc<ListingFlow>,
    /// The store the flow persists through, for direct listing reads.
    pub store: Arc<dyn KeyValueStore>,
    /// Category hierarchy served to the category step.
    pub tree: CategoryTree,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: ServerConfig) -> Self {
        let flow = ListingFlow::new(Arc::clone(&store), config.flow_config());
        Self {
            flow: Arc::new(flow),
            store,
            tree: CategoryTree::standard(),
            config: Arc::new(config),
        }
    }
}
