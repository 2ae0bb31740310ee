use crate::config::Settings;
use crate::services::GraphClient;

/// Application state shared across handlers. Each request owns its own
/// token and aggregation buffer; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
    pub settings: Settings,
}
