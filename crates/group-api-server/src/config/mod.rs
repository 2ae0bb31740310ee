mod settings;

pub use settings::{GraphConfig, ServerConfig, Settings};
