pub mod aggregator;
pub mod graph;

pub use aggregator::{GroupAggregator, ResolveFailure};
pub use graph::{GraphClient, GroupMember};
