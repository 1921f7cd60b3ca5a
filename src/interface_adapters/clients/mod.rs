// Outbound adapters implementing the Instagram source port.

pub mod graph;
pub mod mock;

pub use graph::{GraphCredentials, GraphInstagramClient};
pub use mock::MockInstagramSource;
