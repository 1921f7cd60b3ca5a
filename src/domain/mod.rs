// Domain layer: action payloads, errors and the ports adapters implement.

pub mod errors;
pub mod instagram;
pub mod ports;

pub use errors::ActionError;
pub use instagram::{InstagramError, InstagramSource, Post, Profile, ProfileFeed};
pub use ports::Clock;
