mod client;
pub use client::GitHubClient;

pub mod events;
pub use events::{Event, EventKind};
