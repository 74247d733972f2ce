//! Data source and grid derivation services

pub mod github;
pub mod grid;

pub use github::{CalendarSource, GitHubClient};
pub use grid::GridBuilder;
