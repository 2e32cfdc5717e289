//! service-core: Shared infrastructure for the workspace's HTTP services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
