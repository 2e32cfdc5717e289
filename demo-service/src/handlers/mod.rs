pub mod app;
pub mod metrics;

pub use app::{health, index, not_found, redirect_to_index, users};
pub use metrics::metrics;
