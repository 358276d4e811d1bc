pub mod analysis;
pub mod fetch;
pub mod metrics;
pub mod providers;
pub mod recommendation;
pub mod retention;
pub mod scoring;
pub mod watch_time;

pub use analysis::analyze;
