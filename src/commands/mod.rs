//! Command implementations

mod analyze;
mod config;
mod similar;
mod title;

pub use analyze::analyze;
pub use config::config;
pub use similar::similar;
pub use title::title;
