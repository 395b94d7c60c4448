//! Process-wide resource setup for the binary:
//! - Logger (plain colored or JSON lines)
//! - HTTP client

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
