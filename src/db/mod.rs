//! Database module
//!
//! Connection handling and transactional script execution.

pub mod connection;
pub mod runner;

pub use connection::Database;
