//! Application-level utilities for the CryptoNote CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Config path resolution
//! - Opening sealed notes with password retry

mod context;
mod password;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use password::open_with_retry;
pub use resolver::resolve_config_path;
