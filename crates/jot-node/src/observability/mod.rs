//! Structured logging for the Jot node.

mod logging;

pub use logging::{init_logging, LogFormat};
