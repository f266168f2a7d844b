//! Utility modules.

/// Log sanitization utilities to keep keys and large payloads out of logs.
pub mod log_sanitizer;
