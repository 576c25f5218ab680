//! Exit codes for the `leancanvas` binary.

pub const OK: i32 = 0;
pub const REQUEST_FAILED: i32 = 1; // Endpoint unreachable or answered garbage
pub const CONFIG_ERROR: i32 = 2; // Bad flags, unreadable canvas file, no terminal
