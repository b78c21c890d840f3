//! Exit code constants for the ide-bridge CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unreadable project)
//! - 2: No matching editor installation was found
//! - 3: The editor process could not be started

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or filesystem failure.
pub const USER_ERROR: i32 = 1;

/// No installation matched the request.
pub const NOT_FOUND: i32 = 2;

/// The external editor could not be launched.
pub const LAUNCH_FAILURE: i32 = 3;
