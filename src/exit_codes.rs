//! Exit code constants for the runproj CLI.
//!
//! - 0: Success (including accepted expected failures)
//! - 1: User error (bad args, invalid config, missing script)
//! - 2: The launched child exited with an unaccepted code
//! - 3: The runtime could not be spawned
//! - 4: The preparation step failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or missing script.
pub const USER_ERROR: i32 = 1;

/// The child process ran and its exit code was not accepted.
pub const CHILD_FAILURE: i32 = 2;

/// The runtime executable could not be started.
pub const SPAWN_FAILURE: i32 = 3;

/// Instantiating or precompiling the project failed.
pub const PREPARE_FAILURE: i32 = 4;
