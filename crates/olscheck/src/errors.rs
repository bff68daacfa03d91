//! Exit codes for olscheck
//!
//! A run that finishes is a success even when some prompts failed;
//! the report carries those. Only the health gate fails the process.

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when the OLS health check does not return the sentinel
pub const EXIT_HEALTH_CHECK_FAILED: i32 = 1;

/// Exit code when `olscheck validate` reports a failed kind check
pub const EXIT_VALIDATION_FAILED: i32 = 1;
