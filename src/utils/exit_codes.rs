//! Exit code utilities and mappings

/// Run finished, or help was shown. Individual posting failures still exit with this.
pub const SUCCESS: i32 = 0;

/// A configuration precondition failed before any network activity
pub const PRECONDITION_FAILED: i32 = 1;

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        SUCCESS => "success",
        PRECONDITION_FAILED => "precondition failed",
        _ => "error",
    }
}
