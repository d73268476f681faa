//! Clock display formatting

/// Render a number of seconds as `M:SS`
///
/// Minutes are floored and left unpadded, seconds are zero-padded to two digits.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
