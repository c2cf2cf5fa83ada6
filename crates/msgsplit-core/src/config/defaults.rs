//! Default value functions for serde.

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_limit() -> usize {
    4096
}
pub(super) fn default_newline_window() -> usize {
    200
}
pub(super) fn default_space_window() -> usize {
    100
}
pub(super) fn default_fence_buffer() -> usize {
    500
}
