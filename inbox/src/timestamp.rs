/// Relative-time labels from most to least recent.
pub const REFERENCE_TIMESTAMPS: [&str; 11] = [
    "now", "1m ago", "2m ago", "5m ago", "15m ago", "30m ago", "45m ago", "1h ago", "2h ago",
    "3h ago", "1d ago",
];

/// Position of `label` in [`REFERENCE_TIMESTAMPS`], or -1 when it is not listed.
///
/// Unlisted labels therefore order ahead of every known one.
pub fn timestamp_index(label: &str) -> isize {
    REFERENCE_TIMESTAMPS
        .iter()
        .position(|reference| *reference == label)
        .map_or(-1, |index| index as isize)
}
