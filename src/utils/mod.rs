/// Characters that are not allowed in file names on at least one major platform
const UNSAFE_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const MAX_FILENAME_CHARS: usize = 200;

/// Format an offset as `MM:SS`, or `HH:MM:SS` from one hour on
pub fn format_timestamp(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Sanitize a title for use as a file name.
///
/// Removes filesystem-unsafe characters, trims surrounding whitespace and keeps at most
/// 200 characters. May return an empty string; callers pick their own fallback.
pub fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !UNSAFE_FILENAME_CHARS.contains(c) && !c.is_control())
        .collect();

    cleaned
        .trim()
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}
