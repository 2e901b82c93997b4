//! Timestamp formatting.

/// `H:MM:SS`, truncating fractional seconds. Negative or non-finite input
/// formats as zero.
pub fn format_hms(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// `M:SS` playback readout; minutes are not wrapped into hours.
pub fn format_clock(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{}:{:02}", total / 60, total % 60)
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}
