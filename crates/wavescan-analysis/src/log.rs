//! Human-readable event log projected from merged regions.

use crate::region::{RegionKind, RegionSets};
use std::fmt;
use wavescan_core::format_hms;

/// Text of the single entry emitted when nothing was flagged.
pub const NO_WARNINGS: &str = "No warnings detected";

/// One line of the event log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct LogEntry {
    pub start_time: f64,
    pub end_time: f64,
    /// `None` for the "no warnings" sentinel
    pub kind: Option<RegionKind>,
    pub reason: &'static str,
}

impl LogEntry {
    fn sentinel() -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            kind: None,
            reason: NO_WARNINGS,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.kind.is_none()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return f.write_str(self.reason);
        }
        write!(
            f,
            "{} to {} - {}",
            format_hms(self.start_time),
            format_hms(self.end_time),
            self.reason
        )
    }
}

/// Label shown for a region kind.
pub fn reason_label(kind: RegionKind) -> &'static str {
    match kind {
        RegionKind::Silence => "Silence",
        RegionKind::Loud => "Too Loud",
        RegionKind::Click => "Click",
    }
}

/// Project merged regions into log entries: silence, then loud, then click,
/// each by start time. Emits the sentinel alone when every set is empty.
pub fn project(sets: &RegionSets) -> Vec<LogEntry> {
    if sets.is_empty() {
        return vec![LogEntry::sentinel()];
    }

    sets.all_regions()
        .map(|region| LogEntry {
            start_time: region.start_time,
            end_time: region.end_time,
            kind: Some(region.kind),
            reason: reason_label(region.kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Region, RegionSet};

    fn region(kind: RegionKind, start: f64, end: f64) -> Region {
        Region {
            kind,
            start_time: start,
            end_time: end,
            metric: 0.0,
        }
    }

    #[test]
    fn test_empty_sets_yield_sentinel() {
        let log = project(&RegionSets::default());
        assert_eq!(log.len(), 1);
        assert!(log[0].is_sentinel());
        assert_eq!(log[0].to_string(), NO_WARNINGS);
    }

    #[test]
    fn test_kind_order_then_time() {
        let sets = RegionSets {
            silence: RegionSet::from_raw(
                RegionKind::Silence,
                &[region(RegionKind::Silence, 30.0, 32.0)],
                0.2,
            ),
            loud: RegionSet::from_raw(
                RegionKind::Loud,
                &[
                    region(RegionKind::Loud, 1.0, 2.0),
                    region(RegionKind::Loud, 10.0, 12.5),
                ],
                0.2,
            ),
            click: RegionSet::from_raw(
                RegionKind::Click,
                &[region(RegionKind::Click, 0.5, 0.6)],
                0.2,
            ),
        };

        let lines: Vec<String> = project(&sets).iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec![
                "0:00:30 to 0:00:32 - Silence",
                "0:00:01 to 0:00:02 - Too Loud",
                "0:00:10 to 0:00:12 - Too Loud",
                "0:00:00 to 0:00:00 - Click",
            ]
        );
    }
}
