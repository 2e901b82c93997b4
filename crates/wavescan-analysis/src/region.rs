//! Classified time regions and merging.

use std::fmt;

/// What a region flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum RegionKind {
    Silence,
    Loud,
    Click,
}

impl RegionKind {
    /// Fixed reporting order.
    pub const ALL: [RegionKind; 3] = [RegionKind::Silence, RegionKind::Loud, RegionKind::Click];
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::Silence => "silence",
            RegionKind::Loud => "loudness",
            RegionKind::Click => "click",
        };
        f.write_str(name)
    }
}

/// A flagged span of the recording, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Region {
    pub kind: RegionKind,
    pub start_time: f64,
    pub end_time: f64,
    /// RMS for silence and loudness regions, 0 for clicks
    pub metric: f32,
}

impl Region {
    pub(crate) fn from_sample_span(
        kind: RegionKind,
        start: usize,
        end: usize,
        sample_rate: f64,
        metric: f32,
    ) -> Self {
        Self {
            kind,
            start_time: start as f64 / sample_rate,
            end_time: end as f64 / sample_rate,
            metric,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

/// Coalesce regions whose gap to the running region is below `merge_gap_secs`.
///
/// Expects one detector's output, ordered by start time. A region only merges
/// into a running region of the same kind. The merged metric is the running
/// average `(current + next) / 2`. Gaps exactly equal to `merge_gap_secs`
/// stay separate, which makes the operation idempotent.
pub fn merge(regions: &[Region], merge_gap_secs: f64) -> Vec<Region> {
    let mut ordered = regions.to_vec();
    ordered.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    let mut iter = ordered.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for region in iter {
        if region.kind == current.kind && region.start_time - current.end_time < merge_gap_secs {
            current.end_time = current.end_time.max(region.end_time);
            current.metric = (current.metric + region.metric) / 2.0;
        } else {
            merged.push(current);
            current = region;
        }
    }
    merged.push(current);
    merged
}

/// Merged regions of a single kind, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RegionSet {
    kind: RegionKind,
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn empty(kind: RegionKind) -> Self {
        Self {
            kind,
            regions: Vec::new(),
        }
    }

    /// Merge raw detector output into a set. Regions of other kinds are dropped.
    pub fn from_raw(kind: RegionKind, raw: &[Region], merge_gap_secs: f64) -> Self {
        let same_kind: Vec<Region> = raw.iter().filter(|r| r.kind == kind).copied().collect();
        Self {
            kind,
            regions: merge(&same_kind, merge_gap_secs),
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// The three merged region sets of one analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RegionSets {
    pub silence: RegionSet,
    pub loud: RegionSet,
    pub click: RegionSet,
}

impl Default for RegionSets {
    fn default() -> Self {
        Self {
            silence: RegionSet::empty(RegionKind::Silence),
            loud: RegionSet::empty(RegionKind::Loud),
            click: RegionSet::empty(RegionKind::Click),
        }
    }
}

impl RegionSets {
    pub fn get(&self, kind: RegionKind) -> &RegionSet {
        match kind {
            RegionKind::Silence => &self.silence,
            RegionKind::Loud => &self.loud,
            RegionKind::Click => &self.click,
        }
    }

    pub(crate) fn set(&mut self, set: RegionSet) {
        match set.kind {
            RegionKind::Silence => self.silence = set,
            RegionKind::Loud => self.loud = set,
            RegionKind::Click => self.click = set,
        }
    }

    /// Sets in reporting order: silence, loud, click.
    pub fn iter(&self) -> impl Iterator<Item = &RegionSet> + '_ {
        RegionKind::ALL.into_iter().map(move |kind| self.get(kind))
    }

    /// Every region across all kinds, in reporting order.
    pub fn all_regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.iter().flat_map(|set| set.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|set| set.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn silence(start: f64, end: f64, metric: f32) -> Region {
        Region {
            kind: RegionKind::Silence,
            start_time: start,
            end_time: end,
            metric,
        }
    }

    #[test]
    fn test_merge_close_regions() {
        let raw = [
            silence(0.0, 1.0, 0.2),
            silence(1.1, 2.0, 0.4),
            silence(3.0, 4.0, 0.1),
        ];

        let merged = merge(&raw, 0.2);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].start_time, 0.0);
        assert_eq!(merged[0].end_time, 2.0);
        assert_relative_eq!(merged[0].metric, 0.3);
        assert_eq!(merged[1], raw[2]);
    }

    #[test]
    fn test_exact_gap_is_not_merged() {
        let raw = [silence(0.0, 1.0, 0.0), silence(1.25, 2.0, 0.0)];
        assert_eq!(merge(&raw, 0.25).len(), 2);
    }

    #[test]
    fn test_fractionally_smaller_gap_is_merged() {
        let raw = [silence(0.0, 1.0, 0.0), silence(1.2499, 2.0, 0.0)];
        let merged = merge(&raw, 0.25);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].end_time, 2.0);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge(&[], 0.2).is_empty());
    }

    #[test]
    fn test_merge_never_shrinks() {
        let raw = [silence(0.0, 5.0, 0.0), silence(1.0, 2.0, 0.0)];
        let merged = merge(&raw, 0.2);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].end_time, 5.0);
    }

    #[test]
    fn test_region_sets_order() {
        let sets = RegionSets::default();
        let kinds: Vec<RegionKind> = sets.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, RegionKind::ALL.to_vec());
        assert!(sets.is_empty());
    }

    #[test]
    fn test_from_raw_filters_kind() {
        let mut click = silence(0.0, 0.1, 0.0);
        click.kind = RegionKind::Click;
        let set = RegionSet::from_raw(RegionKind::Silence, &[click, silence(1.0, 2.0, 0.0)], 0.2);
        assert_eq!(set.len(), 1);
        assert_eq!(set.regions()[0].start_time, 1.0);
    }

    fn arb_regions() -> impl Strategy<Value = Vec<Region>> {
        proptest::collection::vec((0.0f64..0.5, 0.001f64..0.5, 0.0f32..1.0), 0..40).prop_map(
            |steps| {
                let mut cursor = 0.0;
                steps
                    .into_iter()
                    .map(|(gap, len, metric)| {
                        let start = cursor + gap;
                        cursor = start + len;
                        silence(start, cursor, metric)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(regions in arb_regions(), gap in 0.0f64..0.6) {
            let once = merge(&regions, gap);
            let twice = merge(&once, gap);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn merged_neighbours_respect_gap(regions in arb_regions(), gap in 0.0f64..0.6) {
            let merged = merge(&regions, gap);
            for pair in merged.windows(2) {
                prop_assert!(pair[1].start_time - pair[0].end_time >= gap);
            }
        }
    }
}
