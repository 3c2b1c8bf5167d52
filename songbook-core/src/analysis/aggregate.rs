//! Interval distribution across the whole catalog
//!
//! Intervals are computed song by song and concatenated, so the last chord of
//! one song is never paired with the first chord of the next. Within a song
//! the sections are flattened first, so section seams do produce intervals.

use crate::types::interval::{Sign, SignedInterval, TRITONE};
use crate::types::song::Song;
use std::fmt;
use std::str::FromStr;

const NORMALIZED_LABELS: [&str; 7] = ["0", "1", "2", "3", "4", "5", "6"];

const SIGNED_LABELS: [&str; 13] = [
    "0", "+1", "+2", "+3", "+4", "+5", "+6", "-1", "-2", "-3", "-4", "-5", "-6",
];

const NORMALIZED_COLORS: [&str; 7] = [
    "#2980b9", "#27ae60", "#f39c12", "#e67e22", "#8e44ad", "#c0392b", "#7f8c8d",
];

const SIGNED_COLORS: [&str; 13] = [
    "#2980b9", "#27ae60", "#f39c12", "#e67e22", "#8e44ad", "#c0392b", "#7f8c8d", "#16a085",
    "#2ecc71", "#f1c40f", "#e67e22", "#9b59b6", "#e74c3c",
];

/// How intervals are bucketed in the global distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    /// Direction discarded, buckets 0..=6
    #[default]
    Normalized,
    /// `0`, `+1..+6`, `-1..-6`
    Signed,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Normalized => DisplayMode::Signed,
            DisplayMode::Signed => DisplayMode::Normalized,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Normalized => "normalized",
            DisplayMode::Signed => "signed",
        }
    }

    /// Caption for the control that switches away from this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Normalized => "+n/-n",
            DisplayMode::Signed => "Normalize",
        }
    }

    pub fn bucket_count(self) -> usize {
        match self {
            DisplayMode::Normalized => NORMALIZED_LABELS.len(),
            DisplayMode::Signed => SIGNED_LABELS.len(),
        }
    }

    /// Bucket an interval falls into under this mode
    pub fn bucket(self, interval: SignedInterval) -> usize {
        let magnitude = interval.magnitude as usize;
        match self {
            DisplayMode::Normalized => magnitude,
            DisplayMode::Signed => {
                if interval.magnitude == 0 || interval.magnitude == TRITONE {
                    magnitude
                } else {
                    match interval.sign {
                        Sign::Up => magnitude,
                        Sign::Down => TRITONE as usize + magnitude,
                    }
                }
            }
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normalized" | "normalize" | "norm" => Ok(DisplayMode::Normalized),
            "signed" | "split" => Ok(DisplayMode::Signed),
            other => Err(anyhow::anyhow!(
                "Unknown display mode '{}' (expected 'normalized' or 'signed')",
                other
            )),
        }
    }
}

/// Interval distribution ready for display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyTable {
    pub counts: Vec<usize>,
    pub percentages: Vec<f64>,
    pub total: usize,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
}

impl FrequencyTable {
    fn from_counts(counts: Vec<usize>, labels: &[&str], colors: &[&str]) -> Self {
        let total: usize = counts.iter().sum();
        let percentages = counts
            .iter()
            .map(|&count| {
                if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                }
            })
            .collect();

        FrequencyTable {
            counts,
            percentages,
            total,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// No intervals at all; callers show a "no data" state instead of a bar
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Buckets with a non-zero share, as (label, percentage, color)
    pub fn segments(&self) -> impl Iterator<Item = (&str, f64, &str)> + '_ {
        self.labels
            .iter()
            .zip(&self.percentages)
            .zip(&self.colors)
            .filter(|((_, pct), _)| **pct > 0.0)
            .map(|((label, pct), color)| (label.as_str(), *pct, color.as_str()))
    }
}

/// Every interval in the catalog, song by song
pub fn collect_intervals(songs: &[Song]) -> Vec<SignedInterval> {
    songs.iter().flat_map(|song| song.intervals()).collect()
}

/// Aggregate interval frequencies across all songs under the given mode
pub fn aggregate(songs: &[Song], mode: DisplayMode) -> FrequencyTable {
    let mut counts = vec![0; mode.bucket_count()];
    for interval in collect_intervals(songs) {
        counts[mode.bucket(interval)] += 1;
    }

    match mode {
        DisplayMode::Normalized => {
            FrequencyTable::from_counts(counts, &NORMALIZED_LABELS, &NORMALIZED_COLORS)
        }
        DisplayMode::Signed => FrequencyTable::from_counts(counts, &SIGNED_LABELS, &SIGNED_COLORS),
    }
}
