use crate::types::interval::{frequency_by_magnitude, signed_interval, SignedInterval};
use crate::types::pitch::parse_root;
use crate::types::song::Song;

/// One row of the song list: title, sections at a glance, and interval counts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongSummary {
    /// Position in the catalog (0-based)
    pub index: usize,
    pub title: String,
    /// e.g. "A: Cmaj7 Dm7 | B: Em7 A7"
    pub sections_line: String,
    /// Interval counts by magnitude 0..=6
    pub counts: [usize; 7],
}

pub fn summarize(index: usize, song: &Song) -> SongSummary {
    let sections_line = song
        .sections
        .iter()
        .map(|section| format!("{}: {}", section.label, section.chords.join(" ")))
        .collect::<Vec<_>>()
        .join(" | ");

    SongSummary {
        index,
        title: song.title.clone(),
        sections_line,
        counts: frequency_by_magnitude(&song.intervals()),
    }
}

pub fn summarize_all(songs: &[Song]) -> Vec<SongSummary> {
    songs
        .iter()
        .enumerate()
        .map(|(index, song)| summarize(index, song))
        .collect()
}

/// Movement from one parseable chord to the next
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalStep {
    pub from: String,
    pub to: String,
    pub interval: SignedInterval,
}

/// Chord-to-chord steps over the flattened song, skipping unparseable chords
pub fn interval_steps(song: &Song) -> Vec<IntervalStep> {
    let rooted: Vec<(&str, _)> = song
        .chords()
        .filter_map(|chord| parse_root(chord).map(|root| (chord, root)))
        .collect();

    rooted
        .windows(2)
        .map(|pair| IntervalStep {
            from: pair[0].0.to_string(),
            to: pair[1].0.to_string(),
            interval: signed_interval(pair[0].1, pair[1].1),
        })
        .collect()
}
