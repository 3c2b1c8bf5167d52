//! Per-section breakdown of a song
//!
//! Unlike the summary counts and the global distribution, the detail view
//! restarts at every section: the first chord of a section never shows an
//! interval.

use crate::types::interval::{signed_interval, SignedInterval};
use crate::types::pitch::parse_root;
use crate::types::song::{Section, Song};

/// A chord and the interval that led into it, if one can be shown
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordCell {
    pub chord: String,
    pub interval: Option<SignedInterval>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionDetail {
    pub label: String,
    pub cells: Vec<ChordCell>,
}

/// Pair each chord with the interval from the chord just before it in the same section.
///
/// A cell has no interval when it opens the section or when either root is
/// unparseable. The previous chord is always the immediate neighbour, even if
/// it could not be parsed.
pub fn section_detail(section: &Section) -> SectionDetail {
    let mut previous = None;
    let cells = section
        .chords
        .iter()
        .map(|chord| {
            let root = parse_root(chord);
            let interval = match (previous, root) {
                (Some(from), Some(to)) => Some(signed_interval(from, to)),
                _ => None,
            };
            previous = root;
            ChordCell {
                chord: chord.clone(),
                interval,
            }
        })
        .collect();

    SectionDetail {
        label: section.label.clone(),
        cells,
    }
}

pub fn song_details(song: &Song) -> Vec<SectionDetail> {
    song.sections.iter().map(section_detail).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(detail: &SectionDetail) -> Vec<Option<SignedInterval>> {
        detail.cells.iter().map(|cell| cell.interval).collect()
    }

    #[test]
    fn test_first_chord_of_each_section_is_blank() {
        let song = Song::from_input("Rhythm", &[("A", "Bb G7"), ("B", "D7 G7")]).unwrap();
        let details = song_details(&song);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].label, "A");
        assert_eq!(
            intervals(&details[0]),
            vec![None, Some(SignedInterval::down(3))]
        );
        assert_eq!(
            intervals(&details[1]),
            vec![None, Some(SignedInterval::up(5))]
        );
    }

    #[test]
    fn test_unparseable_chord_blanks_both_sides() {
        let section = Section::new(
            "A",
            vec!["C".into(), "N.C.".into(), "G".into(), "D".into()],
        );
        let detail = section_detail(&section);

        assert_eq!(
            intervals(&detail),
            vec![None, None, None, Some(SignedInterval::down(5))]
        );
        assert_eq!(detail.cells[1].chord, "N.C.");
    }
}
