use crate::error::SongError;
use crate::types::interval::{compute_interval_sequence, SignedInterval};
use crate::types::pitch::{parse_roots, PitchClass};

/// A labelled run of chords ("A", "B", "Bridge", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub label: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient::chords")
    )]
    pub chords: Vec<String>,
}

impl Section {
    pub fn new(label: impl Into<String>, chords: Vec<String>) -> Self {
        Section {
            label: label.into(),
            chords,
        }
    }

    /// Build a section from raw form fields: a label and whitespace-separated chords.
    /// Returns `None` when the label is blank or no chords were entered.
    pub fn from_input(label: &str, chords: &str) -> Option<Self> {
        let label = label.trim();
        let chords: Vec<String> = chords.split_whitespace().map(str::to_string).collect();
        if label.is_empty() || chords.is_empty() {
            return None;
        }
        Some(Section::new(label, chords))
    }
}

/// A song catalogued as ordered sections of chord symbols
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Song {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Song {
            title: title.into(),
            sections,
        }
    }

    /// Validate form input. Sections with a blank label or no chords are dropped;
    /// the song is rejected if the title is blank or nothing remains.
    pub fn from_input(title: &str, sections: &[(&str, &str)]) -> Result<Self, SongError> {
        let title = title.trim();
        let sections: Vec<Section> = sections
            .iter()
            .filter_map(|(label, chords)| Section::from_input(label, chords))
            .collect();

        if title.is_empty() {
            return Err(SongError::MissingTitle);
        }
        if sections.is_empty() {
            return Err(SongError::NoSections);
        }
        Ok(Song::new(title, sections))
    }

    /// All chords in order; section boundaries do not break adjacency
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.chords.iter().map(String::as_str))
    }

    /// Parseable roots of the flattened chord list
    pub fn roots(&self) -> Vec<PitchClass> {
        parse_roots(self.chords())
    }

    /// Signed intervals between consecutive parseable roots of the whole song
    pub fn intervals(&self) -> Vec<SignedInterval> {
        compute_interval_sequence(&self.roots())
    }
}

#[cfg(feature = "serde")]
mod lenient {
    use serde::{Deserialize, Deserializer};

    /// Anything other than an array of strings reads as no chords
    pub fn chords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(chord) => Some(chord),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::interval::SignedInterval;

    fn standard() -> Song {
        Song::new(
            "Standard",
            vec![
                Section::from_input("A", "Cmaj7 Am7").unwrap(),
                Section::from_input("B", "Dm7 G7").unwrap(),
            ],
        )
    }

    #[test]
    fn test_section_from_input_splits_whitespace() {
        let section = Section::from_input(" A ", "  Cmaj7   Dm7\tG7 ").unwrap();
        assert_eq!(section.label, "A");
        assert_eq!(section.chords, vec!["Cmaj7", "Dm7", "G7"]);
    }

    #[test]
    fn test_section_from_input_rejects_blank_fields() {
        assert!(Section::from_input("", "C G").is_none());
        assert!(Section::from_input("A", "   ").is_none());
    }

    #[test]
    fn test_song_from_input_drops_invalid_sections() {
        let song = Song::from_input(
            "  Blue Bossa ",
            &[("A", "Cm7 Fm7"), ("", "Dm7b5 G7"), ("B", "")],
        )
        .unwrap();
        assert_eq!(song.title, "Blue Bossa");
        assert_eq!(song.sections.len(), 1);
    }

    #[test]
    fn test_song_from_input_errors() {
        assert_eq!(
            Song::from_input(" ", &[("A", "C")]),
            Err(SongError::MissingTitle)
        );
        assert_eq!(
            Song::from_input("Title", &[("A", "")]),
            Err(SongError::NoSections)
        );
    }

    #[test]
    fn test_section_boundaries_do_not_break_adjacency() {
        let song = standard();
        assert_eq!(song.chords().collect::<Vec<_>>(), ["Cmaj7", "Am7", "Dm7", "G7"]);
        assert_eq!(
            song.intervals(),
            vec![
                SignedInterval::down(3),
                SignedInterval::up(5),
                SignedInterval::up(5)
            ]
        );
    }

    #[test]
    fn test_unparseable_chords_shift_adjacency() {
        let song = Song::new(
            "Vamp",
            vec![Section::new("A", vec!["C".into(), "N.C.".into(), "G".into()])],
        );
        assert_eq!(song.intervals(), vec![SignedInterval::down(5)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_lenient_chord_decoding() {
        let section: Section =
            serde_json::from_str(r#"{"label":"A","chords":"Cmaj7 G7"}"#).unwrap();
        assert!(section.chords.is_empty());

        let section: Section = serde_json::from_str(r#"{"label":"A"}"#).unwrap();
        assert!(section.chords.is_empty());

        let section: Section =
            serde_json::from_str(r#"{"label":"A","chords":["C",7,"G"]}"#).unwrap();
        assert_eq!(section.chords, vec!["C", "G"]);
    }
}
