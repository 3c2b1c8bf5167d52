use std::fmt;

/// Chromatic pitch class (0-11)
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PitchClass(u8);

/// Every root spelling a chord symbol may start with, enharmonics included
pub static ROOT_TABLE: &[(&str, u8)] = &[
    ("C", 0),
    ("B#", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("Fb", 4),
    ("F", 5),
    ("E#", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("Cb", 11),
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl PitchClass {
    /// Create a pitch class, `None` unless `value` is in 0..=11
    pub fn new(value: u8) -> Option<Self> {
        (value < 12).then_some(PitchClass(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Sharp spelling used for display
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Extract the root of a chord symbol ("Cmaj7", "D#m7b5", "ebsus4") as a pitch class.
///
/// The root is one letter A-G (any case) optionally followed by `#` or `b`.
/// Everything after the root (quality, extensions, slash bass) is ignored.
/// Returns `None` when the symbol does not start with a root letter.
pub fn parse_root(chord: &str) -> Option<PitchClass> {
    let mut chars = chord.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !('A'..='G').contains(&letter) {
        return None;
    }

    let mut root = String::with_capacity(2);
    root.push(letter);
    match chars.next() {
        Some('#') => root.push('#'),
        Some('b') | Some('B') => root.push('b'),
        _ => {}
    }

    ROOT_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == root)
        .and_then(|&(_, value)| PitchClass::new(value))
}

/// Parse the roots of a chord sequence, dropping chords whose root is unparseable
pub fn parse_roots<'a, I>(chords: I) -> Vec<PitchClass>
where
    I: IntoIterator<Item = &'a str>,
{
    chords
        .into_iter()
        .filter_map(|chord| {
            let root = parse_root(chord);
            if root.is_none() {
                log::debug!("Skipping chord with unparseable root: {:?}", chord);
            }
            root
        })
        .collect()
}
