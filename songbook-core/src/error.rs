use std::fmt;

/// Reasons a song entered by the user is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SongError {
    MissingTitle,
    NoSections,
    /// Catalog index outside the stored songs
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongError::MissingTitle => write!(f, "a song needs a title"),
            SongError::NoSections => {
                write!(f, "a song needs at least one section with a label and chords")
            }
            SongError::IndexOutOfRange { index, len } => {
                write!(f, "no song at position {} (catalog holds {})", index + 1, len)
            }
        }
    }
}

impl std::error::Error for SongError {}
