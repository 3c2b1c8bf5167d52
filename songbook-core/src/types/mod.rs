// songbook-core/src/types/mod.rs

pub mod interval;
pub mod pitch;
pub mod song;

pub use interval::{
    compute_interval_sequence, frequency_by_magnitude, signed_interval, Sign, SignedInterval,
};
pub use pitch::{parse_root, parse_roots, PitchClass};
pub use song::{Section, Song};
