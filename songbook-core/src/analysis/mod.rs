// songbook-core/src/analysis/mod.rs

pub mod aggregate;
pub mod detail;
pub mod summary;

pub use aggregate::{aggregate, collect_intervals, DisplayMode, FrequencyTable};
pub use detail::{section_detail, song_details, ChordCell, SectionDetail};
pub use summary::{interval_steps, summarize, summarize_all, IntervalStep, SongSummary};
