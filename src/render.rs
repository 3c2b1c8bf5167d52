//! Terminal rendering of songs and interval statistics

use colored::*;
use songbook_core::analysis::{FrequencyTable, IntervalStep, SectionDetail, SongSummary};
use songbook_core::DisplayMode;

/// Width of the distribution bar in terminal cells
pub const BAR_WIDTH: usize = 50;

pub const EMPTY_CATALOG: &str = "No songs yet. Add one with: add <title> | A: Cmaj7 Dm7 G7";
pub const NO_INTERVALS: &str = "No intervals yet.";

/// "#2980b9" -> (0x29, 0x80, 0xb9)
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn swatch(text: &str, hex: &str) -> ColoredString {
    match parse_hex_color(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Cells each non-empty bucket gets in the bar; never zero for a visible bucket
pub fn segment_widths(table: &FrequencyTable, width: usize) -> Vec<usize> {
    table
        .segments()
        .map(|(_, pct, _)| ((pct / 100.0 * width as f64).round() as usize).max(1))
        .collect()
}

/// The global distribution: heading, bar, legend
pub fn distribution(table: &FrequencyTable, mode: DisplayMode) -> String {
    let mut out = format!(
        "{} ({}, {} to switch to {})\n",
        "Interval Distribution".bold(),
        mode.name().cyan(),
        "toggle".bright_green(),
        mode.toggle_label()
    );

    if table.is_empty() {
        out.push_str(&NO_INTERVALS.dimmed().to_string());
        return out;
    }

    let widths = segment_widths(table, BAR_WIDTH);
    for ((_, _, color), cells) in table.segments().zip(&widths) {
        out.push_str(&swatch(&"█".repeat(*cells), color).to_string());
    }
    out.push('\n');

    let legend: Vec<String> = table
        .segments()
        .map(|(label, pct, color)| format!("{} {} {:.1}%", swatch("■", color), label, pct))
        .collect();
    out.push_str(&legend.join("  "));
    out.push_str(&format!("\n{} intervals", table.total));
    out
}

/// One song in the list, with its interval count table
pub fn summary(row: &SongSummary) -> String {
    let header: String = (0..row.counts.len()).map(|i| format!("{:>4}", i)).collect();
    let counts: String = row.counts.iter().map(|c| format!("{:>4}", c)).collect();
    format!(
        "{} {}\n    {}\n    {}{}\n    {}{}",
        format!("{}.", row.index + 1).bright_black(),
        row.title.bright_cyan().bold(),
        row.sections_line.italic(),
        "Int".bold(),
        header,
        "Ct ".bold(),
        counts
    )
}

pub fn song_list(rows: &[SongSummary]) -> String {
    if rows.is_empty() {
        return EMPTY_CATALOG.dimmed().to_string();
    }
    rows.iter().map(summary).collect::<Vec<_>>().join("\n")
}

/// Section table: a chord row and an interval row per section
pub fn details(title: &str, sections: &[SectionDetail]) -> String {
    let mut out = format!("{}\n", title.bright_cyan().bold());
    for section in sections {
        let width = section
            .cells
            .iter()
            .map(|cell| cell.chord.chars().count())
            .max()
            .unwrap_or(0)
            .max(3);

        let chords: Vec<String> = section
            .cells
            .iter()
            .map(|cell| format!("{:<width$}", cell.chord, width = width))
            .collect();
        let intervals: Vec<String> = section
            .cells
            .iter()
            .map(|cell| match cell.interval {
                Some(interval) => format!("{:<width$}", interval.to_string(), width = width)
                    .green()
                    .to_string(),
                None => format!("{:<width$}", "-", width = width).dimmed().to_string(),
            })
            .collect();

        out.push_str(&format!(
            "  {:<8} {}\n  {:<8} {}\n",
            section.label.bold().to_string(),
            chords.join(" "),
            "",
            intervals.join(" ")
        ));
    }
    out.trim_end().to_string()
}

/// Flattened chord-to-chord movement
pub fn steps(title: &str, steps: &[IntervalStep]) -> String {
    if steps.is_empty() {
        return format!("{}: {}", title.bright_cyan().bold(), NO_INTERVALS.dimmed());
    }
    let mut out = format!("{}\n", title.bright_cyan().bold());
    for step in steps {
        out.push_str(&format!(
            "  {} -> {}  {}\n",
            step.from,
            step.to,
            step.interval.to_string().green()
        ));
    }
    out.trim_end().to_string()
}
