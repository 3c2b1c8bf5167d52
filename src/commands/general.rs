//! General REPL commands (help, quit, watch)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `watch` command: re-render statistics whenever the catalog file changes
pub fn cmd_watch(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Watch(ctx.store.path().display().to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "🎵 Songbook Help".bold());
    println!("{}", "================".bold());
    println!();
    println!("{}", "Songs:".green());
    println!(
        "  {}  - Add a song",
        "add <title> | A: Cmaj7 Am7 | B: Dm7 G7".cyan()
    );
    println!(
        "  {}                                  - List songs with interval counts",
        "list".cyan()
    );
    println!(
        "  {}                              - Chords and intervals per section",
        "show <n>".cyan()
    );
    println!(
        "  {}                             - Every chord-to-chord movement",
        "steps <n>".cyan()
    );
    println!(
        "  {}                            - Delete a song (asks first)",
        "delete <n>".cyan()
    );
    println!(
        "  {}                                 - Delete all songs (asks first)",
        "clear".cyan()
    );
    println!();
    println!("{}", "Statistics:".green());
    println!(
        "  {}                                 - Interval distribution across all songs",
        "stats".cyan()
    );
    println!(
        "  {}                                - Switch between 0..6 and +n/-n buckets",
        "toggle".cyan()
    );
    println!(
        "  {}            - Pick a display mode",
        "mode [normalized|signed]".cyan()
    );
    println!();
    println!("{}", "Intervals:".green());
    println!("  Each step is the shortest move between chord roots, 0 to 6 semitones,");
    println!("  marked + (up) or - (down). A tritone is always shown as +6.");
    println!("  Chords whose root can't be read (e.g. N.C.) are skipped.");
    println!();
    println!("{}", "Other Commands:".green());
    println!(
        "  {}              - Reload when the song file changes",
        "watch".bright_green()
    );
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit the REPL", "quit".bright_red());
}
