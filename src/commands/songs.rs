//! Catalog commands (add, list, show, steps, delete, clear)

use crate::commands::{CommandContext, CommandResult, PendingAction};
use crate::render;
use colored::*;
use songbook_core::analysis::{aggregate, interval_steps, song_details, summarize_all};
use songbook_core::store::{add_song, delete_all, delete_song};
use songbook_core::{Song, SongError};

/// Split `Title | A: Cmaj7 Dm7 | B: G7 C` into a title and (label, chords) pairs
pub fn parse_add_args(args: &str) -> (&str, Vec<(&str, &str)>) {
    let mut parts = args.split('|');
    let title = parts.next().unwrap_or("");
    let sections = parts
        .map(|part| part.split_once(':').unwrap_or(("", part)))
        .collect();
    (title, sections)
}

/// 1-based position typed by the user -> 0-based index
fn parse_position(args: &str, len: usize) -> Result<usize, String> {
    let position: usize = args
        .trim()
        .parse()
        .map_err(|_| format!("Expected a song number, got '{}'", args))?;
    if position == 0 || position > len {
        return Err(SongError::IndexOutOfRange {
            index: position.saturating_sub(1),
            len,
        }
        .to_string());
    }
    Ok(position - 1)
}

/// Songs list followed by the global distribution, re-rendered from storage
pub fn render_catalog(ctx: &CommandContext) -> String {
    let songs = ctx.songs();
    format!(
        "{}\n\n{}",
        render::song_list(&summarize_all(&songs)),
        render::distribution(&aggregate(&songs, ctx.mode), ctx.mode)
    )
}

/// Handle `add <title> | <label>: <chords> | ...`
pub fn cmd_add(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error(
            "Usage: add <title> | <label>: <chords> [| <label>: <chords> ...]".to_string(),
        );
    }

    let (title, sections) = parse_add_args(args);
    let song = match Song::from_input(title, &sections) {
        Ok(song) => song,
        Err(e) => return CommandResult::Error(format!("Invalid song: {}", e)),
    };

    let warning = match ctx.guard_unreadable() {
        Ok(warning) => warning,
        Err(e) => return CommandResult::Error(format!("Catalog left untouched: {}", e)),
    };

    let title = song.title.clone();
    match add_song(&mut ctx.store, song) {
        Ok(count) => CommandResult::Message(with_warning(
            warning,
            format!(
                "{} Added \"{}\" ({} songs)\n\n{}",
                "✓".bright_green(),
                title,
                count,
                render_catalog(ctx)
            ),
        )),
        Err(e) => CommandResult::Error(format!("Failed to save: {:#}", e)),
    }
}

fn with_warning(warning: Option<String>, message: String) -> String {
    match warning {
        Some(warning) => format!("{}\n{}", warning, message),
        None => message,
    }
}

/// Handle `list`
pub fn cmd_list(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(render_catalog(ctx))
}

/// Handle `show <n>`
pub fn cmd_show(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let songs = ctx.songs();
    match parse_position(args, songs.len()) {
        Ok(index) => {
            let song = &songs[index];
            CommandResult::Message(render::details(&song.title, &song_details(song)))
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `steps <n>`
pub fn cmd_steps(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let songs = ctx.songs();
    match parse_position(args, songs.len()) {
        Ok(index) => {
            let song = &songs[index];
            CommandResult::Message(render::steps(&song.title, &interval_steps(song)))
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `delete <n>`; asks for confirmation first
pub fn cmd_delete(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let songs = ctx.songs();
    match parse_position(args, songs.len()) {
        Ok(index) => {
            let title = songs[index].title.clone();
            CommandResult::Confirm {
                prompt: format!("Are you sure you want to delete \"{}\"?", title),
                action: PendingAction::DeleteSong { index, title },
            }
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `clear`; asks for confirmation first
pub fn cmd_clear(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Confirm {
        prompt: "Are you sure you want to delete all songs? This cannot be undone.".to_string(),
        action: PendingAction::DeleteAll,
    }
}

/// Run an action the user has confirmed.
/// A song is only deleted if it still sits at the position the prompt showed.
pub fn apply_pending(action: PendingAction, ctx: &mut CommandContext) -> CommandResult {
    let outcome = match action {
        PendingAction::DeleteSong { index, title } => {
            let songs = ctx.songs();
            if songs.get(index).map(|song| song.title.as_str()) != Some(title.as_str()) {
                return CommandResult::Error(format!(
                    "Catalog changed since \"{}\" was chosen; nothing deleted",
                    title
                ));
            }
            delete_song(&mut ctx.store, index)
                .map(|song| format!("{} Deleted \"{}\"", "✓".bright_green(), song.title))
        }
        PendingAction::DeleteAll => {
            if let Err(e) = ctx.guard_unreadable() {
                return CommandResult::Error(format!("Catalog left untouched: {}", e));
            }
            delete_all(&mut ctx.store).map(|_| format!("{} Deleted all songs", "✓".bright_green()))
        }
    };

    match outcome {
        Ok(message) => CommandResult::Message(format!("{}\n\n{}", message, render_catalog(ctx))),
        Err(e) => CommandResult::Error(format!("{:#}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::scratch_context;
    use songbook_core::store::SongStore;

    #[test]
    fn test_parse_add_args() {
        let (title, sections) = parse_add_args("Blue Bossa | A: Cm7 Fm7 | B: Ebm7 Ab7");
        assert_eq!(title, "Blue Bossa ");
        assert_eq!(sections, vec![(" A", " Cm7 Fm7 "), (" B", " Ebm7 Ab7")]);

        let (_, sections) = parse_add_args("Tune | Cmaj7 G7");
        assert_eq!(sections, vec![("", " Cmaj7 G7")]);
    }

    #[test]
    fn test_add_and_show() {
        let mut ctx = scratch_context("add-show");
        let result = cmd_add("Rhythm | A: Bb G7 | B: D7 G7", &mut ctx);
        assert!(matches!(result, CommandResult::Message(ref m) if m.contains("Added \"Rhythm\"")));
        assert_eq!(ctx.songs().len(), 1);

        match cmd_show("1", &mut ctx) {
            CommandResult::Message(text) => {
                assert!(text.contains("Bb"));
                assert!(text.contains("-3"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(cmd_show("2", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_show("x", &mut ctx), CommandResult::Error(_)));
        ctx.store.clear().unwrap();
    }

    #[test]
    fn test_add_rejects_invalid_songs() {
        let mut ctx = scratch_context("add-invalid");
        assert!(matches!(cmd_add("", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(
            cmd_add("  | A: C G", &mut ctx),
            CommandResult::Error(ref e) if e.contains("title")
        ));
        assert!(matches!(
            cmd_add("Only Title", &mut ctx),
            CommandResult::Error(ref e) if e.contains("section")
        ));
        assert!(ctx.songs().is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut ctx = scratch_context("delete");
        cmd_add("One | A: C F", &mut ctx);
        cmd_add("Two | A: D G", &mut ctx);

        let action = match cmd_delete("1", &mut ctx) {
            CommandResult::Confirm { prompt, action } => {
                assert!(prompt.contains("\"One\""));
                action
            }
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(ctx.songs().len(), 2);

        apply_pending(action, &mut ctx);
        let songs = ctx.songs();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Two");

        match cmd_clear("", &mut ctx) {
            CommandResult::Confirm { action, .. } => {
                apply_pending(action, &mut ctx);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(ctx.songs().is_empty());
    }

    #[test]
    fn test_delete_refuses_when_catalog_reordered() {
        let mut ctx = scratch_context("delete-reordered");
        cmd_add("One | A: C F", &mut ctx);
        cmd_add("Two | A: D G", &mut ctx);

        let action = match cmd_delete("1", &mut ctx) {
            CommandResult::Confirm { action, .. } => action,
            other => panic!("unexpected {:?}", other),
        };

        // Another process rewrites the file while the prompt is open
        let mut songs = ctx.songs();
        songs.reverse();
        ctx.store.save(&songs).unwrap();

        assert!(matches!(
            apply_pending(action, &mut ctx),
            CommandResult::Error(ref e) if e.contains("nothing deleted")
        ));
        let titles: Vec<String> = ctx.songs().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Two", "One"]);
        ctx.store.clear().unwrap();
    }

    #[test]
    fn test_add_keeps_unreadable_catalog() {
        let mut ctx = scratch_context("add-unreadable");
        let truncated = r#"[{"title":"Giant Steps","sections":[{"label":"A","chords":["B""#;
        std::fs::write(ctx.store.path(), truncated).unwrap();
        assert!(ctx.load_problem().is_some());

        match cmd_add("New | A: C G", &mut ctx) {
            CommandResult::Message(text) => {
                assert!(text.starts_with("Warning:"));
                assert!(text.contains("Added \"New\""));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(ctx.load_problem().is_none());

        let backup = ctx.store.path().with_extension("json.bak");
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), truncated);
        ctx.store.clear().unwrap();
        let _ = std::fs::remove_file(&backup);
    }

    #[test]
    fn test_steps_lists_flattened_pairs() {
        let mut ctx = scratch_context("steps");
        cmd_add("Seam | A: F7 | B: Bb7", &mut ctx);
        match cmd_steps("1", &mut ctx) {
            CommandResult::Message(text) => assert!(text.contains("F7 -> Bb7  +5")),
            other => panic!("unexpected {:?}", other),
        }
        ctx.store.clear().unwrap();
    }
}
