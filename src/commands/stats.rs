//! Statistics commands (stats, toggle, mode)

use crate::commands::{CommandContext, CommandResult};
use crate::render;
use colored::*;
use songbook_core::{aggregate, DisplayMode};

fn render_stats(ctx: &CommandContext) -> String {
    render::distribution(&aggregate(&ctx.songs(), ctx.mode), ctx.mode)
}

/// Handle `stats`
pub fn cmd_stats(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(render_stats(ctx))
}

/// Handle `toggle`: switch between normalized and signed buckets
pub fn cmd_toggle(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.mode = ctx.mode.toggle();
    CommandResult::Message(render_stats(ctx))
}

/// Handle `mode [normalized|signed]`
pub fn cmd_mode(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Display mode: {}", ctx.mode.name().cyan()));
    }

    match args.parse::<DisplayMode>() {
        Ok(mode) => {
            ctx.mode = mode;
            CommandResult::Message(render_stats(ctx))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}
