use crate::cli::Context;
use crate::error::Result;
use crate::models::format_date;
use crate::state;

/// List every recorded reset, numbered in the order it was entered
pub fn run(ctx: &Context) -> Result<String> {
    let Some(state) = state::load(&ctx.data_file)? else {
        return Ok(ctx.say("No history found."));
    };

    if state.relapses.is_empty() {
        return Ok(ctx.say("No resets yet. Clean streak continues."));
    }

    let mut lines = vec![ctx.say("Reset history:")];
    lines.extend(
        state
            .relapses
            .iter()
            .enumerate()
            .map(|(i, d)| format!("  {}. {}", i + 1, format_date(*d))),
    );
    Ok(lines.join("\n"))
}
