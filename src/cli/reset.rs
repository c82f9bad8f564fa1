use crate::cli::Context;
use crate::error::Result;
use crate::models::{format_date, resolve_date};
use crate::state;

/// Record a reset and restart the streak from that day
pub fn run(ctx: &Context, date: Option<String>) -> Result<String> {
    let Some(mut state) = state::load(&ctx.data_file)? else {
        return Ok(ctx.say("No counter yet. Create one with 'streakbot start' first."));
    };

    let reset_date = resolve_date(date.as_deref(), ctx.today)?;
    state.reset(reset_date);
    state::save(&state, &ctx.data_file)?;

    tracing::info!(date = %reset_date, total = state.relapses.len(), "recorded reset");
    Ok(ctx.say(format!(
        "Reset recorded: {}. New streak started (day 1).",
        format_date(reset_date)
    )))
}
