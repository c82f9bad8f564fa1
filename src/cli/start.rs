use crate::cli::Context;
use crate::error::Result;
use crate::models::{format_date, resolve_date, TrackerState};
use crate::state;

/// Start a new streak, replacing any existing record
pub fn run(ctx: &Context, date: Option<String>) -> Result<String> {
    let start = resolve_date(date.as_deref(), ctx.today)?;

    let state = TrackerState::new(start);
    state::save(&state, &ctx.data_file)?;

    Ok(ctx.say(format!("Counter started: {} (day 1)", format_date(start))))
}
