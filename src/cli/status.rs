use crate::cli::Context;
use crate::error::Result;
use crate::models::{format_date, resolve_date, MotivationTier};
use crate::state;

/// Report the current streak, measured against `as_of` or today
pub fn run(ctx: &Context, as_of: Option<String>) -> Result<String> {
    let reference = resolve_date(as_of.as_deref(), ctx.today)?;

    let Some(state) = state::load(&ctx.data_file)? else {
        return Ok(ctx.say("No record found. Run 'streakbot start' first."));
    };

    let days = state.streak_days(reference);
    let lines = [
        ctx.say(format!("You are on day {}.", days)),
        format!("   Start date: {}", format_date(state.start_date)),
        format!("   Total resets: {}", state.relapses.len()),
        format!("   Motivation: {}", MotivationTier::for_days(days).message()),
    ];
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::{context, date};
    use crate::cli::{reset, start};
    use crate::models::TrackerState;
    use tempfile::TempDir;

    #[test]
    fn test_status_without_record() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-10");

        let report = run(&ctx, None).unwrap();
        assert_eq!(report, "🤖 No record found. Run 'streakbot start' first.");
        assert!(!ctx.data_file.exists());
    }

    #[test]
    fn test_status_after_start() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-10");
        start::run(&ctx, Some("2024-01-01".to_string())).unwrap();

        let report = run(&ctx, None).unwrap();
        assert_eq!(
            report,
            "🤖 You are on day 10.\n   Start date: 2024-01-01\n   Total resets: 0\n   Motivation: Great progress, consistency is forming."
        );
    }

    #[test]
    fn test_status_after_reset() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-06");
        start::run(&ctx, Some("2024-01-01".to_string())).unwrap();
        reset::run(&ctx, Some("2024-01-05".to_string())).unwrap();

        let report = run(&ctx, None).unwrap();
        assert!(report.contains("You are on day 2."));
        assert!(report.contains("Start date: 2024-01-05"));
        assert!(report.contains("Total resets: 1"));
        assert!(report.contains("Early days, every day is a win!"));
    }

    #[test]
    fn test_status_as_of() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-02");
        state::save(&TrackerState::new(date("2024-01-01")), &ctx.data_file).unwrap();

        let report = run(&ctx, Some("2024-03-31".to_string())).unwrap();
        assert!(report.contains("You are on day 91."));
        assert!(report.contains("Legendary level"));
    }

    #[test]
    fn test_status_future_start_is_early_days() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-01");
        state::save(&TrackerState::new(date("2024-01-05")), &ctx.data_file).unwrap();

        let report = run(&ctx, None).unwrap();
        assert!(report.contains("You are on day -3."));
        assert!(report.contains("Early days"));
    }

    #[test]
    fn test_status_bad_as_of() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-01");

        let err = run(&ctx, Some("soon".to_string())).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_status_malformed_record() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, "2024-01-01");
        std::fs::write(&ctx.data_file, r#"{"start_date": "2024-13-40"}"#).unwrap();

        let err = run(&ctx, None).unwrap_err();
        assert!(err.to_string().contains("2024-13-40"));
    }
}
