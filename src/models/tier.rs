/// Motivational tier for a streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivationTier {
    /// Under a week
    EarlyDays,
    /// One week to under a month
    GreatProgress,
    /// One month to under ninety days
    ExcellentStreak,
    /// Ninety days and beyond
    Legendary,
}

impl MotivationTier {
    /// Pick the tier for a day count. Zero and negative counts are early days.
    pub fn for_days(days: i64) -> Self {
        match days {
            d if d < 7 => MotivationTier::EarlyDays,
            d if d < 30 => MotivationTier::GreatProgress,
            d if d < 90 => MotivationTier::ExcellentStreak,
            _ => MotivationTier::Legendary,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MotivationTier::EarlyDays => "Early days, every day is a win!",
            MotivationTier::GreatProgress => "Great progress, consistency is forming.",
            MotivationTier::ExcellentStreak => "Excellent streak, discipline is strengthening.",
            MotivationTier::Legendary => "Legendary level, a new lasting routine!",
        }
    }
}
