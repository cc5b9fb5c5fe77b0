use serde::Deserialize;
use std::ops::Sub;

/// Minutes since the start of the scenario.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Deserialize, PartialOrd, Default)]
pub struct Time(pub u64);

impl Time {
    /// Half-open overlap of two `[from, to)` windows.
    pub fn is_overlapping(time: &(Time, Time), window: &(Time, Time)) -> bool {
        time.0 < window.1 && time.1 > window.0
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0 / 1440;
        let remaining = self.0 % 1440;
        let hours = remaining / 60;
        let mins = remaining % 60;
        write!(f, "DAY{} {:02}:{:02}", days + 1, hours, mins)
    }
}

impl Sub<Time> for Time {
    type Output = u64;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}
