use chrono::{DateTime, Utc};

pub trait HumanizedAge {
    /// Operator-friendly age relative to `now`, e.g. "12 seconds ago". Backs
    /// the status panel's "last updated" line.
    fn humanized_age(&self, now: DateTime<Utc>) -> String;
}

impl HumanizedAge for DateTime<Utc> {
    fn humanized_age(&self, now: DateTime<Utc>) -> String {
        let seconds = now.signed_duration_since(*self).num_seconds();
        if seconds < 1 {
            return "just now".to_string();
        }

        let (count, unit) = if seconds < 60 {
            (seconds, "second")
        } else if seconds < 3600 {
            (seconds / 60, "minute")
        } else if seconds < 86_400 {
            (seconds / 3600, "hour")
        } else {
            (seconds / 86_400, "day")
        };

        if count == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", count, unit)
        }
    }
}
