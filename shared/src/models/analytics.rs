use serde::{Deserialize, Serialize};

/// Number of buckets in a weekly trend (one per weekday).
pub const WEEKDAY_COUNT: usize = 7;

/// Axis labels for the weekly trend, Monday first.
pub const WEEKDAY_LABELS: [&str; WEEKDAY_COUNT] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Placeholder shown for the average response time until the first snapshot arrives.
pub const PENDING_PLACEHOLDER: &str = "...";

/// One complete analytics payload for the admin dashboard.
///
/// A snapshot is immutable once built: the dashboard replaces the whole value
/// on every update instead of patching individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Number of incidents reported in the period
    pub total_incidents: u64,

    /// Resolved / total as a percentage (0.0 - 100.0)
    pub resolution_rate: f64,

    /// Human readable average first-response time, or a placeholder
    pub avg_response: String,

    /// Distinct users active in the period
    pub active_users: u64,

    /// Incident breakdown by category, in display order
    pub category_data: Vec<CategoryStat>,

    /// Ranked contributors; rank is the position in the list
    pub top_contributors: Vec<Contributor>,

    /// Incident volume per weekday
    pub trends: WeeklyTrend,
}

impl Default for AnalyticsSnapshot {
    fn default() -> Self {
        Self {
            total_incidents: 0,
            resolution_rate: 0.0,
            avg_response: PENDING_PLACEHOLDER.to_string(),
            active_users: 0,
            category_data: Vec::new(),
            top_contributors: Vec::new(),
            trends: WeeklyTrend::default(),
        }
    }
}

/// Incident count for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub label: String,
    pub count: u64,
    /// Share of all incidents in the period (0.0 - 100.0)
    pub percentage: f64,
}

/// A leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    /// Number of incidents this user resolved in the period
    pub count: u64,
    /// Preformatted efficiency badge, e.g. "96%"
    pub efficiency: String,
}

impl Contributor {
    /// First character of the display name, used when there is no avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Incident volume per weekday, Monday first. Always exactly seven buckets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyTrend([f64; WEEKDAY_COUNT]);

impl WeeklyTrend {
    pub fn new(values: [f64; WEEKDAY_COUNT]) -> Self {
        Self(values)
    }

    /// Builds a trend from an arbitrary sequence.
    ///
    /// Missing days are zero-filled, extra values are dropped and negative or
    /// non-finite values are zeroed. The flag is `true` when any of that happened.
    pub fn from_values(values: &[f64]) -> (Self, bool) {
        let mut buckets = [0.0; WEEKDAY_COUNT];
        let mut adjusted = values.len() != WEEKDAY_COUNT;

        for (slot, value) in buckets.iter_mut().zip(values.iter().copied()) {
            if value.is_finite() && value >= 0.0 {
                *slot = value;
            } else {
                adjusted = true;
            }
        }

        (Self(buckets), adjusted)
    }

    pub fn values(&self) -> &[f64; WEEKDAY_COUNT] {
        &self.0
    }

    /// Adds one to the bucket of the given weekday (0 = Monday).
    pub fn increment(&mut self, weekday_from_monday: usize) {
        if let Some(slot) = self.0.get_mut(weekday_from_monday) {
            *slot += 1.0;
        }
    }

    /// Pairs each bucket with its axis label.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        WEEKDAY_LABELS.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<[f64; WEEKDAY_COUNT]> for WeeklyTrend {
    fn from(values: [f64; WEEKDAY_COUNT]) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_default_snapshot_is_placeholder() {
        let snapshot = AnalyticsSnapshot::default();
        assert_eq!(snapshot.total_incidents, 0);
        assert_eq!(snapshot.avg_response, "...");
        assert!(snapshot.category_data.is_empty());
        assert!(snapshot.top_contributors.is_empty());
        assert_eq!(snapshot.trends.values(), &[0.0; 7]);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = AnalyticsSnapshot {
            total_incidents: 3,
            ..AnalyticsSnapshot::default()
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["totalIncidents"], 3);
        assert_eq!(json["avgResponse"], "...");
        assert_eq!(json["trends"].as_array().map(|a| a.len()), Some(7));
    }

    #[test_case(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], false ; "exact length")]
    #[test_case(&[4.0, 2.0], [4.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0], true ; "short is padded")]
    #[test_case(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0], [1.0; 7], true ; "long is truncated")]
    #[test_case(&[], [0.0; 7], true ; "empty is zero filled")]
    #[test_case(&[1.0, -3.0, f64::NAN, 2.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0], true ; "invalid values are zeroed")]
    fn test_weekly_trend_from_values(input: &[f64], expected: [f64; 7], adjusted: bool) {
        let (trend, was_adjusted) = WeeklyTrend::from_values(input);
        assert_eq!(trend.values(), &expected);
        assert_eq!(was_adjusted, adjusted);
    }

    #[test]
    fn test_weekly_trend_increment_and_labels() {
        let mut trend = WeeklyTrend::default();
        trend.increment(0);
        trend.increment(6);
        trend.increment(6);
        trend.increment(7); // out of range, ignored

        let labeled: Vec<_> = trend.labeled().collect();
        assert_eq!(labeled[0], ("Mon", 1.0));
        assert_eq!(labeled[6], ("Sun", 2.0));
        assert_eq!(trend.values().iter().sum::<f64>(), 3.0);
    }

    #[test]
    fn test_contributor_initial() {
        let contributor = Contributor {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            avatar: None,
            count: 9,
            efficiency: "96%".to_string(),
        };
        assert_eq!(contributor.initial(), "A");

        let unnamed = Contributor { name: String::new(), ..contributor };
        assert_eq!(unnamed.initial(), "?");
    }
}
