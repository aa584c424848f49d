use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, Utc};
use log::debug;

use crate::models::analytics::*;
use crate::models::incident::{Incident, UserProfile};

/// Aggregation window and leaderboard size
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Length of the trailing period, in days
    pub period_days: i64,
    /// Maximum number of leaderboard entries
    pub max_contributors: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            period_days: 30,
            max_contributors: 5,
        }
    }
}

/// Builds dashboard snapshots from raw incident records
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: EngineConfig,
}

#[derive(Default)]
struct AssigneeTally {
    assigned: u64,
    resolved: u64,
}

impl AnalyticsEngine {
    /// Creates a new engine with the default 30 day window
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the snapshot for the period ending at `now`.
    ///
    /// Only incidents created inside `(now - period_days, now]` are counted.
    /// A period reaching past the representable range counts everything up to `now`.
    pub fn compute_snapshot(
        &self,
        incidents: &[Incident],
        users: &[UserProfile],
        now: DateTime<Utc>,
    ) -> AnalyticsSnapshot {
        let period_start = Duration::try_days(self.config.period_days)
            .and_then(|period| now.checked_sub_signed(period))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let in_period: Vec<&Incident> = incidents
            .iter()
            .filter(|incident| incident.created_at > period_start && incident.created_at <= now)
            .collect();

        let total = in_period.len() as u64;
        let resolved = in_period.iter().filter(|incident| incident.is_resolved()).count() as u64;

        debug!(
            "Computing analytics snapshot: {} of {} incidents in period, {} resolved",
            total,
            incidents.len(),
            resolved
        );

        AnalyticsSnapshot {
            total_incidents: total,
            resolution_rate: percentage(resolved, total),
            avg_response: self.average_response(&in_period),
            active_users: self.count_active_users(&in_period),
            category_data: self.category_breakdown(&in_period),
            top_contributors: self.rank_contributors(&in_period, users),
            trends: self.weekday_trend(&in_period),
        }
    }

    fn average_response(&self, incidents: &[&Incident]) -> String {
        let response_times: Vec<Duration> = incidents
            .iter()
            .filter_map(|incident| incident.response_time())
            .collect();

        if response_times.is_empty() {
            return "N/A".to_string();
        }

        let total_seconds: i64 = response_times.iter().map(|d| d.num_seconds()).sum();
        let average = Duration::seconds(total_seconds / response_times.len() as i64);
        format_response_time(average)
    }

    fn count_active_users(&self, incidents: &[&Incident]) -> u64 {
        let mut users: HashSet<&str> = HashSet::new();
        for incident in incidents {
            users.insert(incident.reporter_id.as_str());
            if let Some(assignee) = &incident.assignee_id {
                users.insert(assignee.as_str());
            }
        }
        users.len() as u64
    }

    fn category_breakdown(&self, incidents: &[&Incident]) -> Vec<CategoryStat> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for incident in incidents {
            *counts.entry(incident.category.as_str()).or_insert(0) += 1;
        }

        let total = incidents.len() as u64;
        let mut categories: Vec<CategoryStat> = counts
            .into_iter()
            .map(|(label, count)| CategoryStat {
                label: label.to_string(),
                count,
                percentage: percentage(count, total),
            })
            .collect();

        // BTreeMap already yields labels in order, so a stable sort keeps ties alphabetical
        categories.sort_by(|a, b| b.count.cmp(&a.count));
        categories
    }

    fn rank_contributors(&self, incidents: &[&Incident], users: &[UserProfile]) -> Vec<Contributor> {
        let mut tallies: HashMap<&str, AssigneeTally> = HashMap::new();
        for incident in incidents {
            if let Some(assignee) = &incident.assignee_id {
                let tally = tallies.entry(assignee.as_str()).or_default();
                tally.assigned += 1;
                if incident.is_resolved() {
                    tally.resolved += 1;
                }
            }
        }

        let directory: HashMap<&str, &UserProfile> =
            users.iter().map(|user| (user.id.as_str(), user)).collect();

        let mut contributors: Vec<Contributor> = tallies
            .into_iter()
            .filter(|(_, tally)| tally.resolved > 0)
            .map(|(id, tally)| {
                let profile = directory.get(id);
                Contributor {
                    id: id.to_string(),
                    name: profile
                        .map(|p| p.name.clone())
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| id.to_string()),
                    avatar: profile.and_then(|p| p.avatar.clone()),
                    count: tally.resolved,
                    efficiency: format!("{:.0}%", percentage(tally.resolved, tally.assigned)),
                }
            })
            .collect();

        contributors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        contributors.truncate(self.config.max_contributors);
        contributors
    }

    fn weekday_trend(&self, incidents: &[&Incident]) -> WeeklyTrend {
        let mut trend = WeeklyTrend::default();
        for incident in incidents {
            trend.increment(incident.created_at.weekday().num_days_from_monday() as usize);
        }
        trend
    }
}

/// `part / whole` as a whole-number percentage; zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).round()
}

/// Formats a duration the way the dashboard displays response times.
///
/// `"1d 4h"`, `"2h 15m"`, `"45m"`, or `"<1m"` for anything under a minute.
pub fn format_response_time(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes < 1 {
        return "<1m".to_string();
    }

    let days = minutes / (24 * 60);
    let hours = (minutes / 60) % 24;
    let mins = minutes % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::incident::IncidentStatus;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    // Wednesday
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()
    }

    fn incident(id: &str, category: &str, days_ago: i64) -> Incident {
        Incident {
            id: id.to_string(),
            category: category.to_string(),
            status: IncidentStatus::Open,
            reporter_id: format!("reporter/{}", id),
            assignee_id: None,
            created_at: now() - Duration::days(days_ago),
            first_response_at: None,
            resolved_at: None,
        }
    }

    fn resolved_by(mut incident: Incident, assignee: &str) -> Incident {
        incident.status = IncidentStatus::Resolved;
        incident.assignee_id = Some(assignee.to_string());
        incident.resolved_at = Some(incident.created_at + Duration::hours(4));
        incident
    }

    fn assigned_to(mut incident: Incident, assignee: &str) -> Incident {
        incident.status = IncidentStatus::InProgress;
        incident.assignee_id = Some(assignee.to_string());
        incident
    }

    fn user(id: &str, name: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_snapshot() {
        let snapshot = AnalyticsEngine::new().compute_snapshot(&[], &[], now());
        assert_eq!(snapshot.total_incidents, 0);
        assert_eq!(snapshot.resolution_rate, 0.0);
        assert_eq!(snapshot.avg_response, "N/A");
        assert_eq!(snapshot.active_users, 0);
        assert!(snapshot.category_data.is_empty());
        assert!(snapshot.top_contributors.is_empty());
        assert_eq!(snapshot.trends.values(), &[0.0; 7]);
    }

    #[test]
    fn test_incidents_outside_period_are_ignored() {
        let incidents = vec![
            incident("1", "Bug", 1),
            incident("2", "Bug", 31),
            incident("3", "Bug", -1), // in the future
        ];
        let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &[], now());
        assert_eq!(snapshot.total_incidents, 1);
    }

    #[test]
    fn test_oversized_period_counts_everything() {
        let engine = AnalyticsEngine::with_config(EngineConfig {
            period_days: i64::MAX,
            ..EngineConfig::default()
        });
        let incidents = vec![incident("1", "Bug", 1), incident("2", "Bug", 4000)];
        let snapshot = engine.compute_snapshot(&incidents, &[], now());
        assert_eq!(snapshot.total_incidents, 2);
    }

    #[test]
    fn test_resolution_rate_and_categories() {
        let incidents = vec![
            resolved_by(incident("1", "Bug", 1), "staff/a"),
            resolved_by(incident("2", "Bug", 2), "staff/a"),
            incident("3", "Safety", 2),
            incident("4", "Access", 3),
        ];
        let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &[], now());

        assert_eq!(snapshot.resolution_rate, 50.0);
        let labels: Vec<_> = snapshot.category_data.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Bug", "Access", "Safety"]);
        assert_eq!(snapshot.category_data[0].percentage, 50.0);
        assert_eq!(snapshot.category_data[1].percentage, 25.0);
    }

    #[test]
    fn test_contributor_ranking_and_efficiency() {
        let incidents = vec![
            resolved_by(incident("1", "Bug", 1), "staff/b"),
            resolved_by(incident("2", "Bug", 1), "staff/b"),
            assigned_to(incident("3", "Bug", 1), "staff/b"),
            resolved_by(incident("4", "Bug", 1), "staff/a"),
            resolved_by(incident("5", "Bug", 1), "staff/c"),
            assigned_to(incident("6", "Bug", 1), "staff/d"),
        ];
        let users = vec![user("staff/a", "Ana"), user("staff/b", "Bruno"), user("staff/c", "Carla")];
        let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &users, now());

        let ranked: Vec<_> = snapshot
            .top_contributors
            .iter()
            .map(|c| (c.name.as_str(), c.count, c.efficiency.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![("Bruno", 2, "67%"), ("Ana", 1, "100%"), ("Carla", 1, "100%")]
        );
    }

    #[test]
    fn test_unknown_contributor_falls_back_to_id() {
        let incidents = vec![resolved_by(incident("1", "Bug", 1), "staff/ghost")];
        let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &[], now());
        assert_eq!(snapshot.top_contributors[0].name, "staff/ghost");
    }

    #[test]
    fn test_leaderboard_is_truncated() {
        let incidents: Vec<_> = (0..8)
            .map(|i| resolved_by(incident(&i.to_string(), "Bug", 1), &format!("staff/{}", i)))
            .collect();
        let engine = AnalyticsEngine::with_config(EngineConfig {
            max_contributors: 3,
            ..EngineConfig::default()
        });
        let snapshot = engine.compute_snapshot(&incidents, &[], now());
        assert_eq!(snapshot.top_contributors.len(), 3);
    }

    #[test]
    fn test_active_users_counts_reporters_and_assignees() {
        let mut shared_reporter = incident("1", "Bug", 1);
        shared_reporter.reporter_id = "user/x".to_string();
        let mut second = assigned_to(incident("2", "Bug", 1), "staff/a");
        second.reporter_id = "user/x".to_string();
        let snapshot = AnalyticsEngine::new().compute_snapshot(&[shared_reporter, second], &[], now());
        assert_eq!(snapshot.active_users, 2);
    }

    #[test]
    fn test_trend_buckets_by_weekday() {
        // now() is a Wednesday: 0 days ago -> Wed, 2 days ago -> Mon, 3 days ago -> Sun
        let incidents = vec![
            incident("1", "Bug", 0),
            incident("2", "Bug", 2),
            incident("3", "Bug", 2),
            incident("4", "Bug", 3),
        ];
        let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &[], now());
        assert_eq!(snapshot.trends.values(), &[2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_average_response() {
        let mut first = incident("1", "Bug", 1);
        first.first_response_at = Some(first.created_at + Duration::minutes(120));
        let mut second = incident("2", "Bug", 1);
        second.first_response_at = Some(second.created_at + Duration::minutes(150));
        let unanswered = incident("3", "Bug", 1);

        let snapshot = AnalyticsEngine::new().compute_snapshot(&[first, second, unanswered], &[], now());
        assert_eq!(snapshot.avg_response, "2h 15m");
    }

    #[rstest]
    #[case(Duration::seconds(30), "<1m")]
    #[case(Duration::minutes(45), "45m")]
    #[case(Duration::minutes(135), "2h 15m")]
    #[case(Duration::hours(28), "1d 4h")]
    #[case(Duration::zero(), "<1m")]
    fn test_format_response_time(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_response_time(duration), expected);
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 3, 33.0)]
    #[case(2, 3, 67.0)]
    #[case(5, 5, 100.0)]
    fn test_percentage(#[case] part: u64, #[case] whole: u64, #[case] expected: f64) {
        assert_eq!(percentage(part, whole), expected);
    }

    fn arb_incident() -> impl Strategy<Value = Incident> {
        (0usize..4, 0usize..3, 0i64..45, proptest::option::of(0usize..4), 0usize..6).prop_map(
            |(category, status, days_ago, assignee, reporter)| {
                let status = [IncidentStatus::Open, IncidentStatus::InProgress, IncidentStatus::Resolved][status];
                Incident {
                    id: format!("incident/{}-{}", days_ago, category),
                    category: ["Bug", "Safety", "Access", "Noise"][category].to_string(),
                    status,
                    reporter_id: format!("user/{}", reporter),
                    assignee_id: assignee.map(|a| format!("staff/{}", a)),
                    created_at: now() - Duration::days(days_ago),
                    first_response_at: None,
                    resolved_at: None,
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_snapshot_invariants(incidents in proptest::collection::vec(arb_incident(), 0..60)) {
            let snapshot = AnalyticsEngine::new().compute_snapshot(&incidents, &[], now());

            prop_assert!((0.0..=100.0).contains(&snapshot.resolution_rate));
            prop_assert_eq!(snapshot.trends.values().iter().sum::<f64>() as u64, snapshot.total_incidents);
            prop_assert_eq!(
                snapshot.category_data.iter().map(|c| c.count).sum::<u64>(),
                snapshot.total_incidents
            );
            for category in &snapshot.category_data {
                prop_assert!((0.0..=100.0).contains(&category.percentage));
            }
            prop_assert!(snapshot.top_contributors.len() <= 5);
            for pair in snapshot.top_contributors.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
    }
}
