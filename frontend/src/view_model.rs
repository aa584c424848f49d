use shared::AnalyticsSnapshot;

use crate::components::category_progress::fill_width;
use crate::theme::Theme;

pub const NO_CATEGORY_DATA: &str = "No data available";
pub const NO_CONTRIBUTORS: &str = "No contributors yet";

pub const KPI_TOTAL_INCIDENTS: &str = "Total Incidents";
pub const KPI_RESOLUTION_RATE: &str = "Resolution Rate";
pub const KPI_AVG_RESPONSE: &str = "Avg. Response";
pub const KPI_ACTIVE_USERS: &str = "Active Users";

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCardView {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRowView {
    pub label: String,
    pub count: u64,
    /// Bar fill, already clamped to 0..=100
    pub fill_percent: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributorRowView {
    pub id: String,
    pub name: String,
    pub initial: String,
    pub avatar: Option<String>,
    pub resolutions: String,
    pub efficiency: String,
    /// Only the first entry carries the rank badge
    pub is_top_ranked: bool,
}

/// Everything the dashboard displays, derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub kpis: Vec<KpiCardView>,
    pub trend: Vec<f64>,
    pub axis_labels: Vec<&'static str>,
    pub categories: Vec<CategoryRowView>,
    pub contributors: Vec<ContributorRowView>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot, theme: &Theme) -> Self {
        let kpis = vec![
            KpiCardView {
                label: KPI_TOTAL_INCIDENTS,
                value: snapshot.total_incidents.to_string(),
                icon: "assignment",
                color: theme.info.clone(),
            },
            KpiCardView {
                label: KPI_RESOLUTION_RATE,
                value: format_rate(snapshot.resolution_rate),
                icon: "check_circle",
                color: theme.primary.clone(),
            },
            KpiCardView {
                label: KPI_AVG_RESPONSE,
                value: snapshot.avg_response.clone(),
                icon: "timer",
                color: theme.warning.clone(),
            },
            KpiCardView {
                label: KPI_ACTIVE_USERS,
                value: snapshot.active_users.to_string(),
                icon: "group",
                color: theme.accent.clone(),
            },
        ];

        let categories = snapshot
            .category_data
            .iter()
            .enumerate()
            .map(|(i, category)| CategoryRowView {
                label: category.label.clone(),
                count: category.count,
                fill_percent: fill_width(category.percentage),
                color: theme.category_color(i).to_string(),
            })
            .collect();

        let contributors = snapshot
            .top_contributors
            .iter()
            .enumerate()
            .map(|(rank, contributor)| ContributorRowView {
                id: contributor.id.clone(),
                name: contributor.name.clone(),
                initial: contributor.initial(),
                avatar: contributor.avatar.clone(),
                resolutions: format!("{} resolutions", contributor.count),
                efficiency: contributor.efficiency.clone(),
                is_top_ranked: rank == 0,
            })
            .collect();

        let (axis_labels, trend) = snapshot.trends.labeled().unzip();

        Self {
            kpis,
            trend,
            axis_labels,
            categories,
            contributors,
        }
    }

    pub fn kpi(&self, label: &str) -> Option<&KpiCardView> {
        self.kpis.iter().find(|card| card.label == label)
    }

    /// Message shown instead of the category list, if it is empty
    pub fn categories_placeholder(&self) -> Option<&'static str> {
        self.categories.is_empty().then_some(NO_CATEGORY_DATA)
    }

    /// Message shown instead of the leaderboard, if it is empty
    pub fn contributors_placeholder(&self) -> Option<&'static str> {
        self.contributors.is_empty().then_some(NO_CONTRIBUTORS)
    }
}

/// Resolution rate exactly as delivered, with a `%` suffix.
pub fn format_rate(rate: f64) -> String {
    if !rate.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(87.0), "87%");
        assert_eq!(format_rate(0.0), "0%");
        assert_eq!(format_rate(66.666), "66.666%");
        assert_eq!(format_rate(99.96), "99.96%");
        assert_eq!(format_rate(f64::NAN), "0%");
    }

    #[test]
    fn test_placeholder_snapshot_view() {
        let view = DashboardView::from_snapshot(&AnalyticsSnapshot::default(), &Theme::default());
        assert_eq!(view.kpi(KPI_AVG_RESPONSE).map(|k| k.value.as_str()), Some("..."));
        assert_eq!(view.categories_placeholder(), Some(NO_CATEGORY_DATA));
        assert_eq!(view.contributors_placeholder(), Some(NO_CONTRIBUTORS));
        assert_eq!(view.trend, vec![0.0; 7]);
        assert_eq!(view.axis_labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }
}
