use crate::error::{Result, SharedError};
use crate::models::analytics::*;
use log::warn;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for the analytics feed payload.
///
/// Mirrors the JSON document pushed by the analytics provider. Collections
/// and the trend series are optional on the wire; conversion into
/// [`AnalyticsSnapshot`] fills the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshotDto {
    pub total_incidents: u64,
    #[validate(range(min = 0.0, max = 100.0, message = "Resolution rate must be between 0 and 100"))]
    pub resolution_rate: f64,
    #[serde(default = "default_avg_response")]
    pub avg_response: String,
    pub active_users: u64,
    #[validate]
    #[serde(default)]
    pub category_data: Vec<CategoryStatDto>,
    #[validate]
    #[serde(default)]
    pub top_contributors: Vec<ContributorDto>,
    #[serde(default)]
    pub trends: Vec<f64>,
}

/// Data Transfer Object for a category row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryStatDto {
    #[validate(length(min = 1, message = "Category label is required"))]
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

/// Data Transfer Object for a leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContributorDto {
    #[validate(length(min = 1, message = "Contributor id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Contributor name is required"))]
    pub name: String,
    #[validate(url(message = "Avatar must be a valid URL"))]
    #[serde(default)]
    pub avatar: Option<String>,
    pub count: u64,
    pub efficiency: String,
}

fn default_avg_response() -> String {
    "N/A".to_string()
}

impl From<CategoryStatDto> for CategoryStat {
    fn from(dto: CategoryStatDto) -> Self {
        Self {
            label: dto.label,
            count: dto.count,
            percentage: dto.percentage,
        }
    }
}

impl From<ContributorDto> for Contributor {
    fn from(dto: ContributorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            avatar: dto.avatar,
            count: dto.count,
            efficiency: dto.efficiency,
        }
    }
}

impl From<&AnalyticsSnapshot> for AnalyticsSnapshotDto {
    fn from(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            total_incidents: snapshot.total_incidents,
            resolution_rate: snapshot.resolution_rate,
            avg_response: snapshot.avg_response.clone(),
            active_users: snapshot.active_users,
            category_data: snapshot
                .category_data
                .iter()
                .map(|c| CategoryStatDto {
                    label: c.label.clone(),
                    count: c.count,
                    percentage: c.percentage,
                })
                .collect(),
            top_contributors: snapshot
                .top_contributors
                .iter()
                .map(|c| ContributorDto {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    avatar: c.avatar.clone(),
                    count: c.count,
                    efficiency: c.efficiency.clone(),
                })
                .collect(),
            trends: snapshot.trends.values().to_vec(),
        }
    }
}

impl TryFrom<AnalyticsSnapshotDto> for AnalyticsSnapshot {
    type Error = SharedError;

    fn try_from(dto: AnalyticsSnapshotDto) -> Result<Self> {
        dto.validate()?;

        let (trends, adjusted) = WeeklyTrend::from_values(&dto.trends);
        if adjusted {
            warn!(
                "Analytics payload carried {} trend values, normalized to {:?}",
                dto.trends.len(),
                trends.values()
            );
        }

        Ok(Self {
            total_incidents: dto.total_incidents,
            resolution_rate: dto.resolution_rate,
            avg_response: dto.avg_response,
            active_users: dto.active_users,
            category_data: dto.category_data.into_iter().map(Into::into).collect(),
            top_contributors: dto.top_contributors.into_iter().map(Into::into).collect(),
            trends,
        })
    }
}

impl AnalyticsSnapshotDto {
    /// Decodes a provider payload from JSON text.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decodes, validates and normalizes a provider payload in one step.
    pub fn parse_snapshot(payload: &str) -> Result<AnalyticsSnapshot> {
        AnalyticsSnapshot::try_from(Self::from_json(payload)?)
    }
}
