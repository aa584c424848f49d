use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reported incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
}

/// An incident as stored by the reporting platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,

    /// Category label chosen by the reporter
    pub category: String,

    pub status: IncidentStatus,

    /// User who filed the incident
    pub reporter_id: String,

    /// Staff member the incident is assigned to, if any
    pub assignee_id: Option<String>,

    pub created_at: DateTime<Utc>,

    /// First staff action on the incident
    pub first_response_at: Option<DateTime<Utc>>,

    pub resolved_at: Option<DateTime<Utc>>,
}

impl Incident {
    pub fn is_resolved(&self) -> bool {
        self.status == IncidentStatus::Resolved
    }

    /// Time between creation and the first response.
    ///
    /// Responses timestamped before creation (clock skew between devices) count as zero.
    pub fn response_time(&self) -> Option<Duration> {
        self.first_response_at
            .map(|responded| (responded - self.created_at).max(Duration::zero()))
    }
}

/// Public profile data used to label contributors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}
