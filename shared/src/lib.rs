pub mod models {
    pub mod analytics;
    pub mod incident;
}

pub mod dto {
    pub mod analytics;
}

pub mod analytics {
    pub mod engine;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    analytics::{
        AnalyticsSnapshot, CategoryStat, Contributor, WeeklyTrend, WEEKDAY_COUNT, WEEKDAY_LABELS,
    },
    incident::{Incident, IncidentStatus, UserProfile},
};

// Re-export DTOs
pub use dto::analytics::{AnalyticsSnapshotDto, CategoryStatDto, ContributorDto};

pub use analytics::engine::{AnalyticsEngine, EngineConfig};
