#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use yew_router::Routable;

    use crate::components::bottom_nav::NavDestination;
    use crate::Route;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::AdminUsers.to_path(), "/admin/users");
        assert_eq!(Route::AdminCategories.to_path(), "/admin/categories");
        assert_eq!(Route::AdminAnalytics.to_path(), "/admin/analytics");
        assert_eq!(Route::AdminRoles.to_path(), "/admin/roles");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/admin/analytics"), Some(Route::AdminAnalytics));
        assert_eq!(Route::recognize("/admin/roles"), Some(Route::AdminRoles));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn test_every_destination_has_a_route() {
        let routes: Vec<Route> = NavDestination::ALL.into_iter().map(Route::from).collect();
        assert_eq!(
            routes,
            vec![
                Route::AdminUsers,
                Route::AdminCategories,
                Route::AdminAnalytics,
                Route::AdminRoles,
            ]
        );
    }

    #[test]
    fn test_destination_keys_round_trip() {
        for destination in NavDestination::ALL {
            assert_eq!(NavDestination::from_key(destination.key()), Some(destination));
        }
        assert_eq!(NavDestination::from_key("admin-unknown"), None);
    }

    #[test]
    fn test_snapshot_payload_shape() {
        let payload = json!({
            "totalIncidents": 42,
            "resolutionRate": 87,
            "avgResponse": "2h 15m",
            "activeUsers": 13,
            "categoryData": [],
            "topContributors": [],
            "trends": [1, 2, 3, 4, 5, 6, 7]
        });
        let snapshot = shared::AnalyticsSnapshotDto::parse_snapshot(&payload.to_string())
            .expect("payload should decode");
        assert_eq!(snapshot.total_incidents, 42);
        assert_eq!(snapshot.trends.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
