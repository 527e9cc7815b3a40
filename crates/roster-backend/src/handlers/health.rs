use std::sync::Arc;

use axum::{Json, extract::State};
use roster::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use roster::log;

use crate::services::ActivityService;

fn uptime_seconds(started_at: chrono::DateTime<chrono::Utc>) -> i64 {
    (chrono::Utc::now() - started_at).num_seconds()
}

fn human_readable_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Handler for `GET /health`
pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let directory = state.activities.list().await.unwrap_or_default();
    let participant_count = directory
        .values()
        .map(|a| a.participants.len())
        .sum::<usize>();
    let seconds = uptime_seconds(state.started_at);

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: UptimeInfo {
            seconds,
            human: human_readable_uptime(seconds),
        },
        services: ServiceInfo {
            activities: "up".to_string(),
            activity_count: directory.len(),
            participant_count,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_readable_uptime_formats() {
        assert_eq!(human_readable_uptime(42), "42s");
        assert_eq!(human_readable_uptime(125), "2m 5s");
        assert_eq!(human_readable_uptime(3 * 3600 + 61), "3h 1m 1s");
        assert_eq!(human_readable_uptime(86400 + 3600 + 60 + 1), "1d 1h 1m 1s");
    }

    #[tokio::test]
    async fn reports_seeded_counts() {
        let state = Arc::new(crate::AppState::default());
        let Json(health) = get(State(state)).await;

        let seed = crate::services::seed::activities();
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.services.activity_count, seed.len());
        assert_eq!(
            health.services.participant_count,
            seed.values().map(|a| a.participants.len()).sum::<usize>()
        );
        assert!(health.uptime.seconds >= 0);
    }
}
