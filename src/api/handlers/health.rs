use crate::api::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

/// Reports whether the service can reach its database.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.database.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            error!(error.message = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::{
        api::{AppState, build_router},
        errors::Result,
        test_utils::setup_test_db,
    };
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_needs_no_token() -> Result<()> {
        let db = setup_test_db().await?;
        let response = build_router(AppState::new(Arc::new(db)))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
