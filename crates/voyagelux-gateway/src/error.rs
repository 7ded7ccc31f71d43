//! HTTP error mapping for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use voyagelux_core::PlannerError;

/// Body of every 4xx answer: `{ "error", "field", "value" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Planner(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let ApiError::Planner(err) = self;
        let value = match err {
            PlannerError::UnknownVariant { value, .. } => value,
            PlannerError::InvalidLaunchDate(raw) => raw,
        };
        ErrorBody {
            error: self.to_string(),
            field: err.field().map(str::to_string),
            value: Some(value.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting plan request");
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_maps_to_bad_request_with_field() {
        let err = ApiError::from(PlannerError::unknown_variant("profile.tone", "moody"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["field"], "profile.tone");
        assert_eq!(body["value"], "moody");
        assert!(body["error"].as_str().unwrap().contains("moody"));
    }

    #[test]
    fn launch_date_error_reports_the_planner_field_path() {
        let planner = PlannerError::InvalidLaunchDate("next tuesday".into());
        let expected_field = planner.field().map(str::to_string);
        let body = ApiError::from(planner).body();
        assert_eq!(body.field, expected_field);
        assert_eq!(body.field.as_deref(), Some("goal.launchDate"));
        assert_eq!(body.value.as_deref(), Some("next tuesday"));
    }
}
