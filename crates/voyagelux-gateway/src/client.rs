//! Studio client: asks a running gateway for plans and renders locally when the
//! gateway cannot answer.
//!
//! Both paths go through the same core crate, so a fallback plan is identical to
//! the one the gateway would have returned for the same inputs.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use voyagelux_core::{
    build_weekly_schedule, run_agent, AgentResponse, BrandProfile, CampaignGoal, PlanRequest,
    WeeklySchedule,
};

pub const FALLBACK_NOTICE: &str =
    "Live generation encountered an issue. Displaying locally rendered plan.";
pub const BLUEPRINT_UNAVAILABLE: &str =
    "Unable to fetch the launch blueprint. Adjust the inputs and retry.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unable to fetch the launch blueprint. Adjust the inputs and retry.")]
    BlueprintUnavailable(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Live,
    LocalFallback,
}

/// A plan plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioPlan<T> {
    pub plan: T,
    pub source: PlanSource,
    /// User-facing banner, set when the plan was rendered locally.
    pub notice: Option<&'static str>,
}

impl<T> StudioPlan<T> {
    fn live(plan: T) -> Self {
        Self {
            plan,
            source: PlanSource::Live,
            notice: None,
        }
    }

    fn local(plan: T) -> Self {
        Self {
            plan,
            source: PlanSource::LocalFallback,
            notice: Some(FALLBACK_NOTICE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudioClient {
    http: Client,
    base_url: String,
}

impl StudioClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default plan shown when the studio opens. No local fallback here.
    pub async fn initial_plan(&self) -> Result<AgentResponse, ClientError> {
        self.http
            .get(format!("{}/api/generate", self.base_url))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ClientError::BlueprintUnavailable)?
            .json::<AgentResponse>()
            .await
            .map_err(ClientError::BlueprintUnavailable)
    }

    pub async fn generate(
        &self,
        profile: &BrandProfile,
        goal: &CampaignGoal,
    ) -> StudioPlan<AgentResponse> {
        let request = PlanRequest::new(profile.clone(), goal.clone());
        match self.post::<AgentResponse>("/api/generate", &request).await {
            Ok(plan) => StudioPlan::live(plan),
            Err(e) => {
                tracing::warn!(error = %e, base_url = %self.base_url, "live generation failed, rendering locally");
                let request = normalize_locally(request);
                StudioPlan::local(run_agent(&request.profile, &request.goal))
            }
        }
    }

    pub async fn schedule(
        &self,
        profile: &BrandProfile,
        goal: &CampaignGoal,
    ) -> StudioPlan<WeeklySchedule> {
        let request = PlanRequest::new(profile.clone(), goal.clone());
        match self.post::<WeeklySchedule>("/api/schedule", &request).await {
            Ok(plan) => StudioPlan::live(plan),
            Err(e) => {
                tracing::warn!(error = %e, base_url = %self.base_url, "live schedule failed, rendering locally");
                let request = normalize_locally(request);
                StudioPlan::local(build_weekly_schedule(&request.profile, &request.goal))
            }
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &PlanRequest,
    ) -> Result<T, reqwest::Error> {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}

/// Apply the gateway's intake rules so local output matches what the server
/// would have produced.
fn normalize_locally(request: PlanRequest) -> PlanRequest {
    serde_json::to_value(&request)
        .ok()
        .and_then(|value| PlanRequest::from_value(&value).ok())
        .unwrap_or(request)
}
