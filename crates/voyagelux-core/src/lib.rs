//! VoyageLux content agent: core library.
//! Deterministic strategy composer and weekly schedule builder for luxury travel
//! brands, plus the shared wire types used by the gateway and the studio client.

pub mod agent;
pub mod defaults;
pub mod error;
pub mod intake;
pub mod platform;
pub mod schedule;
pub mod strategy;
pub mod types;

pub use agent::run_agent;
pub use defaults::{default_brand_profile, default_campaign_goal};
pub use error::{PlannerError, PlannerResult};
pub use intake::{parse_launch_date, PlanRequest};
pub use platform::{platform_cta_table, PlatformCta, DEFAULT_PLATFORMS};
pub use schedule::build_weekly_schedule;
pub use strategy::compose_strategy;
pub use types::{
    AgentResponse, Audience, BrandProfile, CampaignGoal, ContentPost, ContentStrategy, Objective,
    Platform, Tone, WeeklySchedule,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
