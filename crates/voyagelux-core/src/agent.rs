//! Agent orchestrator. The same function backs the gateway endpoints and the
//! studio client's local fallback.

use crate::schedule::build_weekly_schedule;
use crate::strategy::compose_strategy;
use crate::types::{AgentResponse, BrandProfile, CampaignGoal};

/// Compose strategy and schedule for one campaign. Inputs are used as given;
/// normalization belongs to the caller (see [`crate::intake`]).
pub fn run_agent(profile: &BrandProfile, goal: &CampaignGoal) -> AgentResponse {
    let strategy = compose_strategy(profile, goal);
    let schedule = build_weekly_schedule(profile, goal);

    tracing::debug!(
        brand = %profile.brand_name,
        tone = %profile.tone,
        objective = %goal.objective,
        week_of = %schedule.week_of,
        posts = schedule.posts.len(),
        "agent run composed"
    );

    AgentResponse {
        profile: profile.clone(),
        goal: goal.clone(),
        strategy,
        schedule,
    }
}
