//! Schedule Builder: allocates the brand's platforms across one week of slots and
//! fills each slot with a fully specified post.
//!
//! Week anchoring: `weekOf` is the Monday of the ISO week that contains the launch
//! date, read in the launch date's own UTC offset. `2025-03-09T23:30:00-05:00` is a
//! Sunday and anchors to 2025-03-03, even though the same instant is Monday in UTC.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate};

use crate::platform::DEFAULT_PLATFORMS;
use crate::strategy::BrandTokens;
use crate::types::{BrandProfile, CampaignGoal, ContentPost, Objective, Platform, Tone, WeeklySchedule};

/// Monday of the week containing `launch_date`.
pub fn week_of(launch_date: &DateTime<FixedOffset>) -> NaiveDate {
    let date = launch_date.date_naive();
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Platforms to schedule, flagship first.
pub fn platform_set(profile: &BrandProfile) -> Vec<Platform> {
    let mut platforms: Vec<Platform> = Vec::with_capacity(profile.preferred_platforms.len());
    for platform in &profile.preferred_platforms {
        if !platforms.contains(platform) {
            platforms.push(*platform);
        }
    }
    if platforms.is_empty() {
        platforms.extend(DEFAULT_PLATFORMS);
    }
    platforms
}

/// One publishing opportunity: the platform and its index among that platform's slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub platform: Platform,
    pub index: usize,
}

/// Round-robin interleaving in priority order until each platform's cadence is used up.
pub fn allocate_slots(platforms: &[Platform]) -> Vec<Slot> {
    let rounds = platforms
        .iter()
        .map(Platform::weekly_cadence)
        .max()
        .unwrap_or(0);

    (0..rounds)
        .flat_map(move |round| {
            platforms
                .iter()
                .filter(move |p| round < p.weekly_cadence())
                .map(move |p| Slot {
                    platform: *p,
                    index: round,
                })
        })
        .collect()
}

pub fn build_weekly_schedule(profile: &BrandProfile, goal: &CampaignGoal) -> WeeklySchedule {
    let week_of = week_of(&goal.launch_date);
    let slots = allocate_slots(&platform_set(profile));
    let tokens = BrandTokens::new(profile, goal);
    let destinations = profile.focus_destinations();

    let posts = slots
        .iter()
        .enumerate()
        .map(|(position, slot)| {
            let destination = if destinations.is_empty() {
                tokens.destination
            } else {
                destinations[position % destinations.len()]
            };
            compose_post(
                profile,
                goal,
                tokens.with_destination(destination),
                week_of,
                *slot,
                position,
            )
        })
        .collect();

    WeeklySchedule { week_of, posts }
}

fn compose_post(
    profile: &BrandProfile,
    goal: &CampaignGoal,
    tokens: BrandTokens<'_>,
    week_of: NaiveDate,
    slot: Slot,
    position: usize,
) -> ContentPost {
    let platform = slot.platform;
    let formats = platform.formats();
    let angles = goal.objective.angles();
    let (title, hook) = angles[slot.index % angles.len()];
    let hook = format!("{} {}", platform.hook_lead(), tokens.fill(hook));

    let call_to_action = resolve_call_to_action(goal, platform);

    let supporting_data = format!(
        "KPI focus: {} | Destination: {} | Audience: {}",
        tokens.kpi,
        tokens.destination,
        profile.audience.label()
    );

    let caption = format!(
        "{}\n\n{} by {}.\n\n{}",
        hook, tokens.offering, tokens.brand, call_to_action
    );

    let tone_visuals = profile.tone.visuals();
    let visuals = vec![
        tone_visuals[position % tone_visuals.len()].to_string(),
        tone_visuals[(position + 1) % tone_visuals.len()].to_string(),
        platform.visual_bias().to_string(),
    ];

    let enrichments = vec![
        platform.enrichment().to_string(),
        goal.objective.enrichment().to_string(),
        format!("Track {} against the weekly baseline", tokens.kpi),
    ];

    ContentPost {
        id: format!("{}-{}-{}", week_of, platform.as_str(), slot.index + 1),
        platform,
        theme: format!("{}: {}", formats[slot.index % formats.len()], tokens.fill(title)),
        hook,
        supporting_data,
        caption,
        best_times: platform.best_times().iter().map(|t| t.to_string()).collect(),
        hashtags: hashtags(platform, &tokens),
        visuals,
        enrichments,
        call_to_action,
    }
}

/// The goal's own CTA when set, otherwise the platform default.
pub fn resolve_call_to_action(goal: &CampaignGoal, platform: Platform) -> String {
    let custom = goal.call_to_action.trim();
    if custom.is_empty() {
        platform.cta().to_string()
    } else {
        custom.to_string()
    }
}

fn hashtags(platform: Platform, tokens: &BrandTokens<'_>) -> Vec<String> {
    let mut tags: Vec<String> = platform.base_hashtags().iter().map(|t| t.to_string()).collect();
    for text in [tokens.brand, tokens.destination, tokens.kpi] {
        if let Some(tag) = to_hashtag(text) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
                tags.push(tag);
            }
        }
    }
    tags.truncate(platform.hashtag_density().max(1));
    tags
}

/// `"Amalfi Coast"` -> `#AmalfiCoast`. None when nothing alphanumeric remains.
pub fn to_hashtag(text: &str) -> Option<String> {
    let body: String = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    if body.is_empty() {
        None
    } else {
        Some(format!("#{}", body))
    }
}

impl Objective {
    /// Content angles as (theme title, hook) templates, rotated per platform slot.
    pub fn angles(&self) -> [(&'static str, &'static str); 3] {
        match self {
            Self::Awareness => [
                (
                    "First look at {destination}",
                    "{brand} takes you inside {destination} before anyone else.",
                ),
                (
                    "The making of {offering}",
                    "Every detail of {offering}, seen for the first time.",
                ),
                (
                    "Why {destination}, why now",
                    "Here is why {destination} belongs at the top of this year's list.",
                ),
            ],
            Self::Engagement => [
                (
                    "This or that in {destination}",
                    "Sunrise sail or sunset dinner in {destination}? Tell us below.",
                ),
                (
                    "Design your day",
                    "Build your perfect day of {offering}: pick one moment in the comments.",
                ),
                (
                    "Guest stories",
                    "Our guests describe {offering} in three words. What would yours be?",
                ),
            ],
            Self::LeadGeneration => [
                (
                    "Reserved for a few: {destination}",
                    "Only a handful of {offering} dates remain for {destination}.",
                ),
                (
                    "Inside the itinerary",
                    "See the full {offering} itinerary and everything {brand} includes.",
                ),
                (
                    "Plan with our concierge",
                    "Share your dates and {brand} will design the rest around {destination}.",
                ),
            ],
        }
    }

    pub fn enrichment(&self) -> &'static str {
        match self {
            Self::Awareness => "Boost the best performer to a lookalike audience",
            Self::Engagement => "Reply to every comment within the first hour",
            Self::LeadGeneration => "Route enquiries to the concierge CRM with a UTM-tagged link",
        }
    }
}

impl Tone {
    pub fn visuals(&self) -> [&'static str; 3] {
        match self {
            Self::Glamorous => [
                "Golden-hour portraits on a private yacht deck",
                "Champagne tower details in soft focus",
                "Couture styling against infinity pools",
            ],
            Self::Immersive => [
                "First-person walk-through with ambient sound",
                "Macro textures of sand, linen and stone",
                "Slow pans that follow the guest's gaze",
            ],
            Self::Adventurous => [
                "Drone reveals over ridgelines and reefs",
                "Action cams on the trail and in the water",
                "Campfire close-ups after the summit",
            ],
            Self::Serene => [
                "Still frames of mist over calm water",
                "Spa rituals shot in natural light",
                "Minimal compositions with open negative space",
            ],
            Self::Bespoke => [
                "Artisan hands at work on welcome amenities",
                "Flat-lay of the personalised itinerary",
                "Monogrammed details in warm window light",
            ],
        }
    }
}
