//! Shared data model for the content agent.
//!
//! Wire names are camelCase (`brandName`, `ultraHighNetWorth`, `leadGeneration`) so the
//! studio UI and the gateway exchange the exact same JSON shapes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

// -----------------------------------------------------------------------------
// Closed variants
// -----------------------------------------------------------------------------

/// Brand voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Glamorous,
    Immersive,
    Adventurous,
    Serene,
    Bespoke,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Self::Glamorous,
        Self::Immersive,
        Self::Adventurous,
        Self::Serene,
        Self::Bespoke,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Glamorous => "glamorous",
            Self::Immersive => "immersive",
            Self::Adventurous => "adventurous",
            Self::Serene => "serene",
            Self::Bespoke => "bespoke",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Glamorous => "Glamorous",
            Self::Immersive => "Immersive",
            Self::Adventurous => "Adventurous",
            Self::Serene => "Serene",
            Self::Bespoke => "Bespoke",
        }
    }
}

/// Primary audience the brand sells to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Audience {
    UltraHighNetWorth,
    AffluentFamilies,
    Honeymooners,
    ExperientialSeekers,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Self::UltraHighNetWorth,
        Self::AffluentFamilies,
        Self::Honeymooners,
        Self::ExperientialSeekers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UltraHighNetWorth => "ultraHighNetWorth",
            Self::AffluentFamilies => "affluentFamilies",
            Self::Honeymooners => "honeymooners",
            Self::ExperientialSeekers => "experientialSeekers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UltraHighNetWorth => "Ultra high-net-worth",
            Self::AffluentFamilies => "Affluent families",
            Self::Honeymooners => "Honeymooners",
            Self::ExperientialSeekers => "Experiential seekers",
        }
    }
}

/// Campaign objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Objective {
    Awareness,
    Engagement,
    LeadGeneration,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Self::Awareness, Self::Engagement, Self::LeadGeneration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Engagement => "engagement",
            Self::LeadGeneration => "leadGeneration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Awareness => "Awareness lift",
            Self::Engagement => "Deep engagement",
            Self::LeadGeneration => "Lead generation",
        }
    }
}

/// Supported social networks. Tables keyed by platform live in [`crate::platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Instagram,
    Facebook,
    Tiktok,
    Linkedin,
    Pinterest,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Self::Instagram,
        Self::Facebook,
        Self::Tiktok,
        Self::Linkedin,
        Self::Pinterest,
        Self::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Tiktok => "tiktok",
            Self::Linkedin => "linkedin",
            Self::Pinterest => "pinterest",
            Self::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Tiktok => "TikTok",
            Self::Linkedin => "LinkedIn",
            Self::Pinterest => "Pinterest",
            Self::Twitter => "X / Twitter",
        }
    }
}

fn parse_variant<T: Copy>(
    all: &[T],
    name: fn(&T) -> &'static str,
    field: &str,
    value: &str,
) -> Result<T, PlannerError> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|v| name(v) == wanted)
        .ok_or_else(|| PlannerError::unknown_variant(field, value))
}

impl FromStr for Tone {
    type Err = PlannerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "tone", s)
    }
}

impl FromStr for Audience {
    type Err = PlannerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "audience", s)
    }
}

impl FromStr for Objective {
    type Err = PlannerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "objective", s)
    }
}

impl FromStr for Platform {
    type Err = PlannerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "platform", s)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Inputs
// -----------------------------------------------------------------------------

/// Brand identity and constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub brand_name: String,
    pub signature_offering: String,
    pub tone: Tone,
    pub audience: Audience,
    /// Deduplicated; first entry is the "top" destination.
    pub destinations: Vec<String>,
    /// Unique, in priority order. First entry is the flagship platform.
    pub preferred_platforms: Vec<Platform>,
}

impl BrandProfile {
    /// Trims free text, drops blank destinations and removes duplicates while
    /// keeping first-seen order.
    pub fn normalized(mut self) -> Self {
        self.brand_name = self.brand_name.trim().to_string();
        self.signature_offering = self.signature_offering.trim().to_string();
        self.destinations = dedup_text(self.destinations);
        let mut seen = HashSet::new();
        self.preferred_platforms.retain(|p| seen.insert(*p));
        self
    }

    /// Destinations usable as interpolation tokens (trimmed, non-blank, unique).
    pub fn focus_destinations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.destinations
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty() && seen.insert(*d))
            .collect()
    }

    pub fn flagship_platform(&self) -> Platform {
        self.preferred_platforms
            .first()
            .copied()
            .unwrap_or(Platform::Instagram)
    }
}

/// Objective and timing of a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignGoal {
    pub objective: Objective,
    /// Kept in the caller's own UTC offset; the schedule week is anchored on it.
    pub launch_date: DateTime<FixedOffset>,
    pub kpis: Vec<String>,
    pub call_to_action: String,
}

impl CampaignGoal {
    pub fn normalized(mut self) -> Self {
        self.kpis = dedup_text(self.kpis);
        self.call_to_action = self.call_to_action.trim().to_string();
        self
    }

    pub fn top_kpi(&self) -> Option<&str> {
        self.kpis.iter().map(|k| k.trim()).find(|k| !k.is_empty())
    }
}

fn dedup_text(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

// -----------------------------------------------------------------------------
// Derived artifacts
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStrategy {
    /// Story beats, beginning -> climax -> resolution.
    pub narrative_arc: Vec<String>,
    pub experience_pillars: Vec<String>,
    pub storytelling_notes: Vec<String>,
    pub hero_offer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPost {
    pub id: String,
    pub platform: Platform,
    pub theme: String,
    pub hook: String,
    pub supporting_data: String,
    pub caption: String,
    pub best_times: Vec<String>,
    pub hashtags: Vec<String>,
    pub visuals: Vec<String>,
    pub enrichments: Vec<String>,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// Monday of the week containing the launch date.
    pub week_of: NaiveDate,
    /// Publication order.
    pub posts: Vec<ContentPost>,
}

/// Everything the studio renders after one agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub profile: BrandProfile,
    pub goal: CampaignGoal,
    pub strategy: ContentStrategy,
    pub schedule: WeeklySchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse_from_wire_names() {
        assert_eq!("ultraHighNetWorth".parse::<Audience>().unwrap(), Audience::UltraHighNetWorth);
        assert_eq!("leadGeneration".parse::<Objective>().unwrap(), Objective::LeadGeneration);
        assert_eq!(" tiktok ".parse::<Platform>().unwrap(), Platform::Tiktok);
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), tone);
        }
    }

    #[test]
    fn unknown_variant_names_field_and_value() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert_eq!(err, PlannerError::unknown_variant("platform", "myspace"));
        assert!(err.to_string().contains("myspace"));
        assert!("Glamorous".parse::<Tone>().is_err());
    }

    #[test]
    fn serde_names_match_as_str() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
        }
        for audience in Audience::ALL {
            let json = serde_json::to_string(&audience).unwrap();
            assert_eq!(json, format!("\"{}\"", audience.as_str()));
        }
        for objective in Objective::ALL {
            let json = serde_json::to_string(&objective).unwrap();
            assert_eq!(json, format!("\"{}\"", objective.as_str()));
        }
    }

    #[test]
    fn normalized_profile_dedups_in_first_seen_order() {
        let profile = BrandProfile {
            brand_name: "  Maison Azur ".into(),
            signature_offering: "Yacht week".into(),
            tone: Tone::Serene,
            audience: Audience::Honeymooners,
            destinations: vec![
                "Capri".into(),
                " ".into(),
                "Mykonos".into(),
                " Capri".into(),
            ],
            preferred_platforms: vec![Platform::Tiktok, Platform::Instagram, Platform::Tiktok],
        }
        .normalized();

        assert_eq!(profile.brand_name, "Maison Azur");
        assert_eq!(profile.destinations, vec!["Capri", "Mykonos"]);
        assert_eq!(profile.preferred_platforms, vec![Platform::Tiktok, Platform::Instagram]);
        assert_eq!(profile.flagship_platform(), Platform::Tiktok);
    }

    #[test]
    fn flagship_falls_back_to_instagram() {
        let profile = BrandProfile {
            brand_name: "A".into(),
            signature_offering: "B".into(),
            tone: Tone::Bespoke,
            audience: Audience::AffluentFamilies,
            destinations: vec![],
            preferred_platforms: vec![],
        };
        assert_eq!(profile.flagship_platform(), Platform::Instagram);
        assert!(profile.focus_destinations().is_empty());
    }

    #[test]
    fn profile_uses_camel_case_keys() {
        let profile = BrandProfile {
            brand_name: "A".into(),
            signature_offering: "B".into(),
            tone: Tone::Bespoke,
            audience: Audience::AffluentFamilies,
            destinations: vec!["Kyoto".into()],
            preferred_platforms: vec![Platform::Linkedin],
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["brandName"], "A");
        assert_eq!(value["signatureOffering"], "B");
        assert_eq!(value["audience"], "affluentFamilies");
        assert_eq!(value["preferredPlatforms"][0], "linkedin");
    }
}
