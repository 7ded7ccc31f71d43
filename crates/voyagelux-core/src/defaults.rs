//! Default Provider: baseline profile and goal used when a caller omits them.
//!
//! Plain constructors; every call hands out fresh owned values.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};

use crate::types::{Audience, BrandProfile, CampaignGoal, Objective, Platform, Tone};

pub const DEFAULT_BRAND_NAME: &str = "VoyageLux Private Journeys";
pub const DEFAULT_SIGNATURE_OFFERING: &str = "Private island sunset sailings";
/// Wire form of [`default_launch_date`].
pub const DEFAULT_LAUNCH_DATE: &str = "2025-03-03T09:00:00Z";
/// Seconds since the Unix epoch for [`DEFAULT_LAUNCH_DATE`].
pub const DEFAULT_LAUNCH_TIMESTAMP: i64 = 1_740_992_400;

pub fn default_brand_profile() -> BrandProfile {
    BrandProfile {
        brand_name: DEFAULT_BRAND_NAME.to_string(),
        signature_offering: DEFAULT_SIGNATURE_OFFERING.to_string(),
        tone: Tone::Glamorous,
        audience: Audience::UltraHighNetWorth,
        destinations: vec![
            "Santorini".to_string(),
            "Amalfi Coast".to_string(),
            "Maldives".to_string(),
        ],
        preferred_platforms: vec![Platform::Instagram, Platform::Tiktok, Platform::Pinterest],
    }
}

pub fn default_campaign_goal() -> CampaignGoal {
    CampaignGoal {
        objective: Objective::Awareness,
        launch_date: default_launch_date(),
        kpis: vec![
            "Reach".to_string(),
            "Saves".to_string(),
            "Profile visits".to_string(),
        ],
        call_to_action: Platform::Instagram.cta().to_string(),
    }
}

/// 2025-03-03 09:00 UTC, a Monday.
pub fn default_launch_date() -> DateTime<FixedOffset> {
    // NaiveDateTime::default() is the Unix epoch.
    (NaiveDateTime::default() + Duration::seconds(DEFAULT_LAUNCH_TIMESTAMP))
        .and_utc()
        .fixed_offset()
}
