//! Platform Catalog: the single source of truth for platform-native calls to action,
//! posting windows, cadence and content conventions.
//!
//! | Platform | Cadence / week | Best times | Hashtag density |
//! |----------|----------------|------------|-----------------|
//! | instagram | 3 | 11:00, 19:00 | 6 |
//! | facebook | 2 | 09:00, 13:00 | 3 |
//! | tiktok | 3 | 12:00, 19:30, 21:00 | 5 |
//! | linkedin | 2 | 08:00, 12:00 | 3 |
//! | pinterest | 2 | 20:00, 21:30 | 4 |
//! | twitter | 3 | 08:30, 12:00, 17:30 | 2 |
//!
//! These are static policy constants, not learned values.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::types::Platform;

/// Platforms scheduled when a brand lists no preferred platform.
pub const DEFAULT_PLATFORMS: [Platform; 1] = [Platform::Instagram];

impl Platform {
    /// Default platform-native call to action.
    pub fn cta(&self) -> &'static str {
        match self {
            Self::Instagram => "Tap the link in bio to reserve your private consultation",
            Self::Facebook => "Message our concierge to begin your itinerary",
            Self::Tiktok => "Follow for more and tap to book a discovery call",
            Self::Linkedin => "Connect with our travel design team for bespoke proposals",
            Self::Pinterest => "Save this pin and visit our site to plan your escape",
            Self::Twitter => "Reply or DM to secure your preferred dates",
        }
    }

    /// Best posting windows, earliest first.
    pub fn best_times(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["11:00", "19:00"],
            Self::Facebook => &["09:00", "13:00"],
            Self::Tiktok => &["12:00", "19:30", "21:00"],
            Self::Linkedin => &["08:00", "12:00"],
            Self::Pinterest => &["20:00", "21:30"],
            Self::Twitter => &["08:30", "12:00", "17:30"],
        }
    }

    /// Slots per week.
    pub fn weekly_cadence(&self) -> usize {
        match self {
            Self::Instagram | Self::Tiktok | Self::Twitter => 3,
            Self::Facebook | Self::Linkedin | Self::Pinterest => 2,
        }
    }

    /// Maximum hashtags per post.
    pub fn hashtag_density(&self) -> usize {
        match self {
            Self::Instagram => 6,
            Self::Facebook => 3,
            Self::Tiktok => 5,
            Self::Linkedin => 3,
            Self::Pinterest => 4,
            Self::Twitter => 2,
        }
    }

    pub fn base_hashtags(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["#LuxuryTravel", "#TravelInStyle"],
            Self::Facebook => &["#LuxuryEscapes"],
            Self::Tiktok => &["#LuxuryTravel", "#TravelTok"],
            Self::Linkedin => &["#LuxuryHospitality", "#TravelDesign"],
            Self::Pinterest => &["#DreamDestinations", "#LuxuryTravel"],
            Self::Twitter => &["#LuxuryTravel"],
        }
    }

    /// Native content formats, rotated across a platform's slots.
    pub fn formats(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["Reel", "Carousel", "Story sequence"],
            Self::Facebook => &["Photo album", "Live Q&A"],
            Self::Tiktok => &["POV clip", "Day-in-the-life", "Behind the scenes"],
            Self::Linkedin => &["Case study", "Founder note"],
            Self::Pinterest => &["Idea pin", "Mood board"],
            Self::Twitter => &["Thread", "Photo post", "Poll"],
        }
    }

    /// Visual style bias appended to every post's visual direction.
    pub fn visual_bias(&self) -> &'static str {
        match self {
            Self::Instagram => "Vertical 4:5 frames with a cohesive warm grade",
            Self::Facebook => "Wide landscape photography with descriptive alt text",
            Self::Tiktok => "Handheld 9:16 footage cut on the beat",
            Self::Linkedin => "Clean editorial stills with a data overlay",
            Self::Pinterest => "Tall 2:3 pins with serif title overlay",
            Self::Twitter => "Single striking 16:9 image",
        }
    }

    /// Platform-native opener placed in front of every hook.
    pub fn hook_lead(&self) -> &'static str {
        match self {
            Self::Instagram => "Swipe through:",
            Self::Facebook => "From our concierge desk:",
            Self::Tiktok => "Wait for it...",
            Self::Linkedin => "For discerning travellers:",
            Self::Pinterest => "Save for later:",
            Self::Twitter => "Now booking:",
        }
    }

    pub fn enrichment(&self) -> &'static str {
        match self {
            Self::Instagram => "Add location sticker and collab tag with the property",
            Self::Facebook => "Pin the post to the page and enable concierge auto-replies",
            Self::Tiktok => "Use a trending ambient sound and on-screen captions",
            Self::Linkedin => "Tag partner properties and add a downloadable itinerary",
            Self::Pinterest => "File under a seasonal board with rich pin metadata",
            Self::Twitter => "Quote-post a guest review within the first hour",
        }
    }
}

/// String-keyed CTA lookup for callers that have not parsed the platform yet.
pub fn cta_for(platform: &str) -> Result<&'static str, PlannerError> {
    platform.parse::<Platform>().map(|p| p.cta())
}

/// One row of the CTA table, as exposed to the studio UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCta {
    pub platform: Platform,
    pub label: String,
    pub call_to_action: String,
    pub best_times: Vec<String>,
}

/// The full catalog in declaration order.
pub fn platform_cta_table() -> Vec<PlatformCta> {
    Platform::ALL
        .iter()
        .map(|p| PlatformCta {
            platform: *p,
            label: p.label().to_string(),
            call_to_action: p.cta().to_string(),
            best_times: p.best_times().iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_for_is_total_over_supported_names() {
        for platform in Platform::ALL {
            assert_eq!(cta_for(platform.as_str()).unwrap(), platform.cta());
        }
    }

    #[test]
    fn cta_for_rejects_unknown_platform() {
        let err = cta_for("friendster").unwrap_err();
        assert_eq!(err.field(), Some("platform"));
        assert!(err.to_string().contains("friendster"));
    }

    #[test]
    fn catalog_rows_are_complete() {
        let table = platform_cta_table();
        assert_eq!(table.len(), Platform::ALL.len());
        assert_eq!(table[0].platform, Platform::Instagram);
        for row in &table {
            assert!(!row.call_to_action.is_empty());
            assert!(!row.best_times.is_empty());
        }
    }

    #[test]
    fn every_platform_has_conventions() {
        for platform in Platform::ALL {
            assert!(platform.weekly_cadence() > 0);
            assert!(platform.hashtag_density() >= platform.base_hashtags().len());
            assert!(!platform.formats().is_empty());
            // Formats never repeat within one platform's weekly slots.
            assert!(platform.formats().len() >= platform.weekly_cadence());
        }
    }

    #[test]
    fn default_set_is_instagram() {
        assert_eq!(DEFAULT_PLATFORMS, [Platform::Instagram]);
    }
}
