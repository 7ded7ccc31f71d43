//! Request intake: turns an untrusted `{ profile?, goal? }` body into validated,
//! normalized agent inputs.
//!
//! Missing or malformed pieces fall back to the defaults field by field. The only
//! hard failure is a closed-variant value (tone, audience, objective, platform) that
//! is present but unrecognized.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::defaults::{default_brand_profile, default_campaign_goal};
use crate::error::{PlannerError, PlannerResult};
use crate::types::{BrandProfile, CampaignGoal, Platform};

/// Validated inputs for one agent run. Also the JSON body the studio client posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub profile: BrandProfile,
    pub goal: CampaignGoal,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            profile: default_brand_profile(),
            goal: default_campaign_goal(),
        }
    }
}

impl PlanRequest {
    pub fn new(profile: BrandProfile, goal: CampaignGoal) -> Self {
        Self { profile, goal }
    }

    pub fn normalized(self) -> Self {
        Self {
            profile: self.profile.normalized(),
            goal: self.goal.normalized(),
        }
    }

    /// Parse a raw request body. Empty or non-JSON bodies yield the defaults.
    pub fn from_body(body: &[u8]) -> PlannerResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable plan request body, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_value(value: &Value) -> PlannerResult<Self> {
        let Some(body) = value.as_object() else {
            return Ok(Self::default());
        };

        let profile = match body.get("profile") {
            Some(Value::Object(map)) => merge_profile(map)?,
            _ => default_brand_profile(),
        };
        let goal = match body.get("goal") {
            Some(Value::Object(map)) => merge_goal(map)?,
            _ => default_campaign_goal(),
        };

        Ok(Self::new(profile, goal).normalized())
    }
}

fn merge_profile(map: &Map<String, Value>) -> PlannerResult<BrandProfile> {
    let defaults = default_brand_profile();
    Ok(BrandProfile {
        brand_name: text(map, "brandName").unwrap_or(defaults.brand_name),
        signature_offering: text(map, "signatureOffering").unwrap_or(defaults.signature_offering),
        tone: variant(map, "tone", "profile.tone")?.unwrap_or(defaults.tone),
        audience: variant(map, "audience", "profile.audience")?.unwrap_or(defaults.audience),
        destinations: text_list(map, "destinations").unwrap_or(defaults.destinations),
        preferred_platforms: platforms(map)?.unwrap_or(defaults.preferred_platforms),
    })
}

fn merge_goal(map: &Map<String, Value>) -> PlannerResult<CampaignGoal> {
    let defaults = default_campaign_goal();
    let launch_date = match map.get("launchDate").and_then(Value::as_str) {
        Some(raw) => parse_launch_date(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default launch date");
            defaults.launch_date
        }),
        None => defaults.launch_date,
    };

    Ok(CampaignGoal {
        objective: variant(map, "objective", "goal.objective")?.unwrap_or(defaults.objective),
        launch_date,
        kpis: text_list(map, "kpis").unwrap_or(defaults.kpis),
        // An explicit empty CTA is meaningful: posts then use their platform default.
        call_to_action: map
            .get("callToAction")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.call_to_action),
    })
}

/// Accepts an RFC 3339 instant or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_launch_date(raw: &str) -> PlannerResult<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().fixed_offset())
        .ok_or_else(|| PlannerError::InvalidLaunchDate(raw.to_string()))
}

/// Non-blank string field.
fn text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// String entries of an array field; other entry types are skipped.
fn text_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    map.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

fn variant<T>(map: &Map<String, Value>, key: &str, path: &str) -> PlannerResult<Option<T>>
where
    T: FromStr<Err = PlannerError>,
{
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_variant_value(value, path).map(Some),
    }
}

fn parse_variant_value<T>(value: &Value, path: &str) -> PlannerResult<T>
where
    T: FromStr<Err = PlannerError>,
{
    match value {
        Value::String(s) => s
            .parse::<T>()
            .map_err(|_| PlannerError::unknown_variant(path, s.as_str())),
        other => Err(PlannerError::unknown_variant(path, other.to_string())),
    }
}

fn platforms(map: &Map<String, Value>) -> PlannerResult<Option<Vec<Platform>>> {
    let Some(items) = map.get("preferredPlatforms").and_then(Value::as_array) else {
        return Ok(None);
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_variant_value(item, &format!("profile.preferredPlatforms[{}]", i)))
        .collect::<PlannerResult<Vec<Platform>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Audience, Objective, Tone};
    use serde_json::json;

    #[test]
    fn empty_and_malformed_bodies_fall_back_to_defaults() {
        assert_eq!(PlanRequest::from_body(b"").unwrap(), PlanRequest::default());
        assert_eq!(PlanRequest::from_body(b"  \n").unwrap(), PlanRequest::default());
        assert_eq!(PlanRequest::from_body(b"{not json").unwrap(), PlanRequest::default());
        assert_eq!(PlanRequest::from_body(b"[1,2,3]").unwrap(), PlanRequest::default());
        assert_eq!(PlanRequest::from_body(b"{}").unwrap(), PlanRequest::default());
    }

    #[test]
    fn partial_profile_merges_over_defaults() {
        let body = json!({
            "profile": { "brandName": "  Nordic Drift ", "tone": "serene", "destinations": ["Lofoten", "lofoten", "Lofoten"] }
        });
        let request = PlanRequest::from_value(&body).unwrap();
        assert_eq!(request.profile.brand_name, "Nordic Drift");
        assert_eq!(request.profile.tone, Tone::Serene);
        assert_eq!(request.profile.audience, Audience::UltraHighNetWorth);
        assert_eq!(request.profile.destinations, vec!["Lofoten", "lofoten"]);
        assert_eq!(request.goal, default_campaign_goal());
    }

    #[test]
    fn wrongly_typed_free_text_takes_default() {
        let body = json!({
            "profile": { "brandName": 42, "signatureOffering": "", "destinations": "Bali" },
            "goal": { "kpis": [1, "Bookings", null], "launchDate": "next tuesday" }
        });
        let request = PlanRequest::from_value(&body).unwrap();
        let defaults = PlanRequest::default();
        assert_eq!(request.profile.brand_name, defaults.profile.brand_name);
        assert_eq!(request.profile.signature_offering, defaults.profile.signature_offering);
        assert_eq!(request.profile.destinations, defaults.profile.destinations);
        assert_eq!(request.goal.kpis, vec!["Bookings"]);
        assert_eq!(request.goal.launch_date, defaults.goal.launch_date);
    }

    #[test]
    fn unknown_tone_is_rejected_with_field_path() {
        let body = json!({ "profile": { "tone": "moody" } });
        let err = PlanRequest::from_value(&body).unwrap_err();
        assert_eq!(err, PlannerError::unknown_variant("profile.tone", "moody"));
    }

    #[test]
    fn unknown_platform_entry_is_rejected_not_dropped() {
        let body = json!({ "profile": { "preferredPlatforms": ["instagram", "myspace"] } });
        let err = PlanRequest::from_value(&body).unwrap_err();
        assert_eq!(
            err,
            PlannerError::unknown_variant("profile.preferredPlatforms[1]", "myspace")
        );
    }

    #[test]
    fn non_string_variant_is_rejected() {
        let body = json!({ "goal": { "objective": 3 } });
        let err = PlanRequest::from_value(&body).unwrap_err();
        assert_eq!(err.field(), Some("goal.objective"));
    }

    #[test]
    fn null_variant_counts_as_missing() {
        let body = json!({ "goal": { "objective": null } });
        let request = PlanRequest::from_value(&body).unwrap();
        assert_eq!(request.goal.objective, Objective::Awareness);
    }

    #[test]
    fn empty_platform_list_is_kept_for_the_builder_to_default() {
        let body = json!({ "profile": { "preferredPlatforms": [] } });
        let request = PlanRequest::from_value(&body).unwrap();
        assert!(request.profile.preferred_platforms.is_empty());
    }

    #[test]
    fn explicit_empty_cta_is_preserved() {
        let body = json!({ "goal": { "callToAction": "" } });
        let request = PlanRequest::from_value(&body).unwrap();
        assert_eq!(request.goal.call_to_action, "");
    }

    #[test]
    fn launch_date_accepts_instants_and_plain_dates() {
        let instant = parse_launch_date("2025-06-12T18:45:00.000+02:00").unwrap();
        assert_eq!(instant.offset().local_minus_utc(), 2 * 3600);
        let plain = parse_launch_date("2025-06-12").unwrap();
        assert_eq!(plain.to_rfc3339(), "2025-06-12T00:00:00+00:00");
        assert!(matches!(
            parse_launch_date("12/06/2025"),
            Err(PlannerError::InvalidLaunchDate(_))
        ));
    }

    #[test]
    fn full_round_trip_through_request_body() {
        let request = PlanRequest::default();
        let body = serde_json::to_vec(&request).unwrap();
        assert_eq!(PlanRequest::from_body(&body).unwrap(), request);
    }
}
