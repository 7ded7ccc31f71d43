//! Strategy Composer: narrative arc, experience pillars, storytelling notes and hero
//! offer, derived only from the brand profile and the campaign goal.

use crate::types::{Audience, BrandProfile, CampaignGoal, ContentStrategy, Objective, Tone};

const FALLBACK_DESTINATION: &str = "our signature destinations";

/// Brand tokens substituted into every template.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrandTokens<'a> {
    pub brand: &'a str,
    pub offering: &'a str,
    pub destination: &'a str,
    pub kpi: &'a str,
}

impl<'a> BrandTokens<'a> {
    pub(crate) fn new(profile: &'a BrandProfile, goal: &'a CampaignGoal) -> Self {
        Self {
            brand: profile.brand_name.trim(),
            offering: profile.signature_offering.trim(),
            destination: profile
                .focus_destinations()
                .first()
                .copied()
                .unwrap_or(FALLBACK_DESTINATION),
            kpi: goal.top_kpi().unwrap_or(goal.objective.fallback_kpi()),
        }
    }

    pub(crate) fn with_destination(self, destination: &'a str) -> Self {
        Self {
            destination,
            ..self
        }
    }

    /// Single pass over the template; substituted values are never rescanned.
    pub(crate) fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let token = tail
                .find('}')
                .and_then(|close| self.token(&tail[1..close]).map(|value| (close, value)));
            match token {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn token(&self, name: &str) -> Option<&'a str> {
        match name {
            "brand" => Some(self.brand),
            "offering" => Some(self.offering),
            "destination" => Some(self.destination),
            "kpi" => Some(self.kpi),
            _ => None,
        }
    }
}

impl Objective {
    /// KPI named in copy when the goal lists none.
    pub fn fallback_kpi(&self) -> &'static str {
        match self {
            Self::Awareness => "Reach",
            Self::Engagement => "Saves",
            Self::LeadGeneration => "Qualified enquiries",
        }
    }
}

/// Beat templates for a (tone, objective) pair: beginning, climax, resolution.
pub fn narrative_beats(tone: Tone, objective: Objective) -> [&'static str; 3] {
    use Objective::*;
    use Tone::*;

    match (tone, objective) {
        (Glamorous, Awareness) => [
            "Establish exclusivity: {brand} opens the velvet rope on {destination}",
            "Reveal {offering} through golden-hour glamour and champagne moments",
            "Invite the world to watch: make {brand} the name behind every envied itinerary and lift {kpi}",
        ],
        (Glamorous, Engagement) => [
            "Stage a red-carpet arrival in {destination} that begs for a reply",
            "Let followers choose the next look, suite and soiree of {offering}",
            "Reward the most glamorous answers with a feature and keep {kpi} climbing",
        ],
        (Glamorous, LeadGeneration) => [
            "Establish exclusivity: a private guest list for {destination} this season",
            "Introduce {offering} as the invitation only {brand} can extend",
            "Call to transformation: request your place on the list and let {kpi} prove the demand",
        ],
        (Immersive, Awareness) => [
            "Open on the sounds and textures of {destination} before a single word",
            "Walk through {offering} in one continuous first-person journey",
            "Close on a lingering frame that leaves {brand} in memory and grows {kpi}",
        ],
        (Immersive, Engagement) => [
            "Drop the audience into a sensory moment in {destination}",
            "Ask them to finish the scene: what happens next during {offering}?",
            "Weave their answers into the next chapter so {kpi} compounds",
        ],
        (Immersive, LeadGeneration) => [
            "Transport the viewer to dawn in {destination} with {brand}",
            "Unfold {offering} hour by hour so they can picture themselves inside it",
            "Offer a personal itinerary preview to convert that feeling into {kpi}",
        ],
        (Adventurous, Awareness) => [
            "Set the expedition: {brand} heads off the map toward {destination}",
            "Show the summit moment of {offering} with raw, kinetic footage",
            "Plant the flag: make {brand} synonymous with daring luxury and widen {kpi}",
        ],
        (Adventurous, Engagement) => [
            "Issue a challenge from the trailhead in {destination}",
            "Let the audience vote on the route through {offering}",
            "Celebrate every explorer who answers and keep {kpi} moving",
        ],
        (Adventurous, LeadGeneration) => [
            "Tease an uncharted route beyond {destination}",
            "Prove the safety, guides and comfort that make {offering} possible",
            "Call for the next expedition crew and turn curiosity into {kpi}",
        ],
        (Serene, Awareness) => [
            "Begin in stillness: first light over {destination}",
            "Let {offering} unfold slowly with unhurried, breathing edits",
            "Leave a quiet promise of rest from {brand} and let {kpi} follow",
        ],
        (Serene, Engagement) => [
            "Share a moment of calm from {destination} and ask how they unwind",
            "Guide a short ritual inspired by {offering}",
            "Gather reflections from the community and nurture {kpi}",
        ],
        (Serene, LeadGeneration) => [
            "Name the exhaustion your guests leave behind on arrival in {destination}",
            "Present {offering} as the restorative answer {brand} has perfected",
            "Invite a gentle first conversation to plan their retreat and grow {kpi}",
        ],
        (Bespoke, Awareness) => [
            "Open the atelier: how {brand} designs journeys to {destination}",
            "Show the hand-finished details that make {offering} one of a kind",
            "Sign the work: position {brand} as the maker behind unforgettable trips and raise {kpi}",
        ],
        (Bespoke, Engagement) => [
            "Ask the audience for one wish for their perfect day in {destination}",
            "Sketch {offering} around the favourite answers in real time",
            "Reveal the finished itinerary and thank contributors to lift {kpi}",
        ],
        (Bespoke, LeadGeneration) => [
            "Start with a client brief: a journey to {destination} nobody else could book",
            "Walk through the design of {offering}, detail by detail",
            "Offer a private design session so each enquiry becomes {kpi}",
        ],
    }
}

impl Audience {
    /// Experience pillar stems.
    pub fn pillar_stems(&self) -> [&'static str; 3] {
        match self {
            Self::UltraHighNetWorth => [
                "Private access and discreet service",
                "Signature suites and villa buyouts",
                "Chef-led dining and rare vintages",
            ],
            Self::AffluentFamilies => [
                "Multi-generational suites and family butlers",
                "Curated adventures for every age",
                "Seamless logistics from door to villa",
            ],
            Self::Honeymooners => [
                "Secluded hideaways built for two",
                "Romantic rituals at golden hour",
                "Celebration moments planned in advance",
            ],
            Self::ExperientialSeekers => [
                "Insider encounters with local artisans",
                "Off-grid adventures with expert guides",
                "Immersive culinary and cultural deep dives",
            ],
        }
    }
}

impl Tone {
    pub fn storytelling_notes(&self) -> [&'static str; 2] {
        match self {
            Self::Glamorous => [
                "Lead with polish: gold accents, couture styling and champagne light",
                "Use elevated, confident language with one striking adjective per line",
            ],
            Self::Immersive => [
                "Write in the senses: scent, sound and texture before facts",
                "Favour first-person, present-tense storytelling",
            ],
            Self::Adventurous => [
                "Keep verbs active and pacing quick",
                "Show scale: wide landscapes with a single human figure",
            ],
            Self::Serene => [
                "Let copy breathe with short lines and generous pauses",
                "Choose soft, natural palettes and slow transitions",
            ],
            Self::Bespoke => [
                "Highlight craftsmanship, names and the hands behind each detail",
                "Speak to one guest at a time with personal, tailored phrasing",
            ],
        }
    }

    /// Connective phrase joining brand and signature offering in the hero offer.
    pub fn hero_connective(&self) -> &'static str {
        match self {
            Self::Glamorous => "unveils",
            Self::Immersive => "invites you into",
            Self::Adventurous => "charts a course to",
            Self::Serene => "slows time with",
            Self::Bespoke => "hand-crafts",
        }
    }
}

impl Objective {
    pub fn storytelling_note(&self) -> &'static str {
        match self {
            Self::Awareness => "Optimise for shareability: bold first frames and save-worthy visuals",
            Self::Engagement => "End every piece with a question or prompt that invites a reply",
            Self::LeadGeneration => "Make the next step explicit and low-friction in every caption",
        }
    }
}

pub fn compose_strategy(profile: &BrandProfile, goal: &CampaignGoal) -> ContentStrategy {
    let tokens = BrandTokens::new(profile, goal);

    let narrative_arc = narrative_beats(profile.tone, goal.objective)
        .iter()
        .map(|beat| tokens.fill(beat))
        .collect();

    let experience_pillars = experience_pillars(profile);

    let flagship = profile.flagship_platform();
    let mut storytelling_notes: Vec<String> = profile
        .tone
        .storytelling_notes()
        .iter()
        .map(|n| n.to_string())
        .collect();
    storytelling_notes.push(goal.objective.storytelling_note().to_string());
    storytelling_notes.push(format!(
        "Flagship {} call to action: \"{}\"",
        flagship.label(),
        flagship.cta()
    ));

    let hero_offer = format!(
        "{} {} {}",
        tokens.brand,
        profile.tone.hero_connective(),
        tokens.offering
    );

    ContentStrategy {
        narrative_arc,
        experience_pillars,
        storytelling_notes,
        hero_offer,
    }
}

/// Audience stems paired with up to the first three destinations.
fn experience_pillars(profile: &BrandProfile) -> Vec<String> {
    let destinations = profile.focus_destinations();
    let focus = &destinations[..destinations.len().min(3)];

    profile
        .audience
        .pillar_stems()
        .iter()
        .enumerate()
        .map(|(i, stem)| {
            if focus.is_empty() {
                stem.to_string()
            } else {
                format!("{} in {}", stem, focus[i % focus.len()])
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_brand_profile, default_campaign_goal};

    #[test]
    fn hero_offer_contains_brand_and_offering_verbatim() {
        let profile = default_brand_profile();
        let strategy = compose_strategy(&profile, &default_campaign_goal());
        assert!(strategy.hero_offer.contains(&profile.brand_name));
        assert!(strategy.hero_offer.contains(&profile.signature_offering));
        assert_eq!(
            strategy.hero_offer,
            "VoyageLux Private Journeys unveils Private island sunset sailings"
        );
    }

    #[test]
    fn glamorous_lead_generation_follows_its_beat_order() {
        let mut profile = default_brand_profile();
        profile.tone = Tone::Glamorous;
        let mut goal = default_campaign_goal();
        goal.objective = Objective::LeadGeneration;

        let strategy = compose_strategy(&profile, &goal);
        assert_eq!(strategy.narrative_arc.len(), 3);
        assert!(strategy.narrative_arc[0].starts_with("Establish exclusivity"));
        assert!(strategy.narrative_arc[0].contains("Santorini"));
        assert!(strategy.narrative_arc[1].contains("Private island sunset sailings"));
        assert!(strategy.narrative_arc[2].starts_with("Call to transformation"));
        assert!(strategy.narrative_arc[2].contains("Reach"));
        assert_eq!(strategy, compose_strategy(&profile, &goal));
    }

    #[test]
    fn every_tone_objective_pair_yields_distinct_filled_beats() {
        let profile = default_brand_profile();
        let goal = default_campaign_goal();
        let tokens = BrandTokens::new(&profile, &goal);
        for tone in Tone::ALL {
            for objective in Objective::ALL {
                let beats = narrative_beats(tone, objective);
                for beat in beats {
                    let filled = tokens.fill(beat);
                    assert!(!filled.contains('{'), "unfilled token in {filled}");
                }
                assert_ne!(beats[0], beats[1]);
                assert_ne!(beats[1], beats[2]);
            }
        }
    }

    #[test]
    fn braces_in_brand_text_survive_filling() {
        let mut profile = default_brand_profile();
        profile.brand_name = "Maison {kpi}".into();
        profile.signature_offering = "The {destination} {brand} suite".into();
        profile.tone = Tone::Glamorous;
        let goal = default_campaign_goal();

        let strategy = compose_strategy(&profile, &goal);
        assert_eq!(
            strategy.narrative_arc[0],
            "Establish exclusivity: Maison {kpi} opens the velvet rope on Santorini"
        );
        assert!(strategy.narrative_arc[1].contains("The {destination} {brand} suite"));
        assert!(strategy.hero_offer.contains("Maison {kpi}"));

        let schedule = crate::schedule::build_weekly_schedule(&profile, &goal);
        assert!(schedule
            .posts
            .iter()
            .all(|p| p.caption.contains("The {destination} {brand} suite by Maison {kpi}.")));
    }

    #[test]
    fn fill_keeps_unknown_and_unclosed_braces() {
        let profile = default_brand_profile();
        let goal = default_campaign_goal();
        let tokens = BrandTokens::new(&profile, &goal);
        assert_eq!(tokens.fill("{unknown} {brand"), "{unknown} {brand");
        assert_eq!(tokens.fill("{{kpi}}"), "{Reach}");
        assert_eq!(tokens.fill("no tokens"), "no tokens");
    }

    #[test]
    fn pillars_pair_stems_with_first_three_destinations() {
        let mut profile = default_brand_profile();
        profile.destinations = vec![
            "Kyoto".into(),
            "Patagonia".into(),
            "Lapland".into(),
            "Zanzibar".into(),
        ];
        let pillars = compose_strategy(&profile, &default_campaign_goal()).experience_pillars;
        assert_eq!(pillars.len(), 3);
        assert!(pillars[0].ends_with("in Kyoto"));
        assert!(pillars[1].ends_with("in Patagonia"));
        assert!(pillars[2].ends_with("in Lapland"));
        assert!(pillars.iter().all(|p| !p.contains("Zanzibar")));
    }

    #[test]
    fn empty_destinations_fall_back_to_audience_phrasing() {
        let mut profile = default_brand_profile();
        profile.destinations.clear();
        profile.audience = Audience::Honeymooners;
        let strategy = compose_strategy(&profile, &default_campaign_goal());
        assert_eq!(
            strategy.experience_pillars,
            Audience::Honeymooners
                .pillar_stems()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
        assert!(strategy.narrative_arc[0].contains(FALLBACK_DESTINATION));
    }

    #[test]
    fn notes_cover_tone_objective_and_flagship_cta() {
        let mut profile = default_brand_profile();
        profile.preferred_platforms = vec![crate::Platform::Linkedin];
        let mut goal = default_campaign_goal();
        goal.objective = Objective::Engagement;
        goal.kpis.clear();

        let strategy = compose_strategy(&profile, &goal);
        assert_eq!(strategy.storytelling_notes.len(), 4);
        assert_eq!(strategy.storytelling_notes[2], Objective::Engagement.storytelling_note());
        assert!(strategy.storytelling_notes[3].contains(crate::Platform::Linkedin.cta()));
        assert!(strategy.narrative_arc[2].contains("Saves"));
    }
}
