//! Planner errors. Only the boundary (intake, string lookups) can fail; the strategy
//! composer and schedule builder are total over validated inputs.

/// Configuration errors surfaced to the caller instead of being defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// A closed-variant field (tone, audience, objective, platform) carried a value
    /// outside its variant set.
    #[error("unsupported value {value:?} for {field}")]
    UnknownVariant { field: String, value: String },

    #[error("invalid launch date: {0}")]
    InvalidLaunchDate(String),
}

impl PlannerError {
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            field: field.into(),
            value: value.into(),
        }
    }

    /// JSON field path of the offending value, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant { field, .. } => Some(field),
            Self::InvalidLaunchDate(_) => Some("goal.launchDate"),
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
