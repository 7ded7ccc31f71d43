//! VoyageLux Agent Studio gateway: HTTP routes over the content agent, the
//! studio client with local fallback, and gateway configuration.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;

pub use crate::client::{ClientError, PlanSource, StudioClient, StudioPlan};
pub use crate::config::GatewayConfig;
pub use crate::error::ApiError;
pub use crate::routes::router;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over `fallback_filter`.
pub fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
