//! Load probe: a launch-morning rush of campaign managers hitting the gateway at once.
//! Every answer must equal the plan rendered locally for the same inputs.
//! Run with the gateway up: cargo run --bin load_probe

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use reqwest::Client;
use tokio::sync::Mutex;
use voyagelux_core::{
    default_brand_profile, default_campaign_goal, run_agent, AgentResponse, Audience, Objective,
    PlanRequest, Platform, Tone,
};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const CAMPAIGN_MANAGERS: usize = 12;
const REQUESTS_PER_MANAGER: usize = 6;

const BRANDS: &[&str] = &[
    "Azure Atelier",
    "Nordic Drift",
    "Coral Meridian",
    "Saffron Sails",
    "Atlas Noir",
];
const DESTINATIONS: &[&str] = &["Kyoto", "Patagonia", "Seychelles", "Lapland", "Marrakech", "Bora Bora"];

fn request_for(manager: usize, round: usize) -> PlanRequest {
    let n = manager + round;
    let mut profile = default_brand_profile();
    profile.brand_name = BRANDS[n % BRANDS.len()].to_string();
    profile.tone = Tone::ALL[n % Tone::ALL.len()];
    profile.audience = Audience::ALL[manager % Audience::ALL.len()];
    profile.destinations = vec![
        DESTINATIONS[n % DESTINATIONS.len()].to_string(),
        DESTINATIONS[(n + 2) % DESTINATIONS.len()].to_string(),
    ];
    profile.preferred_platforms = Platform::ALL
        .iter()
        .copied()
        .cycle()
        .skip(n)
        .take(1 + n % 3)
        .collect();

    let mut goal = default_campaign_goal();
    goal.objective = Objective::ALL[round % Objective::ALL.len()];
    PlanRequest::new(profile, goal).normalized()
}

#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("VOYAGELUX_PROBE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!(
        "[LOAD PROBE] {} managers x {} requests = {} total against {}",
        CAMPAIGN_MANAGERS,
        REQUESTS_PER_MANAGER,
        CAMPAIGN_MANAGERS * REQUESTS_PER_MANAGER,
        base_url
    );

    let client = Client::new();
    let success = Arc::new(AtomicU32::new(0));
    let failure = Arc::new(AtomicU32::new(0));
    let mismatch = Arc::new(AtomicU32::new(0));
    let latencies: Arc<Mutex<Vec<u128>>> = Arc::new(Mutex::new(Vec::new()));

    let managers = (0..CAMPAIGN_MANAGERS).map(|manager| {
        let client = client.clone();
        let base_url = base_url.clone();
        let success = Arc::clone(&success);
        let failure = Arc::clone(&failure);
        let mismatch = Arc::clone(&mismatch);
        let latencies = Arc::clone(&latencies);

        tokio::spawn(async move {
            for round in 0..REQUESTS_PER_MANAGER {
                let request = request_for(manager, round);
                let expected = run_agent(&request.profile, &request.goal);

                let start = Instant::now();
                let res = client
                    .post(format!("{}/api/generate", base_url))
                    .json(&request)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status());
                let elapsed = start.elapsed().as_millis();

                let body = match res {
                    Ok(resp) => resp.json::<AgentResponse>().await,
                    Err(e) => Err(e),
                };
                match body {
                    Ok(plan) => {
                        success.fetch_add(1, Ordering::Relaxed);
                        latencies.lock().await.push(elapsed);
                        if plan != expected {
                            mismatch.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    Err(_) => {
                        failure.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        })
    });
    for joined in join_all(managers).await {
        if joined.is_err() {
            failure.fetch_add(1, Ordering::Relaxed);
        }
    }

    let s = success.load(Ordering::Relaxed);
    let f = failure.load(Ordering::Relaxed);
    let m = mismatch.load(Ordering::Relaxed);
    let mut latencies = latencies.lock().await.clone();
    latencies.sort_unstable();

    println!("[LOAD PROBE] Success: {} | Failure: {} | Divergent plans: {}", s, f, m);
    println!(
        "[LOAD PROBE] Latency p50: {}ms | p95: {}ms | max: {}ms",
        percentile(&latencies, 50),
        percentile(&latencies, 95),
        latencies.last().copied().unwrap_or(0)
    );
    if m > 0 || f > 0 {
        std::process::exit(1);
    }
}

fn percentile(sorted: &[u128], pct: usize) -> u128 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (sorted.len() * pct).div_ceil(100).max(1);
    sorted[rank.min(sorted.len()) - 1]
}
