//! `ShutterDesk` binary - renders a one-shot dashboard report for the studio.

use chrono::Utc;
use dotenvy::dotenv;
use shutterdesk::config;
use shutterdesk::core::{dashboard, referral, report};
use shutterdesk::errors::Result;
use shutterdesk::store::StudioStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!(
        display_limit = app_config.display_limit,
        "Loaded application configuration."
    );

    // 4. Build the store from fixtures
    let fixtures = match &app_config.fixtures_path {
        Some(path) => config::load_fixtures(path)
            .inspect(|_| info!(path = %path.display(), "Loaded fixture file."))
            .inspect_err(|e| error!("Failed to load fixture file: {e}"))?,
        None => config::default_fixtures(),
    };
    let store = StudioStore::with_fixtures(fixtures);
    info!("Store seeded successfully.");

    // 5. Compute the derived views and render the dashboard
    let snapshot = store.snapshot().await;
    let now = Utc::now();
    let stats = dashboard::dashboard_stats(&snapshot, now);
    let referral_stats = referral::referral_stats(&snapshot.referrals);
    let top_clients = dashboard::top_clients(&snapshot.clients, app_config.display_limit);
    let upcoming =
        dashboard::upcoming_bookings(&snapshot.bookings, now, Some(app_config.display_limit));

    println!(
        "{}",
        report::format_dashboard_summary(&stats, &referral_stats, &top_clients, &upcoming)
    );

    Ok(())
}
