use chrono::Utc;
use rental_finder::config::{AppConfig, SearchConfig, load_config};
use rental_finder::filter::{FilterEngine, ListingFilter};
use rental_finder::model::{ListingId, ListingSnapshot, SourceError};
use rental_finder::source::{FileListingSource, HttpListingSource, ListingSource, fetch_details};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return;
        }
    };

    let source = match build_source(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize listing source: {}", e);
            return;
        }
    };

    let mut engine = ListingFilter::new();
    if let Some(tables) = config.tables.clone() {
        engine = engine.with_tables(tables);
    }
    if let Some(home) = &config.home_location {
        engine = engine.with_home(home.as_str());
    }

    info!("Watching {} saved searches", config.searches.len());

    loop {
        match source.fetch_listings().await {
            Ok(snapshot) => run_searches(&config, &engine, source.as_ref(), &snapshot).await,
            Err(e) => warn!("Fetching listings failed: {}", e),
        }

        info!("Waiting {}s for the next check...", config.check_interval_seconds);
        tokio::select! {
            _ = sleep(Duration::from_secs(config.check_interval_seconds)) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down.");
                break;
            }
        }
    }
}

fn build_source(config: &AppConfig) -> Result<Box<dyn ListingSource>, SourceError> {
    if let Some(path) = &config.listings_file {
        info!("Reading listings from {}", path);
        return Ok(Box::new(FileListingSource::new(path)));
    }

    let base_url = config.api_base_url.as_deref().unwrap_or_default();
    info!("Reading listings from {}", base_url);
    let timeout = Duration::from_secs(config.request_timeout_seconds);
    Ok(Box::new(HttpListingSource::new(base_url, timeout)?))
}

async fn run_searches(
    config: &AppConfig,
    engine: &ListingFilter,
    source: &dyn ListingSource,
    snapshot: &ListingSnapshot,
) {
    info!(
        "Fetched {} listings at {}",
        snapshot.listings.len(),
        snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S")
    );

    for search in &config.searches {
        run_search(config, engine, source, snapshot, search).await;
    }
}

async fn run_search(
    config: &AppConfig,
    engine: &ListingFilter,
    source: &dyn ListingSource,
    snapshot: &ListingSnapshot,
    search: &SearchConfig,
) {
    let criteria = search.criteria();
    let matches = engine.apply(&snapshot.listings, &criteria);
    info!(
        "Search '{}' (tags {:?}): {} matches",
        search.name,
        criteria.search_tags,
        matches.len()
    );

    for listing in &matches {
        info!(
            "  {} | {} | {:.2}/day | {}",
            listing.id, listing.title, listing.price, listing.location
        );
    }

    let ids: Vec<ListingId> = matches
        .iter()
        .take(config.detail_limit)
        .map(|l| l.id.clone())
        .collect();
    if ids.is_empty() {
        return;
    }

    let today = Utc::now().date_naive();
    for (id, detail) in ids.iter().zip(fetch_details(source, &ids).await) {
        match detail {
            Ok(detail) => info!(
                "  {} owner: {} | free today: {} | {} booked ranges",
                id,
                detail.user.as_deref().unwrap_or("unknown"),
                detail.is_available_on(today),
                detail.unavailable_dates.len()
            ),
            Err(e) => warn!("  Detail fetch for {} failed: {}", id, e),
        }
    }
}
