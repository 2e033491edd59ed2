use chrono::Utc;
use clap::Subcommand;
use serde_json::json;

use briefly_core::clock::day_stamp;
use briefly_core::reveal::resolve_phase;
use briefly_core::storage::{keys, KeyValueStore};
use briefly_core::{
    Coordinator, CoordinatorConfig, Event, HttpContentSource, JsonFileStore, NoAds, SystemClock,
};

use super::{load_config, open_store};

type CliCoordinator = Coordinator<JsonFileStore, HttpContentSource, NoAds, SystemClock>;

#[derive(Subcommand)]
pub enum RevealAction {
    /// Print the current reveal state as JSON
    Status,
    /// Request an unlock (no-ad path; fetches content)
    Unlock,
    /// Re-evaluate the day and re-arm the midnight timer, as on app foreground
    Foreground,
    /// Run the coordinator until interrupted, printing events as they fire
    Watch,
}

pub async fn run(action: RevealAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RevealAction::Status => status(),
        RevealAction::Unlock => unlock().await,
        RevealAction::Foreground => foreground().await,
        RevealAction::Watch => watch().await,
    }
}

fn build() -> Result<
    (
        CliCoordinator,
        tokio::sync::mpsc::UnboundedReceiver<Event>,
    ),
    Box<dyn std::error::Error>,
> {
    let cfg = load_config();
    let store = open_store()?;
    let source = HttpContentSource::new(&cfg.content_url);
    let coordinator_cfg = CoordinatorConfig {
        region: cfg.region,
        locale: cfg.locale.clone(),
        unlock: cfg.unlock_point(),
    };
    Ok(Coordinator::new(
        store,
        source,
        NoAds,
        std::sync::Arc::new(SystemClock),
        coordinator_cfg,
    ))
}

/// Status is read-only: no coordinator, no network. The phase is
/// reconstructed from the persisted stamp exactly as the coordinator would.
fn status() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config();
    let store = open_store()?;
    let tz = cfg.region.timezone();
    let now = Utc::now();
    let today = day_stamp(tz, now);
    let last = store.get_item(keys::LAST_REVEALED_DAY)?;
    let phase = resolve_phase(last.as_deref(), &today);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "phase": phase,
            "today": today,
            "last_revealed": last,
            "region": cfg.region.to_string(),
        }))?
    );
    Ok(())
}

async fn unlock() -> Result<(), Box<dyn std::error::Error>> {
    let (mut coordinator, _events) = build()?;
    let unlock_result = coordinator.request_unlock().await;

    let facts = coordinator.fetch_daily().await.ok();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "phase": coordinator.phase(),
            "day": coordinator.today_stamp(),
            "items": facts.as_ref().map(|f| f.items.len()),
            "fetch_error": unlock_result.as_ref().err().map(|e| e.to_string()),
        }))?
    );
    coordinator.shutdown();
    unlock_result?;
    Ok(())
}

async fn foreground() -> Result<(), Box<dyn std::error::Error>> {
    let (mut coordinator, _events) = build()?;
    coordinator.handle_foreground().await;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "phase": coordinator.phase(),
            "day": coordinator.today_stamp(),
        }))?
    );
    coordinator.shutdown();
    Ok(())
}

async fn watch() -> Result<(), Box<dyn std::error::Error>> {
    let (mut coordinator, mut events) = build()?;
    coordinator.activate().await;
    let mut ticks = coordinator
        .midnight_ticks()
        .ok_or("midnight ticks already taken")?;

    eprintln!("watching (ctrl-c to stop)");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(_) = ticks.recv() => coordinator.handle_midnight().await,
            Some(event) = events.recv() => {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
    }

    coordinator.shutdown();
    Ok(())
}
