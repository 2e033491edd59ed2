use chrono::Utc;
use serde_json::json;

use briefly_core::clock::{countdown_to_midnight, countdown_to_unlock};

use super::load_config;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config();
    let now = Utc::now();
    let unlock = countdown_to_unlock(cfg.unlock_point(), now);
    let midnight = countdown_to_midnight(cfg.region.timezone(), now);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "unlock": {
                "is_past": unlock.is_past,
                "remaining": unlock.remaining.to_string(),
            },
            "midnight": midnight.to_string(),
        }))?
    );
    Ok(())
}
