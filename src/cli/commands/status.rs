use crate::config::Config;
use crate::countdown::{format_time_remaining, is_expiring_soon, remaining_until, SystemClock};
use crate::error::Result;
use std::path::PathBuf;

pub fn execute(campaign_path: PathBuf, json: bool) -> Result<()> {
    let config = Config::load()?;
    let campaign = super::load_campaign(&campaign_path)?;

    let Some(end) = campaign.end_instant() else {
        if json {
            println!("{{\"active\":false,\"reason\":\"no_end_date\"}}");
        } else {
            println!("{}: no end date set", campaign.title);
        }
        return Ok(());
    };

    let remaining = remaining_until(&SystemClock, end);
    let expiring = is_expiring_soon(&remaining, config.alerts.expiring_threshold_hours);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "active": !remaining.is_zero(),
                "expiring": expiring,
                "remaining": remaining,
                "progress_percent": campaign.progress_percent(),
            }))?
        );
    } else if remaining.is_zero() {
        println!("{}: campaign ended", campaign.title);
    } else {
        println!(
            "{}: ends in {}{} ({:.1}% of target raised)",
            campaign.title,
            format_time_remaining(&remaining),
            if expiring { " [EXPIRING]" } else { "" },
            campaign.progress_percent()
        );
    }

    Ok(())
}
