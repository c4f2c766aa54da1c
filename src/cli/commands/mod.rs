pub mod alert;
pub mod completions;
pub mod config;
pub mod countdown;
pub mod preview;
pub mod status;

use crate::config::Config;
use crate::error::{AlertError, Result};
use crate::format::{format_currency, Grouping};
use crate::models::{AlertSchedule, Campaign};
use crate::template::{self, PreviewValues};
use std::fs;
use std::path::Path;

/// Read a campaign record exported from the backend
pub fn load_campaign(path: &Path) -> Result<Campaign> {
    tracing::debug!("Loading campaign from: {}", path.display());
    let contents = fs::read_to_string(path)?;
    let campaign: Campaign = serde_json::from_str(&contents)?;

    if campaign.title.trim().is_empty() {
        return Err(AlertError::InvalidCampaign(format!(
            "{}: title is empty",
            path.display()
        )));
    }

    Ok(campaign)
}

/// Preview values taken from a campaign record and its alert window
fn campaign_values(campaign: &Campaign, config: &Config, grouping: Grouping) -> PreviewValues {
    let schedule = campaign.alert_schedule();
    warn_schedule_issue(&schedule);

    PreviewValues {
        expire: schedule.expire_duration(),
        raised_amount_text: format_currency(
            campaign.overall_raised,
            &config.format.currency_symbol,
            grouping,
        ),
        invitees_count: campaign.total_invitees,
        donors_count: campaign.total_donors,
        grouping,
    }
}

fn warn_schedule_issue(schedule: &AlertSchedule) {
    if let Some(issue) = schedule.check() {
        tracing::warn!("Countdown is zero: {}", issue.as_str());
    }
}

fn warn_unknown_placeholders(label: &str, text: &str) {
    for token in template::unknown_placeholders(text) {
        tracing::warn!("Unrecognised placeholder in {}: {}", label, token);
    }
}
