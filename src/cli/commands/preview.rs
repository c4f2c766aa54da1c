use crate::config::Config;
use crate::error::Result;
use crate::format::{format_currency, Grouping};
use crate::models::ExpireDuration;
use crate::template::{render_preview, PreviewValues};
use std::path::PathBuf;

/// Values given on the command line, each replacing the campaign's own
#[derive(Debug, Default)]
pub struct Overrides {
    pub campaign: Option<PathBuf>,
    pub hours: Option<i64>,
    pub raised: Option<String>,
    pub invitees: Option<u64>,
    pub donors: Option<u64>,
    pub grouping: Option<Grouping>,
}

pub fn execute(template: String, overrides: Overrides) -> Result<()> {
    let config = Config::load()?;
    let grouping = overrides.grouping.unwrap_or(config.format.grouping);

    let mut values = match &overrides.campaign {
        Some(path) => {
            let campaign = super::load_campaign(path)?;
            super::campaign_values(&campaign, &config, grouping)
        }
        None => PreviewValues {
            raised_amount_text: format_currency(0.0, &config.format.currency_symbol, grouping),
            grouping,
            ..Default::default()
        },
    };

    if let Some(hours) = overrides.hours {
        values.expire = ExpireDuration::new(hours.max(0), 0, 0);
    }
    if let Some(raised) = overrides.raised {
        values.raised_amount_text = raised;
    }
    if let Some(invitees) = overrides.invitees {
        values.invitees_count = invitees;
    }
    if let Some(donors) = overrides.donors {
        values.donors_count = donors;
    }

    super::warn_unknown_placeholders("template", &template);
    println!("{}", render_preview(&template, &values));

    Ok(())
}
