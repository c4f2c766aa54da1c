use crate::config::Config;
use crate::error::Result;
use crate::format::Grouping;
use crate::models::AlertMessageTemplate;
use crate::template::render_preview;
use std::path::PathBuf;

pub fn execute(
    campaign_path: PathBuf,
    alert_text: Option<String>,
    body_text: Option<String>,
    no_send: bool,
    grouping: Option<Grouping>,
) -> Result<()> {
    let config = Config::load()?;
    let grouping = grouping.unwrap_or(config.format.grouping);
    let campaign = super::load_campaign(&campaign_path)?;

    let mut template = AlertMessageTemplate::for_campaign(&campaign.title);
    if let Some(text) = alert_text {
        template.set_alert_text(&text);
    }
    if let Some(text) = body_text {
        template.set_body_text(&text);
    }

    super::warn_unknown_placeholders("alert text", template.alert_text());
    super::warn_unknown_placeholders("body text", template.body_text());

    let values = super::campaign_values(&campaign, &config, grouping);
    eprintln!("Alert preview:   {}", render_preview(template.alert_text(), &values));
    eprintln!("Message preview: {}", render_preview(template.body_text(), &values));

    let is_send_alert = config.alerts.send_alert && !no_send;
    tracing::info!(
        "Built alert for {} (send: {})",
        campaign.id.as_deref().unwrap_or(&campaign.title),
        is_send_alert
    );

    let payload = template.into_payload(is_send_alert);
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
