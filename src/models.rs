use crate::countdown;
use crate::error::AlertError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of the short alert text, in characters
pub const ALERT_TEXT_LIMIT: usize = 80;

/// Maximum length of the alert message body, in characters
pub const BODY_TEXT_LIMIT: usize = 150;

/// Time of day as picked in the alert dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    /// Combine with a date into a single instant, `None` if out of range
    pub fn on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).map(|time| date.and_time(time))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
        }
    }
}

impl FromStr for ClockTime {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| AlertError::InvalidTime(s.to_string()))?;

        let hours = hours
            .parse()
            .map_err(|_| AlertError::InvalidTime(s.to_string()))?;
        let minutes = minutes
            .parse()
            .map_err(|_| AlertError::InvalidTime(s.to_string()))?;

        Ok(Self { hours, minutes })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Non-negative wall-clock duration in whole hours, minutes and seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpireDuration {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ExpireDuration {
    pub const ZERO: ExpireDuration = ExpireDuration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decompose `end - start`, clamping inverted ranges to zero
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end < start {
            return Self::ZERO;
        }

        let total = (end - start).num_seconds();
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Countdown-style view with hours wrapped to a single day
    pub fn countdown(&self) -> Countdown {
        Countdown {
            hours: self.hours % 24,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

impl fmt::Display for ExpireDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Presentation-only countdown derived from an [`ExpireDuration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Start and end of an alert window as edited by the operator.
///
/// Never persisted on its own; the expire duration is derived on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSchedule {
    pub start_date: Option<NaiveDate>,
    pub start_time: ClockTime,
    pub end_date: Option<NaiveDate>,
    pub end_time: ClockTime,
}

impl AlertSchedule {
    pub fn expire_duration(&self) -> ExpireDuration {
        countdown::calculate(
            self.start_date,
            self.start_time,
            self.end_date,
            self.end_time,
        )
    }

    /// Explain why the expire duration collapsed to zero, if it did for a
    /// reason other than identical instants
    pub fn check(&self) -> Option<ScheduleIssue> {
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Some(ScheduleIssue::MissingDate);
        };

        match (self.start_time.on(start_date), self.end_time.on(end_date)) {
            (Some(start), Some(end)) if end < start => Some(ScheduleIssue::EndBeforeStart),
            (Some(_), Some(_)) => None,
            _ => Some(ScheduleIssue::InvalidTime),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleIssue {
    MissingDate,
    InvalidTime,
    EndBeforeStart,
}

impl ScheduleIssue {
    pub fn as_str(&self) -> &str {
        match self {
            ScheduleIssue::MissingDate => "start or end date is missing",
            ScheduleIssue::InvalidTime => "start or end time is out of range",
            ScheduleIssue::EndBeforeStart => "end is before start",
        }
    }
}

/// Operator-edited alert text and message body, with placeholders intact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessageTemplate {
    alert_text: String,
    body_text: String,
}

impl AlertMessageTemplate {
    pub fn new(alert_text: &str, body_text: &str) -> Self {
        Self {
            alert_text: truncate_chars(alert_text, ALERT_TEXT_LIMIT),
            body_text: truncate_chars(body_text, BODY_TEXT_LIMIT),
        }
    }

    /// Default boilerplate for a freshly opened alert dialog
    pub fn for_campaign(title: &str) -> Self {
        Self::new(
            &format!("Only {{expire time}} left to support {}!", title),
            &format!(
                "{} closes in {{hours}} hours. {{raised amount}} raised so far from \
                 {{donors number}} donors and {{invitees number}} invitees.",
                title
            ),
        )
    }

    pub fn alert_text(&self) -> &str {
        &self.alert_text
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn set_alert_text(&mut self, text: &str) {
        self.alert_text = truncate_chars(text, ALERT_TEXT_LIMIT);
    }

    pub fn set_body_text(&mut self, text: &str) {
        self.body_text = truncate_chars(text, BODY_TEXT_LIMIT);
    }

    pub fn into_payload(self, is_send_alert: bool) -> CampaignAlertPayload {
        CampaignAlertPayload {
            alert: self.alert_text,
            message: self.body_text,
            is_send_alert,
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Body of the backend's "set campaign alert" request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignAlertPayload {
    pub alert: String,
    pub message: String,
    #[serde(rename = "isSendAlert")]
    pub is_send_alert: bool,
}

/// Campaign record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    #[serde(rename = "targetAmount", alias = "target_amount", default)]
    pub target_amount: f64,

    #[serde(default)]
    pub overall_raised: f64,

    #[serde(default)]
    pub total_invitees: u64,

    /// Donor count, when the backend supplies it alongside the record
    #[serde(default)]
    pub total_donors: u64,

    #[serde(
        rename = "startDate",
        alias = "start_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,

    #[serde(
        rename = "endDate",
        alias = "end_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
}

impl Campaign {
    /// Alert window spanning the campaign's start and end, in local time.
    ///
    /// Dates that fail to parse are treated as absent.
    pub fn alert_schedule(&self) -> AlertSchedule {
        self.alert_schedule_in(&Local)
    }

    pub fn alert_schedule_in<Tz: TimeZone>(&self, zone: &Tz) -> AlertSchedule {
        let start = self
            .start_date
            .as_deref()
            .and_then(|value| parse_campaign_date_in(value, zone));
        let end = self.end_instant_in(zone);

        if self.start_date.is_some() && start.is_none() {
            tracing::debug!("Unparseable campaign start date: {:?}", self.start_date);
        }
        if self.end_date.is_some() && end.is_none() {
            tracing::debug!("Unparseable campaign end date: {:?}", self.end_date);
        }

        AlertSchedule {
            start_date: start.map(|dt| dt.date()),
            start_time: start.map(|dt| dt.time().into()).unwrap_or_default(),
            end_date: end.map(|dt| dt.date()),
            end_time: end.map(|dt| dt.time().into()).unwrap_or_default(),
        }
    }

    /// Campaign end as local wall-clock time, seconds included
    pub fn end_instant(&self) -> Option<NaiveDateTime> {
        self.end_instant_in(&Local)
    }

    pub fn end_instant_in<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDateTime> {
        self.end_date
            .as_deref()
            .and_then(|value| parse_campaign_date_in(value, zone))
    }

    /// Percentage of the target raised, zero when no target is set
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.overall_raised / self.target_amount * 100.0
        } else {
            0.0
        }
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD`.
///
/// Offset timestamps are converted to wall-clock time in `zone`; naive
/// values are taken as already being in `zone`.
pub fn parse_campaign_date_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(zone).naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample_campaign() -> Campaign {
        serde_json::from_str(
            r#"{
                "_id": "65f1c0ffee",
                "title": "Clean Water for Kibera",
                "targetAmount": 500000,
                "overall_raised": 212312.39,
                "total_invitees": 1540,
                "startDate": "2025-01-01T00:00:00.000Z",
                "endDate": "2025-01-02T02:30:00.000Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_clock_time_parse() {
        let time: ClockTime = "09:05".parse().unwrap();
        assert_eq!(time, ClockTime { hours: 9, minutes: 5 });
        assert_eq!(time.to_string(), "09:05");

        assert!("9".parse::<ClockTime>().is_err());
        assert!("ab:cd".parse::<ClockTime>().is_err());

        let out_of_range: ClockTime = "25:00".parse().unwrap();
        assert_eq!(out_of_range.on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), None);
    }

    #[test]
    fn test_expire_duration_countdown_wraps_hours_only() {
        let duration = ExpireDuration::new(50, 15, 9);
        let countdown = duration.countdown();

        assert_eq!(countdown.hours, 2);
        assert_eq!(countdown.minutes, 15);
        assert_eq!(countdown.seconds, 9);
        assert_eq!(countdown.to_string(), "02:15:09");
        assert_eq!(duration.hours, 50);
        assert_eq!(duration.to_string(), "50:15:09");
    }

    #[test]
    fn test_schedule_recomputes_on_change() {
        let mut schedule = AlertSchedule {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            start_time: ClockTime { hours: 9, minutes: 0 },
            end_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            end_time: ClockTime { hours: 9, minutes: 0 },
        };
        assert!(schedule.expire_duration().is_zero());
        assert_eq!(schedule.check(), None);

        schedule.end_time = ClockTime { hours: 11, minutes: 45 };
        assert_eq!(schedule.expire_duration(), ExpireDuration::new(2, 45, 0));

        schedule.end_date = NaiveDate::from_ymd_opt(2025, 6, 9);
        assert!(schedule.expire_duration().is_zero());
    }

    #[test]
    fn test_schedule_check_distinguishes_zero_causes() {
        let base = AlertSchedule {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            start_time: ClockTime { hours: 10, minutes: 0 },
            end_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            end_time: ClockTime { hours: 9, minutes: 0 },
        };
        assert_eq!(base.check(), Some(ScheduleIssue::EndBeforeStart));

        let missing = AlertSchedule {
            end_date: None,
            ..base
        };
        assert_eq!(missing.check(), Some(ScheduleIssue::MissingDate));

        let invalid = AlertSchedule {
            start_time: ClockTime { hours: 24, minutes: 0 },
            ..base
        };
        assert_eq!(invalid.check(), Some(ScheduleIssue::InvalidTime));

        for schedule in [base, missing, invalid] {
            assert!(schedule.expire_duration().is_zero());
        }
    }

    #[test]
    fn test_alert_template_truncates_on_set() {
        let mut template = AlertMessageTemplate::new(&"a".repeat(100), &"b".repeat(200));
        assert_eq!(template.alert_text().chars().count(), ALERT_TEXT_LIMIT);
        assert_eq!(template.body_text().chars().count(), BODY_TEXT_LIMIT);

        template.set_alert_text(&"é".repeat(81));
        assert_eq!(template.alert_text(), "é".repeat(80));

        template.set_body_text("short");
        assert_eq!(template.body_text(), "short");
    }

    #[test]
    fn test_default_template_mentions_title() {
        let template = AlertMessageTemplate::for_campaign("Books for All");
        assert!(template.alert_text().contains("Books for All"));
        assert!(template.alert_text().contains("{expire time}"));
        assert!(template.body_text().starts_with("Books for All closes in {hours} hours."));
        assert!(template.body_text().contains("{raised amount}"));
        assert!(template.body_text().contains("{donors number}"));
        assert!(template.body_text().contains("{invitees number}"));
    }

    #[test]
    fn test_payload_wire_format_keeps_raw_templates() {
        let payload = AlertMessageTemplate::new("{expire time} left", "{hours} hours").into_payload(true);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "alert": "{expire time} left",
                "message": "{hours} hours",
                "isSendAlert": true
            })
        );
    }

    #[test]
    fn test_campaign_schedule_from_record() {
        let campaign = sample_campaign();
        assert_eq!(campaign.id.as_deref(), Some("65f1c0ffee"));
        assert_eq!(campaign.total_donors, 0);

        let schedule = campaign.alert_schedule_in(&Utc);
        assert_eq!(schedule.expire_duration(), ExpireDuration::new(26, 30, 0));
        assert!((campaign.progress_percent() - 42.462478).abs() < 1e-6);
    }

    #[test]
    fn test_campaign_with_unparseable_dates() {
        let mut campaign = sample_campaign();
        campaign.end_date = Some("not a date".to_string());

        let schedule = campaign.alert_schedule();
        assert_eq!(schedule.end_date, None);
        assert!(schedule.expire_duration().is_zero());
        assert_eq!(schedule.check(), Some(ScheduleIssue::MissingDate));
    }

    #[test]
    fn test_parse_campaign_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 10)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();

        assert_eq!(parse_campaign_date_in("2025-06-10T09:30:00Z", &Utc), Some(expected));
        assert_eq!(
            parse_campaign_date_in("2025-06-10T11:30:00+02:00", &Utc),
            Some(expected)
        );
        assert_eq!(
            parse_campaign_date_in("2025-06-10T09:30:00.000", &Utc),
            Some(expected)
        );
        assert_eq!(parse_campaign_date_in("2025-06-10T09:30", &Utc), Some(expected));
        assert_eq!(
            parse_campaign_date_in("2025-06-10", &Utc),
            NaiveDate::from_ymd_opt(2025, 6, 10).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(parse_campaign_date_in("", &Utc), None);
    }

    #[test]
    fn test_parse_campaign_date_converts_offsets_into_zone() {
        let dhaka = FixedOffset::east_opt(6 * 3600).unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 6, 10)
            .and_then(|d| d.and_hms_opt(15, 30, 0))
            .unwrap();

        assert_eq!(
            parse_campaign_date_in("2025-06-10T09:30:00Z", &dhaka),
            Some(expected)
        );
        assert_eq!(
            parse_campaign_date_in("2025-06-10T11:30:00+02:00", &dhaka),
            Some(expected)
        );
        // Naive values are already wall-clock time in the zone
        assert_eq!(
            parse_campaign_date_in("2025-06-10T15:30:00", &dhaka),
            Some(expected)
        );
    }

    #[test]
    fn test_end_instant_keeps_seconds() {
        let mut campaign = sample_campaign();
        campaign.end_date = Some("2025-01-02T02:30:45Z".to_string());

        let end = campaign.end_instant_in(&Utc).unwrap();
        assert_eq!(end.second(), 45);

        // The alert window itself still works in whole minutes
        let schedule = campaign.alert_schedule_in(&Utc);
        assert_eq!(schedule.expire_duration(), ExpireDuration::new(26, 30, 0));
    }
}
