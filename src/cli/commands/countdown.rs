use crate::error::Result;
use crate::models::{AlertSchedule, ClockTime};
use chrono::NaiveDate;

pub fn execute(
    start_date: Option<NaiveDate>,
    start_time: ClockTime,
    end_date: Option<NaiveDate>,
    end_time: ClockTime,
    json: bool,
) -> Result<()> {
    let schedule = AlertSchedule {
        start_date,
        start_time,
        end_date,
        end_time,
    };
    super::warn_schedule_issue(&schedule);

    let duration = schedule.expire_duration();
    let countdown = duration.countdown();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "hours": duration.hours,
                "minutes": duration.minutes,
                "seconds": duration.seconds,
                "countdown": countdown,
            }))?
        );
    } else {
        println!(
            "Expires in {}h {}m {}s (countdown {})",
            duration.hours, duration.minutes, duration.seconds, countdown
        );
    }

    Ok(())
}
