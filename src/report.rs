// src/report.rs
//
// The JSON object printed by the CLI. Shape (school day):
//
//   { updated, icon, day,
//     student_1_id, student_1, info_1, preschool_1, schedule_1, meals_1,
//     student_2_id, ...,
//     meal }
//
// On weekends `meals_N` is left out, `preschool_N` is "" and `meal` is "".

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde_json::{Map, Value, json};

use crate::config::consts::{DAY_NAMES_SV, EVENING_HOUR, REPORT_ICON};
use crate::error::{Result, ScrapeError};
use crate::scrape::Portal;

pub type Report = Map<String, Value>;

/// Monday = 0. Weekday evenings (Mon-Thu) look ahead to the next day.
pub fn target_weekday<T: Datelike + Timelike>(now: &T) -> usize {
    let weekday = now.weekday().num_days_from_monday() as usize;
    if now.hour() > EVENING_HOUR && weekday < 4 {
        weekday + 1
    } else {
        weekday
    }
}

pub fn build<Tz: TimeZone>(portal: &dyn Portal, now: &DateTime<Tz>) -> Result<Report>
where
    Tz::Offset: std::fmt::Display,
{
    let weekday = target_weekday(now);
    let school_day = weekday < 5;

    let mut out = Map::new();
    out.insert(s!("updated"), json!(now.timestamp()));
    out.insert(s!("icon"), json!(REPORT_ICON));
    if school_day {
        out.insert(s!("day"), json!(DAY_NAMES_SV[weekday]));
    } else {
        out.insert(s!("day"), json!(now.format("%A").to_string()));
        out.insert(s!("meal"), json!(""));
    }

    let students = portal.fetch_students()?;
    if students.is_empty() {
        logd!("No students");
    }

    let mut first_meals: Option<Value> = None;
    for (i, st) in students.iter().enumerate() {
        let n = i + 1;
        logd!("Fetch info student {n} of {} with id {}", students.len(), st.id);

        portal.fetch_info(&st.id)?;
        out.insert(format!("student_{n}_id"), json!(st.id));
        out.insert(format!("student_{n}"), json!(st.name));
        out.insert(format!("info_{n}"), Value::Null);

        if !school_day {
            out.insert(format!("preschool_{n}"), json!(""));
            out.insert(format!("schedule_{n}"), serde_json::to_value(portal.fetch_schedule(&st.id)?)?);
            continue;
        }

        let preschool = preschool_for_day(portal, &st.id, weekday)?;
        out.insert(format!("preschool_{n}"), preschool);
        out.insert(format!("schedule_{n}"), serde_json::to_value(portal.fetch_schedule(&st.id)?)?);

        let meals = serde_json::to_value(portal.fetch_lunch_menu(&st.id)?)?;
        if n == 1 {
            first_meals = Some(meals.clone());
        }
        out.insert(format!("meals_{n}"), meals);
    }

    if let Some(meal) = first_meals.as_ref().and_then(|m| m.get(weekday)) {
        out.insert(s!("meal"), meal.clone());
    }
    Ok(out)
}

/* ---------- helpers ---------- */

/// Not every student is in preschool; a page without the times form means null.
fn preschool_for_day(portal: &dyn Portal, student: &str, weekday: usize) -> Result<Value> {
    match portal.fetch_preschool_schedule(student) {
        Ok(days) => Ok(days.get(weekday).map_or(Value::Null, |t| json!(t))),
        Err(ScrapeError::MissingElement(what)) => {
            logw!("Student {student}: {what} not found, no preschool times");
            Ok(Value::Null)
        }
        Err(e) => Err(e),
    }
}
