use chrono::{Datelike, NaiveDate};

use super::domain::{PolicyContext, RawAge, RawPolicyContext};

pub(crate) const DEFAULT_COUNTRY: &str = "FR";
pub(crate) const DEFAULT_ACTIVITY: &str = "running";

const RUNNING_ACTIVITIES: [&str; 3] = ["running", "trail", "route"];

/// Canonicalize raw context fields, falling back to defaults. Never fails.
pub fn normalize(raw: &RawPolicyContext) -> PolicyContext {
    let country = non_blank(raw.country.as_deref())
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

    let activity_category = non_blank(raw.activity_category.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string());

    let participant_age = raw
        .participant_age
        .as_ref()
        .and_then(age_from_raw)
        .or_else(|| age_at_event(raw.birth_date.as_deref(), raw.event_date.as_deref()));

    let home_federation_code = non_blank(raw.home_federation_code.as_deref())
        .map(str::to_uppercase)
        .unwrap_or_default();

    PolicyContext {
        country,
        activity_category,
        participant_age,
        home_federation_code,
    }
}

impl PolicyContext {
    pub fn is_french(&self) -> bool {
        self.country == DEFAULT_COUNTRY
    }

    /// Road and trail running, where the national health-screening code applies.
    pub fn is_running_like(&self) -> bool {
        RUNNING_ACTIVITIES.contains(&self.activity_category.as_str())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn age_from_raw(raw: &RawAge) -> Option<u32> {
    let years = match raw {
        RawAge::Number(value) => *value,
        RawAge::Text(text) => text.trim().parse::<f64>().ok()?,
        RawAge::Other(_) => return None,
    };

    if years.is_finite() && years >= 0.0 {
        Some(years.trunc().min(f64::from(u32::MAX)) as u32)
    } else {
        None
    }
}

fn age_at_event(birth_date: Option<&str>, event_date: Option<&str>) -> Option<u32> {
    let birth = parse_date(birth_date?)?;
    let event = parse_date(event_date?)?;
    if birth > event {
        return None;
    }

    let mut years = event.year() - birth.year();
    if (event.month(), event.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
