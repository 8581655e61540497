//! Formatting and validation helpers shared by page scripts.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use tracing::{error, warn};

use super::dom::{Form, Host, Page};
use crate::config::{DEFAULT_DATE_FORMAT, DisplayConfig};
use crate::error::FetchError;

pub const INVALID_DATE: &str = "Invalid Date";
pub const GENERIC_API_ERROR: &str = "An error occurred";

/// Format an ISO-like date or datetime for display. Empty input gives an
/// empty string and unparseable input gives [`INVALID_DATE`].
pub fn format_date(input: &str, display: &DisplayConfig) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    let Some(date) = parse_calendar_date(input, display.time_zone) else {
        return INVALID_DATE.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(&display.date_format)).is_err() {
        let pattern = &display.date_format;
        warn!(pattern = %pattern, "Invalid date pattern, using default");
        out = date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

fn parse_calendar_date(s: &str, tz: Tz) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&tz).date_naive());
    }
    for pat in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pat) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reduce `HH:MM[:SS]` to `HH:MM`. Input without a minutes part comes back
/// trimmed but otherwise unchanged.
pub fn format_time(input: &str) -> String {
    let input = input.trim();
    let mut parts = input.split(':');
    match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
        _ => input.to_string(),
    }
}

/// `value / total` as a percentage with one decimal, `"0%"` for a zero total.
pub fn calculate_percentage(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Same as [`calculate_percentage`], under the name stats pages use.
pub fn calculate_stats(value: f64, total: f64) -> String {
    calculate_percentage(value, total)
}

/// Group digits in threes with commas.
pub fn format_number(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if number < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Mark blank required fields invalid and clear the marker on filled ones.
/// A form that is not on the page counts as valid.
pub fn validate_form(page: &mut Page, form_id: &str) -> bool {
    let Some(form) = page.form_mut(form_id) else {
        return true;
    };
    let mut is_valid = true;
    for field in form.fields.iter_mut().filter(|f| f.required) {
        field.invalid = field.is_blank();
        if field.invalid {
            is_valid = false;
        }
    }
    is_valid
}

/// Replace the form's inline errors with `errors`, keyed by field name.
/// Names that match no field are skipped.
pub fn handle_form_errors<I, K, V>(form: &mut Form, errors: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    for field in &mut form.fields {
        field.invalid = false;
        field.feedback = None;
    }
    for (name, message) in errors {
        if let Some(field) = form.field_mut(name.as_ref()) {
            field.invalid = true;
            field.feedback = Some(message.into());
        }
    }
}

/// Report a failed API call to the user and return the text shown.
pub fn handle_api_error<H: Host>(err: &FetchError, host: &mut H) -> String {
    error!(error = %err, "API error");
    let message = err.detail().unwrap_or(GENERIC_API_ERROR).to_string();
    host.alert(&message);
    message
}

/// Run `callback` only if the user confirms `message`.
pub fn confirm_action<H, F>(message: &str, host: &mut H, callback: F) -> bool
where
    H: Host,
    F: FnOnce(),
{
    if host.confirm(message) {
        callback();
        true
    } else {
        false
    }
}

/// Body of the not-found page.
pub fn not_found_markup() -> &'static str {
    concat!(
        "<div class=\"error-container\">",
        "<div class=\"error-code\">404</div>",
        "<div class=\"error-message\">The page you're looking for doesn't exist.</div>",
        "<a href=\"/\" class=\"btn btn-primary\">Go Home</a>",
        "</div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_negative_and_boundary_numbers() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(-1234567), "-1,234,567");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn time_keeps_hours_and_minutes() {
        assert_eq!(format_time("18:30:00"), "18:30");
        assert_eq!(format_time("09:05"), "09:05");
        assert_eq!(format_time(""), "");
        assert_eq!(format_time("1800"), "1800");
    }

    #[test]
    fn bad_pattern_falls_back_to_default() {
        let display = DisplayConfig { date_format: "%Y-%".to_string(), ..DisplayConfig::default() };
        assert_eq!(format_date("2024-06-01", &display), "6/1/2024");
    }
}
