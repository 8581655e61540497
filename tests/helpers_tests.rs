use std::collections::HashMap;

use tournament_frontend::config::DisplayConfig;
use tournament_frontend::error::FetchError;
use tournament_frontend::page::dom::{Field, Form, Host, Page};
use tournament_frontend::page::helpers::{
    GENERIC_API_ERROR, INVALID_DATE, calculate_percentage, calculate_stats, confirm_action, format_date,
    format_number, format_time, handle_api_error, handle_form_errors, not_found_markup, validate_form,
};

#[derive(Default)]
struct FakeHost {
    alerts: Vec<String>,
    answer: bool,
}

impl Host for FakeHost {
    fn assign_location(&mut self, _href: &str) {}
    fn submit_form(&mut self, _form_id: &str) {}
    fn confirm(&mut self, _message: &str) -> bool {
        self.answer
    }
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[test]
fn percentage_formatting() {
    assert_eq!(calculate_percentage(0.0, 0.0), "0%");
    assert_eq!(calculate_percentage(1.0, 4.0), "25.0%");
    assert_eq!(calculate_percentage(2.0, 3.0), "66.7%");
    assert_eq!(calculate_stats(5.0, 0.0), "0%");
    assert_eq!(calculate_stats(3.0, 3.0), "100.0%");
}

#[test]
fn thousands_formatting() {
    assert_eq!(format_number(1234567), "1,234,567");
    assert_eq!(format_number(12), "12");
    assert_eq!(format_number(123456), "123,456");
}

#[test]
fn date_formatting_degrades_gracefully() {
    let display = DisplayConfig::default();
    assert_eq!(format_date("", &display), "");
    assert_eq!(format_date("   ", &display), "");
    assert_eq!(format_date("2025-03-01", &display), "3/1/2025");
    assert_eq!(format_date("2025-03-01T18:45:00", &display), "3/1/2025");
    assert_eq!(format_date("next tuesday", &display), INVALID_DATE);
}

#[test]
fn date_formatting_uses_configured_zone_and_pattern() {
    let display = DisplayConfig { time_zone: chrono_tz::America::Los_Angeles, date_format: "%d.%m.%Y".to_string() };
    // 03:00 UTC is still the previous evening on the west coast
    assert_eq!(format_date("2025-03-02T03:00:00Z", &display), "01.03.2025");
}

#[test]
fn time_formatting_drops_seconds() {
    assert_eq!(format_time("20:00:00"), "20:00");
    assert_eq!(format_time(""), "");
}

#[test]
fn validator_marks_only_the_empty_required_field() {
    let mut page = Page::default();
    page.forms.push(
        Form::new("team-form")
            .with_field(Field::required("name", "   "))
            .with_field(Field::required("city", "Sevilla"))
            .with_field(Field::optional("nickname", "")),
    );

    assert!(!validate_form(&mut page, "team-form"));

    let form = page.form("team-form").unwrap();
    assert!(form.field("name").unwrap().invalid);
    assert!(!form.field("city").unwrap().invalid);
    assert!(!form.field("nickname").unwrap().invalid);
}

#[test]
fn validator_clears_marker_once_filled() {
    let mut page = Page::default();
    page.forms.push(Form::new("f").with_field(Field::required("name", "")));
    assert!(!validate_form(&mut page, "f"));

    page.form_mut("f").unwrap().field_mut("name").unwrap().value = "Betis".to_string();
    assert!(validate_form(&mut page, "f"));
    assert!(!page.form("f").unwrap().field("name").unwrap().invalid);
}

#[test]
fn validator_treats_missing_form_as_valid() {
    let mut page = Page::default();
    assert!(validate_form(&mut page, "nope"));
}

#[test]
fn form_errors_replace_previous_ones() {
    let mut form = Form::new("match-form")
        .with_field(Field::required("home_team_id", "1"))
        .with_field(Field::required("away_team_id", "1"))
        .with_field(Field::optional("date", ""));

    handle_form_errors(&mut form, [("home_team_id", "Pick a team")]);
    assert_eq!(form.field("home_team_id").unwrap().feedback.as_deref(), Some("Pick a team"));

    let errors = HashMap::from([
        ("away_team_id".to_string(), "Teams must differ".to_string()),
        ("ghost".to_string(), "ignored".to_string()),
    ]);
    handle_form_errors(&mut form, errors);

    let home = form.field("home_team_id").unwrap();
    assert!(!home.invalid);
    assert_eq!(home.feedback, None);
    let away = form.field("away_team_id").unwrap();
    assert!(away.invalid);
    assert_eq!(away.feedback.as_deref(), Some("Teams must differ"));
    assert!(!form.field("date").unwrap().invalid);
}

#[test]
fn api_error_alerts_server_detail_or_generic_text() {
    let mut host = FakeHost::default();

    let shown = handle_api_error(&FetchError::Status { status: 400, detail: Some("Invalid field: foo".into()) }, &mut host);
    assert_eq!(shown, "Invalid field: foo");

    let shown = handle_api_error(&FetchError::Transport("dns".into()), &mut host);
    assert_eq!(shown, GENERIC_API_ERROR);

    assert_eq!(host.alerts, vec!["Invalid field: foo".to_string(), GENERIC_API_ERROR.to_string()]);
}

#[test]
fn confirm_runs_callback_only_when_accepted() {
    let mut ran = 0;
    let mut host = FakeHost { answer: false, ..FakeHost::default() };
    assert!(!confirm_action("Delete team?", &mut host, || ran += 1));

    host.answer = true;
    assert!(confirm_action("Delete team?", &mut host, || ran += 1));
    assert_eq!(ran, 1);
}

#[test]
fn not_found_page_links_home() {
    let markup = not_found_markup();
    assert!(markup.contains("404"));
    assert!(markup.contains("href=\"/\""));
}
