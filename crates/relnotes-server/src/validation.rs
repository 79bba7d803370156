//! Request validation for `POST /api/generate`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use relnotes_provider::DateRange;
use serde_json::Value;

use crate::service::GenerateParams;

static REPOSITORY_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_.-]+/?$").expect("invalid regex")
});

/// Parses a date in one of the accepted ISO 8601 forms.
///
/// Accepts RFC 3339 (`2024-01-31T12:00:00Z`, `2024-01-31T12:00:00+02:00`),
/// a naive date-time taken as UTC (`2024-01-31T12:00:00`, optional
/// fraction) and a bare date meaning midnight UTC (`2024-01-31`).
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validates a generate request body.
///
/// Checks run in a fixed order and the first failure wins.
///
/// # Errors
///
/// Returns the client-facing message of the first failed check.
pub fn validate_generate_request(body: &Value) -> Result<GenerateParams, &'static str> {
    let repository_url = required_string(body, "repositoryUrl")
        .ok_or("Repository URL is required and must be a string")?;
    let start = required_string(body, "startDate")
        .ok_or("Start date is required and must be a string")?;
    let end =
        required_string(body, "endDate").ok_or("End date is required and must be a string")?;

    if !REPOSITORY_URL_RE.is_match(repository_url.trim()) {
        return Err("Invalid repository URL format. Expected: https://github.com/{owner}/{repo}");
    }

    let start = parse_date(start).ok_or("Invalid start date format. Expected ISO 8601 format")?;
    let end = parse_date(end).ok_or("Invalid end date format. Expected ISO 8601 format")?;

    if end < start {
        return Err("End date must not be before start date");
    }

    let access_token = match body.get("accessToken") {
        None => None,
        Some(Value::String(token)) => Some(token.clone()),
        Some(_) => return Err("Access token must be a string"),
    };

    Ok(GenerateParams {
        repository_url: repository_url.to_string(),
        range: DateRange::new(start, end),
        access_token,
        pull_requests: false,
    })
}

/// Returns the field if it is a non-empty string.
fn required_string<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "repositoryUrl": "https://github.com/acme/widgets",
            "startDate": "2024-01-01",
            "endDate": "2024-01-31T23:59:59Z"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut body = valid();
        body[field] = value;
        body
    }

    fn without(field: &str) -> Value {
        let mut body = valid();
        body.as_object_mut().unwrap().remove(field);
        body
    }

    #[test]
    fn test_parse_date_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-31"), Some(midnight));
        assert_eq!(parse_date("2024-01-31T00:00:00Z"), Some(midnight));
        assert_eq!(parse_date("2024-01-31T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-31T00:00:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-31T00:00:00.000"), Some(midnight));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_valid_request() {
        let params = validate_generate_request(&valid()).unwrap();
        assert_eq!(params.repository_url, "https://github.com/acme/widgets");
        assert_eq!(
            params.range.start,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            params.range.end,
            Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap()
        );
        assert_eq!(params.access_token, None);
        assert!(!params.pull_requests);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_generate_request(&without("repositoryUrl")).unwrap_err(),
            "Repository URL is required and must be a string"
        );
        assert_eq!(
            validate_generate_request(&without("startDate")).unwrap_err(),
            "Start date is required and must be a string"
        );
        assert_eq!(
            validate_generate_request(&without("endDate")).unwrap_err(),
            "End date is required and must be a string"
        );
    }

    #[test]
    fn test_empty_and_non_string_fields() {
        assert_eq!(
            validate_generate_request(&with("repositoryUrl", json!(""))).unwrap_err(),
            "Repository URL is required and must be a string"
        );
        assert_eq!(
            validate_generate_request(&with("startDate", json!(20240101))).unwrap_err(),
            "Start date is required and must be a string"
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        let body = json!({ "repositoryUrl": "https://gitlab.com/a/b", "startDate": "x" });
        assert_eq!(
            validate_generate_request(&body).unwrap_err(),
            "End date is required and must be a string"
        );
    }

    #[test]
    fn test_invalid_url_format() {
        for url in [
            "https://gitlab.com/acme/widgets",
            "https://github.com/acme",
            "https://github.com/acme/widgets/tree/main",
            "http://github.com/acme/widgets",
        ] {
            assert_eq!(
                validate_generate_request(&with("repositoryUrl", json!(url))).unwrap_err(),
                "Invalid repository URL format. Expected: https://github.com/{owner}/{repo}",
                "{url}"
            );
        }
    }

    #[test]
    fn test_url_with_surrounding_whitespace_and_slash() {
        let body = with("repositoryUrl", json!("  https://github.com/acme/widgets.rs/ "));
        assert!(validate_generate_request(&body).is_ok());
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(
            validate_generate_request(&with("startDate", json!("yesterday"))).unwrap_err(),
            "Invalid start date format. Expected ISO 8601 format"
        );
        assert_eq!(
            validate_generate_request(&with("endDate", json!("tomorrow"))).unwrap_err(),
            "Invalid end date format. Expected ISO 8601 format"
        );
    }

    #[test]
    fn test_end_before_start() {
        let body = with("endDate", json!("2023-12-31"));
        assert_eq!(
            validate_generate_request(&body).unwrap_err(),
            "End date must not be before start date"
        );
    }

    #[test]
    fn test_equal_dates_are_allowed() {
        let mut body = valid();
        body["endDate"] = json!("2024-01-01");
        assert!(validate_generate_request(&body).is_ok());
    }

    #[test]
    fn test_access_token() {
        let params = validate_generate_request(&with("accessToken", json!("secret"))).unwrap();
        assert_eq!(params.access_token.as_deref(), Some("secret"));

        assert_eq!(
            validate_generate_request(&with("accessToken", json!(42))).unwrap_err(),
            "Access token must be a string"
        );
        assert_eq!(
            validate_generate_request(&with("accessToken", Value::Null)).unwrap_err(),
            "Access token must be a string"
        );
    }
}
