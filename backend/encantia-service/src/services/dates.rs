/// Timestamp display formatting
///
/// The store hands back RFC 3339 timestamps for message rows and bare
/// `YYYY-MM-DD` dates for project start/end columns; both render as
/// `dd/mm/yyyy HH:MM`.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const INVALID_DATE_LABEL: &str = "Fecha inválida";

pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return INVALID_DATE_LABEL.to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| INVALID_DATE_LABEL.to_string());
    }

    INVALID_DATE_LABEL.to_string()
}

/// Parse a stored timestamp into UTC, accepting the same shapes as
/// [`format_timestamp`].
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_timestamp(Some("2025-03-09T18:05:00Z")),
            "09/03/2025 18:05"
        );
    }

    #[test]
    fn formats_bare_dates_at_midnight() {
        assert_eq!(format_timestamp(Some("2025-03-09")), "09/03/2025 00:00");
    }

    #[test]
    fn invalid_input_renders_fixed_label() {
        assert_eq!(format_timestamp(Some("mañana")), "Fecha inválida");
        assert_eq!(format_timestamp(None), "Fecha inválida");
    }

    #[test]
    fn parse_accepts_all_display_shapes() {
        assert!(parse_timestamp("2025-03-09T18:05:00Z").is_some());
        assert!(parse_timestamp("2025-03-09T18:05:00").is_some());
        assert!(parse_timestamp("2025-03-09").is_some());
        assert!(parse_timestamp("ayer").is_none());
    }
}
