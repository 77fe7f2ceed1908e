/// Timestamp display helpers.
use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Format a server timestamp for display as DD.MM.YYYY HH:MM.
///
/// Accepts RFC 3339 strings as well as the offset-less ISO form some
/// backends emit; anything unparseable is passed through unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_timestamp("2024-03-15T14:02:26.123456+00:00"),
            "15.03.2024 14:02"
        );
    }

    #[test]
    fn formats_offsetless_timestamps() {
        assert_eq!(format_timestamp("2024-12-31T23:59:59"), "31.12.2024 23:59");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
