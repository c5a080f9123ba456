/// Timestamp helpers for the combined document banner.
use chrono::{DateTime, Local, SecondsFormat};

/// Current local time in RFC 3339 format (ISO 8601 with offset).
///
/// # Format
/// RFC 3339: "2025-12-17T10:30:00+08:00"
pub fn now_local() -> String {
    format_local(&Local::now())
}

pub(crate) fn format_local(datetime: &DateTime<Local>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_local_is_rfc3339() {
        let timestamp = now_local();
        assert!(
            DateTime::parse_from_rfc3339(&timestamp).is_ok(),
            "not RFC 3339: {}",
            timestamp
        );
    }

    #[test]
    fn test_format_local_drops_subseconds() {
        let timestamp = format_local(&Local::now());
        assert!(!timestamp.contains('.'), "unexpected fraction: {}", timestamp);
        assert!(timestamp.contains('T'));
    }
}
