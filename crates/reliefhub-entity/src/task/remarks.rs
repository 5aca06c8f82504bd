//! Timestamped append-only remark logs.

use chrono::{DateTime, Utc};

/// Append a timestamped remark line to an existing log.
///
/// Each entry is formatted as `YYYY-MM-DD HH:mm: text` and separated from
/// prior entries with a newline. Existing entries are never rewritten or
/// truncated, so the log is a full audit trail of who said what, when.
pub fn append_remark(existing: Option<&str>, remark: &str, at: DateTime<Utc>) -> String {
    let entry = format!("{}: {}", at.format("%Y-%m-%d %H:%M"), remark);
    match existing {
        Some(log) if !log.is_empty() => format!("{log}\n{entry}"),
        _ => entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_first_entry_has_no_leading_newline() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        assert_eq!(
            append_remark(None, "Reached the site", at),
            "2024-03-05 09:30: Reached the site"
        );
    }

    #[test]
    fn test_entries_accumulate_in_call_order() {
        let first = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 3, 5, 17, 5, 0).unwrap();

        let log = append_remark(None, "Reached the site", first);
        let log = append_remark(Some(&log), "Supplies handed over", second);

        assert_eq!(
            log,
            "2024-03-05 09:30: Reached the site\n2024-03-05 17:05: Supplies handed over"
        );
    }

    #[test]
    fn test_empty_existing_log_treated_as_absent() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        assert_eq!(
            append_remark(Some(""), "Reached the site", at),
            "2024-03-05 09:30: Reached the site"
        );
    }
}
