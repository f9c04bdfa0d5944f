//! Markup rendering — escaping, time-of-day formatting, message articles.

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::types::Message;

/// Default time-of-day format: 24-hour clock, unpadded hour.
pub const DEFAULT_TIME_FORMAT: &str = "%-H:%M:%S";

/// Escape `&`, `<` and `>`. Quotes pass through untouched.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Convert epoch seconds (possibly fractional) to a UTC instant.
pub fn timestamp_to_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((timestamp * 1000.0).round() as i64)
}

/// Format epoch seconds as a time of day in `tz`.
/// Unrepresentable timestamps and bad format strings yield what could be written.
pub fn format_time_of_day<Tz>(timestamp: f64, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if let Some(dt) = timestamp_to_datetime(timestamp) {
        let _ = write!(out, "{}", dt.with_timezone(tz).format(format));
    }
    out
}

/// Time of day in the machine's local timezone.
pub fn local_time_of_day(timestamp: f64, format: &str) -> String {
    format_time_of_day(timestamp, &Local, format)
}

/// One `<article>` for a message. `time` is inserted verbatim.
pub fn message_markup(msg: &Message, time: &str) -> String {
    format!(
        "<article class=\"message\"><div><strong>{}</strong>: {}</div><div class=\"meta\">{}</div></article>",
        escape_html(&msg.name),
        escape_html(&msg.text),
        time,
    )
}

/// The full list, oldest first, with times rendered in `tz`.
pub fn list_markup_in<Tz>(messages: &[Message], tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    messages
        .iter()
        .map(|msg| message_markup(msg, &format_time_of_day(msg.timestamp, tz, format)))
        .collect()
}

/// The full list with local times.
pub fn list_markup(messages: &[Message], format: &str) -> String {
    list_markup_in(messages, &Local, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn msg(id: u64, name: &str, text: &str) -> Message {
        Message {
            id,
            name: name.into(),
            text: text.into(),
            timestamp: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_escape_html_script() {
        let escaped = escape_html("<script>&\"</script>");
        assert_eq!(escaped, "&lt;script&gt;&amp;\"&lt;/script&gt;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "").contains('&'));
        assert!(escaped.contains('"'));
    }

    #[test]
    fn test_escape_html_leaves_quotes() {
        assert_eq!(escape_html("it's \"fine\""), "it's \"fine\"");
    }

    #[test]
    fn test_format_time_of_day_utc() {
        // 1700000000 = 2023-11-14T22:13:20Z
        assert_eq!(
            format_time_of_day(1_700_000_000.0, &Utc, DEFAULT_TIME_FORMAT),
            "22:13:20"
        );
    }

    #[test]
    fn test_format_time_of_day_offset() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        // 07:13:20 next day in JST, hour unpadded
        assert_eq!(
            format_time_of_day(1_700_000_000.0, &jst, DEFAULT_TIME_FORMAT),
            "7:13:20"
        );
    }

    #[test]
    fn test_format_time_of_day_fractional_and_invalid() {
        assert_eq!(
            format_time_of_day(1_700_000_000.4, &Utc, DEFAULT_TIME_FORMAT),
            "22:13:20"
        );
        assert_eq!(format_time_of_day(f64::NAN, &Utc, DEFAULT_TIME_FORMAT), "");
    }

    #[test]
    fn test_message_markup_escapes_user_content() {
        let html = message_markup(&msg(1, "<b>Ann</b>", "a & b"), "22:13:20");
        assert!(html.starts_with("<article class=\"message\">"));
        assert!(html.contains("<strong>&lt;b&gt;Ann&lt;/b&gt;</strong>: a &amp; b"));
        assert!(html.contains("<div class=\"meta\">22:13:20</div>"));
    }

    #[test]
    fn test_list_markup_oldest_first() {
        let messages = vec![msg(1, "Ann", "first"), msg(2, "Bob", "second")];
        let html = list_markup_in(&messages, &Utc, DEFAULT_TIME_FORMAT);
        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_list_markup_empty() {
        assert_eq!(list_markup_in(&[], &Utc, DEFAULT_TIME_FORMAT), "");
    }
}
