//! Tests for the `HH:MM` time codec and `TimeOfDay`.

use slot_engine::time::{format_time, parse_time, TimeOfDay, MINUTES_PER_DAY};
use slot_engine::SlotError;

// ── parse_time ──────────────────────────────────────────────────────────────

#[test]
fn parse_valid_times() {
    let cases = [
        ("00:00", 0),
        ("01:00", 60),
        ("00:10", 10),
        ("09:02", 542),
        ("23:59", 1439),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_time(text).unwrap(), expected, "parsing {text}");
    }
}

#[test]
fn parse_rejects_malformed_shapes() {
    let cases = [
        "000:00", "-1:00", "ab:10", "0:12", "", "12:5", "12-30", " 09:00", "09:00 ", "٠٩:٠٠",
    ];
    for text in cases {
        let err = parse_time(text).unwrap_err();
        assert_eq!(
            err,
            SlotError::InvalidTimeFormat(text.to_string()),
            "{text:?} should be a format error"
        );
        assert!(err.is_invalid_time());
    }
}

#[test]
fn parse_rejects_out_of_range_fields() {
    for text in ["55:02", "00:72", "24:00", "99:99"] {
        let err = parse_time(text).unwrap_err();
        assert_eq!(
            err,
            SlotError::TimeOutOfRange(text.to_string()),
            "{text:?} should be a range error"
        );
        assert!(err.is_invalid_time());
    }
}

// ── format_time ─────────────────────────────────────────────────────────────

#[test]
fn format_valid_minutes() {
    let cases = [(0, "00:00"), (60, "01:00"), (10, "00:10"), (542, "09:02"), (1439, "23:59")];
    for (minutes, expected) in cases {
        assert_eq!(format_time(minutes).unwrap(), expected);
    }
}

#[test]
fn format_end_of_day_renders_24_00() {
    assert_eq!(format_time(MINUTES_PER_DAY).unwrap(), "24:00");
    // ...which the parser does not accept back.
    assert!(parse_time("24:00").is_err());
}

#[test]
fn format_rejects_out_of_range_minutes() {
    for minutes in [-10, -1, MINUTES_PER_DAY + 1, i64::MAX, i64::MIN] {
        assert_eq!(
            format_time(minutes).unwrap_err(),
            SlotError::InvalidMinuteRange(minutes)
        );
    }
}

// ── TimeOfDay ───────────────────────────────────────────────────────────────

#[test]
fn time_of_day_from_str_and_display() {
    let t: TimeOfDay = "14:05".parse().unwrap();
    assert_eq!(t.minutes(), 14 * 60 + 5);
    assert_eq!(t.hour(), 14);
    assert_eq!(t.minute(), 5);
    assert_eq!(t.to_string(), "14:05");
}

#[test]
fn time_of_day_constants() {
    assert_eq!(TimeOfDay::MIDNIGHT.minutes(), 0);
    assert_eq!(TimeOfDay::END_OF_DAY.minutes(), 1440);
    assert!(TimeOfDay::MIDNIGHT < TimeOfDay::END_OF_DAY);
}

#[test]
fn time_of_day_from_minutes_bounds() {
    assert!(TimeOfDay::from_minutes(0).is_ok());
    assert!(TimeOfDay::from_minutes(1440).is_ok());
    assert_eq!(
        TimeOfDay::from_minutes(1441).unwrap_err(),
        SlotError::InvalidMinuteRange(1441)
    );
}

#[test]
fn time_of_day_serde_uses_hh_mm_text() {
    let t = TimeOfDay::parse("08:30").unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), r#""08:30""#);

    let back: TimeOfDay = serde_json::from_str(r#""08:30""#).unwrap();
    assert_eq!(back, t);

    assert!(serde_json::from_str::<TimeOfDay>(r#""8:30""#).is_err());
}

#[test]
fn error_messages_name_the_input() {
    assert_eq!(
        parse_time("ab:10").unwrap_err().to_string(),
        "Invalid time format: 'ab:10' (expected HH:MM)"
    );
    assert_eq!(
        format_time(-10).unwrap_err().to_string(),
        "Minute offset -10 is outside 0..=1440"
    );
}
