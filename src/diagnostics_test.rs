use super::*;
use crate::consts::SLOW_LOAD_THRESHOLD_MS;

// =============================================================
// Analytics
// =============================================================

#[test]
fn outbound_click_fields() {
    let event = AnalyticsEvent::outbound_click("https://example.com/");
    assert_eq!(event.action, "click");
    assert_eq!(event.event_category, "outbound");
    assert_eq!(event.event_label, "https://example.com/");
}

#[test]
fn params_json_has_gtag_field_names() {
    let event = AnalyticsEvent::outbound_click("https://example.com/a?b=1");
    let value: serde_json::Value = serde_json::from_str(&event.params_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "event_category": "outbound",
            "event_label": "https://example.com/a?b=1",
        })
    );
}

#[test]
fn params_json_omits_action() {
    let json = AnalyticsEvent::outbound_click("x").params_json().unwrap();
    assert!(!json.contains("action"));
}

#[test]
fn params_json_escapes_label() {
    let json = AnalyticsEvent::outbound_click("https://e.com/\"q\"").params_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["event_label"], "https://e.com/\"q\"");
}

// =============================================================
// Load timing
// =============================================================

#[test]
fn fast_load_is_not_slow() {
    let timing = LoadTiming { load_event_start: 1000.0, load_event_end: 1200.0 };
    assert_eq!(timing.duration(), 200.0);
    assert!(!timing.is_slow(SLOW_LOAD_THRESHOLD_MS));
}

#[test]
fn exactly_threshold_is_not_slow() {
    let timing = LoadTiming { load_event_start: 0.0, load_event_end: 3000.0 };
    assert!(!timing.is_slow(SLOW_LOAD_THRESHOLD_MS));
}

#[test]
fn over_threshold_is_slow() {
    let timing = LoadTiming { load_event_start: 500.0, load_event_end: 3600.0 };
    assert!(timing.is_slow(SLOW_LOAD_THRESHOLD_MS));
}

#[test]
fn unfinished_load_is_not_slow() {
    let timing = LoadTiming { load_event_start: 800.0, load_event_end: 0.0 };
    assert!(!timing.is_slow(SLOW_LOAD_THRESHOLD_MS));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn image_message_names_source() {
    assert_eq!(image_failure_message("/img/logo.png"), "Image failed to load: /img/logo.png");
}

#[test]
fn image_message_without_source() {
    assert_eq!(image_failure_message(""), "Image failed to load: <no src>");
}

#[test]
fn script_error_message_with_location() {
    assert_eq!(
        script_error_message("x is undefined", "app.js", 12),
        "Script error: x is undefined (app.js:12)"
    );
}

#[test]
fn script_error_message_without_location() {
    assert_eq!(script_error_message("boom", "", 0), "Script error: boom");
}
