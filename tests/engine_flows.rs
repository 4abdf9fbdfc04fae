use chrono::DateTime;
use lunarface::{
    app::{
        events::EngineEvent,
        settings::{KEY_COLOR, Preferences, apply_setting},
        state::{DisplayStateEngine, Permissions},
    },
    data::payload::{self, WeatherPayload},
    domain::{battery::BatteryCategory, clock::Moment, weather::Units},
};
use serde_json::json;

fn moment(value: &str) -> Moment {
    Moment::from_datetime(&DateTime::parse_from_rfc3339(value).expect("valid moment fixture"))
}

fn tick(value: &str, steps: u32) -> EngineEvent {
    EngineEvent::Tick {
        moment: moment(value),
        steps,
    }
}

#[test]
fn a_full_session_flows_through_every_event_kind() {
    let mut engine = DisplayStateEngine::new(Preferences::default(), Permissions::default());

    // Host boots: battery snapshot, then the first minute tick.
    engine.handle_event(EngineEvent::BatteryChanged {
        level: 91,
        charging: false,
    });
    let plan = engine.handle_event(tick("2026-02-14T08:30:00-05:00", 512));
    assert_eq!(plan.clock_text, "8:30");
    assert_eq!(plan.meridiem_text, "AM");
    assert_eq!(plan.date_text, "Sat Feb 14");
    assert_eq!(plan.step_text, "512");
    assert_eq!(plan.battery_icon, Some(BatteryCategory::Full));
    // No weather has arrived yet.
    assert_eq!(plan.temperature_text, "----");

    // The companion forwards a payload through the file queue.
    let file = tempfile::NamedTempFile::new().expect("payload file");
    let wire = WeatherPayload::from_observation(-2, 23, "Minneapolis", Units::Celsius);
    std::fs::write(file.path(), payload::encode(&wire).expect("encode")).expect("write payload");

    let bytes = std::fs::read(file.path()).expect("read payload");
    let plan = engine.weather_payload(&bytes);
    assert_eq!(plan.temperature_text, "-2\u{00B0}C");
    assert_eq!(plan.condition_text, "Snow");
    assert_eq!(plan.location_text, "Minneapolis");
    assert_eq!(
        plan.condition_icon.asset,
        "weather-icons/snow-and-blue-cloud-16540.png"
    );

    // Settings channel: the phone pushes a new accent color.
    let prefs = apply_setting(&Preferences::default(), KEY_COLOR, &json!("lightblue"));
    let plan = engine.handle_event(EngineEvent::PreferencesChanged(prefs));
    assert_eq!(plan.accent_color, "lightblue");
    // The cached reading survives the preference change.
    assert_eq!(plan.condition_text, "Snow");

    // Later tick; everything recomputes from cached state.
    let plan = engine.handle_event(tick("2026-02-14T13:00:00-05:00", 4_821));
    assert_eq!(plan.clock_text, "1:00");
    assert_eq!(plan.meridiem_text, "PM");
    assert_eq!(plan.step_text, "4,821");
    assert_eq!(plan.condition_text, "Snow");
    assert_eq!(plan.accent_color, "lightblue");
}

#[test]
fn switching_to_twenty_four_hour_changes_the_next_plan() {
    let mut engine = DisplayStateEngine::new(Preferences::default(), Permissions::default());
    let plan = engine.handle_event(tick("2026-02-14T15:45:00Z", 0));
    assert_eq!(plan.clock_text, "3:45");

    let plan = engine.handle_event(EngineEvent::PreferencesChanged(Preferences {
        twelve_hour: false,
        ..Preferences::default()
    }));
    assert_eq!(plan.clock_text, "15:45");
}

#[test]
fn unit_preference_and_payload_unit_compose() {
    let prefs = Preferences {
        units: Units::Fahrenheit,
        ..Preferences::default()
    };
    let mut engine = DisplayStateEngine::new(prefs, Permissions::default());

    let wire = WeatherPayload::from_observation(0, 1, "Oslo", Units::Celsius);
    let plan = engine.weather_payload(&payload::encode(&wire).expect("encode"));
    assert_eq!(plan.temperature_text, "32\u{00B0}F");

    // A payload already in Fahrenheit passes through untouched.
    let wire = WeatherPayload::from_observation(75, 1, "Phoenix", Units::Fahrenheit);
    let plan = engine.weather_payload(&payload::encode(&wire).expect("encode"));
    assert_eq!(plan.temperature_text, "75\u{00B0}F");
}

#[test]
fn permission_loss_masks_without_forgetting() {
    let mut engine = DisplayStateEngine::new(Preferences::default(), Permissions::default());

    let wire = WeatherPayload::from_observation(18, 12, "San Sebastián", Units::Celsius);
    let before = engine.weather_payload(&payload::encode(&wire).expect("encode"));
    assert_eq!(before.condition_text, "Showers");

    let masked = engine.handle_event(EngineEvent::PermissionsChanged(Permissions {
        location: false,
        activity: false,
    }));
    assert_eq!(masked.temperature_text, "----");
    assert_eq!(masked.location_text, "----");
    assert_eq!(masked.step_text, "-----");
    assert!(masked.condition_icon.is_hidden());

    let restored = engine.handle_event(EngineEvent::PermissionsChanged(Permissions {
        location: true,
        activity: true,
    }));
    assert_eq!(restored.temperature_text, before.temperature_text);
    assert_eq!(restored.condition_text, before.condition_text);
    assert_eq!(restored.location_text, before.location_text);
}
