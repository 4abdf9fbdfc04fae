use log::warn;

use crate::{
    app::{
        events::EngineEvent,
        plan::{
            BATTERY_PLACEHOLDER, CLOCK_PLACEHOLDER, RenderPlan, STEPS_PLACEHOLDER,
            WEATHER_PLACEHOLDER,
        },
        settings::Preferences,
    },
    data::payload,
    domain::{
        battery::{self, BatteryCategory},
        clock::{self, Moment},
        moon, text,
        weather::{ConditionIcon, WeatherReading, convert_temp, icon_for, round_temp},
    },
};


pub const LOCATION_MAX_CHARS: usize = 15;

const DEGREE: char = '\u{00B0}';

// Re-checked on every event; either flag may be revoked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub location: bool,
    pub activity: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            location: true,
            activity: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BatterySnapshot {
    level: u8,
    charging: bool,
}

// Sole owner of the last-known inputs. Every event replaces one slice of
// state and recomputes the whole plan; nothing is diffed.
#[derive(Debug)]
pub struct DisplayStateEngine {
    prefs: Preferences,
    permissions: Permissions,
    weather: Option<WeatherReading>,
    moment: Option<Moment>,
    steps: u32,
    battery: Option<BatterySnapshot>,
}

impl DisplayStateEngine {
    #[must_use]
    pub fn new(prefs: Preferences, permissions: Permissions) -> Self {
        Self {
            prefs,
            permissions,
            weather: None,
            moment: None,
            steps: 0,
            battery: None,
        }
    }

    pub fn handle_event(&mut self, event: EngineEvent) -> RenderPlan {
        match event {
            EngineEvent::Tick { moment, steps } => {
                self.moment = Some(moment);
                self.steps = steps;
            }
            EngineEvent::BatteryChanged { level, charging } => {
                self.battery = Some(BatterySnapshot { level, charging });
            }
            EngineEvent::WeatherArrived(reading) => {
                self.weather = Some(reading);
            }
            EngineEvent::PermissionsChanged(permissions) => {
                self.permissions = permissions;
            }
            EngineEvent::PreferencesChanged(prefs) => {
                self.prefs = prefs;
            }
        }
        self.plan()
    }

    // A payload that fails to decode leaves the cached reading untouched.
    pub fn weather_payload(&mut self, bytes: &[u8]) -> RenderPlan {
        match payload::decode(bytes) {
            Ok(reading) => self.handle_event(EngineEvent::WeatherArrived(reading)),
            Err(err) => {
                warn!("{err}; keeping last known weather");
                self.plan()
            }
        }
    }

    #[must_use]
    pub fn plan(&self) -> RenderPlan {
        let (clock_text, meridiem_text) = self.clock_fields();
        let (moon_icon, moon_label_top, moon_label_bottom) = self.moon_fields();
        let (location_text, temperature_text, condition_text, condition_icon) =
            self.weather_fields();
        let (battery_text, battery_icon) = self.battery_fields();

        RenderPlan {
            clock_text,
            meridiem_text,
            date_text: self.moment.as_ref().map(clock::format_date).unwrap_or_default(),
            location_text,
            temperature_text,
            condition_text,
            condition_icon,
            moon_icon,
            moon_label_top,
            moon_label_bottom,
            step_text: self.step_field(),
            battery_text,
            battery_icon,
            accent_color: self.prefs.accent_color.clone(),
        }
    }

    fn clock_fields(&self) -> (String, String) {
        let Some(moment) = &self.moment else {
            return (CLOCK_PLACEHOLDER.to_string(), String::new());
        };

        let parts = clock::format_clock(moment.hour, moment.minute, self.prefs.twelve_hour);
        let meridiem = if parts.is_pm { "PM" } else { "AM" };
        (format!("{}:{}", parts.hour, parts.minute), meridiem.to_string())
    }

    fn moon_fields(&self) -> (&'static str, &'static str, &'static str) {
        match &self.moment {
            Some(moment) => {
                let phase = moon::phase_of(moment);
                let (top, bottom) = phase.label_words();
                (phase.icon(), top, bottom)
            }
            None => ("", "", ""),
        }
    }

    fn step_field(&self) -> String {
        if self.permissions.activity {
            text::format_steps(self.steps)
        } else {
            STEPS_PLACEHOLDER.to_string()
        }
    }

    fn battery_fields(&self) -> (String, Option<BatteryCategory>) {
        match &self.battery {
            Some(snapshot) => (
                battery::format_battery(snapshot.level),
                Some(battery::classify(snapshot.level, snapshot.charging)),
            ),
            None => (BATTERY_PLACEHOLDER.to_string(), None),
        }
    }

    fn weather_fields(&self) -> (String, String, String, ConditionIcon) {
        let placeholders = || {
            (
                WEATHER_PLACEHOLDER.to_string(),
                WEATHER_PLACEHOLDER.to_string(),
                WEATHER_PLACEHOLDER.to_string(),
                ConditionIcon::hidden(),
            )
        };

        // The cached reading stays put while the permission is revoked, so
        // restoring it brings the last-known data straight back.
        if !self.permissions.location {
            return placeholders();
        }
        let Some(reading) = &self.weather else {
            return placeholders();
        };

        let shown = round_temp(convert_temp(reading.temperature, reading.unit, self.prefs.units));
        let condition_icon = icon_for(&reading.condition_name).unwrap_or_else(|| {
            warn!("no icon mapped for weather condition {:?}", reading.condition_name);
            ConditionIcon::hidden()
        });

        (
            text::truncate(&reading.location, LOCATION_MAX_CHARS),
            format!("{shown}{DEGREE}{}", self.prefs.units.letter()),
            reading.condition_name.clone(),
            condition_icon,
        )
    }
}
