use crate::domain::{battery::BatteryCategory, weather::ConditionIcon};

pub const WEATHER_PLACEHOLDER: &str = "----";
pub const STEPS_PLACEHOLDER: &str = "-----";
pub const CLOCK_PLACEHOLDER: &str = "--:--";
pub const BATTERY_PLACEHOLDER: &str = "--%";

// One full frame of display values. The renderer consumes it field by field
// and discards it; re-applying the same plan is a no-op by contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub clock_text: String,
    pub meridiem_text: String,
    pub date_text: String,
    pub location_text: String,
    pub temperature_text: String,
    pub condition_text: String,
    pub condition_icon: ConditionIcon,
    pub moon_icon: &'static str,
    pub moon_label_top: &'static str,
    pub moon_label_bottom: &'static str,
    pub step_text: String,
    pub battery_text: String,
    pub battery_icon: Option<BatteryCategory>,
    pub accent_color: String,
}
