const MIN_FULL: u8 = 70;
const MIN_HALF: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryCategory {
    Charging,
    Full,
    Half,
    Low,
}

impl BatteryCategory {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Charging => "battery-charging.png",
            Self::Full => "battery-full.png",
            Self::Half => "battery-half.png",
            Self::Low => "battery-low.png",
        }
    }
}

// Exactly 70 counts as Full and exactly 30 as Low, so Half covers the open
// interval (30, 70).
#[must_use]
pub fn classify(level: u8, charging: bool) -> BatteryCategory {
    if charging {
        BatteryCategory::Charging
    } else if level >= MIN_FULL {
        BatteryCategory::Full
    } else if level > MIN_HALF {
        BatteryCategory::Half
    } else {
        BatteryCategory::Low
    }
}

#[must_use]
pub fn format_battery(level: u8) -> String {
    format!("{level}%")
}
