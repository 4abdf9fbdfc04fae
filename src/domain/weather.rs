pub mod conditions;
pub mod icons;


pub use conditions::condition_name;
pub use icons::{ConditionIcon, IconGeometry, LabelStyle, icon_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Celsius" => Some(Self::Celsius),
            "Fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

// Last-known reading held by the engine; replaced atomically, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub unit: Units,
    pub condition_code: u16,
    pub condition_name: String,
    pub location: String,
}

#[must_use]
pub fn convert_temp(value: f64, from: Units, to: Units) -> f64 {
    match (from, to) {
        (Units::Celsius, Units::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Units::Fahrenheit, Units::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

// Halves round away from zero.
#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}
