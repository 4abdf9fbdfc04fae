use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    app::{settings::Preferences, state::Permissions},
    domain::weather::Units,
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ClockArg {
    #[value(name = "12h")]
    TwelveHour,
    #[value(name = "24h")]
    TwentyFourHour,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "lunarface",
    version,
    about = "Watchface display state engine, driven by a simulated host"
)]
pub struct Cli {
    /// Clock display mode
    #[arg(long, value_enum, default_value_t = ClockArg::TwelveHour)]
    pub clock: ClockArg,

    /// Temperature units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Accent color carried into every render plan
    #[arg(long, default_value = "white")]
    pub color: String,

    /// Simulated battery charge level (0-100)
    #[arg(long, default_value_t = 86, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub battery: u8,

    /// Simulate the charger being connected
    #[arg(long)]
    pub charging: bool,

    /// Simulated daily step count
    #[arg(long, default_value_t = 6214)]
    pub steps: u32,

    /// Drop the location permission (weather fields render placeholders)
    #[arg(long)]
    pub no_location: bool,

    /// Drop the activity permission (steps render a placeholder)
    #[arg(long)]
    pub no_activity: bool,

    /// Binary weather payload file to watch for updates
    #[arg(long)]
    pub weather_file: Option<PathBuf>,

    /// Seconds between clock ticks
    #[arg(long, default_value_t = 60)]
    pub tick_interval: u64,

    /// Print a single render plan and exit
    #[arg(long)]
    pub one_shot: bool,

    /// Encode a sample weather payload to this path and exit
    #[arg(long, conflicts_with = "weather_file")]
    pub write_weather: Option<PathBuf>,

    /// Condition code for --write-weather
    #[arg(long, default_value_t = 1)]
    pub condition_code: u16,

    /// Temperature for --write-weather, expressed in --units
    #[arg(long, default_value_t = 22, allow_negative_numbers = true)]
    pub temperature: i32,

    /// Location name for --write-weather
    #[arg(long, default_value = "Philadelphia")]
    pub location: String,
}

impl Cli {
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            twelve_hour: matches!(self.clock, ClockArg::TwelveHour),
            units: match self.units {
                UnitsArg::Celsius => Units::Celsius,
                UnitsArg::Fahrenheit => Units::Fahrenheit,
            },
            accent_color: self.color.clone(),
        }
    }

    #[must_use]
    pub fn permissions(&self) -> Permissions {
        Permissions {
            location: !self.no_location,
            activity: !self.no_activity,
        }
    }
}
