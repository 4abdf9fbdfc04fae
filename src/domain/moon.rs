use crate::domain::clock::Moment;


pub const LUNAR_MONTH_DAYS: f64 = 29.530588853;

const UNIX_EPOCH_JULIAN: f64 = 2_440_587.5;
const NEW_MOON_REFERENCE_JULIAN: f64 = 2_451_550.1;
const WAXING_LIMIT_DAYS: f64 = 14.765;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    #[must_use]
    pub fn label_words(self) -> (&'static str, &'static str) {
        match self {
            Self::NewMoon => ("New", "Moon"),
            Self::WaxingCrescent => ("Waxing", "Crescent"),
            Self::FirstQuarter => ("First", "Quarter"),
            Self::WaxingGibbous => ("Waxing", "Gibbous"),
            Self::FullMoon => ("Full", "Moon"),
            Self::WaningGibbous => ("Waning", "Gibbous"),
            Self::LastQuarter => ("Last", "Quarter"),
            Self::WaningCrescent => ("Waning", "Crescent"),
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::NewMoon => "moon/new-moon.png",
            Self::WaxingCrescent => "moon/waxing-crescent.png",
            Self::FirstQuarter => "moon/first-quarter.png",
            Self::WaxingGibbous => "moon/waxing-gibbous.png",
            Self::FullMoon => "moon/full-moon.png",
            Self::WaningGibbous => "moon/waning-gibbous.png",
            Self::LastQuarter => "moon/last-quarter.png",
            Self::WaningCrescent => "moon/waning-crescent.png",
        }
    }
}

const PHASE_BUCKETS: &[(f64, LunarPhase)] = &[
    (1.84566, LunarPhase::NewMoon),
    (5.53699, LunarPhase::WaxingCrescent),
    (9.22831, LunarPhase::FirstQuarter),
    (12.91963, LunarPhase::WaxingGibbous),
    (16.61096, LunarPhase::FullMoon),
    (20.30228, LunarPhase::WaningGibbous),
    (23.99361, LunarPhase::LastQuarter),
    (27.68493, LunarPhase::WaningCrescent),
];

// Julian day of the moment's local wall-clock time, matching the
// `epochDays - utcOffsetDays + 2440587.5` formulation.
#[must_use]
pub fn julian_day(moment: &Moment) -> f64 {
    moment.epoch_millis as f64 / 86_400_000.0 - f64::from(moment.utc_offset_minutes) / 1_440.0
        + UNIX_EPOCH_JULIAN
}

#[must_use]
pub fn lunar_age(moment: &Moment) -> f64 {
    normalize((julian_day(moment) - NEW_MOON_REFERENCE_JULIAN) / LUNAR_MONTH_DAYS)
        * LUNAR_MONTH_DAYS
}

#[must_use]
pub fn phase_of(moment: &Moment) -> LunarPhase {
    let age = lunar_age(moment);
    PHASE_BUCKETS
        .iter()
        .find(|(bound, _)| age < *bound)
        .map_or(LunarPhase::NewMoon, |(_, phase)| *phase)
}

// An age of exactly 14.765 days counts as waxing.
#[must_use]
pub fn is_waxing(moment: &Moment) -> bool {
    lunar_age(moment) <= WAXING_LIMIT_DAYS
}

#[must_use]
pub fn is_waning(moment: &Moment) -> bool {
    lunar_age(moment) > WAXING_LIMIT_DAYS
}

fn normalize(value: f64) -> f64 {
    let fractional = value.fract();
    if fractional < 0.0 {
        fractional + 1.0
    } else {
        fractional
    }
}
