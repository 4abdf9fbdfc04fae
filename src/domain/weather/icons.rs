#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

// Optional restyle of the text label sitting next to the icon; long
// condition names drop to a smaller font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionIcon {
    pub asset: &'static str,
    pub geometry: IconGeometry,
    pub label: Option<LabelStyle>,
}

impl ConditionIcon {
    // An empty asset id tells the renderer to hide the element.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            asset: "",
            geometry: DEFAULT_GEOMETRY,
            label: None,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.asset.is_empty()
    }
}

pub const DEFAULT_GEOMETRY: IconGeometry = IconGeometry {
    x: 14,
    y: 158,
    width: 60,
    height: 60,
};

#[derive(Debug, Clone, Copy)]
struct IconAdjust {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<u32>,
    height: Option<u32>,
    label: Option<LabelStyle>,
}

impl IconAdjust {
    const fn none() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            label: None,
        }
    }

    const fn rect(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            label: None,
        }
    }

    const fn size(width: u32, height: u32) -> Self {
        Self {
            x: None,
            y: None,
            width: Some(width),
            height: Some(height),
            label: None,
        }
    }

    const fn labeled(font_size: u32, x: i32, y: i32) -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            label: Some(LabelStyle { font_size, x, y }),
        }
    }
}

// Cloudy and Overcast intentionally share an asset.
const CONDITION_ICONS: &[(&str, &str, IconAdjust)] = &[
    ("Sunny", "weather-icons/yellow-sun-16526.png", IconAdjust::none()),
    (
        "Mostly Sunny",
        "weather-icons/yellow-sun-and-blue-cloud-16528.png",
        IconAdjust::none(),
    ),
    (
        "Partly Sunny",
        "weather-icons/yellow-sun-and-blue-cloud-16528.png",
        IconAdjust::none(),
    ),
    (
        "Some Clouds",
        "weather-icons/yellow-sun-and-blue-cloud-16528.png",
        IconAdjust::none(),
    ),
    (
        "Hazy Sun",
        "weather-icons/blue-clouds-and-yellow-sun.png",
        IconAdjust::none(),
    ),
    (
        "Mostly Cloudy",
        "weather-icons/blue-clouds-and-yellow-sun.png",
        IconAdjust::labeled(24, 80, 196),
    ),
    (
        "Cloudy",
        "weather-icons/blue-cloud-and-weather-16527.png",
        IconAdjust::none(),
    ),
    (
        "Overcast",
        "weather-icons/blue-cloud-and-weather-16527.png",
        IconAdjust::none(),
    ),
    (
        "Fog",
        "weather-icons/foggy-cloud-forecast-24549.png",
        IconAdjust::rect(10, 166, 68, 46),
    ),
    (
        "Showers",
        "weather-icons/downpour-rainy-day-16531.png",
        IconAdjust::none(),
    ),
    (
        "Storms",
        "weather-icons/cloud-and-yellow-lightning.png",
        IconAdjust::none(),
    ),
    (
        "Rain",
        "weather-icons/rainy-and-cloudy-day-16532.png",
        IconAdjust::none(),
    ),
    (
        "Flurries",
        "weather-icons/snowfall-and-blue-cloud-16541.png",
        IconAdjust::none(),
    ),
    (
        "Snow",
        "weather-icons/snow-and-blue-cloud-16540.png",
        IconAdjust::none(),
    ),
    (
        "Ice",
        "weather-icons/hail-weather-and-winter-cloud.png",
        IconAdjust::none(),
    ),
    (
        "Sleet",
        "weather-icons/hail-weather-and-winter-cloud.png",
        IconAdjust::none(),
    ),
    (
        "Freezing Rain",
        "weather-icons/hail-weather-and-winter-cloud.png",
        IconAdjust::labeled(22, 80, 194),
    ),
    (
        "Rain + Snow",
        "weather-icons/hail-weather-and-winter-cloud.png",
        IconAdjust::labeled(24, 80, 196),
    ),
    (
        "Hot",
        "weather-icons/blue-thermometer-and-heat-16549.png",
        IconAdjust::rect(24, 152, 40, 66),
    ),
    (
        "Cold",
        "weather-icons/blue-thermometer-and-cold-16548.png",
        IconAdjust::rect(24, 152, 40, 66),
    ),
    (
        "Windy",
        "weather-icons/blue-wind-16544.png",
        IconAdjust::size(72, 48),
    ),
    (
        "Clear Night",
        "weather-icons/yellow-moon-16536.png",
        IconAdjust::none(),
    ),
    (
        "Mostly Clear",
        "weather-icons/moon-and-cloudy-night-16537.png",
        IconAdjust::none(),
    ),
    (
        "Cloudy Night",
        "weather-icons/moon-and-cloudy-night-16537.png",
        IconAdjust::none(),
    ),
    (
        "Clouds",
        "weather-icons/blue-cloud-and-weather-16527.png",
        IconAdjust::none(),
    ),
    (
        "Hazy Moon",
        "weather-icons/moon-and-cloudy-night-16537.png",
        IconAdjust::none(),
    ),
];

#[must_use]
pub fn icon_for(name: &str) -> Option<ConditionIcon> {
    CONDITION_ICONS
        .iter()
        .find(|(candidate, _, _)| *candidate == name)
        .map(|(_, asset, adjust)| resolve(asset, adjust))
}

// Default geometry first, then the entry's overrides on top.
fn resolve(asset: &'static str, adjust: &IconAdjust) -> ConditionIcon {
    let mut geometry = DEFAULT_GEOMETRY;
    if let Some(x) = adjust.x {
        geometry.x = x;
    }
    if let Some(y) = adjust.y {
        geometry.y = y;
    }
    if let Some(width) = adjust.width {
        geometry.width = width;
    }
    if let Some(height) = adjust.height {
        geometry.height = height;
    }

    ConditionIcon {
        asset,
        geometry,
        label: adjust.label,
    }
}
