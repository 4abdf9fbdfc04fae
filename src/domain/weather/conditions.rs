// Condition codes as delivered by the phone-side weather provider. Several
// codes share a display name (12-14 and 39-40 are all "Showers").
const CONDITION_NAMES: &[(u16, &str)] = &[
    (1, "Sunny"),
    (2, "Mostly Sunny"),
    (3, "Partly Sunny"),
    (4, "Some Clouds"),
    (5, "Hazy Sun"),
    (6, "Mostly Cloudy"),
    (7, "Cloudy"),
    (8, "Overcast"),
    (11, "Fog"),
    (12, "Showers"),
    (13, "Showers"),
    (14, "Showers"),
    (15, "Storms"),
    (16, "Storms"),
    (17, "Storms"),
    (18, "Rain"),
    (19, "Flurries"),
    (20, "Flurries"),
    (21, "Flurries"),
    (22, "Snow"),
    (23, "Snow"),
    (24, "Ice"),
    (25, "Sleet"),
    (26, "Freezing Rain"),
    (29, "Rain + Snow"),
    (30, "Hot"),
    (31, "Cold"),
    (32, "Windy"),
    (33, "Clear Night"),
    (34, "Mostly Clear"),
    (35, "Cloudy Night"),
    (36, "Clouds"),
    (37, "Hazy Moon"),
    (38, "Mostly Cloudy"),
    (39, "Showers"),
    (40, "Showers"),
    (41, "Storms"),
    (42, "Storms"),
    (43, "Flurries"),
    (44, "Snow"),
];

#[must_use]
pub fn condition_name(code: u16) -> Option<&'static str> {
    CONDITION_NAMES
        .iter()
        .find_map(|(candidate, name)| (*candidate == code).then_some(*name))
}
