use log::debug;
use serde_json::Value;

use crate::domain::weather::Units;

pub const KEY_COLOR: &str = "color";

const DEFAULT_COLOR: &str = "white";

// Externally owned preferences; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub twelve_hour: bool,
    pub units: Units,
    pub accent_color: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            twelve_hour: true,
            units: Units::Celsius,
            accent_color: DEFAULT_COLOR.to_string(),
        }
    }
}

// The settings channel delivers JSON-parsed key/value pairs. Unknown keys
// and wrong-typed values leave the preferences unchanged.
#[must_use]
pub fn apply_setting(current: &Preferences, key: &str, value: &Value) -> Preferences {
    let mut updated = current.clone();
    match key {
        KEY_COLOR => {
            if let Some(color) = value.as_str() {
                updated.accent_color = color.to_string();
            } else {
                debug!("ignoring non-string value for setting {key:?}");
            }
        }
        _ => debug!("ignoring unknown setting key {key:?}"),
    }
    updated
}
