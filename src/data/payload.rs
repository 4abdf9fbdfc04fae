use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::weather::{Units, WeatherReading, condition_name};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("weather payload could not be decoded: {0}")]
    Malformed(#[from] postcard::Error),
    #[error("weather payload carries unknown unit {0:?}")]
    UnknownUnit(String),
}

// Wire shape of one weather update from the companion's outbox. The
// condition name travels alongside the code so the watch face never has to
// guess when the two tables drift apart across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub temperature: i32,
    pub condition: String,
    pub condition_code: u16,
    pub location: String,
    pub unit: String,
}

impl WeatherPayload {
    // Companion side: resolve the display name before enqueueing.
    #[must_use]
    pub fn from_observation(temperature: i32, condition_code: u16, location: &str, unit: Units) -> Self {
        let condition = condition_name(condition_code).unwrap_or_else(|| {
            warn!("unexpected weather condition code {condition_code}");
            ""
        });

        Self {
            temperature,
            condition: condition.to_string(),
            condition_code,
            location: location.to_string(),
            unit: unit.name().to_string(),
        }
    }
}

pub fn encode(payload: &WeatherPayload) -> Result<Vec<u8>, PayloadError> {
    Ok(postcard::to_allocvec(payload)?)
}

pub fn decode(bytes: &[u8]) -> Result<WeatherReading, PayloadError> {
    let payload: WeatherPayload = postcard::from_bytes(bytes)?;
    let unit = Units::from_name(&payload.unit)
        .ok_or_else(|| PayloadError::UnknownUnit(payload.unit.clone()))?;

    // Older companions shipped the code only; fill the name in locally.
    let condition = if payload.condition.is_empty() {
        condition_name(payload.condition_code)
            .unwrap_or_default()
            .to_string()
    } else {
        payload.condition
    };

    Ok(WeatherReading {
        temperature: f64::from(payload.temperature),
        unit,
        condition_code: payload.condition_code,
        condition_name: condition,
        location: payload.location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_resolves_the_condition_name() {
        let payload = WeatherPayload::from_observation(7, 5, "Philadelphia", Units::Celsius);
        assert_eq!(payload.condition, "Hazy Sun");
        assert_eq!(payload.unit, "Celsius");
    }

    #[test]
    fn observation_with_unmapped_code_carries_an_empty_name() {
        let payload = WeatherPayload::from_observation(7, 9999, "Nowhere", Units::Celsius);
        assert_eq!(payload.condition, "");
        assert_eq!(payload.condition_code, 9999);
    }

    #[test]
    fn encoded_payloads_decode_into_readings() {
        let payload = WeatherPayload::from_observation(-3, 22, "Reykjavík", Units::Celsius);
        let bytes = encode(&payload).expect("encode");

        let reading = decode(&bytes).expect("decode");
        assert_eq!(reading.temperature, -3.0);
        assert_eq!(reading.unit, Units::Celsius);
        assert_eq!(reading.condition_code, 22);
        assert_eq!(reading.condition_name, "Snow");
        assert_eq!(reading.location, "Reykjavík");
    }

    #[test]
    fn empty_wire_names_are_filled_from_the_code() {
        let payload = WeatherPayload {
            temperature: 12,
            condition: String::new(),
            condition_code: 18,
            location: "Bergen".to_string(),
            unit: "Celsius".to_string(),
        };
        let reading = decode(&encode(&payload).expect("encode")).expect("decode");
        assert_eq!(reading.condition_name, "Rain");
    }

    #[test]
    fn truncated_buffers_are_malformed() {
        let payload = WeatherPayload::from_observation(7, 5, "Philadelphia", Units::Celsius);
        let bytes = encode(&payload).expect("encode");

        let err = decode(&bytes[..bytes.len() / 2]).expect_err("truncated payload");
        assert!(matches!(err, PayloadError::Malformed(_)));
        assert!(matches!(decode(&[]), Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn unknown_units_are_rejected() {
        let payload = WeatherPayload {
            temperature: 280,
            condition: "Sunny".to_string(),
            condition_code: 1,
            location: "Lab".to_string(),
            unit: "Kelvin".to_string(),
        };
        let err = decode(&encode(&payload).expect("encode")).expect_err("unknown unit");
        assert!(matches!(err, PayloadError::UnknownUnit(unit) if unit == "Kelvin"));
    }
}
