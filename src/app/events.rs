use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use chrono::Local;
use log::warn;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::{
    app::{settings::Preferences, state::Permissions},
    domain::{clock::Moment, weather::WeatherReading},
};

// The engine's complete event vocabulary. The activity source is sampled at
// tick time, so steps ride along with the moment.
#[derive(Debug)]
pub enum EngineEvent {
    Tick { moment: Moment, steps: u32 },
    BatteryChanged { level: u8, charging: bool },
    WeatherArrived(WeatherReading),
    PermissionsChanged(Permissions),
    PreferencesChanged(Preferences),
}

#[derive(Debug)]
pub enum AppEvent {
    Engine(EngineEvent),
    WeatherFile(Vec<u8>),
}

pub fn start_clock_task(tx: mpsc::Sender<AppEvent>, tick_secs: u64, steps: u32) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(tick_secs.max(1)));
        loop {
            ticker.tick().await;
            let moment = Moment::from_datetime(&Local::now());
            let event = AppEvent::Engine(EngineEvent::Tick { moment, steps });
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });
}

// Stand-in for the device inbox: re-read the payload file whenever its
// modification time moves.
pub fn start_payload_watch_task(tx: mpsc::Sender<AppEvent>, path: PathBuf, poll_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(poll_secs.max(1)));
        let mut last_modified: Option<SystemTime> = None;
        loop {
            ticker.tick().await;

            let Ok(metadata) = std::fs::metadata(&path) else {
                continue;
            };
            let modified = metadata.modified().ok();
            if modified == last_modified {
                continue;
            }
            last_modified = modified;

            match std::fs::read(&path) {
                Ok(bytes) => {
                    if tx.send(AppEvent::WeatherFile(bytes)).await.is_err() {
                        break;
                    }
                }
                Err(err) => warn!("failed to read weather payload {}: {err}", path.display()),
            }
        }
    });
}
