pub mod app;
pub mod cli;
pub mod data;
pub mod domain;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use tokio::sync::mpsc;

use app::{
    events::{AppEvent, EngineEvent, start_clock_task, start_payload_watch_task},
    plan::RenderPlan,
    state::DisplayStateEngine,
};
use cli::Cli;
use data::payload::{self, WeatherPayload};
use domain::clock::Moment;

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.write_weather {
        return write_sample_payload(&cli, path);
    }
    if cli.one_shot {
        return one_shot(&cli);
    }

    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    start_clock_task(tx.clone(), cli.tick_interval, cli.steps);
    if let Some(path) = &cli.weather_file {
        start_payload_watch_task(tx.clone(), path.clone(), cli.tick_interval);
    }

    let mut engine = DisplayStateEngine::new(cli.preferences(), cli.permissions());
    tx.send(AppEvent::Engine(EngineEvent::BatteryChanged {
        level: cli.battery,
        charging: cli.charging,
    }))
    .await?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            maybe_event = rx.recv() => {
                let Some(event) = maybe_event else { break };
                let plan = match event {
                    AppEvent::Engine(event) => engine.handle_event(event),
                    AppEvent::WeatherFile(bytes) => engine.weather_payload(&bytes),
                };
                apply_plan(&plan);
            }
        }
    }

    Ok(())
}

fn one_shot(cli: &Cli) -> Result<()> {
    let mut engine = DisplayStateEngine::new(cli.preferences(), cli.permissions());
    engine.handle_event(EngineEvent::BatteryChanged {
        level: cli.battery,
        charging: cli.charging,
    });

    if let Some(path) = &cli.weather_file {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading weather payload {}", path.display()))?;
        engine.weather_payload(&bytes);
    }

    let plan = engine.handle_event(EngineEvent::Tick {
        moment: Moment::from_datetime(&Local::now()),
        steps: cli.steps,
    });
    apply_plan(&plan);
    Ok(())
}

fn write_sample_payload(cli: &Cli, path: &Path) -> Result<()> {
    let payload = WeatherPayload::from_observation(
        cli.temperature,
        cli.condition_code,
        &cli.location,
        cli.preferences().units,
    );
    let bytes = payload::encode(&payload)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("writing weather payload {}", path.display()))?;
    info!("wrote {} byte weather payload to {}", bytes.len(), path.display());
    Ok(())
}

// Stand-in renderer: one line per display element, idempotent to re-apply.
fn apply_plan(plan: &RenderPlan) {
    println!("-- render plan --");
    println!("clock     {} {}", plan.clock_text, plan.meridiem_text);
    println!("date      {}", plan.date_text);
    println!(
        "moon      {} ({} {})",
        plan.moon_icon, plan.moon_label_top, plan.moon_label_bottom
    );
    println!("steps     {}", plan.step_text);
    match plan.battery_icon {
        Some(category) => println!("battery   {} [{}]", plan.battery_text, category.icon()),
        None => println!("battery   {}", plan.battery_text),
    }
    println!("location  {}", plan.location_text);
    println!("weather   {} {}", plan.temperature_text, plan.condition_text);
    if !plan.condition_icon.is_hidden() {
        let geometry = plan.condition_icon.geometry;
        println!(
            "icon      {} at ({}, {}) {}x{}",
            plan.condition_icon.asset, geometry.x, geometry.y, geometry.width, geometry.height
        );
    }
    println!("accent    {}", plan.accent_color);
}
