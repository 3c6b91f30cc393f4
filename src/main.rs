//! Petrichor - Weather-driven soundscape parameters

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cpal::traits::{DeviceTrait, HostTrait};
use tokio::sync::broadcast::error::RecvError;

use petrichor::config;
use petrichor::demo::demo_params;
use petrichor::mapping::{map_mic_input, map_weather, WeatherMapping};
use petrichor::sources::{load_wav_frame, WeatherObservation, WeatherResponse, WeatherSource};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Map {
            config: config_path,
            location,
            input,
        } => {
            if let Some(input) = input {
                // Map a saved API response without touching the network
                let contents = std::fs::read_to_string(&input)?;
                let raw: WeatherResponse = serde_json::from_str(&contents)?;
                let obs = WeatherObservation::from(raw);
                print_mapping(&map_weather(&obs), true)?;
            } else {
                let cfg = config::load_config(&config_path)?;
                let mut weather_cfg = cfg.weather.clone();
                if let Some(location) = location {
                    weather_cfg.location = location;
                }

                println!("Fetching weather for {}...", weather_cfg.location);
                let source = WeatherSource::new(weather_cfg);
                let rt = tokio::runtime::Runtime::new()?;
                let obs = rt.block_on(source.fetch_current())?;

                println!("  {} ({})", obs.condition, obs.description);
                print_mapping(&map_weather(&obs), cfg.output.pretty)?;
            }
        }

        Commands::Watch {
            config: config_path,
        } => {
            let cfg = config::load_config(&config_path)?;
            println!(
                "Watching {} every {}s (Ctrl-C to stop)...",
                cfg.weather.location, cfg.weather.interval_secs
            );

            let running = Arc::new(AtomicBool::new(true));
            let handler_flag = Arc::clone(&running);
            ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))?;

            let mut source = WeatherSource::new(cfg.weather.clone());
            let mut rx = source.subscribe();

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                source.start()?;

                while running.load(Ordering::SeqCst) {
                    tokio::select! {
                        observation = rx.recv() => match observation {
                            Ok(obs) => {
                                println!("\n{} - {}", obs.location(), obs.description);
                                print_mapping(&map_weather(&obs), cfg.output.pretty)?;
                            }
                            Err(RecvError::Lagged(_)) => {}
                            Err(RecvError::Closed) => break,
                        },
                        _ = tokio::time::sleep(Duration::from_millis(200)) => {}
                    }
                }

                anyhow::Ok(())
            })?;

            source.stop();
            println!("Stopped.");
        }

        Commands::Mic { input } => {
            let frame = load_wav_frame(&input)?;
            println!("Read {} samples from {:?}", frame.len(), input);

            let mapping = map_mic_input(&frame);
            if let Some(error) = mapping.error() {
                eprintln!("Mic mapping degraded: {}", error);
            }
            println!("{}", serde_json::to_string_pretty(&mapping)?);
        }

        Commands::Demo => {
            println!("{}", serde_json::to_string_pretty(&demo_params())?);
        }

        Commands::Devices => {
            println!("Available audio input devices:\n");

            let host = cpal::default_host();

            if let Some(device) = host.default_input_device() {
                println!("Default input: {}", device.name().unwrap_or_default());
                if let Ok(config) = device.default_input_config() {
                    println!(
                        "  Sample rate: {} Hz, Channels: {}",
                        config.sample_rate().0,
                        config.channels()
                    );
                }
                println!();
            }

            println!("Input devices:");
            match host.input_devices() {
                Ok(devices) => {
                    for device in devices {
                        let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
                        print!("  - {}", name);

                        if let Ok(config) = device.default_input_config() {
                            print!(
                                " ({} Hz, {} ch)",
                                config.sample_rate().0,
                                config.channels()
                            );
                        }
                        println!();
                    }
                }
                Err(e) => {
                    println!("  Error listing devices: {}", e);
                }
            }
        }

        Commands::Check {
            config: config_path,
        } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Location: {}", cfg.weather.location);
                    println!("  Interval: {}s", cfg.weather.interval_secs);
                    println!(
                        "  API key: {}...",
                        cfg.weather.api_key.chars().take(8).collect::<String>()
                    );
                    println!("  Pretty output: {}", cfg.output.pretty);
                }
                Err(e) => {
                    println!("Configuration is invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let example_config = include_str!("../petrichor.example.yaml");

            let path = "petrichor.yaml";
            if std::path::Path::new(path).exists() {
                println!("petrichor.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created petrichor.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

/// Print a mapping outcome as JSON, warning on stderr when degraded
fn print_mapping(mapping: &WeatherMapping, pretty: bool) -> Result<()> {
    if let Some(error) = mapping.error() {
        eprintln!("Weather mapping degraded: {}", error);
    }

    let json = if pretty {
        serde_json::to_string_pretty(mapping)?
    } else {
        serde_json::to_string(mapping)?
    };
    println!("{}", json);
    Ok(())
}
