//! Weather data source
//!
//! Fetches observations from the OpenWeatherMap API, either one-shot
//! or on a poll interval with observations broadcast to subscribers.

use super::{WeatherObservation, WeatherResponse};
use crate::config::WeatherConfig;
use anyhow::{bail, Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Source that fetches weather observations for one location.
///
/// The API key travels in the [`WeatherConfig`] handed over at
/// construction; nothing here reads the environment.
pub struct WeatherSource {
    config: WeatherConfig,
    running: Arc<AtomicBool>,
    sender: broadcast::Sender<WeatherObservation>,
    task: Option<JoinHandle<()>>,
}

impl WeatherSource {
    /// Create a new weather source
    pub fn new(config: WeatherConfig) -> Self {
        let (sender, _) = broadcast::channel(16);
        Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
            sender,
            task: None,
        }
    }

    /// Build the API URL.
    ///
    /// Units are always metric: the mapping ranges are calibrated in
    /// degrees Celsius and m/s.
    fn build_url(&self) -> String {
        format!(
            "https://api.openweathermap.org/data/2.5/weather?q={}&appid={}&units=metric",
            urlencoding::encode(&self.config.location),
            self.config.api_key,
        )
    }

    /// Fetch and resolve one observation from the API
    async fn fetch_observation(url: &str) -> Result<WeatherObservation> {
        let response = reqwest::get(url)
            .await
            .context("failed to fetch weather data")?;

        if !response.status().is_success() {
            bail!("weather API returned status {}", response.status());
        }

        let raw: WeatherResponse = response
            .json()
            .await
            .context("failed to parse weather response")?;

        Ok(raw.into())
    }

    /// Fetch the current observation once
    pub async fn fetch_current(&self) -> Result<WeatherObservation> {
        Self::fetch_observation(&self.build_url()).await
    }

    /// Start polling on the configured interval
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }

        self.running.store(true, Ordering::SeqCst);

        let url = self.build_url();
        let interval = self.config.interval();
        let running = Arc::clone(&self.running);
        let sender = self.sender.clone();

        let task = tokio::spawn(async move {
            while running.load(Ordering::SeqCst) {
                match Self::fetch_observation(&url).await {
                    Ok(observation) => {
                        let _ = sender.send(observation);
                    }
                    Err(e) => {
                        // Log and keep polling
                        eprintln!("Weather fetch error: {}", e);
                    }
                }

                tokio::time::sleep(interval).await;
            }
        });

        self.task = Some(task);
        Ok(())
    }

    /// Stop polling
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Check if the poller is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Subscribe to observations from the poller
    pub fn subscribe(&self) -> broadcast::Receiver<WeatherObservation> {
        self.sender.subscribe()
    }
}

impl Drop for WeatherSource {
    fn drop(&mut self) {
        self.stop();
    }
}
