use crate::domain::{GeoCoordinate, ViewportExtent};
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    telemetry: Telemetry,
    session: Session,
    vehicle: Vehicle,
    viewport: Viewport,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    command_buffer_size: usize,
    event_buffer_size: usize,
}

impl Core {
    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }

    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Telemetry {
    #[serde(with = "humantime_serde")]
    tick_interval: Duration,
    jitter_magnitude: f64,
    seed: Option<u64>,
}

impl Telemetry {
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn jitter_magnitude(&self) -> f64 {
        self.jitter_magnitude
    }

    /// Fixed rng seed for reproducible drift; absent means seed from the OS.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    #[serde(with = "humantime_serde")]
    steer_hold: Duration,
}

impl Session {
    /// How long a manual steering input keeps the vehicle marked as moving.
    pub fn steer_hold(&self) -> Duration {
        self.steer_hold
    }
}

#[derive(Debug, Deserialize)]
pub struct Vehicle {
    latitude: f64,
    longitude: f64,
    battery_percent: u8,
    speed_kmh: u32,
}

impl Vehicle {
    pub fn initial_coordinate(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    pub fn speed_kmh(&self) -> u32 {
        self.speed_kmh
    }
}

#[derive(Debug, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Extent of the headless console renderer. Interactive surfaces sample
    /// their own extent per transform instead.
    pub fn extent(&self) -> ViewportExtent {
        ViewportExtent::new(self.width, self.height)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    command_buffer_size: 8,
                    event_buffer_size: 8,
                },
                telemetry: Telemetry {
                    tick_interval: Duration::from_millis(25),
                    jitter_magnitude: 0.0005,
                    seed: Some(42),
                },
                session: Session {
                    steer_hold: Duration::from_millis(250),
                },
                vehicle: Vehicle {
                    latitude: 0.0,
                    longitude: 0.0,
                    battery_percent: 85,
                    speed_kmh: 15,
                },
                viewport: Viewport { width: 400.0, height: 300.0 },
            },
        }
    }

    pub fn tick_interval(mut self, value: Duration) -> Self {
        self.config.telemetry.tick_interval = value;
        self
    }

    pub fn jitter_magnitude(mut self, value: f64) -> Self {
        self.config.telemetry.jitter_magnitude = value;
        self
    }

    pub fn seed(mut self, value: Option<u64>) -> Self {
        self.config.telemetry.seed = value;
        self
    }

    pub fn steer_hold(mut self, value: Duration) -> Self {
        self.config.session.steer_hold = value;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
