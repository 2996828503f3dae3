//! Command-line / environment configuration.

use std::net::SocketAddr;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::geometry::{DEFAULT_POINT_COUNT, DEFAULT_RADIUS, DEFAULT_SUBDIVISIONS};
use shared::GeometrySettings;

/// Upper bound for `--subdivisions` (level 7 is 163842 vertices).
pub const MAX_SUBDIVISIONS: u32 = 7;

/// Upper bound for `--points`.
pub const MAX_POINTS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pcviz-server")]
#[command(about = "Serves the point cloud visualization dashboard", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PCVIZ_ADDR", default_value = "0.0.0.0:3001")]
    pub addr: SocketAddr,

    /// Number of random points in the cloud
    #[arg(
        long,
        env = "PCVIZ_POINTS",
        default_value_t = DEFAULT_POINT_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_POINTS as u64)
    )]
    pub points: usize,

    /// Icosphere subdivision level
    #[arg(
        long,
        env = "PCVIZ_SUBDIVISIONS",
        default_value_t = DEFAULT_SUBDIVISIONS,
        value_parser = clap::value_parser!(u32).range(0..=MAX_SUBDIVISIONS as i64)
    )]
    pub subdivisions: u32,

    /// Icosphere radius
    #[arg(
        long,
        env = "PCVIZ_RADIUS",
        default_value_t = DEFAULT_RADIUS,
        allow_negative_numbers = true
    )]
    pub radius: f64,

    /// Fixed RNG seed for a reproducible point cloud
    #[arg(long, env = "PCVIZ_SEED")]
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    pub fn geometry_settings(&self) -> GeometrySettings {
        GeometrySettings {
            subdivisions: self.subdivisions,
            radius: self.radius,
            points: self.points,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
