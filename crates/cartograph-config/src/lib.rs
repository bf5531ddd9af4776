//! Configuration for the Cartograph map generator.
//!
//! Settings persist to disk as RON, tolerate missing and unknown fields, and
//! can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BiomeConfig, Config, DebugConfig, LandConfig, LandShape, WorldConfig};
pub use error::ConfigError;
