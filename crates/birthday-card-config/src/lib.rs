//! Configuration and file locations for birthday-card
//!
//! This crate provides:
//! - Directory utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Card configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, AudioConfig};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
