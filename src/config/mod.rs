//! Configuration loading for startcheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use startcheck::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".startcheck");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "data_file: boat.json").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.data_file(temp.path()), temp.path().join("boat.json"));
//! ```
//!
//! # Precedence
//!
//! Command-line flags and environment variables override the config file,
//! which overrides built-in defaults. The config file is optional.

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, load_config_file, parse_config};
pub use schema::{OutputMode, StartcheckConfig};
