//! Configuration loading for the attendance engine.
//!
//! This module loads the holiday calendar from YAML files: calendar metadata
//! (name, UTC offset) and one list of government holidays per year.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/india").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidayFile};
