//! Configuration loading and management for the Notice Engine.
//!
//! This module provides functionality to load jurisdiction configurations from
//! YAML files, including default rest days, public holiday tables and the
//! date-arithmetic conventions calculations run under.
//!
//! # Example
//!
//! ```no_run
//! use notice_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/my-kl").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConventions, HolidayCalendarFile, HolidayShift, JurisdictionConfig,
    JurisdictionFile, JurisdictionMetadata, MonthArithmetic,
};
