//! `Wayfarer` - AI-assisted travel planning
//!
//! This library provides city lookup, live weather retrieval, LLM-backed
//! itinerary generation, and paginated PDF report export for trip planning.

pub mod cities;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod planner;
pub mod report;
pub mod weather;

// Re-export core types for public API
pub use cities::City;
pub use config::WayfarerConfig;
pub use error::WayfarerError;
pub use generation::{ItineraryGenerator, OpenAiGenerator};
pub use models::{Itinerary, Location, TravelStyle, TripRequest, WeatherSnapshot};
pub use planner::{Planner, Session};
pub use report::{FontFile, FontSource};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WayfarerError>;
