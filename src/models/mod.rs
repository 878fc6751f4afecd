//! Core data models for trip planning

pub mod location;
pub mod trip;
pub mod weather;

pub use location::Location;
pub use trip::{Itinerary, TravelStyle, TripRequest};
pub use weather::WeatherSnapshot;
