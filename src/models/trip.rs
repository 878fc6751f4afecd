//! Trip request and itinerary models

use crate::cities::City;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest trip accepted, in days
pub const MIN_TRIP_DAYS: u8 = 1;
/// Longest trip accepted, in days
pub const MAX_TRIP_DAYS: u8 = 10;

/// Travel style chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Sightseeing,
    Food,
    Relaxation,
}

impl TravelStyle {
    /// All supported travel styles, in menu order
    pub const ALL: [TravelStyle; 3] = [
        TravelStyle::Sightseeing,
        TravelStyle::Food,
        TravelStyle::Relaxation,
    ];

    /// Display label for the style
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Sightseeing => "관광",
            TravelStyle::Food => "맛집",
            TravelStyle::Relaxation => "힐링",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TravelStyle {
    type Err = crate::WayfarerError;

    /// Parse a travel style from its Korean label or an ASCII alias
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "관광" | "sightseeing" => Ok(TravelStyle::Sightseeing),
            "맛집" | "food" => Ok(TravelStyle::Food),
            "힐링" | "relaxation" => Ok(TravelStyle::Relaxation),
            other => Err(crate::WayfarerError::validation(format!(
                "Unknown travel style '{other}'. Supported: {}",
                TravelStyle::ALL.map(TravelStyle::label).join(", ")
            ))),
        }
    }
}

/// A single trip-planning request: destination, style, and length in days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRequest {
    pub city: City,
    pub style: TravelStyle,
    pub days: u8,
}

impl TripRequest {
    /// Create a request, clamping the day count to the supported range.
    ///
    /// Out-of-range day counts are clamped to the nearest bound at the input
    /// layer, so no downstream validation is needed.
    #[must_use]
    pub fn new(city: City, style: TravelStyle, days: i64) -> Self {
        let days = days.clamp(i64::from(MIN_TRIP_DAYS), i64::from(MAX_TRIP_DAYS)) as u8;
        Self { city, style, days }
    }

    /// Filename for the exported report, matching the
    /// `{city}_{style}_{days}일_여행.pdf` template. Repeated exports with
    /// identical parameters overwrite the same file.
    #[must_use]
    pub fn report_filename(&self) -> String {
        format!("{}_{}_{}일_여행.pdf", self.city, self.style, self.days)
    }
}

/// Externally generated day-by-day travel plan.
///
/// The text is treated as an opaque block of newline-delimited lines; no
/// internal structure is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Itinerary(String);

impl Itinerary {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Logical lines of the itinerary, split at newline boundaries
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}

impl From<String> for Itinerary {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
