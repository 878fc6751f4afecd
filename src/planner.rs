//! Trip-planning session and orchestration
//!
//! One user action maps to one sequential, run-to-completion operation.
//! The single piece of session state is the last generated itinerary,
//! carried in an explicit [`Session`] value and overwritten on each
//! regeneration; there is no shared global state.

use crate::generation::ItineraryGenerator;
use crate::models::{Itinerary, TripRequest, WeatherSnapshot};
use crate::report::{self, FontSource};
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// State of one interactive planning session
#[derive(Debug, Default)]
pub struct Session {
    last_itinerary: Option<Itinerary>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently generated itinerary, if any
    #[must_use]
    pub fn last_itinerary(&self) -> Option<&Itinerary> {
        self.last_itinerary.as_ref()
    }

    /// Replace the session itinerary.
    ///
    /// Used when a fixed failure message stands in for generated text, so
    /// the report shows what the user saw.
    pub fn set_itinerary(&mut self, itinerary: Itinerary) {
        self.last_itinerary = Some(itinerary);
    }
}

/// Orchestrates itinerary generation and report export for a session
pub struct Planner {
    generator: Arc<dyn ItineraryGenerator>,
}

impl Planner {
    #[must_use]
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }

    /// Generate an itinerary and store it in the session.
    ///
    /// A failed generation leaves the previous session itinerary in place;
    /// the error carries the upstream detail for display.
    pub async fn generate<'s>(
        &self,
        session: &'s mut Session,
        request: &TripRequest,
    ) -> Result<&'s Itinerary> {
        let itinerary = self.generator.generate(request).await?;
        Ok(session.last_itinerary.insert(itinerary))
    }

    /// Export the session's itinerary as a paginated PDF report.
    ///
    /// The body is blank when nothing has been generated yet. The filename
    /// follows the fixed `{city}_{style}_{days}일_여행.pdf` template;
    /// repeated exports with identical parameters overwrite the same file.
    pub fn export(
        &self,
        session: &Session,
        request: &TripRequest,
        weather: Option<&WeatherSnapshot>,
        font: &dyn FontSource,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let empty = Itinerary::default();
        let itinerary = session.last_itinerary().unwrap_or(&empty);

        let bytes = report::render(request, weather, itinerary, font)?;

        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(request.report_filename());
        fs::write(&path, bytes)?;

        info!("Exported report to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::City;
    use crate::models::TravelStyle;
    use crate::report::FontFile;
    use crate::WayfarerError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedGenerator {
        calls: AtomicUsize,
        outputs: Vec<Result<String>>,
    }

    impl ScriptedGenerator {
        fn new(outputs: Vec<Result<String>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outputs,
            }
        }
    }

    #[async_trait]
    impl ItineraryGenerator for ScriptedGenerator {
        async fn generate(&self, _request: &TripRequest) -> Result<Itinerary> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outputs[call.min(self.outputs.len() - 1)] {
                Ok(text) => Ok(Itinerary::new(text.clone())),
                Err(_) => Err(WayfarerError::generation("scripted failure")),
            }
        }
    }

    fn request() -> TripRequest {
        TripRequest::new(City::Seoul, TravelStyle::Sightseeing, 3)
    }

    #[tokio::test]
    async fn test_generate_stores_itinerary_in_session() {
        let planner = Planner::new(Arc::new(ScriptedGenerator::new(vec![Ok(
            "Day1: 경복궁".to_string()
        )])));
        let mut session = Session::new();

        let itinerary = planner.generate(&mut session, &request()).await.unwrap();
        assert_eq!(itinerary.as_str(), "Day1: 경복궁");
        assert_eq!(session.last_itinerary().unwrap().as_str(), "Day1: 경복궁");
    }

    #[tokio::test]
    async fn test_regeneration_overwrites_previous_itinerary() {
        let planner = Planner::new(Arc::new(ScriptedGenerator::new(vec![
            Ok("첫 번째 일정".to_string()),
            Ok("두 번째 일정".to_string()),
        ])));
        let mut session = Session::new();

        planner.generate(&mut session, &request()).await.unwrap();
        planner.generate(&mut session, &request()).await.unwrap();
        assert_eq!(session.last_itinerary().unwrap().as_str(), "두 번째 일정");
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_previous_itinerary() {
        let planner = Planner::new(Arc::new(ScriptedGenerator::new(vec![
            Ok("살아남은 일정".to_string()),
            Err(WayfarerError::generation("quota")),
        ])));
        let mut session = Session::new();

        planner.generate(&mut session, &request()).await.unwrap();
        let err = planner.generate(&mut session, &request()).await.unwrap_err();
        assert!(matches!(err, WayfarerError::Generation { .. }));
        assert_eq!(session.last_itinerary().unwrap().as_str(), "살아남은 일정");
    }

    #[tokio::test]
    async fn test_export_with_missing_font_writes_nothing() {
        let planner = Planner::new(Arc::new(ScriptedGenerator::new(vec![Ok(
            "Day1".to_string()
        )])));
        let session = Session::new();
        let dir = tempfile::tempdir().unwrap();
        let font = FontFile::new("/nonexistent/font.ttf");

        let result = planner.export(&session, &request(), None, &font, dir.path());
        assert!(matches!(result, Err(WayfarerError::FontUnavailable { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
