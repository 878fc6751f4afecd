//! Page layout and pagination for trip reports
//!
//! Layout is computed as positioned text spans on fixed A4 pages, separate
//! from PDF rendering, so pagination can be exercised without font assets.
//! Coordinates are millimeters from the bottom-left page corner (the PDF
//! frame); the offsets mirror the fixed centimeter grid of the report:
//! 2 cm margins, title 2 cm below the top edge, body starting 3 cm below,
//! 0.7 cm per line, and 1 cm after the weather block.

use crate::models::{Itinerary, TripRequest, WeatherSnapshot};

/// A4 page width in millimeters
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 page height in millimeters
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left and bottom margin in millimeters
pub const MARGIN_MM: f32 = 20.0;
/// Vertical position of the title line
pub const TITLE_Y_MM: f32 = PAGE_HEIGHT_MM - 20.0;
/// Vertical position where body content starts on the first page
pub const FIRST_CURSOR_Y_MM: f32 = PAGE_HEIGHT_MM - 30.0;
/// Vertical position where body content continues on later pages
pub const CONTINUATION_CURSOR_Y_MM: f32 = PAGE_HEIGHT_MM - 20.0;
/// Cursor advance per text line
pub const LINE_ADVANCE_MM: f32 = 7.0;
/// Extra cursor advance after the weather block
pub const WEATHER_GAP_MM: f32 = 10.0;
/// Title font size in points
pub const TITLE_SIZE_PT: f32 = 16.0;
/// Body font size in points
pub const BODY_SIZE_PT: f32 = 12.0;

const PT_TO_MM: f32 = 0.352_778;

/// What a span on the page represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Title,
    Weather,
    Body,
}

/// A positioned piece of text on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    /// Millimeters from the left page edge
    pub x: f32,
    /// Millimeters from the bottom page edge
    pub y: f32,
    pub font_size: f32,
    pub kind: SpanKind,
}

/// One laid-out page of the report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub spans: Vec<TextSpan>,
}

impl PageLayout {
    /// Spans of the given kind, in emission order
    pub fn spans_of(&self, kind: SpanKind) -> impl Iterator<Item = &TextSpan> {
        self.spans.iter().filter(move |span| span.kind == kind)
    }
}

/// Title line for a trip report
#[must_use]
pub fn title_line(request: &TripRequest) -> String {
    format!(
        "{} 여행 계획 ({} 스타일, {}일)",
        request.city, request.style, request.days
    )
}

/// Horizontal position that roughly centers `text` on the page.
///
/// CJK glyphs are treated as a full em, Latin glyphs as half an em; exact
/// metrics are not needed for a single title line.
#[must_use]
pub fn centered_x(text: &str, font_size: f32) -> f32 {
    let ems: f32 = text
        .chars()
        .map(|c| if c.is_ascii() { 0.5 } else { 1.0 })
        .sum();
    let width_mm = ems * font_size * PT_TO_MM;
    ((PAGE_WIDTH_MM - width_mm) / 2.0).max(0.0)
}

/// Lay out a full report: title, optional weather block, paginated body.
///
/// The weather block is rendered once on the first page and never repeated
/// on continuation pages. Before each body line the cursor is checked
/// against the bottom margin; a crossed margin finalizes the page and the
/// same logical line continues on the next one, so no line is dropped,
/// duplicated, or split. The result always contains at least one page with
/// the title.
#[must_use]
pub fn lay_out(
    request: &TripRequest,
    weather: Option<&WeatherSnapshot>,
    itinerary: &Itinerary,
) -> Vec<PageLayout> {
    let mut pages = Vec::new();
    let mut page = PageLayout::default();

    let title = title_line(request);
    page.spans.push(TextSpan {
        x: centered_x(&title, TITLE_SIZE_PT),
        y: TITLE_Y_MM,
        font_size: TITLE_SIZE_PT,
        kind: SpanKind::Title,
        text: title,
    });

    let mut cursor = FIRST_CURSOR_Y_MM;

    if let Some(snapshot) = weather {
        for text in [snapshot.format_conditions(), snapshot.format_humidity_wind()] {
            page.spans.push(TextSpan {
                text,
                x: MARGIN_MM,
                y: cursor,
                font_size: BODY_SIZE_PT,
                kind: SpanKind::Weather,
            });
            cursor -= LINE_ADVANCE_MM;
        }
        // The original advance was 0.7 cm then 1.0 cm; the second line's
        // advance above covered 0.7 cm of that.
        cursor -= WEATHER_GAP_MM - LINE_ADVANCE_MM;
    }

    if !itinerary.is_empty() {
        for line in itinerary.lines() {
            if cursor < MARGIN_MM {
                pages.push(std::mem::take(&mut page));
                cursor = CONTINUATION_CURSOR_Y_MM;
            }
            page.spans.push(TextSpan {
                text: line.to_string(),
                x: MARGIN_MM,
                y: cursor,
                font_size: BODY_SIZE_PT,
                kind: SpanKind::Body,
            });
            cursor -= LINE_ADVANCE_MM;
        }
    }

    pages.push(page);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::City;
    use crate::models::TravelStyle;
    use chrono::Utc;

    fn request() -> TripRequest {
        TripRequest::new(City::Seoul, TravelStyle::Sightseeing, 3)
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            description: "맑음".to_string(),
            temperature_c: 21.3,
            feels_like_c: 20.8,
            humidity_pct: 45,
            wind_speed_ms: 2.4,
            observed_at: Utc::now(),
        }
    }

    fn itinerary_of(lines: usize) -> Itinerary {
        Itinerary::new(
            (1..=lines)
                .map(|i| format!("Day{i}: 일정 항목"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Body lines that fit on the first page without a weather block
    const FIRST_PAGE_CAPACITY: usize = 36;
    /// Body lines that fit on each continuation page
    const LATER_PAGE_CAPACITY: usize = 37;

    #[test]
    fn test_title_line_format() {
        assert_eq!(title_line(&request()), "서울 여행 계획 (관광 스타일, 3일)");
    }

    #[test]
    fn test_title_is_roughly_centered() {
        let pages = lay_out(&request(), None, &Itinerary::default());
        let title = &pages[0].spans[0];
        assert_eq!(title.kind, SpanKind::Title);
        assert!(title.x > 0.0 && title.x < PAGE_WIDTH_MM / 2.0);
        assert_eq!(title.y, TITLE_Y_MM);
    }

    #[test]
    fn test_empty_itinerary_yields_single_titled_page() {
        let pages = lay_out(&request(), None, &Itinerary::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].spans.len(), 1);
        assert_eq!(pages[0].spans[0].kind, SpanKind::Title);
    }

    #[test]
    fn test_weather_block_emits_exactly_two_lines_before_body() {
        let itinerary = itinerary_of(3);
        let pages = lay_out(&request(), Some(&snapshot()), &itinerary);
        assert_eq!(pages.len(), 1);

        let kinds: Vec<SpanKind> = pages[0].spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpanKind::Title,
                SpanKind::Weather,
                SpanKind::Weather,
                SpanKind::Body,
                SpanKind::Body,
                SpanKind::Body,
            ]
        );
    }

    #[test]
    fn test_absent_weather_emits_zero_weather_lines() {
        let pages = lay_out(&request(), None, &itinerary_of(5));
        assert_eq!(pages[0].spans_of(SpanKind::Weather).count(), 0);
    }

    #[test]
    fn test_example_scenario_seoul_three_days() {
        let itinerary = Itinerary::new("Day1: 경복궁\nDay2: 남산타워\nDay3: 한강공원".to_string());
        let pages = lay_out(&request(), None, &itinerary);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].spans_of(SpanKind::Weather).count(), 0);
        let body: Vec<&str> = pages[0]
            .spans_of(SpanKind::Body)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(body, vec!["Day1: 경복궁", "Day2: 남산타워", "Day3: 한강공원"]);
    }

    #[test]
    fn test_exact_first_page_fit_stays_on_one_page() {
        let pages = lay_out(&request(), None, &itinerary_of(FIRST_PAGE_CAPACITY));
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_one_extra_line_starts_second_page() {
        let pages = lay_out(&request(), None, &itinerary_of(FIRST_PAGE_CAPACITY + 1));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].spans.len(), 1);
        assert_eq!(pages[1].spans[0].y, CONTINUATION_CURSOR_Y_MM);
    }

    #[test]
    fn test_pagination_preserves_all_lines_in_order() {
        let total = 100;
        let itinerary = itinerary_of(total);
        let pages = lay_out(&request(), None, &itinerary);

        let expected_pages =
            1 + (total - FIRST_PAGE_CAPACITY).div_ceil(LATER_PAGE_CAPACITY);
        assert_eq!(pages.len(), expected_pages);

        let rejoined: Vec<String> = pages
            .iter()
            .flat_map(|p| p.spans_of(SpanKind::Body).map(|s| s.text.clone()))
            .collect();
        let original: Vec<String> = itinerary.lines().map(str::to_string).collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_weather_is_not_repeated_on_continuation_pages() {
        let pages = lay_out(&request(), Some(&snapshot()), &itinerary_of(80));
        assert!(pages.len() > 1);
        assert_eq!(pages[0].spans_of(SpanKind::Weather).count(), 2);
        for page in &pages[1..] {
            assert_eq!(page.spans_of(SpanKind::Weather).count(), 0);
            assert_eq!(page.spans_of(SpanKind::Title).count(), 0);
        }
    }

    #[test]
    fn test_no_span_below_bottom_margin() {
        let pages = lay_out(&request(), Some(&snapshot()), &itinerary_of(200));
        for page in &pages {
            for span in &page.spans {
                assert!(span.y >= MARGIN_MM, "span at y={} below margin", span.y);
            }
        }
    }
}
