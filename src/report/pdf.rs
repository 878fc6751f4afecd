//! PDF rendering of laid-out report pages

use super::font::FontSource;
use super::layout::{self, PageLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::models::{Itinerary, TripRequest, WeatherSnapshot};
use crate::{Result, WayfarerError};
use printpdf::{Mm, PdfDocument};
use std::io::Cursor;
use tracing::{debug, info};

/// Render a trip report to PDF bytes.
///
/// The output is never empty: an empty itinerary still yields a one-page
/// document with the title (and weather block if present). A font that
/// cannot be loaded or parsed fails the whole render; no partial document
/// is returned.
pub fn render(
    request: &TripRequest,
    weather: Option<&WeatherSnapshot>,
    itinerary: &Itinerary,
    font_source: &dyn FontSource,
) -> Result<Vec<u8>> {
    let pages = layout::lay_out(request, weather, itinerary);
    debug!("Laid out report on {} page(s)", pages.len());

    let font_bytes = font_source.load()?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        layout::title_line(request),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_external_font(Cursor::new(&font_bytes))
        .map_err(|e| WayfarerError::font_unavailable(font_source.describe(), e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, &font);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| WayfarerError::render(e.to_string()))?;

    info!(
        "Rendered {} page(s), {} bytes for {}",
        pages.len(),
        bytes.len(),
        request.report_filename()
    );
    Ok(bytes)
}

fn draw_page(
    layer: &printpdf::PdfLayerReference,
    page: &PageLayout,
    font: &printpdf::IndirectFontRef,
) {
    for span in &page.spans {
        layer.use_text(
            span.text.as_str(),
            span.font_size,
            Mm(span.x),
            Mm(span.y),
            font,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::City;
    use crate::models::TravelStyle;
    use crate::report::font::FontFile;

    #[test]
    fn test_missing_font_fails_before_any_output() {
        let request = TripRequest::new(City::Seoul, TravelStyle::Sightseeing, 3);
        let source = FontFile::new("/nonexistent/font.ttf");

        let result = render(&request, None, &Itinerary::default(), &source);
        assert!(matches!(result, Err(WayfarerError::FontUnavailable { .. })));
    }
}
