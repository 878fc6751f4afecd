//! Report Builder: fixed A4 layout, pagination, and PDF export
//!
//! The builder consumes a trip request, an optional weather snapshot, and
//! the itinerary text, and produces a paginated PDF. Layout and rendering
//! are split so pagination stays testable without any font asset.

pub mod font;
pub mod layout;
mod pdf;

pub use font::{EmbeddedFont, FontFile, FontSource};
pub use layout::{lay_out, PageLayout, SpanKind, TextSpan};
pub use pdf::render;
