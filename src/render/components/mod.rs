//! Scorecard drawing components

pub mod card_header;
pub mod field_layout;
pub mod pairing_annotator;
pub mod round_grid;

pub use card_header::CardHeaderRenderer;
pub use field_layout::{to_spread, Field, FIELDS};
pub use pairing_annotator::{resolve_annotations, PairingAnnotator, RowAnnotation};
pub use round_grid::RoundGridRenderer;
