//! Card, page and document layout

pub mod compositor;
pub mod generator;
pub mod scorecard;

pub use compositor::{cards_per_page, DivisionCompositor};
pub use generator::{DivisionDocument, PassOutcome, ScorecardGenerator, UrlRegistry};
pub use scorecard::{CardStatus, ScorecardRenderer};
