pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use config::Settings;
pub use error::{InputError, LogoError, RenderError, ScorecardError};
pub use model::{Division, Player, TournamentData};
pub use parser::parse_tournament;
pub use render::{DivisionDocument, ScorecardGenerator};

use render::{HttpLogoFetcher, PdfSink, QrCodeEncoder};

/// High-level API for rendering a tournament's scorecards to PDF.
///
/// This is the recommended entry point for library consumers. It draws one
/// document per division with the printpdf backend, encodes QR codes with the
/// `qrcode` crate and fetches the tournament logo (if any) over HTTP.
///
/// # Arguments
///
/// * `data` - Tournament data, typically from [`parse_tournament`]
/// * `settings` - Display flags, QR host and page options
///
/// # Returns
///
/// One PDF byte buffer per division, in division order, or the error that
/// aborted the pass. No partial output is returned on failure.
///
/// # Example
///
/// ```no_run
/// use tourney_scorecards::{parse_tournament, render_scorecards, Settings};
///
/// let json = std::fs::read_to_string("tournament.json").unwrap();
/// let data = parse_tournament(&json).unwrap();
///
/// for doc in render_scorecards(&data, &Settings::default()).unwrap() {
///     std::fs::write(&doc.file_name, &doc.output).unwrap();
/// }
/// ```
pub fn render_scorecards(
    data: &TournamentData,
    settings: &Settings,
) -> Result<Vec<DivisionDocument<Vec<u8>>>, ScorecardError> {
    let mut generator = ScorecardGenerator::new(
        settings,
        data,
        PdfSink::new(settings),
        QrCodeEncoder,
        HttpLogoFetcher,
    );
    generator.generate()
}
