//! One player's scorecard
//!
//! A card holds up to 16 round rows per physical page. Longer events continue
//! on further pages, each repeating the QR code, header block and column row.

use crate::config::Settings;
use crate::error::ScorecardError;
use crate::model::{Division, Player, TournamentMetadata};
use crate::render::canvas::{Canvas, RasterImage};
use crate::render::components::field_layout::{pages_per_card, ROWS_PER_PAGE};
use crate::render::components::{
    resolve_annotations, CardHeaderRenderer, PairingAnnotator, RoundGridRenderer,
};
use crate::render::qr::QrEncoder;

use super::generator::UrlRegistry;

/// Result of drawing a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardStatus {
    Drawn,
    /// The card's QR URL was already emitted in this pass; nothing more was drawn
    UrlCollision(String),
}

/// Draws scorecards for one tournament
pub struct ScorecardRenderer<'a> {
    settings: &'a Settings,
    metadata: &'a TournamentMetadata,
    logo: Option<&'a RasterImage>,
}

impl<'a> ScorecardRenderer<'a> {
    pub fn new(
        settings: &'a Settings,
        metadata: &'a TournamentMetadata,
        logo: Option<&'a RasterImage>,
    ) -> Self {
        Self {
            settings,
            metadata,
            logo,
        }
    }

    /// Draw the card of `player` (roster index `index`) at the current origin
    ///
    /// Continuation pages are started here; the page after the card's last one
    /// is left to the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn render<C: Canvas, Q: QrEncoder>(
        &self,
        canvas: &mut C,
        qr: &Q,
        registry: &mut UrlRegistry,
        division_name: &str,
        division: &Division,
        player: &Player,
        index: usize,
    ) -> Result<CardStatus, ScorecardError> {
        let rounds = division.round_count();
        let pages = pages_per_card(rounds);
        log::debug!(
            "Card for {} in {} ({} page(s))",
            player.id,
            division_name,
            pages
        );

        let header = CardHeaderRenderer::new(&self.metadata.name, self.logo)
            .logo_configured(self.metadata.logo_url().is_some())
            .seeds(self.settings.show_seeds)
            .qrcode(self.settings.show_qrcode);
        let grid = RoundGridRenderer::new(rounds, self.settings.show_seeds);
        let annotator = PairingAnnotator::new(self.settings.show_seeds, rounds);

        for page in 0..pages {
            let offset = page * ROWS_PER_PAGE;

            if self.settings.show_qrcode {
                let url = self
                    .settings
                    .qr_url(&self.metadata.slug, player.id_prefix(registry.trunc()));
                // Continuation pages repeat the card's own URL
                if page == 0 && registry.contains(&url) {
                    return Ok(CardStatus::UrlCollision(url));
                }
                let image = qr.encode(&url)?;
                header.draw_qr(canvas, &image)?;
                registry.insert(url);
            }

            header.draw(canvas, player, index)?;
            grid.draw_header(canvas);
            for round in offset..rounds.min(offset + ROWS_PER_PAGE) {
                grid.draw_row(canvas, round, offset);
            }

            if self.settings.show_opponents {
                let annotations = resolve_annotations(division, division_name, index, offset)?;
                annotator.draw(canvas, &annotations, offset);
            }

            if page + 1 < pages {
                canvas.show_page()?;
            }
        }

        Ok(CardStatus::Drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::model::RoundControl;
    use crate::render::canvas::{split_pages, DrawCall, RasterFormat, RecordingCanvas};

    struct StubEncoder;

    impl QrEncoder for StubEncoder {
        fn encode(&self, url: &str) -> Result<RasterImage, RenderError> {
            Ok(RasterImage::new(url, 1, 1, RasterFormat::Luma8, vec![0]))
        }
    }

    fn metadata() -> TournamentMetadata {
        TournamentMetadata {
            name: "Spring Open".to_string(),
            slug: "/tournament/spring".to_string(),
            logo: None,
        }
    }

    fn division(rounds: usize) -> Division {
        let mut div = Division::default();
        div.players.persons = vec![Player::new("abcdef:alice", 1500)];
        div.round_controls = vec![RoundControl::default(); rounds];
        div
    }

    fn images(calls: &[DrawCall]) -> Vec<&str> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_long_event_spans_pages() {
        let settings = Settings::default();
        let meta = metadata();
        let div = division(20);
        let player = &div.players.persons[0];
        let mut registry = UrlRegistry::new(2);
        let mut canvas = RecordingCanvas::new();

        let status = ScorecardRenderer::new(&settings, &meta, None)
            .render(&mut canvas, &StubEncoder, &mut registry, "A", &div, player, 0)
            .unwrap();
        assert_eq!(status, CardStatus::Drawn);

        let pages = split_pages(canvas.calls());
        assert_eq!(pages.len(), 2);
        let rows = |page: &[DrawCall]| {
            page.iter()
                .filter(|c| matches!(c, DrawCall::Rect { height, .. } if *height == 40.0))
                .count()
        };
        assert_eq!(rows(pages[0]), 16);
        assert_eq!(rows(pages[1]), 4);

        // Same URL on both pages, registered once
        let url = "https://woogles.io/tournament/spring?es=ab";
        assert_eq!(images(pages[0]), vec![url]);
        assert_eq!(images(pages[1]), vec![url]);
        assert!(registry.contains(url));
    }

    #[test]
    fn test_collision_stops_drawing() {
        let settings = Settings::default();
        let meta = metadata();
        let div = division(4);
        let player = &div.players.persons[0];
        let mut registry = UrlRegistry::new(2);
        registry.insert("https://woogles.io/tournament/spring?es=ab".to_string());
        let mut canvas = RecordingCanvas::new();

        let status = ScorecardRenderer::new(&settings, &meta, None)
            .render(&mut canvas, &StubEncoder, &mut registry, "A", &div, player, 0)
            .unwrap();
        assert!(matches!(status, CardStatus::UrlCollision(_)));
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn test_no_qrcode_skips_registry() {
        let settings = Settings::default().with_qrcode(false);
        let meta = metadata();
        let div = division(4);
        let player = &div.players.persons[0];
        let mut registry = UrlRegistry::new(2);
        let mut canvas = RecordingCanvas::new();

        ScorecardRenderer::new(&settings, &meta, None)
            .render(&mut canvas, &StubEncoder, &mut registry, "A", &div, player, 0)
            .unwrap();
        assert!(images(canvas.calls()).is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_zero_rounds_draws_header_only() {
        let settings = Settings::default();
        let meta = metadata();
        let div = division(0);
        let player = &div.players.persons[0];
        let mut registry = UrlRegistry::new(2);
        let mut canvas = RecordingCanvas::new();

        ScorecardRenderer::new(&settings, &meta, None)
            .render(&mut canvas, &StubEncoder, &mut registry, "A", &div, player, 0)
            .unwrap();
        let calls = canvas.calls();
        assert!(!calls.contains(&DrawCall::ShowPage));
        assert_eq!(
            calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Rect { .. }))
                .count(),
            1
        );
    }
}
