//! Page composition for a division document
//!
//! Short events (8 rounds or fewer) stack two cards on each page, the second
//! translated half a page down. Longer events get one card per page, so a
//! card's continuation pages never share a page with another player.

use crate::error::ScorecardError;
use crate::model::Division;
use crate::render::canvas::Canvas;
use crate::render::components::field_layout::{TWO_UP_MAX_ROUNDS, TWO_UP_OFFSET};
use crate::render::qr::QrEncoder;

use super::generator::UrlRegistry;
use super::scorecard::{CardStatus, ScorecardRenderer};

/// Number of cards sharing a physical page for a division with `rounds` rounds
pub fn cards_per_page(rounds: usize) -> usize {
    if rounds <= TWO_UP_MAX_ROUNDS {
        2
    } else {
        1
    }
}

/// Lays out every card of a division
pub struct DivisionCompositor<'a> {
    card: ScorecardRenderer<'a>,
}

impl<'a> DivisionCompositor<'a> {
    pub fn new(card: ScorecardRenderer<'a>) -> Self {
        Self { card }
    }

    /// Draw all cards of `division`, finishing every page it starts
    pub fn render<C: Canvas, Q: QrEncoder>(
        &self,
        canvas: &mut C,
        qr: &Q,
        registry: &mut UrlRegistry,
        division_name: &str,
        division: &Division,
    ) -> Result<CardStatus, ScorecardError> {
        let per_page = cards_per_page(division.round_count());
        let persons = &division.players.persons;

        for (group, players) in persons.chunks(per_page).enumerate() {
            let first = group * per_page;

            if players.len() > 1 {
                for (slot, player) in players.iter().enumerate() {
                    canvas.save();
                    canvas.translate(0.0, slot as f32 * TWO_UP_OFFSET);
                    let status = self.card.render(
                        canvas,
                        qr,
                        registry,
                        division_name,
                        division,
                        player,
                        first + slot,
                    );
                    canvas.restore();
                    if let CardStatus::UrlCollision(url) = status? {
                        return Ok(CardStatus::UrlCollision(url));
                    }
                }
            } else {
                let status = self.card.render(
                    canvas,
                    qr,
                    registry,
                    division_name,
                    division,
                    &players[0],
                    first,
                )?;
                if let CardStatus::UrlCollision(url) = status {
                    return Ok(CardStatus::UrlCollision(url));
                }
            }

            canvas.show_page()?;
        }

        Ok(CardStatus::Drawn)
    }
}
