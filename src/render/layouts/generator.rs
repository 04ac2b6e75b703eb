//! Whole-tournament scorecard generation
//!
//! QR URLs use only a short prefix of each player id. A pass that meets a
//! repeated URL is abandoned, the prefix grows by one character, and every
//! division is drawn again from the start.

use std::collections::HashSet;

use crate::config::Settings;
use crate::error::ScorecardError;
use crate::model::TournamentData;
use crate::render::canvas::{DocumentSink, RasterImage};
use crate::render::logo::{LogoCache, LogoFetcher};
use crate::render::qr::QrEncoder;

use super::compositor::DivisionCompositor;
use super::scorecard::{CardStatus, ScorecardRenderer};

/// QR URLs emitted during one pass, and the id prefix length that built them
#[derive(Debug, Clone)]
pub struct UrlRegistry {
    trunc: usize,
    emitted: HashSet<String>,
}

impl UrlRegistry {
    pub fn new(trunc: usize) -> Self {
        Self {
            trunc: trunc.max(1),
            emitted: HashSet::new(),
        }
    }

    pub fn trunc(&self) -> usize {
        self.trunc
    }

    pub fn contains(&self, url: &str) -> bool {
        self.emitted.contains(url)
    }

    pub fn insert(&mut self, url: String) {
        self.emitted.insert(url);
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Forget every emitted URL before a new pass
    pub fn reset(&mut self) {
        self.emitted.clear();
    }

    pub fn grow(&mut self) {
        self.trunc += 1;
    }
}

/// One finished division document
#[derive(Debug, Clone)]
pub struct DivisionDocument<T> {
    pub division: String,
    /// `<division>_scorecards.pdf`
    pub file_name: String,
    pub output: T,
}

/// How a generation pass ended
#[derive(Debug)]
pub enum PassOutcome<T> {
    Complete(Vec<DivisionDocument<T>>),
    CollisionDetected(String),
}

/// Drives generation passes until every QR URL is unique
pub struct ScorecardGenerator<'a, S, Q, F>
where
    S: DocumentSink,
    Q: QrEncoder,
    F: LogoFetcher,
{
    settings: &'a Settings,
    data: &'a TournamentData,
    sink: S,
    qr: Q,
    logos: LogoCache<F>,
    registry: UrlRegistry,
}

impl<'a, S, Q, F> ScorecardGenerator<'a, S, Q, F>
where
    S: DocumentSink,
    Q: QrEncoder,
    F: LogoFetcher,
{
    pub fn new(
        settings: &'a Settings,
        data: &'a TournamentData,
        sink: S,
        qr: Q,
        fetcher: F,
    ) -> Self {
        Self {
            settings,
            data,
            sink,
            qr,
            logos: LogoCache::new(fetcher, settings.max_logo_bytes),
            registry: UrlRegistry::new(settings.url_trunc),
        }
    }

    /// Id prefix length used by the last pass
    pub fn truncation(&self) -> usize {
        self.registry.trunc()
    }

    /// URLs emitted by the last pass
    pub fn registry(&self) -> &UrlRegistry {
        &self.registry
    }

    pub fn logo_cached(&self) -> bool {
        self.logos.is_populated()
    }

    /// Render every division, retrying with longer id prefixes on URL collisions
    pub fn generate(&mut self) -> Result<Vec<DivisionDocument<S::Output>>, ScorecardError> {
        let data = self.data;
        let settings = self.settings;

        // Full ids are unique, so the prefix never needs to outgrow the longest one
        let max_trunc = data
            .t
            .divisions
            .values()
            .flat_map(|d| d.players.persons.iter())
            .map(|p| p.id.chars().count())
            .max()
            .unwrap_or(0);

        let logo = match data.meta.metadata.logo_url() {
            Some(url) => self.logos.get(url),
            None => None,
        };

        self.registry = UrlRegistry::new(settings.url_trunc);
        loop {
            self.registry.reset();
            let outcome = run_pass(
                data,
                settings,
                &self.sink,
                &self.qr,
                logo,
                &mut self.registry,
            )?;

            match outcome {
                PassOutcome::Complete(documents) => {
                    log::info!(
                        "Generated {} division document(s) with id prefix length {}",
                        documents.len(),
                        self.registry.trunc()
                    );
                    return Ok(documents);
                }
                PassOutcome::CollisionDetected(url) => {
                    if self.registry.trunc() >= max_trunc {
                        return Err(ScorecardError::UrlCollisionUnresolved {
                            url,
                            trunc: self.registry.trunc(),
                        });
                    }
                    self.registry.grow();
                    log::info!(
                        "Could not create unique URL ({}), trying id prefix length {}",
                        url,
                        self.registry.trunc()
                    );
                }
            }
        }
    }
}

/// Draw every division once with the registry's current prefix length
fn run_pass<S: DocumentSink, Q: QrEncoder>(
    data: &TournamentData,
    settings: &Settings,
    sink: &S,
    qr: &Q,
    logo: Option<&RasterImage>,
    registry: &mut UrlRegistry,
) -> Result<PassOutcome<S::Output>, ScorecardError> {
    let card = ScorecardRenderer::new(settings, &data.meta.metadata, logo);
    let compositor = DivisionCompositor::new(card);
    let mut documents = Vec::new();

    for (name, division) in &data.t.divisions {
        log::info!(
            "Division {}: {} players, {} rounds",
            name,
            division.player_count(),
            division.round_count()
        );

        let mut canvas = sink.open(name)?;
        let status = compositor.render(&mut canvas, qr, registry, name, division)?;
        if let CardStatus::UrlCollision(url) = status {
            return Ok(PassOutcome::CollisionDetected(url));
        }

        documents.push(DivisionDocument {
            division: name.clone(),
            file_name: format!("{}_scorecards.pdf", name),
            output: sink.close(canvas)?,
        });
    }

    Ok(PassOutcome::Complete(documents))
}
