use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid tournament JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Player {index} in division {division} has an empty id")]
    EmptyPlayerId { division: String, index: usize },

    #[error("Pairing {pairing} in division {division} references player {index}, but only {count} players exist")]
    PlayerIndexOutOfRange {
        division: String,
        pairing: String,
        index: usize,
        count: usize,
    },

    #[error("Pairing {pairing} in division {division} lists no players")]
    EmptyPairing { division: String, pairing: String },

    #[error("Scored pairing {pairing} in division {division} has no game scores")]
    MissingScores { division: String, pairing: String },

    #[error("No standings for round {round} in division {division}")]
    MissingStandings { division: String, round: u32 },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("QR payload too large ({len} bytes, symbol version {version}): {url}")]
    QrPayloadTooLarge {
        url: String,
        len: usize,
        version: i16,
    },

    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

/// Errors that abort a whole generation pass
#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("QR URL {url} is still not unique at truncation length {trunc}; player ids are not unique")]
    UrlCollisionUnresolved { url: String, trunc: usize },
}

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Failed to fetch logo {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Logo too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Failed to decode logo: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &RenderError) -> &'static str {
        match err {
            RenderError::QrPayloadTooLarge { .. } => "qr",
            RenderError::QrEncode(_) => "qr",
            RenderError::PdfGeneration(_) => "pdf",
        }
    }

    #[test]
    fn test_render_error_messages() {
        let err = RenderError::QrPayloadTooLarge {
            url: "https://woogles.io/t?es=ab".to_string(),
            len: 200,
            version: 9,
        };
        assert_eq!(kind(&err), "qr");
        assert_eq!(
            err.to_string(),
            "QR payload too large (200 bytes, symbol version 9): https://woogles.io/t?es=ab"
        );

        let err = RenderError::PdfGeneration("no pages".to_string());
        assert_eq!(kind(&err), "pdf");
        assert_eq!(err.to_string(), "PDF generation error: no pages");
    }
}
